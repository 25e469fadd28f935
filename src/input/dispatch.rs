use std::collections::HashMap;

use super::key::Key;

/// Maps keys to commands. One command per key; registering a key again
/// replaces the previous binding. Case variants are separate keys and must be
/// bound individually.
#[derive(Debug, Clone)]
pub struct KeyDispatchTable<C> {
    bindings: HashMap<Key, C>,
}

impl<C> Default for KeyDispatchTable<C> {
    fn default() -> Self {
        KeyDispatchTable { bindings: HashMap::new() }
    }
}

impl<C: Clone> KeyDispatchTable<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `command`, replacing any earlier binding.
    pub fn register(&mut self, key: Key, command: C) {
        self.bindings.insert(key, command);
    }

    /// Bind every key in `keys` to the same command.
    pub fn register_all(&mut self, keys: &[Key], command: C) {
        for &key in keys {
            self.register(key, command.clone());
        }
    }

    /// Give `target` whatever `source` is bound to. Does nothing if `source`
    /// is unbound.
    pub fn copy_registered(&mut self, target: Key, source: Key) {
        if let Some(command) = self.bindings.get(&source).cloned() {
            self.bindings.insert(target, command);
        }
    }

    pub fn unregister(&mut self, key: Key) -> Option<C> {
        self.bindings.remove(&key)
    }

    pub fn is_registered(&self, key: Key) -> bool {
        self.bindings.contains_key(&key)
    }

    /// Command bound to `key`, if any.
    pub fn lookup(&self, key: Key) -> Option<&C> {
        self.bindings.get(&key)
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
