use rand::Rng;

use super::board::{Board, Tile};

/// Default probability that a spawned tile is a 2 rather than a 4.
pub const DEFAULT_TWO_PROBABILITY: f64 = 0.9;

/// Result of a spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    /// No empty cell was available; the board is untouched.
    Full,
    /// A tile was placed at this flat index.
    Placed { index: usize, value: Tile },
}

impl Spawn {
    #[inline]
    pub fn placed(self) -> bool {
        matches!(self, Spawn::Placed { .. })
    }
}

/// Draw 2 with probability `two_probability`, otherwise 4.
#[inline]
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R, two_probability: f64) -> Tile {
    if rng.gen_bool(two_probability) { 2 } else { 4 }
}

/// Insert a 2 or 4 into a uniformly chosen empty cell.
///
/// The target is picked as the `k`-th empty cell in row-major order, with
/// `k` drawn from `0..=remaining` where `remaining` is the empty count after
/// reserving one cell for this tile.
///
/// ```
/// use term_2048::engine::{spawn_random_tile, Board};
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut b = Board::new();
/// assert!(spawn_random_tile(&mut b, &mut rng, 0.9).placed());
/// assert_eq!(b.empty_count(), 15);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, two_probability: f64) -> Spawn {
    let Some(remaining) = board.empty_count().checked_sub(1) else {
        return Spawn::Full;
    };
    let mut skip = rng.gen_range(0..=remaining);
    let value = spawn_value(rng, two_probability);

    let mut target = None;
    for (idx, &cell) in board.cells().iter().enumerate() {
        if cell != 0 {
            continue;
        }
        if skip == 0 {
            target = Some(idx);
            break;
        }
        skip -= 1;
    }

    match target {
        Some(index) => {
            board.write(index, value);
            Spawn::Placed { index, value }
        }
        // Unreachable while empty_count matches the cells.
        None => Spawn::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SIZE;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn it_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = Board::new();
        for n in 1..=SIZE {
            assert!(spawn_random_tile(&mut b, &mut rng, DEFAULT_TWO_PROBABILITY).placed());
            assert_eq!(b.empty_count(), SIZE - n);
            assert_eq!(b.empty_count(), b.count_empty_by_scan());
        }
        assert_eq!(spawn_random_tile(&mut b, &mut rng, DEFAULT_TWO_PROBABILITY), Spawn::Full);
        assert_eq!(b.empty_count(), 0);
    }

    #[test]
    fn never_overwrites_a_tile() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut b = Board::from_rows([[8, 0, 8, 0], [0, 8, 0, 8], [8, 8, 8, 8], [0, 0, 0, 8]]);
            match spawn_random_tile(&mut b, &mut rng, DEFAULT_TWO_PROBABILITY) {
                Spawn::Placed { index, value } => {
                    assert!(value == 2 || value == 4);
                    assert_eq!(b.cells()[index], value);
                    assert_eq!(b.cells().iter().filter(|&&v| v == 8).count(), 9);
                }
                Spawn::Full => panic!("board had room"),
            }
        }
    }

    #[test]
    fn picks_the_only_empty_cell() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut b = Board::from_rows([[2; 4], [2; 4], [2, 2, 0, 2], [2; 4]]);
        assert_eq!(
            spawn_random_tile(&mut b, &mut rng, 1.0),
            Spawn::Placed { index: 10, value: 2 }
        );
    }

    #[test]
    fn every_empty_cell_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; SIZE];
        for _ in 0..2000 {
            let mut b = Board::new();
            if let Spawn::Placed { index, .. } = spawn_random_tile(&mut b, &mut rng, 0.5) {
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn value_weighting_respected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!((0..100).all(|_| spawn_value(&mut rng, 1.0) == 2));
        assert!((0..100).all(|_| spawn_value(&mut rng, 0.0) == 4));
        let twos = (0..10_000).filter(|_| spawn_value(&mut rng, 0.9) == 2).count();
        assert!((8_500..9_500).contains(&twos), "got {twos} twos");
    }
}
