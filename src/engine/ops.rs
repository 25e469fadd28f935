use super::board::{Board, Direction, Pos, Tile};
use super::{HEIGHT, WIDTH, WIN_TILE};

/// What a single `shift` did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftOutcome {
    /// At least one tile slid or merged.
    pub changed: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Some merge produced the winning tile.
    pub reached_win: bool,
}

/// Slide and merge every line of `board` toward `dir`. No randomness.
///
/// Each row (Left/Right) or column (Up/Down) is an independent line. Cells
/// are visited starting next to the target edge and moving away from it, so
/// tiles nearer the edge settle first. Within a line a freshly merged tile is
/// never merged again in the same shift: a `[2, 2, 2, 2]` row shifted left
/// becomes `[4, 4, 0, 0]`.
///
/// ```
/// use term_2048::engine::{shift, Board, Direction};
/// let mut b = Board::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
/// let outcome = shift(&mut b, Direction::Left);
/// assert!(outcome.changed);
/// assert_eq!(b.rows().next().unwrap(), &[4, 4, 0, 0]);
/// ```
pub fn shift(board: &mut Board, dir: Direction) -> ShiftOutcome {
    let horizontal = dir.is_horizontal();
    let outer_len = (if horizontal { HEIGHT } else { WIDTH }) as i64;
    let inner_len = (if horizontal { WIDTH } else { HEIGHT }) as i64;

    // The cell on the target edge can never move, so start one in from it.
    let (inner_start, inner_step) = match dir {
        Direction::Up | Direction::Left => (1, 1),
        Direction::Down | Direction::Right => (inner_len - 2, -1),
    };

    let delta = dir.delta();
    let mut outcome = ShiftOutcome::default();
    for outer in 0..outer_len {
        let mut merge_allowed = true;
        let mut inner = inner_start;
        while (0..inner_len).contains(&inner) {
            let src = if horizontal { Pos::new(inner, outer) } else { Pos::new(outer, inner) };
            move_tile(board, src, delta, &mut merge_allowed, &mut outcome);
            inner += inner_step;
        }
    }
    outcome
}

/// Move the tile at `src` as far as it goes along `delta`, merging at most
/// once if `merge_allowed`.
fn move_tile(board: &mut Board, src: Pos, delta: Pos, merge_allowed: &mut bool, outcome: &mut ShiftOutcome) {
    let value = board.get(src);
    if value == 0 {
        return;
    }

    let mut dest = src;
    loop {
        let next = dest + delta;
        if !next.in_bounds() {
            break;
        }
        let occupant = board.get(next);
        if occupant != 0 && (!*merge_allowed || occupant != value) {
            break;
        }
        dest = next;
        if occupant != 0 {
            // Landed on an equal tile; nothing lies beyond a merge.
            break;
        }
    }

    if dest == src {
        return;
    }

    let merged = board.get(dest) == value;
    // Zero plus value is a plain slide, value plus value is a merge.
    let new_value: Tile = board.get(dest) + value;
    board.set(dest, new_value);
    board.set(src, 0);

    // A merge spends the line's permission; a plain slide restores it.
    *merge_allowed = !merged;
    outcome.changed = true;
    if merged {
        outcome.merges += 1;
        if new_value == WIN_TILE {
            outcome.reached_win = true;
        }
    }
}
