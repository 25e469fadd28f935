use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{HEIGHT, SIZE, WIDTH};

pub(crate) type Tile = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit displacement for one step in this direction.
    #[inline]
    pub fn delta(self) -> Pos {
        match self {
            Direction::Up => Pos::new(0, -1),
            Direction::Down => Pos::new(0, 1),
            Direction::Left => Pos::new(-1, 0),
            Direction::Right => Pos::new(1, 0),
        }
    }

    /// Left/Right operate on rows, Up/Down on columns.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A cell coordinate. Signed so that walking off an edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Pos { x, y }
    }

    /// True if the position lies on the board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < WIDTH as i64 && self.y >= 0 && self.y < HEIGHT as i64
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Pos) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Pos {
    fn sub_assign(&mut self, rhs: Pos) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// 4x4 board stored row-major in a flat array (`y * WIDTH + x`), with a
/// running count of empty cells.
///
/// Every mutator keeps `empty_count` equal to the number of zero cells, so
/// callers never need a full scan. `count_empty_by_scan` exists for checking
/// that invariant.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Tile; SIZE],
    empty_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Board { cells: [0; SIZE], empty_count: SIZE }
    }

    /// Build a board from rows (top row first). Handy for fixtures.
    ///
    /// ```
    /// use term_2048::engine::{Board, Pos};
    /// let b = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    /// assert_eq!(b.get(Pos::new(3, 3)), 4);
    /// assert_eq!(b.empty_count(), 13);
    /// ```
    pub fn from_rows(rows: [[Tile; WIDTH]; HEIGHT]) -> Self {
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                board.set(Pos::new(x as i64, y as i64), value);
            }
        }
        board
    }

    #[inline]
    fn index(pos: Pos) -> usize {
        assert!(pos.in_bounds(), "board position out of range: ({}, {})", pos.x, pos.y);
        pos.y as usize * WIDTH + pos.x as usize
    }

    /// Value at `pos` (0 if empty). Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Tile {
        self.cells[Self::index(pos)]
    }

    /// Overwrite the value at `pos`. Panics if `pos` is off the board.
    #[inline]
    pub fn set(&mut self, pos: Pos, value: Tile) {
        let idx = Self::index(pos);
        self.write(idx, value);
    }

    /// Write by flat index, keeping `empty_count` in step.
    #[inline]
    pub(crate) fn write(&mut self, idx: usize, value: Tile) {
        let old = self.cells[idx];
        match (old == 0, value == 0) {
            (true, false) => self.empty_count -= 1,
            (false, true) => self.empty_count += 1,
            _ => {}
        }
        self.cells[idx] = value;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [0; SIZE];
        self.empty_count = SIZE;
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Count zero cells the slow way.
    pub fn count_empty_by_scan(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[Tile; SIZE] {
        &self.cells
    }

    /// Iterate rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(WIDTH)
    }

    /// True if some tile has an equal neighbour to its right or below.
    pub fn has_possible_merges(&self) -> bool {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let cur = self.cells[y * WIDTH + x];
                if x + 1 < WIDTH && self.cells[y * WIDTH + x + 1] == cur {
                    return true;
                }
                if y + 1 < HEIGHT && self.cells[(y + 1) * WIDTH + x] == cur {
                    return true;
                }
            }
        }
        false
    }

    /// Largest tile on the board (0 when empty).
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles.
    pub fn tile_sum(&self) -> Tile {
        self.cells.iter().sum()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows().collect::<Vec<_>>())
            .field("empty_count", &self.empty_count)
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(WIDTH * 5 + 1);
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            for &value in row {
                if value != 0 {
                    write!(f, "|{value:<4}")?;
                } else {
                    write!(f, "|{:<4}", ' ')?;
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
