//! # Grid Geometry
//!
//! The 3×3 board and the rules for moving across it.
//!
//! ```text
//!   index          (x, y)
//!   0 1 2    (1,1) (2,1) (3,1)
//!   3 4 5    (1,2) (2,2) (3,2)
//!   6 7 8    (1,3) (2,3) (3,3)
//! ```
//!
//! Each direction carries one `MoveRule`: a predicate that says whether the
//! edge blocks it, and the index offset to apply when it doesn't.

use std::fmt;

/// Cells per row (and rows per grid).
pub const GRID_SIZE: u8 = 3;
/// Total number of cells.
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Edge check plus index offset for a single direction.
#[derive(Clone, Copy)]
pub struct MoveRule {
    pub blocked: fn(u8) -> bool,
    pub offset: i8,
}

fn left_edge(index: u8) -> bool {
    index % GRID_SIZE == 0
}

fn right_edge(index: u8) -> bool {
    index % GRID_SIZE == GRID_SIZE - 1
}

fn top_edge(index: u8) -> bool {
    index < GRID_SIZE
}

fn bottom_edge(index: u8) -> bool {
    index >= GRID_SIZE * (GRID_SIZE - 1)
}

const LEFT: MoveRule = MoveRule { blocked: left_edge, offset: -1 };
const RIGHT: MoveRule = MoveRule { blocked: right_edge, offset: 1 };
const UP: MoveRule = MoveRule { blocked: top_edge, offset: -(GRID_SIZE as i8) };
const DOWN: MoveRule = MoveRule { blocked: bottom_edge, offset: GRID_SIZE as i8 };

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Lowercase name as it appears in user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn rule(self) -> MoveRule {
        match self {
            Direction::Left => LEFT,
            Direction::Right => RIGHT,
            Direction::Up => UP,
            Direction::Down => DOWN,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell on the grid. Always holds an index in `0..CELL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(u8);

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

impl Position {
    pub const CENTER: Position = Position(4);

    /// Returns `None` for indices outside the grid.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < CELL_COUNT).then_some(Position(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// 1-based `(x, y)`: column then row.
    pub fn coordinates(self) -> (u8, u8) {
        (self.0 % GRID_SIZE + 1, self.0 / GRID_SIZE + 1)
    }

    /// The adjacent cell in `direction`, or `None` if the edge blocks it.
    pub fn neighbor(self, direction: Direction) -> Option<Position> {
        let rule = direction.rule();
        if (rule.blocked)(self.0) {
            return None;
        }
        let target = self.0 as i8 + rule.offset;
        Position::from_index(target as u8)
    }
}
