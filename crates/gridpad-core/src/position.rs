//! Grid coordinates and bounded movement.
//!
//! Positions are zero-indexed `(row, col)` pairs. Movement never wraps and
//! never clamps onto a different cell: a step that would leave the grid
//! leaves the position where it was.

use std::fmt;

use crate::error::{GridError, Result};

/// A cell coordinate (0-indexed).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row and column extent of a grid. Both are at least 1.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Bounds {
    rows: usize,
    cols: usize,
}

impl Bounds {
    pub fn new(rows: usize, cols: usize) -> Result<Bounds> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyBounds);
        }
        Ok(Bounds { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One step in the grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Position one step from `current` towards `direction`.
///
/// Returns `current` unchanged when the step would leave `bounds`. `current`
/// itself is not validated.
pub fn next_position(current: Position, direction: Direction, bounds: Bounds) -> Position {
    let (dr, dc) = direction.delta();
    let (Some(row), Some(col)) = (
        current.row.checked_add_signed(dr),
        current.col.checked_add_signed(dc),
    ) else {
        return current;
    };

    let next = Position::new(row, col);
    if bounds.contains(next) { next } else { current }
}
