//! Error types for the grid model.

use thiserror::Error;

use crate::position::{Bounds, Position};

/// Out-of-contract calls into the grid model.
///
/// None of these corrupt state: the operation that returns one has not
/// changed anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid bounds must have at least one row and one column")]
    EmptyBounds,

    #[error("Cell {position} is outside the {bounds} grid")]
    OutOfBounds { position: Position, bounds: Bounds },

    #[error("No cell is selected")]
    NoSelection,

    #[error("No cell is being edited")]
    NotEditing,

    #[error("A cell is being edited")]
    Editing,
}

pub type Result<T> = std::result::Result<T, GridError>;
