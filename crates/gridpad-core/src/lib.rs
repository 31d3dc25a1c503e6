//! gridpad-core - UI-agnostic grid model.
//!
//! Everything a front end needs to drive a fixed-size grid of text cells:
//! the [`GridSession`] that keeps the [`GridController`] state machine and
//! the per-cell [`CellEditor`] in step, the keyboard [`dispatch_key`]
//! translation, and the display helpers [`format_cell`] and
//! [`column_label`].

pub mod cell;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod label;
pub mod position;
pub mod session;

pub use cell::{CellEditor, CellView, EditorOutcome};
pub use controller::{EditResult, GridController, GridState, Intent};
pub use dispatch::{Key, KeyOutcome, KeyPress, dispatch_key};
pub use error::{GridError, Result};
pub use format::format_cell;
pub use label::{cell_name, column_label, row_label};
pub use position::{Bounds, Direction, Position, next_position};
pub use session::{EditEnd, GridSession, Response};
