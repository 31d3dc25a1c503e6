//! Grid state controller.
//!
//! [`GridController`] owns the cell values and the interaction state. The
//! interaction state is a single [`GridState`] tag, so "the edited cell is
//! the selected cell" holds by construction:
//!
//! - [`Idle`](GridState::Idle): nothing selected
//! - [`Selected`](GridState::Selected): one cell highlighted
//! - [`Editing`](GridState::Editing): the selected cell is open for editing
//!
//! Out-of-contract calls return a [`GridError`] and change nothing.

use tracing::debug;

use crate::cell::CellView;
use crate::error::{GridError, Result};
use crate::position::{Bounds, Direction, Position, next_position};

/// Interaction state of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridState {
    #[default]
    Idle,
    Selected(Position),
    Editing(Position),
}

impl GridState {
    /// The highlighted cell, if any. An editing cell is also selected.
    pub fn selection(&self) -> Option<Position> {
        match *self {
            GridState::Idle => None,
            GridState::Selected(pos) | GridState::Editing(pos) => Some(pos),
        }
    }

    /// The cell being edited, if any.
    pub fn edit_target(&self) -> Option<Position> {
        match *self {
            GridState::Editing(pos) => Some(pos),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, GridState::Editing(_))
    }
}

/// How an edit ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditResult {
    /// Write the buffer into the cell.
    Saved(String),
    /// Throw the buffer away.
    Discarded,
}

/// Requests a cell view or the keyboard dispatcher makes of the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Pointer click on a cell: select it and start editing.
    Click(Position),
    /// Start editing the selected cell.
    StartEditing,
    /// Finish the current edit.
    EndEdit(EditResult),
    /// Move the selection one step.
    Navigate(Direction),
}

/// Owner of the value matrix and the selection/edit state.
#[derive(Clone, Debug)]
pub struct GridController {
    bounds: Bounds,
    cells: Vec<Vec<String>>,
    state: GridState,
}

impl GridController {
    /// An idle grid with every cell empty.
    pub fn new(bounds: Bounds) -> Self {
        GridController {
            bounds,
            cells: vec![vec![String::new(); bounds.cols()]; bounds.rows()],
            state: GridState::Idle,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn selection(&self) -> Option<Position> {
        self.state.selection()
    }

    pub fn edit_target(&self) -> Option<Position> {
        self.state.edit_target()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Raw stored value of a cell.
    pub fn value(&self, pos: Position) -> Option<&str> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(String::as_str)
    }

    /// The whole value matrix, row by row.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Render props for one cell.
    pub fn cell_view(&self, pos: Position) -> Option<CellView<'_>> {
        let value = self.value(pos)?;
        Some(CellView {
            position: pos,
            value,
            selected: self.selection() == Some(pos),
            editing: self.edit_target() == Some(pos),
        })
    }

    /// Select `pos` and open it for editing, whatever the current state.
    pub fn click(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        debug!(from = ?self.state, %pos, "click");
        self.state = GridState::Editing(pos);
        Ok(())
    }

    /// Open the selected cell for editing.
    pub fn start_editing(&mut self) -> Result<Position> {
        match self.state {
            GridState::Idle => Err(GridError::NoSelection),
            GridState::Editing(pos) => Ok(pos),
            GridState::Selected(pos) => {
                debug!(%pos, "start editing");
                self.state = GridState::Editing(pos);
                Ok(pos)
            }
        }
    }

    /// Write `value` into the edited cell and leave it selected.
    pub fn commit_edit(&mut self, value: impl Into<String>) -> Result<Position> {
        let GridState::Editing(pos) = self.state else {
            return Err(GridError::NotEditing);
        };
        let value = value.into();
        debug!(%pos, value = %value, "commit edit");
        self.cells[pos.row][pos.col] = value;
        self.state = GridState::Selected(pos);
        Ok(pos)
    }

    /// Leave the edited cell selected without touching its value.
    pub fn cancel_edit(&mut self) -> Result<Position> {
        let GridState::Editing(pos) = self.state else {
            return Err(GridError::NotEditing);
        };
        debug!(%pos, "cancel edit");
        self.state = GridState::Selected(pos);
        Ok(pos)
    }

    /// Move the selection one step, or select the origin when nothing is
    /// selected yet.
    pub fn navigate(&mut self, direction: Direction) -> Result<Position> {
        let next = match self.state {
            GridState::Editing(_) => return Err(GridError::Editing),
            GridState::Idle => Position::ORIGIN,
            GridState::Selected(pos) => next_position(pos, direction, self.bounds),
        };
        debug!(from = ?self.state, ?direction, %next, "navigate");
        self.state = GridState::Selected(next);
        Ok(next)
    }

    /// Apply an intent from a cell view or the keyboard dispatcher.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Click(pos) => self.click(pos),
            Intent::StartEditing => self.start_editing().map(drop),
            Intent::EndEdit(EditResult::Saved(value)) => self.commit_edit(value).map(drop),
            Intent::EndEdit(EditResult::Discarded) => self.cancel_edit().map(drop),
            Intent::Navigate(direction) => self.navigate(direction).map(drop),
        }
    }

    fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.bounds.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                bounds: self.bounds,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(rows: usize, cols: usize) -> GridController {
        GridController::new(Bounds::new(rows, cols).unwrap())
    }

    fn assert_coupled(ctl: &GridController) {
        if let Some(target) = ctl.edit_target() {
            assert_eq!(ctl.selection(), Some(target));
        }
    }

    #[test]
    fn starts_idle_with_empty_cells() {
        let ctl = controller(3, 4);
        assert_eq!(ctl.state(), GridState::Idle);
        assert_eq!(ctl.rows().len(), 3);
        assert!(ctl.rows().iter().all(|row| row.len() == 4));
        assert!(ctl.rows().iter().flatten().all(String::is_empty));
    }

    #[test]
    fn click_selects_and_edits_from_any_state() {
        let mut ctl = controller(3, 3);
        ctl.click(Position::new(1, 2)).unwrap();
        assert_eq!(ctl.state(), GridState::Editing(Position::new(1, 2)));

        ctl.click(Position::new(0, 0)).unwrap();
        assert_eq!(ctl.state(), GridState::Editing(Position::new(0, 0)));

        ctl.cancel_edit().unwrap();
        ctl.click(Position::new(2, 2)).unwrap();
        assert_eq!(ctl.state(), GridState::Editing(Position::new(2, 2)));
        assert_coupled(&ctl);
    }

    #[test]
    fn click_outside_bounds_is_rejected() {
        let mut ctl = controller(2, 2);
        let err = ctl.click(Position::new(2, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(ctl.state(), GridState::Idle);
    }

    #[test]
    fn start_editing_needs_a_selection() {
        let mut ctl = controller(2, 2);
        assert_eq!(ctl.start_editing(), Err(GridError::NoSelection));
        assert_eq!(ctl.state(), GridState::Idle);

        ctl.navigate(Direction::Down).unwrap();
        assert_eq!(ctl.start_editing(), Ok(Position::ORIGIN));
        assert_eq!(ctl.state(), GridState::Editing(Position::ORIGIN));
    }

    #[test]
    fn commit_replaces_exactly_one_cell() {
        let mut ctl = controller(3, 3);
        ctl.click(Position::new(1, 1)).unwrap();
        ctl.commit_edit("x").unwrap();
        ctl.click(Position::new(2, 0)).unwrap();
        let before = ctl.rows().to_vec();

        ctl.commit_edit("42").unwrap();

        assert_eq!(ctl.state(), GridState::Selected(Position::new(2, 0)));
        for (row, values) in before.iter().enumerate() {
            for (col, old) in values.iter().enumerate() {
                let pos = Position::new(row, col);
                let expected = if pos == Position::new(2, 0) { "42" } else { old.as_str() };
                assert_eq!(ctl.value(pos), Some(expected));
            }
        }
    }

    #[test]
    fn cancel_keeps_the_stored_value() {
        let mut ctl = controller(2, 2);
        ctl.click(Position::new(1, 1)).unwrap();
        ctl.commit_edit("old").unwrap();
        ctl.start_editing().unwrap();

        ctl.cancel_edit().unwrap();

        assert_eq!(ctl.state(), GridState::Selected(Position::new(1, 1)));
        assert_eq!(ctl.value(Position::new(1, 1)), Some("old"));
    }

    #[test]
    fn commit_and_cancel_outside_editing_change_nothing() {
        let mut ctl = controller(2, 2);
        assert_eq!(ctl.commit_edit("x"), Err(GridError::NotEditing));
        assert_eq!(ctl.cancel_edit(), Err(GridError::NotEditing));
        assert_eq!(ctl.state(), GridState::Idle);

        ctl.navigate(Direction::Right).unwrap();
        assert_eq!(ctl.commit_edit("x"), Err(GridError::NotEditing));
        assert_eq!(ctl.state(), GridState::Selected(Position::ORIGIN));
        assert!(ctl.rows().iter().flatten().all(String::is_empty));
    }

    #[test]
    fn first_navigation_selects_origin() {
        for dir in Direction::ALL {
            let mut ctl = controller(3, 3);
            assert_eq!(ctl.navigate(dir), Ok(Position::ORIGIN));
            assert_eq!(ctl.state(), GridState::Selected(Position::ORIGIN));
        }
    }

    #[test]
    fn navigation_moves_and_blocks_at_edges() {
        let mut ctl = controller(2, 2);
        ctl.navigate(Direction::Down).unwrap();
        assert_eq!(ctl.navigate(Direction::Down), Ok(Position::new(1, 0)));
        assert_eq!(ctl.navigate(Direction::Down), Ok(Position::new(1, 0)));
        assert_eq!(ctl.navigate(Direction::Right), Ok(Position::new(1, 1)));
        assert_eq!(ctl.navigate(Direction::Right), Ok(Position::new(1, 1)));
        assert_eq!(ctl.edit_target(), None);
    }

    #[test]
    fn navigation_while_editing_is_rejected() {
        let mut ctl = controller(3, 3);
        ctl.click(Position::new(1, 1)).unwrap();
        assert_eq!(ctl.navigate(Direction::Up), Err(GridError::Editing));
        assert_eq!(ctl.state(), GridState::Editing(Position::new(1, 1)));
    }

    #[test]
    fn apply_routes_intents() {
        let mut ctl = controller(3, 3);
        ctl.apply(Intent::Navigate(Direction::Left)).unwrap();
        ctl.apply(Intent::Navigate(Direction::Down)).unwrap();
        ctl.apply(Intent::StartEditing).unwrap();
        ctl.apply(Intent::EndEdit(EditResult::Saved("7".into()))).unwrap();
        assert_eq!(ctl.value(Position::new(1, 0)), Some("7"));

        ctl.apply(Intent::Click(Position::new(2, 2))).unwrap();
        ctl.apply(Intent::EndEdit(EditResult::Discarded)).unwrap();
        assert_eq!(ctl.state(), GridState::Selected(Position::new(2, 2)));
        assert_eq!(ctl.value(Position::new(2, 2)), Some(""));
    }

    #[test]
    fn cell_view_reflects_state() {
        let mut ctl = controller(2, 2);
        ctl.click(Position::new(0, 1)).unwrap();

        let editing = ctl.cell_view(Position::new(0, 1)).unwrap();
        assert!(editing.selected && editing.editing);

        let other = ctl.cell_view(Position::new(1, 1)).unwrap();
        assert!(!other.selected && !other.editing);

        assert!(ctl.cell_view(Position::new(5, 5)).is_none());
    }
}
