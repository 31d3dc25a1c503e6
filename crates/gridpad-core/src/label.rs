//! Row and column header labels.

use crate::position::Position;

/// Convert a column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
///
/// Bijective base-26: after each letter the remaining index is
/// `index / 26 - 1`, which is what makes 26 come out as `AA` and not `BA`.
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// 1-based row number shown in the row header.
pub fn row_label(index: usize) -> String {
    (index + 1).to_string()
}

/// Spreadsheet name of a cell, e.g. `D3` for row 2, column 3.
pub fn cell_name(pos: Position) -> String {
    format!("{}{}", column_label(pos.col), row_label(pos.row))
}
