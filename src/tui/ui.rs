//! UI rendering

use super::app::App;
use super::keys::status_hint;
use gridpad_core::{Position, cell_name, column_label, format::parse_amount, row_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub(crate) const EDIT_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 4;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 4;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(EDIT_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Map a terminal coordinate inside `grid_area` to the data cell drawn there.
///
/// Headers, borders and column gaps are not cells.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<Position> {
    if grid_area.width < 3 || grid_area.height < 4 {
        return None;
    }

    let inner_x = grid_area.x.saturating_add(1);
    let inner_y = grid_area.y.saturating_add(1);
    let inner_right = inner_x.saturating_add(grid_area.width.saturating_sub(2));
    let inner_bottom = inner_y.saturating_add(grid_area.height.saturating_sub(2));

    if mouse_col < inner_x
        || mouse_col >= inner_right
        || mouse_row < inner_y
        || mouse_row >= inner_bottom
    {
        return None;
    }

    // Header row contains column letters, not data cells.
    if mouse_row == inner_y {
        return None;
    }

    let bounds = app.session.grid().bounds();
    let rel_row = (mouse_row - inner_y - 1) as usize;
    if rel_row >= app.visible_rows {
        return None;
    }
    let row = app.viewport_row + rel_row;
    if row >= bounds.rows() {
        return None;
    }

    let first_cell_x = inner_x
        .saturating_add(ROW_HEADER_WIDTH)
        .saturating_add(GRID_COLUMN_SPACING);
    if mouse_col < first_cell_x {
        return None;
    }

    let stride = app.col_width + GRID_COLUMN_SPACING;
    let rel_x = mouse_col - first_cell_x;
    if rel_x % stride >= app.col_width {
        return None;
    }
    let rel_col = (rel_x / stride) as usize;
    if rel_col >= app.visible_cols {
        return None;
    }
    let col = app.viewport_col + rel_col;
    if col >= bounds.cols() {
        return None;
    }

    Some(Position::new(row, col))
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let [bar_area, grid_area, status_area] = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    let available_width = grid_area
        .width
        .saturating_sub(2 + ROW_HEADER_WIDTH + GRID_COLUMN_SPACING) as usize;
    let available_height = grid_area.height.saturating_sub(3) as usize; // header + borders
    let stride = (app.col_width + GRID_COLUMN_SPACING) as usize;
    app.visible_cols = (available_width / stride).max(1);
    app.visible_rows = available_height.max(1);
    app.update_viewport();

    draw_edit_bar(f, app, bar_area);
    draw_grid(f, app, grid_area);
    draw_status_bar(f, app, status_area);
}

fn draw_edit_bar(f: &mut Frame, app: &App, area: Rect) {
    let content = match (app.session.editor(), app.session.grid().selection()) {
        (Some(editor), _) => {
            let (before, after) = editor.buffer().split_at(editor.cursor());
            format!("{}: {}│{}", cell_name(editor.position()), before, after)
        }
        (None, Some(pos)) => match app.session.grid().value(pos) {
            Some(value) if !value.is_empty() => format!("{}: {}", cell_name(pos), value),
            _ => format!("{}: (empty)", cell_name(pos)),
        },
        (None, None) => "No cell selected".to_string(),
    };

    let editing = app.session.editor().is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(if editing { " Edit " } else { " Cell " })
        .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::White }));

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let bounds = app.session.grid().bounds();
    let selection = app.session.grid().selection();
    let cols: Vec<usize> = (app.viewport_col..app.viewport_col + app.visible_cols)
        .take_while(|&col| col < bounds.cols())
        .collect();
    let header_style = |active: bool| {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    // Header row
    let mut header_cells = vec![Cell::from(" ")]; // Corner
    for &col in &cols {
        let active = selection.is_some_and(|p| p.col == col);
        header_cells.push(Cell::from(column_label(col)).style(header_style(active)));
    }
    let header = Row::new(header_cells).height(1);

    // Data rows
    let mut rows = Vec::new();
    for row in (app.viewport_row..app.viewport_row + app.visible_rows)
        .take_while(|&row| row < bounds.rows())
    {
        let active = selection.is_some_and(|p| p.row == row);
        let mut cells = vec![Cell::from(row_label(row)).style(header_style(active))];

        for &col in &cols {
            let pos = Position::new(row, col);
            let Some(view) = app.session.grid().cell_view(pos) else {
                continue;
            };
            let text = app.cell_text(pos);

            let style = if view.editing {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if view.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let alignment = if !view.editing && parse_amount(view.value).is_some() {
                Alignment::Right
            } else {
                Alignment::Left
            };

            cells.push(Cell::from(Line::from(text).alignment(alignment)).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    widths.extend(cols.iter().map(|_| Constraint::Length(app.col_width)));

    let title = format!(" Gridpad {} ", bounds);
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(GRID_COLUMN_SPACING);

    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        status_hint(app.session.editor().is_some()),
        Style::default().fg(Color::DarkGray),
    )];
    if !app.status_message.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
