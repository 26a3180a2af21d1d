//! Felt widget: renders the number grid and resolves mouse hits.
//!
//! The cell layout is computed deterministically from the widget area, so the
//! same function serves rendering and mouse hit-testing. The classic table
//! arrangement is used: the zero pocket spans the three street rows on the
//! left, the 36 numbers fill a 3x12 grid, and the undo control sits below.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::felt::{self, UNDO_CONTROL};
use crate::panel::NumberPanel;
use crate::tui::Theme;

/// Width of one number cell in terminal columns.
const CELL_WIDTH: u16 = 5;
/// Height of one number cell in terminal rows.
const CELL_HEIGHT: u16 = 3;
/// Horizontal gap between cells (felt showing through).
const H_GAP: u16 = 1;
/// Vertical gap between the grid and the undo control.
const V_GAP: u16 = 1;

/// Total board width: zero column plus twelve street columns.
const BOARD_WIDTH: u16 = 13 * CELL_WIDTH + 12 * H_GAP;
/// Total board height: three street rows plus the undo row.
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT + V_GAP + CELL_HEIGHT;

/// One laid-out control cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeltCell {
    /// Control identity (`number0`..`number36` or `undo`)
    pub control: String,
    /// Label drawn in the cell
    pub label: String,
    /// Screen area of the cell
    pub area: Rect,
}

/// Computes the cell layout for the felt widget area (borders included).
///
/// Returns an empty layout when the area is too small for the board; the
/// renderer shows a resize hint instead and mouse hits resolve to nothing.
#[must_use]
pub fn layout_cells(widget_area: Rect) -> Vec<FeltCell> {
    let inner = Block::default().borders(Borders::ALL).inner(widget_area);
    if inner.width < BOARD_WIDTH || inner.height < BOARD_HEIGHT {
        return Vec::new();
    }

    // Center the board inside the widget
    let origin_x = inner.x + (inner.width - BOARD_WIDTH) / 2;
    let origin_y = inner.y + (inner.height - BOARD_HEIGHT) / 2;

    let mut cells = Vec::with_capacity(crate::constants::POCKET_COUNT + 1);

    // Zero spans the three street rows on the left edge
    cells.push(FeltCell {
        control: felt::control_name(0),
        label: "0".to_string(),
        area: Rect::new(origin_x, origin_y, CELL_WIDTH, 3 * CELL_HEIGHT),
    });

    for number in 1..=36u8 {
        let Some((row, col)) = felt::grid_position(number) else {
            continue;
        };
        let x = origin_x + (col as u16 + 1) * (CELL_WIDTH + H_GAP);
        let y = origin_y + row as u16 * CELL_HEIGHT;
        cells.push(FeltCell {
            control: felt::control_name(number),
            label: number.to_string(),
            area: Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT),
        });
    }

    // Undo sits under the zero column, two cells wide
    cells.push(FeltCell {
        control: UNDO_CONTROL.to_string(),
        label: "UNDO".to_string(),
        area: Rect::new(
            origin_x,
            origin_y + 3 * CELL_HEIGHT + V_GAP,
            2 * CELL_WIDTH + H_GAP,
            CELL_HEIGHT,
        ),
    });

    cells
}

/// Resolves a terminal coordinate to the control under it.
#[must_use]
pub fn hit_test(cells: &[FeltCell], column: u16, row: u16) -> Option<&str> {
    cells
        .iter()
        .find(|cell| {
            column >= cell.area.x
                && column < cell.area.x + cell.area.width
                && row >= cell.area.y
                && row < cell.area.y + cell.area.height
        })
        .map(|cell| cell.control.as_str())
}

/// Felt widget renders the board from the panel's current colors.
pub struct FeltWidget;

impl FeltWidget {
    /// Render the felt widget.
    pub fn render(f: &mut Frame, area: Rect, panel: &NumberPanel, theme: &Theme) {
        let block = Block::default()
            .title(" Felt - European Traditional ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        f.render_widget(block, area);

        let cells = layout_cells(area);
        if cells.is_empty() {
            let hint = Paragraph::new(format!(
                "Terminal too small - the felt needs {BOARD_WIDTH}x{BOARD_HEIGHT} cells"
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_muted));
            let inner = Block::default().borders(Borders::ALL).inner(area);
            f.render_widget(hint, inner);
            return;
        }

        for cell in cells {
            // The panel owns every laid-out identity; skip defensively if not
            let Some(appearance) = panel.appearance(&cell.control) else {
                continue;
            };
            let style = Style::default()
                .bg(appearance.background.to_ratatui_color())
                .fg(appearance.foreground.to_ratatui_color());

            // Pad with empty lines to center the label vertically
            let padding = (cell.area.height.saturating_sub(1)) / 2;
            let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
            lines.push(Line::from(cell.label.clone()));

            let button = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style);
            f.render_widget(button, cell.area);
        }
    }
}
