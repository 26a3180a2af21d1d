//! Event handlers: keyboard and mouse input for the felt.
//!
//! Mouse motion is translated into the panel's hover-enter/leave operations;
//! keyboard navigation drives the exact same pair, so the single-highlight
//! invariant holds no matter which input method is used.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::models::felt::{self as felt_model, GRID_COLS, GRID_ROWS, UNDO_CONTROL};
use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::{felt, frame_chunks, App};

/// Handle a key press. Returns `true` when the application should quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();
    let Some(action) = registry.lookup(key) else {
        return Ok(false);
    };

    // The about overlay swallows everything except dismiss and quit
    if app.about_open {
        match action {
            Action::About | Action::Cancel => app.about_open = false,
            Action::Quit => return Ok(true),
            _ => {}
        }
        return Ok(false);
    }

    match action {
        Action::NavigateUp
        | Action::NavigateDown
        | Action::NavigateLeft
        | Action::NavigateRight => move_cursor(app, action),
        Action::Activate => {
            if let Some(control) = app.hovered.clone() {
                app.click(&control);
            }
        }
        Action::Undo => app.undo(),
        Action::About => app.about_open = true,
        Action::Cancel => app.clear_error(),
        Action::Quit => return Ok(true),
    }
    Ok(false)
}

/// Handle a mouse event against the current frame geometry.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, terminal_area: Rect) {
    if app.about_open {
        return;
    }
    let chunks = frame_chunks(terminal_area);
    let cells = felt::layout_cells(chunks[1]);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let hit = felt::hit_test(&cells, mouse.column, mouse.row).map(ToString::to_string);
            app.hover_to(hit);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(control) = felt::hit_test(&cells, mouse.column, mouse.row) {
                let control = control.to_string();
                app.click(&control);
            }
        }
        _ => {}
    }
}

/// Moves the keyboard cursor, synthesizing hover-leave/enter on the panel.
fn move_cursor(app: &mut App, action: Action) {
    let next = match app.hovered.as_deref() {
        // First navigation press lands on zero
        None => Some(felt_model::control_name(0)),
        Some(current) => neighbor(current, action),
    };
    if next.is_some() {
        app.hover_to(next);
    }
}

/// Grid neighbor of a control in the given direction, `None` at an edge.
fn neighbor(current: &str, action: Action) -> Option<String> {
    if current == UNDO_CONTROL {
        // Up from undo re-enters the grid at the bottom street row
        return match action {
            Action::NavigateUp => Some(felt_model::control_name(1)),
            _ => None,
        };
    }

    let number = felt_model::parse_control_number(current)?;
    if number == 0 {
        return match action {
            Action::NavigateRight => {
                Some(felt_model::control_name(felt_model::number_at(1, 0)))
            }
            Action::NavigateDown => Some(UNDO_CONTROL.to_string()),
            _ => None,
        };
    }

    let (row, col) = felt_model::grid_position(number)?;
    let name_at = |row: usize, col: usize| felt_model::control_name(felt_model::number_at(row, col));
    match action {
        Action::NavigateUp => (row > 0).then(|| name_at(row - 1, col)),
        Action::NavigateDown => {
            if row + 1 < GRID_ROWS {
                Some(name_at(row + 1, col))
            } else {
                Some(UNDO_CONTROL.to_string())
            }
        }
        Action::NavigateLeft => {
            if col > 0 {
                Some(name_at(row, col - 1))
            } else {
                Some(felt_model::control_name(0))
            }
        }
        Action::NavigateRight => (col + 1 < GRID_COLS).then(|| name_at(row, col + 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_neighbor_grid_moves() {
        // 5 sits in the middle row of the second street
        assert_eq!(neighbor("number5", Action::NavigateUp), Some("number6".into()));
        assert_eq!(neighbor("number5", Action::NavigateDown), Some("number4".into()));
        assert_eq!(neighbor("number5", Action::NavigateLeft), Some("number2".into()));
        assert_eq!(neighbor("number5", Action::NavigateRight), Some("number8".into()));
    }

    #[test]
    fn test_neighbor_edges() {
        // Top row stops at the top
        assert_eq!(neighbor("number3", Action::NavigateUp), None);
        // Bottom row drops to undo
        assert_eq!(
            neighbor("number1", Action::NavigateDown),
            Some(UNDO_CONTROL.to_string())
        );
        // First column exits to zero
        assert_eq!(neighbor("number2", Action::NavigateLeft), Some("number0".into()));
        // Last column stops at the right edge
        assert_eq!(neighbor("number36", Action::NavigateRight), None);
    }

    #[test]
    fn test_neighbor_zero_and_undo() {
        assert_eq!(neighbor("number0", Action::NavigateRight), Some("number2".into()));
        assert_eq!(
            neighbor("number0", Action::NavigateDown),
            Some(UNDO_CONTROL.to_string())
        );
        assert_eq!(neighbor("number0", Action::NavigateLeft), None);
        assert_eq!(
            neighbor(UNDO_CONTROL, Action::NavigateUp),
            Some("number1".into())
        );
        assert_eq!(neighbor(UNDO_CONTROL, Action::NavigateDown), None);
    }

    #[test]
    fn test_first_navigation_enters_zero() {
        let mut app = app();
        assert!(app.hovered.is_none());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.hovered.as_deref(), Some("number0"));
        // Panel shows the highlight on zero
        let appearance = app.panel.appearance("number0").unwrap();
        assert_eq!(appearance.background, app.panel.palette().highlight);
    }

    #[test]
    fn test_navigation_moves_highlight_without_drift() {
        let mut app = app();
        press(&mut app, KeyCode::Right); // zero
        press(&mut app, KeyCode::Right); // number2
        assert_eq!(app.hovered.as_deref(), Some("number2"));

        // Zero went back to its default
        let zero = app.panel.appearance("number0").unwrap();
        assert_eq!(zero.background, app.panel.default_color(0));
        let two = app.panel.appearance("number2").unwrap();
        assert_eq!(two.background, app.panel.palette().highlight);
    }

    #[test]
    fn test_activate_records_the_hovered_number() {
        let mut app = app();
        press(&mut app, KeyCode::Right); // zero
        press(&mut app, KeyCode::Right); // number2
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tape.borrow().spins(), &[2]);
        assert_eq!(app.tape.borrow().last_sent(), Some("2"));
    }

    #[test]
    fn test_undo_key_emits_undo_token() {
        let mut app = app();
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(
            app.tape.borrow().last_sent(),
            Some(crate::constants::UNDO_TOKEN)
        );
    }

    #[test]
    fn test_about_overlay_swallows_input_and_dismisses() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.about_open);

        // Navigation is swallowed while the overlay is open
        press(&mut app, KeyCode::Right);
        assert!(app.hovered.is_none());

        press(&mut app, KeyCode::Esc);
        assert!(!app.about_open);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_mouse_hover_and_click() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 24);
        let cells = felt::layout_cells(frame_chunks(area)[1]);
        let cell = cells.iter().find(|c| c.control == "number17").unwrap();
        let (cx, cy) = (
            cell.area.x + cell.area.width / 2,
            cell.area.y + cell.area.height / 2,
        );

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: cx,
            row: cy,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, moved, area);
        assert_eq!(app.hovered.as_deref(), Some("number17"));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cx,
            row: cy,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click, area);
        assert_eq!(app.tape.borrow().spins(), &[17]);
    }

    #[test]
    fn test_mouse_leaving_the_board_clears_the_hover() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 24);
        let cells = felt::layout_cells(frame_chunks(area)[1]);
        let cell = cells.iter().find(|c| c.control == "number8").unwrap();

        let over = MouseEvent {
            kind: MouseEventKind::Moved,
            column: cell.area.x,
            row: cell.area.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, over, area);
        assert_eq!(app.hovered.as_deref(), Some("number8"));

        let away = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, away, area);
        assert!(app.hovered.is_none());
        // The control went back to its default colors
        let appearance = app.panel.appearance("number8").unwrap();
        assert_eq!(appearance.background, app.panel.default_color(8));
    }
}
