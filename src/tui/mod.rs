//! Terminal user interface: application state, event loop, and widgets.
//!
//! This module contains the main TUI loop, [`App`], event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod about;
pub mod felt;
pub mod handlers;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::engine::TokenTape;
use crate::panel::NumberPanel;

// Re-export TUI components
pub use about::AboutOverlay;
pub use felt::FeltWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state - single source of truth.
///
/// All UI widgets read from this state immutably. Only event handlers
/// modify state explicitly.
pub struct App {
    /// The felt panel: color tables, hover state, token emission
    pub panel: NumberPanel,
    /// The default sink the panel emits into, shared with the status bar
    pub tape: Rc<RefCell<TokenTape>>,
    /// Application configuration
    pub config: Config,
    /// Current UI chrome theme
    pub theme: Theme,
    /// Control currently under the pointer/cursor, if any
    pub hovered: Option<String>,
    /// Whether the about overlay is open
    pub about_open: bool,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
}

impl App {
    /// Creates the application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured felt colors do not parse or the
    /// panel fails validation.
    pub fn new(config: Config) -> Result<Self> {
        let palette = config
            .felt
            .resolve_palette()
            .context("Invalid felt colors in config")?;
        let tape = Rc::new(RefCell::new(TokenTape::new()));
        let panel = NumberPanel::with_standard_felt(palette, Box::new(Rc::clone(&tape)))
            .context("Failed to build the felt panel")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        Ok(Self {
            panel,
            tape,
            config,
            theme,
            hovered: None,
            about_open: false,
            status_message: "Click a number to record a spin".to_string(),
            error_message: None,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Moves the hover to a new control (or to none), driving the panel's
    /// hover-leave/hover-enter pair in that order.
    pub fn hover_to(&mut self, target: Option<String>) {
        if self.hovered == target {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.panel.hover_leave(&previous);
        }
        if let Some(next) = &target {
            self.panel.hover_enter(next);
        }
        self.hovered = target;
    }

    /// Clicks a control and reflects the emitted token in the status bar.
    pub fn click(&mut self, control: &str) {
        self.panel.click(control);
        let sent = self.tape.borrow().last_sent().map(ToString::to_string);
        if let Some(token) = sent {
            self.set_status(format!("Sent {token}"));
        }
    }

    /// Runs the undo action and reflects it in the status bar.
    pub fn undo(&mut self) {
        self.panel.undo_action();
        self.set_status(format!("Sent {}", crate::constants::UNDO_TOKEN));
    }
}

/// Splits the frame into title bar, felt, and status bar.
#[must_use]
pub fn frame_chunks(area: Rect) -> [Rect; 3] {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Felt
            Constraint::Length(5), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto follows the OS)
        app.theme = Theme::from_mode(app.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, app))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(app, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handlers::handle_mouse_event(app, mouse, area);
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, app: &App) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = frame_chunks(f.area());

    render_title_bar(f, chunks[0], app);
    FeltWidget::render(f, chunks[1], &app.panel, &app.theme);
    StatusBar::render(f, chunks[2], app, &app.theme);

    if app.about_open {
        AboutOverlay::render(f, f.area(), &app.theme);
    }
}

/// Title bar with app name and version
fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            APP_NAME,
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(app.theme.text_muted),
        ),
        Span::styled(" - spin input tracker", Style::default().fg(app.theme.text)),
    ]);

    let bar = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(app.theme.background)),
    );
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_chunks_cover_the_area() {
        let area = Rect::new(0, 0, 100, 24);
        let [title, felt_area, status] = frame_chunks(area);
        assert_eq!(title.height, 3);
        assert_eq!(status.height, 5);
        assert_eq!(title.height + felt_area.height + status.height, area.height);
    }

    #[test]
    fn test_app_new_from_default_config() {
        let app = App::new(Config::default()).unwrap();
        assert!(app.hovered.is_none());
        assert!(!app.about_open);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_hover_to_same_control_is_stable() {
        let mut app = App::new(Config::default()).unwrap();
        app.hover_to(Some("number4".to_string()));
        let highlighted = app.panel.appearance("number4").unwrap();
        app.hover_to(Some("number4".to_string()));
        assert_eq!(app.panel.appearance("number4").unwrap(), highlighted);
        assert_eq!(app.hovered.as_deref(), Some("number4"));
    }

    #[test]
    fn test_click_updates_status() {
        let mut app = App::new(Config::default()).unwrap();
        app.click("number12");
        assert_eq!(app.status_message, "Sent 12");
        app.undo();
        assert_eq!(app.status_message, "Sent -U");
    }
}
