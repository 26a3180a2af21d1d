//! About overlay with author and version information.
//!
//! A static, dismissable text box. It reads no panel state and writes none;
//! dismissing it leaves the felt exactly as it was.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::APP_NAME;
use crate::tui::Theme;

/// About overlay widget.
pub struct AboutOverlay;

impl AboutOverlay {
    /// Render the overlay centered over the given area.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = Self::centered(area, 46, 9);
        f.render_widget(Clear, popup);

        let lines = vec![
            Line::from(Span::styled(
                format!("{APP_NAME} v{}", env!("CARGO_PKG_VERSION")),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Terminal felt input panel for",
                Style::default().fg(theme.text),
            )),
            Line::from(Span::styled(
                "roulette-style betting trackers",
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to close",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .title(" About ")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(theme.primary).bg(theme.surface)),
            );
        f.render_widget(paragraph, popup);
    }

    /// Centers a fixed-size popup within an area, clamped to fit.
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = AboutOverlay::centered(area, 46, 9);
        assert!(popup.x + popup.width <= area.width);
        assert!(popup.y + popup.height <= area.height);
        assert_eq!(popup.width, 46);
        assert_eq!(popup.height, 9);
    }

    #[test]
    fn test_centered_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = AboutOverlay::centered(area, 46, 9);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }
}
