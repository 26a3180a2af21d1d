//! Status bar widget for displaying status messages and help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// How many recent spins to show on the tape line.
const TAPE_PREVIEW: usize = 12;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line, tape line, help line.
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error or status message
        if let Some(error) = &app.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else {
            lines.push(Line::from(app.status_message.clone()));
        }

        // Second line: the spin tape with undos applied
        let tape = app.tape.borrow();
        let spins = tape.spins();
        let preview: Vec<String> = spins
            .iter()
            .rev()
            .take(TAPE_PREVIEW)
            .rev()
            .map(ToString::to_string)
            .collect();
        let tape_line = if preview.is_empty() {
            Line::from(vec![
                Span::styled("Spins: ", Style::default().fg(theme.primary)),
                Span::styled("none yet", Style::default().fg(theme.text_muted)),
            ])
        } else {
            Line::from(vec![
                Span::styled("Spins: ", Style::default().fg(theme.primary)),
                Span::styled(preview.join(" "), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  ({} total)", spins.len()),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        };
        lines.push(tape_line);

        // Help line at the bottom
        lines.push(Self::help_line(theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let hints: [(&str, &str); 5] = [
            ("Arrows/hjkl", "Move"),
            ("Enter", "Record"),
            ("u", "Undo"),
            ("a", "About"),
            ("q", "Quit"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }
        Line::from(spans)
    }
}
