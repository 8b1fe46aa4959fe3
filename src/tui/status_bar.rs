//! Status bar widget for displaying status messages and key help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual key help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let hints = Self::hints(state);

        let mut help_spans = Vec::new();
        for (i, (keys, label)) in hints.iter().enumerate() {
            if i > 0 {
                help_spans.push(Span::raw("  "));
            }
            help_spans.push(Span::styled(
                (*keys).to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            help_spans.push(Span::raw(format!(" {label}")));
        }

        let lines = vec![
            Line::styled(
                format!(" {}", state.status_message),
                Style::default().fg(theme.text_secondary),
            ),
            Line::from(help_spans).style(Style::default().fg(theme.text_muted)),
        ];

        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP))
            .style(Style::default().bg(theme.background));
        f.render_widget(widget, area);
    }

    /// Contextual key hints for the current focus and mode.
    fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.focus {
            Focus::Filter => vec![
                ("↑↓", "Naviger"),
                ("Mellemrum", "Til/fra"),
                ("a", "Anvend"),
                ("c", "Ryd"),
                ("Esc", "Tilbage"),
            ],
            Focus::Grid => {
                let mut hints = vec![("q", "Afslut"), ("e", "Eksportér")];
                if state.route.shows_toolbar() {
                    hints.push(("s", "Sortér"));
                    if state.filter.has_entries() {
                        hints.push(("f", "Filter"));
                    }
                    hints.push(("↑↓←→", "Naviger"));
                    hints.push(("Enter", "Vis link"));
                }
                hints
            }
        }
    }
}
