use crate::ui::status::{StatusBanner, StatusKind};
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Tab: Pane │ a: Add │ Del: Remove │ Enter: Edit │ Space: Check │ Alt+↑↓: Move │ Ctrl+Q: Quit";

pub struct Footer {
    palette: Palette,
}

impl Footer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Key hints, or the status banner while one is showing.
    pub fn widget(&self, area: Rect, status: Option<&StatusBanner>) -> Paragraph<'static> {
        let (text, text_style) = match status {
            Some(banner) => {
                let color = match banner.kind {
                    StatusKind::Info => self.palette.status_ok,
                    StatusKind::Error => self.palette.status_error,
                };
                (format!(" {}", banner.message), Style::default().fg(color))
            }
            None => (
                HINTS.to_string(),
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let dim = Style::default()
            .fg(self.palette.muted)
            .add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.palette.border)),
        )
    }
}
