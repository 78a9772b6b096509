use crate::ui::element::ElementId;
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "  Shopping Lists";
const BUTTONS: [(&str, ElementId); 3] = [
    ("[Import ^O]", ElementId::ImportButton),
    ("[Export ^E]", ElementId::ExportButton),
    ("[Theme ^T]", ElementId::SettingsButton),
];

pub struct Header {
    palette: Palette,
}

impl Header {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Header line and the clickable button regions inside `area`.
    pub fn widget(&self, area: Rect) -> (Paragraph<'static>, Vec<(Rect, ElementId)>) {
        let text_style = Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD);
        let button_style = Style::default().fg(self.palette.text);

        let buttons_width: usize = BUTTONS.iter().map(|(label, _)| label.len() + 1).sum();
        let inner_width = area.width as usize;
        let padding = inner_width
            .saturating_sub(TITLE.len())
            .saturating_sub(buttons_width);

        let mut spans = vec![
            Span::styled(TITLE, text_style),
            Span::raw(" ".repeat(padding)),
        ];
        let mut regions = Vec::new();
        // The text line sits between the top and bottom borders.
        let mut x = area.x + (TITLE.len() + padding) as u16;
        for (label, id) in BUTTONS {
            spans.push(Span::styled(label, button_style));
            spans.push(Span::raw(" "));
            regions.push((
                Rect {
                    x,
                    y: area.y + 1,
                    width: label.len() as u16,
                    height: 1,
                },
                id,
            ));
            x = x.saturating_add(label.len() as u16 + 1);
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        );
        (paragraph, regions)
    }
}
