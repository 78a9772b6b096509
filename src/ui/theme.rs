use ratatui::style::Color;

use crate::model::Theme;

/// Colors used by every widget. One palette per [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub highlight: Color,
    pub checked: Color,
    pub status_ok: Color,
    pub status_error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Rgb(0xda, 0x77, 0x56),
                border: Color::Rgb(0x40, 0x40, 0x40),
                text: Color::Rgb(0xe5, 0xe5, 0xe5),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                background: Color::Reset,
                highlight: Color::Rgb(0x26, 0x26, 0x26),
                checked: Color::Rgb(0x6b, 0x72, 0x80),
                status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
                status_error: Color::Rgb(0xef, 0x44, 0x44),
            },
            Theme::Light => Self {
                accent: Color::Rgb(0x25, 0x63, 0xeb),
                border: Color::Rgb(0xd4, 0xd4, 0xd8),
                text: Color::Rgb(0x18, 0x18, 0x1b),
                muted: Color::Rgb(0x71, 0x71, 0x7a),
                background: Color::Rgb(0xfa, 0xfa, 0xfa),
                highlight: Color::Rgb(0xe4, 0xe4, 0xe7),
                checked: Color::Rgb(0xa1, 0xa1, 0xaa),
                status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
                status_error: Color::Rgb(0xdc, 0x26, 0x26),
            },
            Theme::Winter => Self {
                accent: Color::Rgb(0x7d, 0xd3, 0xfc),
                border: Color::Rgb(0x33, 0x41, 0x55),
                text: Color::Rgb(0xe0, 0xf2, 0xfe),
                muted: Color::Rgb(0x94, 0xa3, 0xb8),
                background: Color::Rgb(0x0f, 0x17, 0x2a),
                highlight: Color::Rgb(0x1e, 0x29, 0x3b),
                checked: Color::Rgb(0x64, 0x74, 0x8b),
                status_ok: Color::Rgb(0x5e, 0xea, 0xd4),
                status_error: Color::Rgb(0xf8, 0x71, 0x71),
            },
            Theme::Spring => Self {
                accent: Color::Rgb(0xf4, 0x72, 0xb6),
                border: Color::Rgb(0x3f, 0x62, 0x12),
                text: Color::Rgb(0xf7, 0xfe, 0xe7),
                muted: Color::Rgb(0xa3, 0xe6, 0x35),
                background: Color::Rgb(0x1a, 0x2e, 0x05),
                highlight: Color::Rgb(0x36, 0x53, 0x14),
                checked: Color::Rgb(0x65, 0xa3, 0x0d),
                status_ok: Color::Rgb(0x84, 0xcc, 0x16),
                status_error: Color::Rgb(0xfb, 0x71, 0x85),
            },
            Theme::Summer => Self {
                accent: Color::Rgb(0xf5, 0x9e, 0x0b),
                border: Color::Rgb(0x0e, 0x74, 0x90),
                text: Color::Rgb(0xff, 0xfb, 0xeb),
                muted: Color::Rgb(0x67, 0xe8, 0xf9),
                background: Color::Rgb(0x08, 0x33, 0x44),
                highlight: Color::Rgb(0x15, 0x5e, 0x75),
                checked: Color::Rgb(0x22, 0xd3, 0xee),
                status_ok: Color::Rgb(0xfa, 0xcc, 0x15),
                status_error: Color::Rgb(0xf4, 0x3f, 0x5e),
            },
            Theme::Autumn => Self {
                accent: Color::Rgb(0xea, 0x58, 0x0c),
                border: Color::Rgb(0x78, 0x35, 0x0f),
                text: Color::Rgb(0xff, 0xed, 0xd5),
                muted: Color::Rgb(0xd9, 0x77, 0x06),
                background: Color::Rgb(0x29, 0x15, 0x08),
                highlight: Color::Rgb(0x43, 0x14, 0x07),
                checked: Color::Rgb(0x92, 0x40, 0x0e),
                status_ok: Color::Rgb(0xca, 0x8a, 0x04),
                status_error: Color::Rgb(0xdc, 0x26, 0x26),
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_distinct_palette() {
        let palettes: Vec<Palette> = Theme::all().iter().map(|t| Palette::for_theme(*t)).collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
