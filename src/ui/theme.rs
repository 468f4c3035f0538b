//! Theme: dark canvas, one accent, muted hints.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (results area).
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Input bar, status.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Prompt, group labels, selection bar.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Selected row background.
    pub const ACCENT_GLOW: Color = Color::Rgb(0x1e, 0x2d, 0x3d);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
}

pub mod styles {
    use ratatui::style::{Modifier, Style};

    use super::colors;

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }
    pub fn accent_bold() -> Style {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    }
    pub fn text() -> Style {
        Style::default().fg(colors::TEXT)
    }
    pub fn text_dim() -> Style {
        Style::default().fg(colors::TEXT_DIM)
    }
    pub fn muted() -> Style {
        Style::default().fg(colors::MUTED)
    }
    pub fn selected() -> Style {
        Style::default()
            .fg(colors::TEXT)
            .bg(colors::ACCENT_GLOW)
            .add_modifier(Modifier::BOLD)
    }
    pub fn error() -> Style {
        Style::default().fg(colors::ERROR)
    }
}

pub const HEADER_HEIGHT: u16 = 1;
pub const INPUT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_RESULTS_LINES: u16 = 3;
/// Blank line between result groups.
pub const GROUP_GAP: usize = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const SPINNER: &[char] = &[
    '⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏',
];
