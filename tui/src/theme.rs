//! Color theme and glyphs for Ticklist TUI.
//!
//! Priority tones follow the classic to-do palette (coral, sun yellow, sky
//! blue) over a Kanagawa-style dark background, with a high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use ticklist_engine::{Priority, UiOptions};

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55);
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186);
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);

    // === Brand ===
    pub const TITLE: Color = Color::Rgb(2, 119, 189); // #0277BD
    pub const ACCENT: Color = Color::Rgb(100, 181, 246); // #64B5F6

    // === Priority tones ===
    pub const PRIORITY_HIGH: Color = Color::Rgb(255, 111, 97); // #FF6F61
    pub const PRIORITY_MEDIUM: Color = Color::Rgb(255, 235, 59); // #FFEB3B
    pub const PRIORITY_LOW: Color = Color::Rgb(100, 181, 246); // #64B5F6

    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub title: Color,
    pub accent: Color,
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,
    pub success: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            title: colors::TITLE,
            accent: colors::ACCENT,
            priority_high: colors::PRIORITY_HIGH,
            priority_medium: colors::PRIORITY_MEDIUM,
            priority_low: colors::PRIORITY_LOW,
            success: colors::SUCCESS,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            title: Color::White,
            accent: Color::Cyan,
            priority_high: Color::Red,
            priority_medium: Color::Yellow,
            priority_low: Color::Blue,
            success: Color::Green,
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for row markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub selected: &'static str,
    pub priority_dot: &'static str,
    pub fading: &'static str,
    pub separator: &'static str,
    pub count_separator: &'static str,
    pub prompt: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            checked: "[x]",
            unchecked: "[ ]",
            selected: ">",
            priority_dot: "*",
            fading: "~",
            separator: "|",
            count_separator: "-",
            prompt: ">",
        }
    } else {
        Glyphs {
            checked: "☑",
            unchecked: "☐",
            selected: "▸",
            priority_dot: "●",
            fading: "…",
            separator: "│",
            count_separator: "·",
            prompt: "❯",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.title)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn section_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Selector chip drawn in its own tone.
    #[must_use]
    pub fn chip(tone: Color) -> Style {
        Style::default().fg(tone)
    }

    /// The selected chip: tone as background.
    #[must_use]
    pub fn chip_active(palette: &Palette, tone: Color) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(tone)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_normal(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_insert(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
