//! Opacity rendering for fading rows.
//!
//! Terminals have no alpha channel, so a row at opacity `a` is drawn with its
//! colors blended toward the background by `1 - a`.

use ratatui::style::{Color, Style};

/// Blend `fg` toward `bg`. Named colors cannot be blended and snap to `bg`
/// once the row is mostly transparent.
#[must_use]
pub fn fade_color(fg: Color, bg: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => Color::Rgb(
            lerp(br, fr, opacity),
            lerp(bg_, fg_, opacity),
            lerp(bb, fb, opacity),
        ),
        _ if opacity < 0.5 => bg,
        _ => fg,
    }
}

/// Apply [`fade_color`] to a style's foreground and background.
#[must_use]
pub fn fade_style(style: Style, bg: Color, opacity: f32) -> Style {
    if opacity >= 1.0 {
        return style;
    }
    let mut faded = style;
    if let Some(fg) = style.fg {
        faded = faded.fg(fade_color(fg, bg, opacity));
    }
    if let Some(row_bg) = style.bg {
        faded = faded.bg(fade_color(row_bg, bg, opacity));
    }
    faded
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}
