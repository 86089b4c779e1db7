//! Marquee theme for ReelTUI
//!
//! Dark cinema palette with a gold accent, plus style helpers.

use ratatui::style::{Color, Modifier, Style};

use crate::app::Severity;

/// Cinema color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #14141a (theatre black)
    pub const BACKGROUND: Color = Color::Rgb(0x14, 0x14, 0x1a);

    /// Panel: #2c2c34 (seat grey)
    pub const PANEL: Color = Color::Rgb(0x2c, 0x2c, 0x34);

    /// Primary: #f5c518 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Accent: #ff5a5f (curtain red)
    pub const ACCENT: Color = Color::Rgb(0xff, 0x5a, 0x5f);

    /// Info: #5ab4ff (projector blue)
    pub const INFO: Color = Color::Rgb(0x5a, 0xb4, 0xff);

    /// Text: #e6e6eb
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xeb);

    /// Muted: #a9a9b2
    pub const MUTED: Color = Color::Rgb(0xa9, 0xa9, 0xb2);

    /// Dim: #55555f
    pub const DIM: Color = Color::Rgb(0x55, 0x55, 0x5f);

    /// Error: #ff4d4d
    pub const ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4d);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tagline() -> Style {
        Style::default()
            .fg(Self::MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for list items (selected/highlighted)
    pub fn list_item_selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn input_cursor() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::PRIMARY)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Rating badge
    pub fn rating() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// "Series" / "Movie" label
    pub fn kind_label() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::INFO)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Alert title; severity only changes the colour
    pub fn alert_title(severity: Severity) -> Style {
        let color = match severity {
            Severity::Info => Self::INFO,
            Severity::Error => Self::ERROR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance (WCAG 2.0)
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Contrast ratio between two colors, from 1 to 21
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_readable_text_on_background() {
        let bg = rgb(Theme::BACKGROUND);
        for color in [Theme::TEXT, Theme::MUTED, Theme::PRIMARY, Theme::INFO] {
            let ratio = contrast_ratio(rgb(color), bg);
            assert!(ratio >= 4.5, "{:?} on background is {:.2}:1", color, ratio);
        }
    }

    #[test]
    fn test_alert_titles_stand_out() {
        let panel = rgb(Theme::PANEL);
        for color in [Theme::ERROR, Theme::INFO] {
            assert!(contrast_ratio(rgb(color), panel) >= 3.0);
        }
        assert_ne!(
            Theme::alert_title(Severity::Info),
            Theme::alert_title(Severity::Error)
        );
    }

    #[test]
    fn test_selected_item_readable() {
        let ratio = contrast_ratio(rgb(Theme::BACKGROUND), rgb(Theme::PRIMARY));
        assert!(ratio >= 4.5);
    }

    #[test]
    fn test_contrast_ratio_bounds() {
        assert!((contrast_ratio((0, 0, 0), (255, 255, 255)) - 21.0).abs() < 0.1);
        assert!((contrast_ratio((100, 100, 100), (100, 100, 100)) - 1.0).abs() < 0.001);
    }
}
