//! Color palette for the editor canvas

use pagegrid_core::BACKGROUND_FILLS;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Block backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Unselected blocks
pub const BORDER_ACTIVE: Color = Color::Cyan; // Selected block

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // username available
pub const STATUS_RED: Color = Color::Red; // username taken / load error
pub const STATUS_YELLOW: Color = Color::Yellow; // checking / unsaved changes

/// Parse a `#rrggbb` brand color into a terminal color. Anything else
/// falls back to the accent color.
pub fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return ACCENT;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => ACCENT,
    }
}

/// Terminal approximation of one of the page background fills.
pub fn background_fill(index: usize) -> Color {
    match BACKGROUND_FILLS.get(index).copied().unwrap_or("plain") {
        "sunset" => Color::Rgb(40, 18, 26),
        "ocean" => Color::Rgb(12, 24, 40),
        "forest" => Color::Rgb(14, 30, 20),
        "candy" => Color::Rgb(36, 20, 38),
        "graphite" => Color::Rgb(24, 26, 30),
        _ => DEEPEST_BG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_brand_colors() {
        assert_eq!(hex_color("#1DB954"), Color::Rgb(0x1d, 0xb9, 0x54));
        assert_eq!(hex_color("ff0000"), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_hex_color_falls_back_on_garbage() {
        assert_eq!(hex_color("#zzz"), ACCENT);
        assert_eq!(hex_color(""), ACCENT);
    }

    #[test]
    fn test_every_fill_has_a_color() {
        for i in 0..BACKGROUND_FILLS.len() {
            let _ = background_fill(i);
        }
        assert_eq!(background_fill(999), DEEPEST_BG);
    }
}
