//! Page-level styling state
//!
//! Flat key-value state for the page header and background. The only
//! structural rule is that font indices stay within the font table.

use serde::{Deserialize, Serialize};

/// Fonts offered by the title/subtitle editors, in picker order.
pub const FONTS: &[&str] = &[
    "Inter",
    "Playfair Display",
    "Space Grotesk",
    "Caveat",
    "JetBrains Mono",
    "Lobster",
];

/// Background fill choices (solid colors and gradients by id).
pub const BACKGROUND_FILLS: &[&str] = &[
    "plain",
    "sunset",
    "ocean",
    "forest",
    "candy",
    "graphite",
];

/// Background pattern overlays by id.
pub const BACKGROUND_PATTERNS: &[&str] = &["none", "dots", "grid", "waves", "diagonal"];

/// Styled text line (page title or subtitle).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub text: String,
    /// Index into [`FONTS`]
    #[serde(default)]
    pub font: usize,
    /// Gradient/color id applied to the text
    #[serde(default)]
    pub color: usize,
}

impl TextStyle {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: 0,
            color: 0,
        }
    }
}

/// Background fill + pattern selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(default)]
    pub color: usize,
    #[serde(default)]
    pub pattern: usize,
}

/// The page's header and background styling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    #[serde(default)]
    pub background: Background,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            title: TextStyle::new("Your name"),
            subtitle: TextStyle::new("What you do"),
            background: Background::default(),
        }
    }
}

impl PageStyle {
    pub fn set_title_text(&mut self, text: impl Into<String>) {
        self.title.text = text.into();
    }

    pub fn set_subtitle_text(&mut self, text: impl Into<String>) {
        self.subtitle.text = text.into();
    }

    /// Font indices clamp to the table rather than erroring.
    pub fn set_title_font(&mut self, index: usize) {
        self.title.font = index.min(FONTS.len() - 1);
    }

    pub fn set_subtitle_font(&mut self, index: usize) {
        self.subtitle.font = index.min(FONTS.len() - 1);
    }

    pub fn set_title_color(&mut self, index: usize) {
        self.title.color = index;
    }

    pub fn set_subtitle_color(&mut self, index: usize) {
        self.subtitle.color = index;
    }

    pub fn set_background_color(&mut self, index: usize) {
        self.background.color = index.min(BACKGROUND_FILLS.len() - 1);
    }

    pub fn set_background_pattern(&mut self, index: usize) {
        self.background.pattern = index.min(BACKGROUND_PATTERNS.len() - 1);
    }

    pub fn title_font_name(&self) -> &'static str {
        FONTS[self.title.font.min(FONTS.len() - 1)]
    }

    pub fn subtitle_font_name(&self) -> &'static str {
        FONTS[self.subtitle.font.min(FONTS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_index_clamps_to_table() {
        let mut style = PageStyle::default();
        style.set_title_font(999);
        assert_eq!(style.title.font, FONTS.len() - 1);
        assert_eq!(style.title_font_name(), FONTS[FONTS.len() - 1]);

        style.set_subtitle_font(2);
        assert_eq!(style.subtitle_font_name(), FONTS[2]);
    }

    #[test]
    fn test_background_indices_clamp() {
        let mut style = PageStyle::default();
        style.set_background_color(999);
        style.set_background_pattern(999);
        assert_eq!(style.background.color, BACKGROUND_FILLS.len() - 1);
        assert_eq!(style.background.pattern, BACKGROUND_PATTERNS.len() - 1);
    }

    #[test]
    fn test_text_setters() {
        let mut style = PageStyle::default();
        style.set_title_text("Ada");
        style.set_subtitle_text("Engineer");
        assert_eq!(style.title.text, "Ada");
        assert_eq!(style.subtitle.text, "Engineer");
    }
}
