//! The persisted page document
//!
//! A [`PageDocument`] is the single durable artifact the engine produces:
//! page styling, both breakpoint layouts, the card records, and the sticker
//! collection in one JSON object, offered for download and accepted back on
//! upload.
//!
//! Loading is all-or-nothing: the document is parsed and validated in full
//! before any store is touched, so a malformed file leaves prior state
//! intact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardStore};
use crate::error::{Error, Result};
use crate::layout::{Breakpoint, GridLayout, LayoutEntry};
use crate::sticker::{Sticker, StickerStore};
use crate::style::{Background, PageStyle, TextStyle};

/// The two-breakpoint layout section of the document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub lg: Vec<LayoutEntry>,
    #[serde(default)]
    pub xs: Vec<LayoutEntry>,
}

/// Grid section: geometry plus the card records it places.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GridDocument {
    pub layout: LayoutDocument,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// The exported page snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub background: Background,
    pub grid: GridDocument,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl PageDocument {
    /// Snapshot the full page state.
    ///
    /// Synchronous and atomic from the caller's point of view: nothing
    /// yields control while the stores are read.
    pub fn from_state(
        cards: &CardStore,
        layout: &GridLayout,
        stickers: &StickerStore,
        style: &PageStyle,
    ) -> Self {
        Self {
            title: style.title.clone(),
            subtitle: style.subtitle.clone(),
            background: style.background.clone(),
            grid: GridDocument {
                layout: LayoutDocument {
                    lg: layout.entries(Breakpoint::Lg).to_vec(),
                    xs: layout.entries(Breakpoint::Xs).to_vec(),
                },
                cards: cards.list().to_vec(),
            },
            stickers: stickers.list().to_vec(),
            exported_at: Some(Utc::now()),
        }
    }

    /// Validate cross-references before any apply.
    ///
    /// Checks the invariants the stores maintain at runtime: unique entry
    /// ids per breakpoint, no orphan geometry, exactly one entry per
    /// breakpoint for every card, and agreeing rows across breakpoints.
    pub fn validate(&self) -> Result<()> {
        for (name, entries) in [("lg", &self.grid.layout.lg), ("xs", &self.grid.layout.xs)] {
            let mut seen = std::collections::HashSet::new();
            for e in entries {
                if !seen.insert(e.card_id) {
                    return Err(Error::document_invalid(format!(
                        "duplicate {name} layout entry for {}",
                        e.card_id
                    )));
                }
                if !self.grid.cards.iter().any(|c| c.id == e.card_id) {
                    return Err(Error::document_invalid(format!(
                        "{name} layout references unknown {}",
                        e.card_id
                    )));
                }
            }
            for card in &self.grid.cards {
                if !entries.iter().any(|e| e.card_id == card.id) {
                    return Err(Error::document_invalid(format!(
                        "{} has no {name} layout entry",
                        card.id
                    )));
                }
            }
        }
        // Row sync across breakpoints: reconcile keeps lg.y == xs.y at
        // runtime, so a document that disagrees cannot come from a clean
        // export and would corrupt every later reconcile.
        for lg in &self.grid.layout.lg {
            if let Some(xs) = self.grid.layout.xs.iter().find(|e| e.card_id == lg.card_id) {
                if xs.y != lg.y {
                    return Err(Error::document_invalid(format!(
                        "breakpoint rows disagree for {} (lg y={}, xs y={})",
                        lg.card_id, lg.y, xs.y
                    )));
                }
            }
        }
        Ok(())
    }

    /// Replace all stores with this document's content.
    ///
    /// Fails loudly without touching any store when validation fails.
    pub fn apply(
        self,
        cards: &mut CardStore,
        layout: &mut GridLayout,
        stickers: &mut StickerStore,
        style: &mut PageStyle,
    ) -> Result<()> {
        self.validate()?;

        cards.replace_all(self.grid.cards);
        layout.replace_all(self.grid.layout.lg, self.grid.layout.xs);
        stickers.replace_all(self.stickers);
        style.title = self.title;
        style.subtitle = self.subtitle;
        style.background = self.background;
        Ok(())
    }

    /// Serialize for download.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an uploaded document. Wrong shapes surface as a load failure
    /// with the parser's message, never a partial apply.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::document_invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardFields, CardPatch};
    use crate::layout::Size;
    use crate::platform::Platform;

    fn populated_state() -> (CardStore, GridLayout, StickerStore, PageStyle) {
        let mut cards = CardStore::new();
        let mut layout = GridLayout::new();
        let mut stickers = StickerStore::new();
        let mut style = PageStyle::default();

        let qr = cards.add(
            Platform::Qr,
            CardFields {
                url: Some("https://x.test".into()),
                ..CardFields::default()
            },
        );
        layout.add_entry(qr, Size::new(1, 1));

        let gh = cards.add(
            Platform::Github,
            CardFields {
                text: Some("@octocat".into()),
                ..CardFields::default()
            },
        );
        layout.add_entry(gh, Size::new(2, 1));
        cards.update(gh, CardPatch::Title("GitHub".into()));

        stickers.add("🎉", 12.0, 300.0);
        style.set_title_text("Ada");
        style.set_background_color(2);

        (cards, layout, stickers, style)
    }

    #[test]
    fn test_round_trip_reproduces_state() {
        let (cards, layout, stickers, style) = populated_state();
        let doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        let json = doc.to_json().unwrap();

        let mut cards2 = CardStore::new();
        let mut layout2 = GridLayout::new();
        let mut stickers2 = StickerStore::new();
        let mut style2 = PageStyle::default();
        PageDocument::from_json(&json)
            .unwrap()
            .apply(&mut cards2, &mut layout2, &mut stickers2, &mut style2)
            .unwrap();

        assert_eq!(cards.list(), cards2.list());
        assert_eq!(
            layout.entries(Breakpoint::Lg),
            layout2.entries(Breakpoint::Lg)
        );
        assert_eq!(
            layout.entries(Breakpoint::Xs),
            layout2.entries(Breakpoint::Xs)
        );
        assert_eq!(stickers.list(), stickers2.list());
        assert_eq!(style, style2);
    }

    #[test]
    fn test_malformed_json_fails_loudly() {
        let err = PageDocument::from_json("{\"title\": 3}").unwrap_err();
        assert!(matches!(err, Error::DocumentInvalid { .. }));
    }

    #[test]
    fn test_orphan_geometry_rejected_without_partial_apply() {
        let (cards, layout, stickers, style) = populated_state();
        let mut doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        doc.grid.cards.pop(); // layout now references a missing card

        let mut cards2 = CardStore::new();
        let mut layout2 = GridLayout::new();
        let mut stickers2 = StickerStore::new();
        let mut style2 = PageStyle::default();
        let err = doc
            .apply(&mut cards2, &mut layout2, &mut stickers2, &mut style2)
            .unwrap_err();

        assert!(matches!(err, Error::DocumentInvalid { .. }));
        assert!(cards2.is_empty(), "no partial apply");
        assert!(layout2.is_empty());
        assert!(stickers2.is_empty());
    }

    #[test]
    fn test_card_without_entry_rejected() {
        let (cards, layout, stickers, style) = populated_state();
        let mut doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        doc.grid.layout.xs.pop();

        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_disagreeing_breakpoint_rows_rejected() {
        let (cards, layout, stickers, style) = populated_state();
        let mut doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        doc.grid.layout.xs[0].y += 5;

        let mut cards2 = CardStore::new();
        let mut layout2 = GridLayout::new();
        let mut stickers2 = StickerStore::new();
        let mut style2 = PageStyle::default();
        let err = doc
            .apply(&mut cards2, &mut layout2, &mut stickers2, &mut style2)
            .unwrap_err();

        assert!(matches!(err, Error::DocumentInvalid { .. }));
        assert!(cards2.is_empty(), "no partial apply");
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let (cards, layout, stickers, style) = populated_state();
        let mut doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        let dup = doc.grid.layout.lg[0];
        doc.grid.layout.lg.push(dup);

        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_document_field_names_match_export_contract() {
        let (cards, layout, stickers, style) = populated_state();
        let doc = PageDocument::from_state(&cards, &layout, &stickers, &style);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert!(value.get("title").is_some());
        assert!(value.get("subtitle").is_some());
        assert!(value.get("background").is_some());
        assert!(value["grid"].get("layout").is_some());
        assert!(value["grid"]["layout"].get("lg").is_some());
        assert!(value["grid"]["layout"].get("xs").is_some());
        assert!(value["grid"].get("cards").is_some());
        assert!(value.get("stickers").is_some());
        assert_eq!(value["grid"]["layout"]["lg"][0].get("cardId").is_some(), true);
    }
}
