//! Card records and the card data store
//!
//! A [`Card`] is one widget instance on the page: a stable id, a
//! [`Platform`] tag, and an open per-platform field record. Geometry lives
//! in the layout store; the two are joined by [`CardId`].

use serde::{Deserialize, Serialize};

use crate::platform::{descriptor, Platform};

/// Opaque stable card identifier.
///
/// Assigned monotonically by [`CardStore`]; never reused after deletion
/// within a page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Open, platform-dependent card fields.
///
/// Only the fields relevant to a card's platform are meaningful; the rest
/// stay `None` and are skipped on serialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Index into the gradient palette for custom text blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<usize>,

    /// Command string for terminal/code blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Target URL (QR payload, link card, raw video source, product page)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,

    /// Embedded video identifier for the TV widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,

    /// Image payload as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl CardFields {
    /// Overlay `self` on top of `base`: explicit fields win, unset fields
    /// fall back to the base.
    pub fn merged_over(self, base: CardFields) -> CardFields {
        CardFields {
            title: self.title.or(base.title),
            text: self.text.or(base.text),
            gradient: self.gradient.or(base.gradient),
            command: self.command.or(base.command),
            url: self.url.or(base.url),
            lat: self.lat.or(base.lat),
            lng: self.lng.or(base.lng),
            zoom: self.zoom.or(base.zoom),
            video_id: self.video_id.or(base.video_id),
            image: self.image.or(base.image),
            price: self.price.or(base.price),
            rating: self.rating.or(base.rating),
            review_count: self.review_count.or(base.review_count),
        }
    }
}

/// A single-field update applied to a card in place.
///
/// Field editors (text box blur, image pick, video change) replace exactly
/// one field without touching the rest of the record.
#[derive(Debug, Clone, PartialEq)]
pub enum CardPatch {
    Title(String),
    Text(String),
    Gradient(usize),
    Command(String),
    Url(String),
    Coordinates { lat: f64, lng: f64, zoom: u8 },
    VideoId(String),
    Image(String),
    Price(String),
    Rating(f32),
    ReviewCount(u32),
}

/// A widget instance placed on the page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub platform: Platform,
    #[serde(flatten)]
    pub fields: CardFields,
}

/// The mutable collection of card records on the page.
///
/// Geometry-free: layout placement is owned by the layout store. Removal is
/// idempotent and updates against absent ids are silent no-ops, so deletion
/// races with the renderer never crash the editor.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    next_id: u64,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card, merging explicit fields over registry defaults.
    ///
    /// Returns the freshly assigned id. The caller is responsible for
    /// informing the layout store in the same logical transaction.
    pub fn add(&mut self, platform: Platform, fields: CardFields) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;

        let desc = descriptor(platform);
        let defaults = CardFields {
            text: (!desc.default_text.is_empty()).then(|| desc.default_text.to_string()),
            ..CardFields::default()
        };

        self.cards.push(Card {
            id,
            platform,
            fields: fields.merged_over(defaults),
        });
        id
    }

    /// Replace exactly one field on the card with `id`.
    ///
    /// Silent no-op when the id is absent.
    pub fn update(&mut self, id: CardId, patch: CardPatch) {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            tracing::debug!("update for absent card {id}, ignoring");
            return;
        };
        match patch {
            CardPatch::Title(v) => card.fields.title = Some(v),
            CardPatch::Text(v) => card.fields.text = Some(v),
            CardPatch::Gradient(v) => card.fields.gradient = Some(v),
            CardPatch::Command(v) => card.fields.command = Some(v),
            CardPatch::Url(v) => card.fields.url = Some(v),
            CardPatch::Coordinates { lat, lng, zoom } => {
                card.fields.lat = Some(lat);
                card.fields.lng = Some(lng);
                card.fields.zoom = Some(zoom);
            }
            CardPatch::VideoId(v) => card.fields.video_id = Some(v),
            CardPatch::Image(v) => card.fields.image = Some(v),
            CardPatch::Price(v) => card.fields.price = Some(v),
            CardPatch::Rating(v) => card.fields.rating = Some(v),
            CardPatch::ReviewCount(v) => card.fields.review_count = Some(v),
        }
    }

    /// Delete the record. Idempotent: removing twice or removing an absent
    /// id has no effect.
    pub fn remove(&mut self, id: CardId) {
        self.cards.retain(|c| c.id != id);
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Read view for rendering, in insertion order.
    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replace the whole collection (document load).
    ///
    /// The id allocator resumes above the highest loaded id so ids are never
    /// reused after a round trip.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.next_id = cards.iter().map(|c| c.id.0 + 1).max().unwrap_or(0);
        self.cards = cards;
    }
}
