//! Free-floating emoji stickers
//!
//! Stickers live outside the grid: absolute pixel positions relative to the
//! viewport, direct manipulation (drag/scale/rotate), and a placement rule
//! that keeps new stickers off the grid's band plus a fixed margin.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stable sticker identifier, allocated by [`StickerStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StickerId(pub u64);

impl std::fmt::Display for StickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sticker-{}", self.0)
    }
}

/// A decorative emoji element, independent of the grid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: StickerId,
    pub emoji: String,
    /// Viewport pixel position
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// The horizontal band the grid occupies, in viewport pixels.
///
/// New stickers avoid `[left - margin, right + margin]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBand {
    pub left: f32,
    pub right: f32,
    pub margin: f32,
}

impl GridBand {
    pub fn excludes(&self, x: f32) -> bool {
        x >= self.left - self.margin && x <= self.right + self.margin
    }
}

/// The sticker collection for a page.
#[derive(Debug, Clone, Default)]
pub struct StickerStore {
    stickers: Vec<Sticker>,
    next_id: u64,
}

impl StickerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a sticker at a randomized edge position outside the grid band.
    ///
    /// Picks the left or right margin strip at random; within a strip both
    /// coordinates are uniform. Degenerate viewports (strips narrower than
    /// the sticker) fall back to x = 0.
    pub fn add_at_edge<R: Rng>(
        &mut self,
        rng: &mut R,
        emoji: impl Into<String>,
        viewport_w: f32,
        viewport_h: f32,
        band: GridBand,
    ) -> StickerId {
        let left_strip = (band.left - band.margin).max(0.0);
        let right_start = (band.right + band.margin).min(viewport_w);
        let right_strip = (viewport_w - right_start).max(0.0);

        let x = if left_strip <= 0.0 && right_strip <= 0.0 {
            0.0
        } else if right_strip <= 0.0 || (left_strip > 0.0 && rng.gen_bool(0.5)) {
            rng.gen_range(0.0..left_strip)
        } else {
            right_start + rng.gen_range(0.0..right_strip)
        };
        let y = if viewport_h > 0.0 {
            rng.gen_range(0.0..viewport_h)
        } else {
            0.0
        };

        self.add(emoji, x, y)
    }

    /// Place a sticker at an explicit position.
    pub fn add(&mut self, emoji: impl Into<String>, x: f32, y: f32) -> StickerId {
        let id = StickerId(self.next_id);
        self.next_id += 1;
        self.stickers.push(Sticker {
            id,
            emoji: emoji.into(),
            x,
            y,
            scale: 1.0,
            rotation: 0.0,
        });
        id
    }

    /// Drag to a new position. Silent no-op for absent ids.
    pub fn move_to(&mut self, id: StickerId, x: f32, y: f32) {
        if let Some(s) = self.get_mut(id) {
            s.x = x;
            s.y = y;
        }
    }

    /// Scale clamps to a sane interactive range.
    pub fn set_scale(&mut self, id: StickerId, scale: f32) {
        if let Some(s) = self.get_mut(id) {
            s.scale = scale.clamp(0.25, 4.0);
        }
    }

    pub fn set_rotation(&mut self, id: StickerId, degrees: f32) {
        if let Some(s) = self.get_mut(id) {
            s.rotation = degrees % 360.0;
        }
    }

    /// Idempotent delete.
    pub fn remove(&mut self, id: StickerId) {
        self.stickers.retain(|s| s.id != id);
    }

    pub fn list(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    fn get_mut(&mut self, id: StickerId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| s.id == id)
    }

    /// Replace the collection (document load), resuming the id allocator
    /// above the highest loaded id.
    pub fn replace_all(&mut self, stickers: Vec<Sticker>) {
        self.next_id = stickers.iter().map(|s| s.id.0 + 1).max().unwrap_or(0);
        self.stickers = stickers;
    }
}
