//! # pagegrid-core - Core Domain Types
//!
//! Foundation crate for pagegrid. Provides the card model, the
//! two-breakpoint grid layout store, stickers, page styling, the persisted
//! document, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Cards (`card`, `platform`)
//! - [`Platform`] - Closed widget-variant tag (16 social + content + product)
//! - [`SocialPlatform`] - Social sub-tag with branding/link metadata
//! - [`descriptor()`] - Registry lookup for per-platform defaults
//! - [`Card`], [`CardFields`], [`CardPatch`], [`CardStore`] - Card records
//!
//! ### Layout (`layout`)
//! - [`Breakpoint`] - "lg" (4 columns) or "xs" (2 columns)
//! - [`LayoutEntry`], [`Size`], [`GridLayout`] - Geometry and its store
//! - [`DragSession`] - The single active drag/resize target
//!
//! ### Stickers (`sticker`) and styling (`style`)
//! - [`Sticker`], [`StickerStore`], [`GridBand`]
//! - [`PageStyle`], [`TextStyle`], [`Background`], [`FONTS`]
//!
//! ### Persistence (`document`)
//! - [`PageDocument`] - The exported JSON snapshot, validated on load
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pagegrid_core::prelude::*;
//! ```

pub mod card;
pub mod document;
pub mod error;
pub mod layout;
pub mod logging;
pub mod platform;
pub mod sticker;
pub mod style;

/// Prelude for common imports used throughout all pagegrid crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use card::{Card, CardFields, CardId, CardPatch, CardStore};
pub use document::{GridDocument, LayoutDocument, PageDocument};
pub use error::{Error, Result, ResultExt};
pub use layout::{Breakpoint, DragSession, GridLayout, LayoutEntry, Size};
pub use platform::{descriptor, CardDescriptor, Platform, SocialInfo, SocialPlatform};
pub use sticker::{GridBand, Sticker, StickerId, StickerStore};
pub use style::{Background, PageStyle, TextStyle, BACKGROUND_FILLS, BACKGROUND_PATTERNS, FONTS};
