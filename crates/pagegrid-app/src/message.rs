//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use pagegrid_core::{Breakpoint, CardFields, CardId, CardPatch, LayoutEntry, Platform, Size, StickerId};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog if unsaved changes)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Card Messages
    // ─────────────────────────────────────────────────────────
    /// Add a card; size falls back to the registry default, explicit
    /// fields override registry defaults
    AddCard {
        platform: Platform,
        size: Option<Size>,
        fields: CardFields,
    },
    /// Delete a card and its geometry atomically
    RemoveCard(CardId),
    /// Replace a single field on a card
    UpdateCard { id: CardId, patch: CardPatch },
    /// Select a card on the canvas
    SelectCard(Option<CardId>),
    /// Cycle selection to the next card
    SelectNextCard,

    // ─────────────────────────────────────────────────────────
    // Layout Messages
    // ─────────────────────────────────────────────────────────
    /// Begin a drag session for the selected card
    BeginDrag { resizing: bool },
    /// End the active drag session
    EndDrag,
    /// Move the selected card by a cell delta on the current breakpoint
    NudgeCard { dx: i32, dy: i32 },
    /// Resize a card to one of the allowed tiles
    ResizeCard { id: CardId, size: Size },
    /// Cycle the selected card through the allowed tile sizes
    CycleCardSize,
    /// Bulk layout replace from the grid widget's drag computations
    LayoutChanged {
        breakpoint: Breakpoint,
        entries: Vec<LayoutEntry>,
    },
    /// Toggle authoring/preview view mode
    TogglePreview,
    /// Shell reports a new window size in pixels
    ViewportResized { width: u32, height: u32 },

    // ─────────────────────────────────────────────────────────
    // UI Mode Messages
    // ─────────────────────────────────────────────────────────
    /// Open the widget picker
    OpenWidgetPicker,
    /// Open the sticker palette
    OpenStickerPicker,
    /// Open the username claim prompt
    OpenUsernamePrompt,
    /// Close the active prompt/picker, back to the canvas
    ClosePrompt,
    /// Move the picker cursor
    PickerNext,
    PickerPrev,
    /// Confirm the current picker item
    PickerConfirm,

    // ─────────────────────────────────────────────────────────
    // Sticker Messages
    // ─────────────────────────────────────────────────────────
    /// Scatter a sticker from the palette at a random edge position
    AddSticker { emoji: String },
    MoveSticker { id: StickerId, x: f32, y: f32 },
    ScaleSticker { id: StickerId, scale: f32 },
    RotateSticker { id: StickerId, degrees: f32 },
    RemoveSticker(StickerId),

    // ─────────────────────────────────────────────────────────
    // Style Messages
    // ─────────────────────────────────────────────────────────
    SetTitleText(String),
    SetSubtitleText(String),
    SetTitleFont(usize),
    SetSubtitleFont(usize),
    SetTitleColor(usize),
    SetSubtitleColor(usize),
    SetBackgroundColor(usize),
    SetBackgroundPattern(usize),

    // ─────────────────────────────────────────────────────────
    // Username Availability Messages
    // ─────────────────────────────────────────────────────────
    /// Username input changed (keystroke); schedules a debounced check
    UsernameInput { text: String },
    /// Availability check resolved. `exists` is `None` on transport
    /// failure (fail-closed). Stale tokens are discarded.
    UsernameChecked {
        token: u64,
        username: String,
        exists: Option<bool>,
    },

    // ─────────────────────────────────────────────────────────
    // Persistence Messages
    // ─────────────────────────────────────────────────────────
    /// Export the page to a file
    SaveRequested { path: PathBuf },
    /// Background save finished
    SaveCompleted { result: Result<PathBuf, String> },
    /// Load a page document from a file
    LoadRequested { path: PathBuf },
    /// Background load finished; `Ok` carries the raw JSON text, parsed
    /// and applied on the update thread so the apply stays atomic
    LoadCompleted {
        path: PathBuf,
        result: Result<String, String>,
    },
}
