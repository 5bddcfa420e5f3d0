//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use pagegrid_core::{Breakpoint, CardId, CardStore, GridLayout, PageStyle, StickerStore};

use crate::availability::AccountSession;
use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// The editing canvas with the block grid
    #[default]
    Canvas,

    /// Widget picker - choose a platform for a new card
    WidgetPicker,

    /// Sticker palette - choose an emoji to scatter
    StickerPicker,

    /// Username claim prompt with live availability feedback
    Username,

    /// Quit confirmation (unsaved changes)
    ConfirmQuit,
}

/// Whether the canvas shows the wide editing layout or a simulated
/// narrow-device layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Authoring,
    Preview,
}

/// Displayed result of the most recent username availability check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvailabilityDisplay {
    /// Nothing checked yet (or input cleared)
    #[default]
    Unknown,
    /// Input fails local validation; no check scheduled
    Invalid,
    /// A check is debouncing or in flight
    Checking,
    Available,
    Taken,
    /// Directory unreachable; fail-closed, user can retype to retry
    Unavailable,
}

impl AvailabilityDisplay {
    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityDisplay::Unknown => "",
            AvailabilityDisplay::Invalid => "invalid username",
            AvailabilityDisplay::Checking => "checking...",
            AvailabilityDisplay::Available => "available",
            AvailabilityDisplay::Taken => "this username is taken",
            AvailabilityDisplay::Unavailable => "could not check, try again",
        }
    }
}

/// Username claim input plus its generation-token debounce state.
///
/// Every keystroke bumps `token`; a check result carrying an older token is
/// stale and ignored, so only the newest request can set the display.
#[derive(Debug, Clone, Default)]
pub struct UsernameState {
    pub input: String,
    pub token: u64,
    pub display: AvailabilityDisplay,
}

impl UsernameState {
    /// Bump the generation token for a new keystroke and return it.
    pub fn next_token(&mut self) -> u64 {
        self.token += 1;
        self.token
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.token
    }
}

/// Read-only account info from the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub display_name: String,
    pub username: Option<String>,
}

impl Profile {
    /// Snapshot the session at startup; the editor never writes back.
    pub fn from_session(session: &impl AccountSession) -> Self {
        Self {
            display_name: session.display_name(),
            username: session.assigned_username(),
        }
    }
}

/// Emoji offered by the sticker palette.
pub const STICKER_PALETTE: &[&str] = &["⭐", "🎉", "🔥", "💜", "🌈", "🚀", "🍀", "🎵"];

/// Simulated narrow viewport width used by preview mode, in pixels.
pub const PREVIEW_WIDTH_PX: u32 = 380;

/// Viewports narrower than this use the xs breakpoint.
pub const NARROW_VIEWPORT_PX: u32 = 600;

/// The page-editing session's state: all stores plus UI bookkeeping.
///
/// Stores are mutated exclusively through [`crate::handler::update`]; the
/// renderer reads, never writes.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub cards: CardStore,
    pub layout: GridLayout,
    pub stickers: StickerStore,
    pub style: PageStyle,

    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub view_mode: ViewMode,

    /// Actual window size reported by the shell, in pixels
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Currently selected card on the canvas
    pub selected: Option<CardId>,

    /// Cursor within the widget picker / sticker palette
    pub picker_index: usize,

    pub username: UsernameState,
    pub profile: Profile,

    /// Where the page was last saved to or loaded from; autosave target
    pub document_path: Option<PathBuf>,

    /// Unsaved changes since the last export
    pub dirty: bool,

    /// One-line status feedback (save confirmation, load error)
    pub status: Option<String>,

    pub settings: Settings,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl EditorState {
    pub fn new(settings: Settings) -> Self {
        Self {
            cards: CardStore::new(),
            layout: GridLayout::new(),
            stickers: StickerStore::new(),
            style: PageStyle::default(),
            phase: AppPhase::Running,
            ui_mode: UiMode::Canvas,
            view_mode: ViewMode::Authoring,
            viewport_width: 1280,
            viewport_height: 720,
            selected: None,
            picker_index: 0,
            username: UsernameState::default(),
            profile: Profile::default(),
            document_path: None,
            dirty: false,
            status: None,
            settings,
        }
    }

    /// The breakpoint the canvas is currently laying out against.
    ///
    /// Preview forces the narrow breakpoint regardless of the real window
    /// width; authoring derives it from the viewport.
    pub fn current_breakpoint(&self) -> Breakpoint {
        match self.view_mode {
            ViewMode::Preview => Breakpoint::Xs,
            ViewMode::Authoring => {
                if self.viewport_width < NARROW_VIEWPORT_PX {
                    Breakpoint::Xs
                } else {
                    Breakpoint::Lg
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Move selection to the next card in insertion order (wraps).
    pub fn select_next_card(&mut self) {
        let cards = self.cards.list();
        if cards.is_empty() {
            self.selected = None;
            return;
        }
        let next = match self.selected {
            Some(current) => cards
                .iter()
                .position(|c| c.id == current)
                .map(|i| (i + 1) % cards.len())
                .unwrap_or(0),
            None => 0,
        };
        self.selected = Some(cards[next].id);
    }

    /// Keep selection valid after a removal.
    pub fn fix_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.cards.contains(id) {
                self.selected = self.cards.list().first().map(|c| c.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_core::{CardFields, Platform};

    #[test]
    fn test_breakpoint_follows_viewport_in_authoring() {
        let mut state = EditorState::default();
        state.viewport_width = 1280;
        assert_eq!(state.current_breakpoint(), Breakpoint::Lg);

        state.viewport_width = 400;
        assert_eq!(state.current_breakpoint(), Breakpoint::Xs);
    }

    #[test]
    fn test_preview_forces_narrow_breakpoint() {
        let mut state = EditorState::default();
        state.viewport_width = 1920;
        state.view_mode = ViewMode::Preview;
        assert_eq!(state.current_breakpoint(), Breakpoint::Xs);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = EditorState::default();
        let a = state.cards.add(Platform::Qr, CardFields::default());
        let b = state.cards.add(Platform::Map, CardFields::default());

        state.select_next_card();
        assert_eq!(state.selected, Some(a));
        state.select_next_card();
        assert_eq!(state.selected, Some(b));
        state.select_next_card();
        assert_eq!(state.selected, Some(a));
    }

    #[test]
    fn test_fix_selection_after_removal() {
        let mut state = EditorState::default();
        let a = state.cards.add(Platform::Qr, CardFields::default());
        let b = state.cards.add(Platform::Map, CardFields::default());
        state.selected = Some(b);

        state.cards.remove(b);
        state.fix_selection();
        assert_eq!(state.selected, Some(a));
    }

    #[test]
    fn test_profile_snapshots_the_session() {
        let mut session = crate::availability::MockAccountSession::new();
        session
            .expect_display_name()
            .return_const("Ada Lovelace".to_string());
        session
            .expect_assigned_username()
            .return_const(Some("ada".to_string()));

        let profile = Profile::from_session(&session);
        assert_eq!(profile.display_name, "Ada Lovelace");
        assert_eq!(profile.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_token_staleness() {
        let mut username = UsernameState::default();
        let t1 = username.next_token();
        let t2 = username.next_token();
        assert!(!username.is_current(t1));
        assert!(username.is_current(t2));
    }
}
