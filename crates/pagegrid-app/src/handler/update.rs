//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, EditorState, UiMode, STICKER_PALETTE};
use pagegrid_core::Platform;

use super::{cards, keys, layout, persistence, stickers, style, username, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut EditorState, message: Message) -> UpdateResult {
    let was_dirty = state.dirty;
    let mut result = dispatch(state, message);

    // Autosave fires on the clean -> dirty transition so a save follow-up
    // cannot re-trigger itself. The export snapshot is taken when the
    // follow-up is handled, so it includes the mutation that fired it.
    if state.settings.autosave && !was_dirty && state.dirty && result.message.is_none() {
        if let Some(path) = state
            .document_path
            .clone()
            .or_else(|| state.settings.default_document.clone())
        {
            debug!("autosaving to {}", path.display());
            result.message = Some(Message::SaveRequested { path });
        }
    }
    result
}

fn dispatch(state: &mut EditorState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => {
            if state.dirty {
                state.ui_mode = UiMode::ConfirmQuit;
            } else {
                state.phase = AppPhase::Quitting;
            }
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.ui_mode = UiMode::Canvas;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cards
        // ─────────────────────────────────────────────────────────
        Message::AddCard {
            platform,
            size,
            fields,
        } => cards::handle_add_card(state, platform, size, fields),
        Message::RemoveCard(id) => cards::handle_remove_card(state, id),
        Message::UpdateCard { id, patch } => cards::handle_update_card(state, id, patch),
        Message::SelectCard(id) => {
            state.selected = id.filter(|id| state.cards.contains(*id));
            UpdateResult::none()
        }
        Message::SelectNextCard => {
            state.select_next_card();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Layout
        // ─────────────────────────────────────────────────────────
        Message::BeginDrag { resizing } => layout::handle_begin_drag(state, resizing),
        Message::EndDrag => layout::handle_end_drag(state),
        Message::NudgeCard { dx, dy } => layout::handle_nudge(state, dx, dy),
        Message::ResizeCard { id, size } => layout::handle_resize(state, id, size),
        Message::CycleCardSize => layout::handle_cycle_size(state),
        Message::LayoutChanged {
            breakpoint,
            entries,
        } => layout::handle_layout_changed(state, breakpoint, entries),
        Message::TogglePreview => layout::handle_toggle_preview(state),
        Message::ViewportResized { width, height } => {
            state.viewport_width = width;
            state.viewport_height = height;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Stickers
        // ─────────────────────────────────────────────────────────
        Message::AddSticker { emoji } => stickers::handle_add_sticker(state, emoji),
        Message::MoveSticker { id, x, y } => stickers::handle_move_sticker(state, id, x, y),
        Message::ScaleSticker { id, scale } => stickers::handle_scale_sticker(state, id, scale),
        Message::RotateSticker { id, degrees } => {
            stickers::handle_rotate_sticker(state, id, degrees)
        }
        Message::RemoveSticker(id) => stickers::handle_remove_sticker(state, id),

        // ─────────────────────────────────────────────────────────
        // Style
        // ─────────────────────────────────────────────────────────
        Message::SetTitleText(text) => style::handle(state, |s| s.set_title_text(text)),
        Message::SetSubtitleText(text) => style::handle(state, |s| s.set_subtitle_text(text)),
        Message::SetTitleFont(i) => style::handle(state, |s| s.set_title_font(i)),
        Message::SetSubtitleFont(i) => style::handle(state, |s| s.set_subtitle_font(i)),
        Message::SetTitleColor(i) => style::handle(state, |s| s.set_title_color(i)),
        Message::SetSubtitleColor(i) => style::handle(state, |s| s.set_subtitle_color(i)),
        Message::SetBackgroundColor(i) => style::handle(state, |s| s.set_background_color(i)),
        Message::SetBackgroundPattern(i) => style::handle(state, |s| s.set_background_pattern(i)),

        // ─────────────────────────────────────────────────────────
        // Username availability
        // ─────────────────────────────────────────────────────────
        Message::UsernameInput { text } => username::handle_input(state, text),
        Message::UsernameChecked {
            token,
            username,
            exists,
        } => username::handle_checked(state, token, username, exists),

        // ─────────────────────────────────────────────────────────
        // Persistence
        // ─────────────────────────────────────────────────────────
        Message::SaveRequested { path } => persistence::handle_save_requested(state, path),
        Message::SaveCompleted { result } => persistence::handle_save_completed(state, result),
        Message::LoadRequested { path } => persistence::handle_load_requested(state, path),
        Message::LoadCompleted { path, result } => {
            persistence::handle_load_completed(state, path, result)
        }

        // ─────────────────────────────────────────────────────────
        // UI modes and pickers
        // ─────────────────────────────────────────────────────────
        Message::OpenWidgetPicker => {
            state.ui_mode = UiMode::WidgetPicker;
            state.picker_index = 0;
            UpdateResult::none()
        }
        Message::OpenStickerPicker => {
            state.ui_mode = UiMode::StickerPicker;
            state.picker_index = 0;
            UpdateResult::none()
        }
        Message::OpenUsernamePrompt => {
            state.ui_mode = UiMode::Username;
            UpdateResult::none()
        }
        Message::ClosePrompt => {
            if state.ui_mode == UiMode::Username {
                // Orphan any in-flight availability check so it cannot
                // repaint the display after the prompt is gone.
                state.username.next_token();
            }
            state.ui_mode = UiMode::Canvas;
            UpdateResult::none()
        }
        Message::PickerNext => {
            let len = picker_len(state);
            if len > 0 {
                state.picker_index = (state.picker_index + 1) % len;
            }
            UpdateResult::none()
        }
        Message::PickerPrev => {
            let len = picker_len(state);
            if len > 0 {
                state.picker_index = (state.picker_index + len - 1) % len;
            }
            UpdateResult::none()
        }
        Message::PickerConfirm => handle_picker_confirm(state),
    }
}

fn picker_len(state: &EditorState) -> usize {
    match state.ui_mode {
        UiMode::WidgetPicker => Platform::ALL.len(),
        UiMode::StickerPicker => STICKER_PALETTE.len(),
        _ => 0,
    }
}

fn handle_picker_confirm(state: &mut EditorState) -> UpdateResult {
    match state.ui_mode {
        UiMode::WidgetPicker => {
            let platform = Platform::ALL[state.picker_index.min(Platform::ALL.len() - 1)];
            state.ui_mode = UiMode::Canvas;
            UpdateResult::message(Message::AddCard {
                platform,
                size: None,
                fields: Default::default(),
            })
        }
        UiMode::StickerPicker => {
            let emoji =
                STICKER_PALETTE[state.picker_index.min(STICKER_PALETTE.len() - 1)].to_string();
            state.ui_mode = UiMode::Canvas;
            UpdateResult::message(Message::AddSticker { emoji })
        }
        _ => UpdateResult::none(),
    }
}
