//! Key event handlers for UI modes
//!
//! Pure mapping from a key press to a semantic message; no state mutation
//! happens here.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{EditorState, UiMode};

/// Map a key press to a message for the current UI mode.
pub fn handle_key(state: &EditorState, key: InputKey) -> Option<Message> {
    // Ctrl+C force-quits from any mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Canvas => handle_canvas_key(state, key),
        UiMode::WidgetPicker | UiMode::StickerPicker => handle_picker_key(key),
        UiMode::Username => handle_username_key(state, key),
        UiMode::ConfirmQuit => handle_confirm_quit_key(key),
    }
}

fn handle_canvas_key(state: &EditorState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char('a') => Some(Message::OpenWidgetPicker),
        InputKey::Char('s') => Some(Message::OpenStickerPicker),
        InputKey::Char('u') => Some(Message::OpenUsernamePrompt),
        InputKey::Tab => Some(Message::SelectNextCard),
        InputKey::Char('x') | InputKey::Delete => state.selected.map(Message::RemoveCard),
        InputKey::Char('r') => Some(Message::CycleCardSize),
        InputKey::Char('p') => Some(Message::TogglePreview),
        InputKey::Char('w') => Some(Message::SaveRequested {
            path: document_path(state),
        }),
        InputKey::Char('o') => Some(Message::LoadRequested {
            path: document_path(state),
        }),
        InputKey::Up => Some(Message::NudgeCard { dx: 0, dy: -1 }),
        InputKey::Down => Some(Message::NudgeCard { dx: 0, dy: 1 }),
        InputKey::Left => Some(Message::NudgeCard { dx: -1, dy: 0 }),
        InputKey::Right => Some(Message::NudgeCard { dx: 1, dy: 0 }),
        _ => None,
    }
}

fn handle_picker_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Left | InputKey::BackTab => Some(Message::PickerPrev),
        InputKey::Down | InputKey::Right | InputKey::Tab => Some(Message::PickerNext),
        InputKey::Enter => Some(Message::PickerConfirm),
        InputKey::Esc => Some(Message::ClosePrompt),
        _ => None,
    }
}

fn handle_username_key(state: &EditorState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::ClosePrompt),
        InputKey::Char(c) => {
            let mut text = state.username.input.clone();
            text.push(c);
            Some(Message::UsernameInput { text })
        }
        InputKey::Backspace => {
            let mut text = state.username.input.clone();
            text.pop()?;
            Some(Message::UsernameInput { text })
        }
        _ => None,
    }
}

fn handle_confirm_quit_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn document_path(state: &EditorState) -> std::path::PathBuf {
    state
        .settings
        .default_document
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from("page.json"))
}
