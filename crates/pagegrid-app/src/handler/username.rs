//! Debounced availability handlers
//!
//! Every keystroke bumps the generation token, which both supersedes any
//! in-flight check and cancels the pending debounced one: a result that
//! arrives carrying an older token is discarded no matter when the network
//! answered. Only the newest request can ever set the displayed state.

use pagegrid_core::prelude::*;

use crate::availability::is_valid_username;
use crate::state::{AvailabilityDisplay, EditorState};

use super::{UpdateAction, UpdateResult};

pub fn handle_input(state: &mut EditorState, text: String) -> UpdateResult {
    state.username.input = text.clone();
    // Invalidate any pending or in-flight check
    let token = state.username.next_token();

    if text.is_empty() {
        state.username.display = AvailabilityDisplay::Unknown;
        return UpdateResult::none();
    }
    if !is_valid_username(&text) {
        state.username.display = AvailabilityDisplay::Invalid;
        return UpdateResult::none();
    }

    state.username.display = AvailabilityDisplay::Checking;
    UpdateResult::action(UpdateAction::CheckUsername {
        token,
        username: text,
        debounce_ms: state.settings.debounce_ms,
    })
}

pub fn handle_checked(
    state: &mut EditorState,
    token: u64,
    username: String,
    exists: Option<bool>,
) -> UpdateResult {
    if !state.username.is_current(token) {
        debug!("stale availability result for '{username}' (token {token}), ignoring");
        return UpdateResult::none();
    }

    state.username.display = match exists {
        Some(true) => AvailabilityDisplay::Taken,
        Some(false) => AvailabilityDisplay::Available,
        // Transport failure: fail-closed, the user retries by typing again
        None => AvailabilityDisplay::Unavailable,
    };
    UpdateResult::none()
}
