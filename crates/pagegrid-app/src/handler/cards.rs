//! Card add/remove/edit handlers
//!
//! Card data and geometry move together: the add and remove paths touch the
//! card store and the layout store in the same update call so no orphan
//! card or dangling entry is ever observable.

use pagegrid_core::prelude::*;
use pagegrid_core::{descriptor, CardFields, CardId, CardPatch, Platform, Size};

use crate::state::EditorState;

use super::UpdateResult;

pub fn handle_add_card(
    state: &mut EditorState,
    platform: Platform,
    size: Option<Size>,
    fields: CardFields,
) -> UpdateResult {
    let size = size.unwrap_or_else(|| descriptor(platform).default_size);
    let id = state.cards.add(platform, fields);
    state.layout.add_entry(id, size);
    state.selected = Some(id);
    state.dirty = true;
    debug!("added {platform} card {id} at {}x{}", size.w, size.h);
    UpdateResult::none()
}

pub fn handle_remove_card(state: &mut EditorState, id: CardId) -> UpdateResult {
    state.cards.remove(id);
    state.layout.remove_entry(id);
    state.fix_selection();
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_update_card(state: &mut EditorState, id: CardId, patch: CardPatch) -> UpdateResult {
    state.cards.update(id, patch);
    state.dirty = true;
    UpdateResult::none()
}
