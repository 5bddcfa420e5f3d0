//! Page styling handlers

use pagegrid_core::PageStyle;

use crate::state::EditorState;

use super::UpdateResult;

/// Apply one styling mutation and mark the page dirty.
pub fn handle(state: &mut EditorState, f: impl FnOnce(&mut PageStyle)) -> UpdateResult {
    f(&mut state.style);
    state.dirty = true;
    UpdateResult::none()
}
