//! Document save/load handlers
//!
//! The snapshot is taken synchronously on the update thread (the stores
//! cannot change mid-gather); only the file IO runs in the background.
//! Loaded text is parsed and applied here so the all-or-nothing apply in
//! the core stays atomic.

use std::path::PathBuf;

use pagegrid_core::prelude::*;
use pagegrid_core::PageDocument;

use crate::state::EditorState;

use super::{UpdateAction, UpdateResult};

pub fn handle_save_requested(state: &mut EditorState, path: PathBuf) -> UpdateResult {
    let doc = PageDocument::from_state(&state.cards, &state.layout, &state.stickers, &state.style);
    match doc.to_json() {
        Ok(json) => {
            state.document_path = Some(path.clone());
            UpdateResult::action(UpdateAction::SaveDocument { path, json })
        }
        Err(e) => {
            error!("failed to serialize page document: {e}");
            state.status = Some("could not export this page".to_string());
            UpdateResult::none()
        }
    }
}

pub fn handle_save_completed(
    state: &mut EditorState,
    result: std::result::Result<PathBuf, String>,
) -> UpdateResult {
    match result {
        Ok(path) => {
            state.dirty = false;
            state.status = Some(format!("saved to {}", path.display()));
        }
        Err(e) => {
            error!("document save failed: {e}");
            state.status = Some("could not save this file".to_string());
        }
    }
    UpdateResult::none()
}

pub fn handle_load_requested(_state: &mut EditorState, path: PathBuf) -> UpdateResult {
    UpdateResult::action(UpdateAction::LoadDocument { path })
}

pub fn handle_load_completed(
    state: &mut EditorState,
    path: PathBuf,
    result: std::result::Result<String, String>,
) -> UpdateResult {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            error!("failed to read {}: {e}", path.display());
            state.status = Some("could not load this file".to_string());
            return UpdateResult::none();
        }
    };

    let applied = PageDocument::from_json(&text).and_then(|doc| {
        doc.apply(
            &mut state.cards,
            &mut state.layout,
            &mut state.stickers,
            &mut state.style,
        )
    });

    match applied {
        Ok(()) => {
            state.selected = state.cards.list().first().map(|c| c.id);
            state.document_path = Some(path.clone());
            state.dirty = false;
            state.status = Some(format!("loaded {}", path.display()));
        }
        Err(e) => {
            // Validation failed before any store was touched; prior state
            // stays intact.
            error!("rejected document {}: {e}", path.display());
            state.status = Some("could not load this file".to_string());
        }
    }
    UpdateResult::none()
}
