//! Grid move/resize/reconcile/view-mode handlers

use pagegrid_core::{Breakpoint, CardId, DragSession, LayoutEntry, Size};

use crate::state::{EditorState, ViewMode};

use super::UpdateResult;

/// The four tile sizes the resize control cycles through.
pub const TILE_SIZES: [Size; 4] = [
    Size::new(1, 1),
    Size::new(2, 1),
    Size::new(1, 2),
    Size::new(2, 2),
];

pub fn handle_begin_drag(state: &mut EditorState, resizing: bool) -> UpdateResult {
    if let Some(card_id) = state.selected {
        state.layout.begin_drag(DragSession {
            breakpoint: state.current_breakpoint(),
            card_id,
            resizing,
        });
    }
    UpdateResult::none()
}

pub fn handle_end_drag(state: &mut EditorState) -> UpdateResult {
    state.layout.end_drag();
    UpdateResult::none()
}

/// Move the selected card by a cell delta on the current breakpoint.
///
/// The proposed position clamps to the grid columns; the vertical sync with
/// the other breakpoint goes through `reconcile`, the single dual-breakpoint
/// mutation path.
pub fn handle_nudge(state: &mut EditorState, dx: i32, dy: i32) -> UpdateResult {
    let Some(id) = state.selected else {
        return UpdateResult::none();
    };
    let breakpoint = state.current_breakpoint();
    let Some(entry) = state.layout.entry(breakpoint, id).copied() else {
        return UpdateResult::none();
    };

    let max_x = breakpoint.columns().saturating_sub(entry.w);
    let x = (entry.x as i64 + dx as i64).clamp(0, max_x as i64) as u32;
    let y = (entry.y as i64 + dy as i64).max(0) as u32;

    state.layout.move_entry(breakpoint, id, x, y);
    let entries = state.layout.entries(breakpoint).to_vec();
    state.layout.reconcile(breakpoint, entries);
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_resize(state: &mut EditorState, id: CardId, size: Size) -> UpdateResult {
    state.layout.resize_entry(id, size);
    state.dirty = true;
    UpdateResult::none()
}

/// Cycle the selected card through the allowed tiles.
pub fn handle_cycle_size(state: &mut EditorState) -> UpdateResult {
    let Some(id) = state.selected else {
        return UpdateResult::none();
    };
    let Some(entry) = state.layout.entry(Breakpoint::Lg, id) else {
        return UpdateResult::none();
    };
    let current = entry.size();
    let next = TILE_SIZES
        .iter()
        .position(|s| *s == current)
        .map(|i| TILE_SIZES[(i + 1) % TILE_SIZES.len()])
        .unwrap_or(TILE_SIZES[0]);
    state.layout.resize_entry(id, next);
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_layout_changed(
    state: &mut EditorState,
    breakpoint: Breakpoint,
    entries: Vec<LayoutEntry>,
) -> UpdateResult {
    state.layout.reconcile(breakpoint, entries);
    state.dirty = true;
    UpdateResult::none()
}

/// Toggle between the authoring canvas and the simulated narrow preview.
pub fn handle_toggle_preview(state: &mut EditorState) -> UpdateResult {
    match state.view_mode {
        ViewMode::Authoring => {
            state.layout.project_to_preview();
            state.view_mode = ViewMode::Preview;
        }
        ViewMode::Preview => {
            state.layout.project_to_authoring();
            // Breakpoint detection falls back to the real viewport width
            state.view_mode = ViewMode::Authoring;
        }
    }
    UpdateResult::none()
}
