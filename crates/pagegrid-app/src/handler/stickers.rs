//! Sticker palette and manipulation handlers

use pagegrid_core::{GridBand, StickerId};

use crate::state::EditorState;

use super::UpdateResult;

/// Fraction of the viewport width the grid band occupies, centered.
const GRID_BAND_FRACTION: f32 = 0.6;

/// The horizontal band new stickers must avoid.
pub fn grid_band(state: &EditorState) -> GridBand {
    let width = state.viewport_width as f32;
    let band_width = width * GRID_BAND_FRACTION;
    let left = (width - band_width) / 2.0;
    GridBand {
        left,
        right: left + band_width,
        margin: state.settings.sticker_margin,
    }
}

pub fn handle_add_sticker(state: &mut EditorState, emoji: String) -> UpdateResult {
    let band = grid_band(state);
    let mut rng = rand::thread_rng();
    state.stickers.add_at_edge(
        &mut rng,
        emoji,
        state.viewport_width as f32,
        state.viewport_height as f32,
        band,
    );
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_move_sticker(state: &mut EditorState, id: StickerId, x: f32, y: f32) -> UpdateResult {
    state.stickers.move_to(id, x, y);
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_scale_sticker(state: &mut EditorState, id: StickerId, scale: f32) -> UpdateResult {
    state.stickers.set_scale(id, scale);
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_rotate_sticker(
    state: &mut EditorState,
    id: StickerId,
    degrees: f32,
) -> UpdateResult {
    state.stickers.set_rotation(id, degrees);
    state.dirty = true;
    UpdateResult::none()
}

pub fn handle_remove_sticker(state: &mut EditorState, id: StickerId) -> UpdateResult {
    state.stickers.remove(id);
    state.dirty = true;
    UpdateResult::none()
}
