//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use pagegrid_app::state::STICKER_PALETTE;
use pagegrid_app::{all_block_views, EditorState, UiMode, ViewMode};
use pagegrid_core::Platform;

use crate::event::CELL_WIDTH_PX;
use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure projection of the editor state; never mutates it.
pub fn view(frame: &mut Frame, state: &EditorState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg, area);

    let areas = layout::create(area);

    let header = widgets::PageHeader::new(&state.style, &state.profile);
    frame.render_widget(header, areas.header);

    let breakpoint = state.current_breakpoint();
    let views = all_block_views(&state.cards, &state.layout, breakpoint);
    let canvas = widgets::GridCanvas::new(&views, breakpoint.columns())
        .stickers(state.stickers.list())
        .selected(state.selected)
        .background(state.style.background.color);
    frame.render_widget(canvas, canvas_area(state, areas.canvas));

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modal overlays by UI mode
    match state.ui_mode {
        UiMode::Canvas => {}
        UiMode::WidgetPicker => {
            let items = Platform::ALL.iter().map(|p| p.to_string()).collect();
            frame.render_widget(
                widgets::Picker::new("add a block", items, state.picker_index),
                area,
            );
        }
        UiMode::StickerPicker => {
            let items = STICKER_PALETTE.iter().map(|s| s.to_string()).collect();
            frame.render_widget(
                widgets::Picker::new("stickers", items, state.picker_index),
                area,
            );
        }
        UiMode::Username => {
            frame.render_widget(widgets::UsernamePrompt::new(&state.username), area);
        }
        UiMode::ConfirmQuit => {
            frame.render_widget(widgets::ConfirmDialog, area);
        }
    }
}

/// Preview narrows the canvas to a centered phone-width strip; authoring
/// uses the full area.
fn canvas_area(state: &EditorState, full: Rect) -> Rect {
    if state.view_mode != ViewMode::Preview {
        return full;
    }
    let width = (pagegrid_app::state::PREVIEW_WIDTH_PX / CELL_WIDTH_PX) as u16;
    let width = width.min(full.width);
    Rect {
        x: full.x + (full.width - width) / 2,
        width,
        ..full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_app::{update, Message};
    use pagegrid_core::{CardFields, Platform};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &EditorState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        terminal
    }

    #[test]
    fn test_view_renders_default_state() {
        let state = EditorState::default();
        draw(&state);
    }

    #[test]
    fn test_view_renders_every_ui_mode() {
        let mut state = EditorState::default();
        update(
            &mut state,
            Message::AddCard {
                platform: Platform::Github,
                size: None,
                fields: CardFields::default(),
            },
        );

        for mode in [
            UiMode::Canvas,
            UiMode::WidgetPicker,
            UiMode::StickerPicker,
            UiMode::Username,
            UiMode::ConfirmQuit,
        ] {
            state.ui_mode = mode;
            draw(&state);
        }
    }

    #[test]
    fn test_preview_narrows_the_canvas() {
        let mut state = EditorState::default();
        update(&mut state, Message::TogglePreview);

        let full = Rect::new(0, 0, 100, 26);
        let narrowed = canvas_area(&state, full);
        assert!(narrowed.width < full.width);
        assert!(narrowed.x > full.x);
    }
}
