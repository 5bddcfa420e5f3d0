//! Bottom status bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use pagegrid_app::{EditorState, UiMode, ViewMode};

use crate::theme::palette;

pub struct StatusBar<'a> {
    state: &'a EditorState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a EditorState) -> Self {
        Self { state }
    }

    fn key_hints(&self) -> &'static str {
        match self.state.ui_mode {
            UiMode::Canvas => "a add  s sticker  u username  ↹ select  ↑↓←→ move  r resize  p preview  w save  q quit",
            UiMode::WidgetPicker | UiMode::StickerPicker => "↑↓ choose  ⏎ confirm  esc cancel",
            UiMode::Username => "type to check  ⏎ done  esc cancel",
            UiMode::ConfirmQuit => "y quit  n stay",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();

        if self.state.view_mode == ViewMode::Preview {
            spans.push(Span::styled(
                " PREVIEW ",
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        if self.state.dirty {
            spans.push(Span::styled("● ", Style::default().fg(palette::STATUS_YELLOW)));
        }

        if let Some(status) = self.state.status.as_deref() {
            spans.push(Span::styled(
                status,
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled(
            self.key_hints(),
            Style::default().fg(palette::TEXT_MUTED),
        ));

        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width.saturating_sub(1));
    }
}
