//! Centered modal list picker
//!
//! Shared by the widget picker (platform list) and the sticker palette.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::theme::palette;

pub struct Picker<'a> {
    title: &'a str,
    items: Vec<String>,
    selected: usize,
}

impl<'a> Picker<'a> {
    pub fn new(title: &'a str, items: Vec<String>, selected: usize) -> Self {
        Self {
            title,
            items,
            selected,
        }
    }

    fn modal_area(&self, area: Rect) -> Rect {
        let width = (area.width * 2 / 3).clamp(24, 48).min(area.width);
        // Items plus borders, capped to leave breathing room
        let height = ((self.items.len() as u16) + 2).min(area.height.saturating_sub(2)).max(3);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

impl Widget for Picker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = self.modal_area(area);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(palette::BORDER_ACTIVE))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let visible = inner.height as usize;
        // Keep the cursor on screen by scrolling the window
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        for (row, (i, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let style = if i == self.selected {
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette::TEXT_SECONDARY)
            };
            let marker = if i == self.selected { "▸ " } else { "  " };
            let line = Line::from(vec![Span::raw(marker), Span::styled(item.as_str(), style)]);
            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}
