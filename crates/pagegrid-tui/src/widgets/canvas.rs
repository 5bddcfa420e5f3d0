//! Block grid canvas
//!
//! Paints every block view as a bordered box at its grid cell, scaled to
//! the terminal area, with stickers drawn on top. The canvas is a pure
//! projection of the dispatcher output; it never touches the stores.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use pagegrid_app::{BlockKind, BlockView};
use pagegrid_core::{CardId, Sticker};

use crate::event::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::theme::palette;

/// Terminal rows per grid row unit.
const ROWS_PER_CELL: u16 = 4;

pub struct GridCanvas<'a> {
    views: &'a [BlockView],
    stickers: &'a [Sticker],
    columns: u32,
    selected: Option<CardId>,
    background: usize,
}

impl<'a> GridCanvas<'a> {
    pub fn new(views: &'a [BlockView], columns: u32) -> Self {
        Self {
            views,
            stickers: &[],
            columns,
            selected: None,
            background: 0,
        }
    }

    pub fn stickers(mut self, stickers: &'a [Sticker]) -> Self {
        self.stickers = stickers;
        self
    }

    pub fn selected(mut self, selected: Option<CardId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn background(mut self, fill: usize) -> Self {
        self.background = fill;
        self
    }
}

impl Widget for GridCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = Block::default().style(Style::default().bg(palette::background_fill(self.background)));
        bg.render(area, buf);

        if area.width < 4 || area.height < 2 {
            return;
        }

        if self.views.is_empty() {
            let hint = Line::from(Span::styled(
                "press 'a' to add your first block",
                Style::default().fg(palette::TEXT_MUTED),
            ));
            buf.set_line(area.x + 2, area.y + 1, &hint, area.width.saturating_sub(4));
        }

        let cell_width = (area.width / self.columns.max(1) as u16).max(4);

        for view in self.views {
            let rect = Rect {
                x: area.x + view.geometry.x as u16 * cell_width,
                y: area.y + view.geometry.y as u16 * ROWS_PER_CELL,
                width: view.geometry.w as u16 * cell_width,
                height: view.geometry.h as u16 * ROWS_PER_CELL,
            };
            let Some(rect) = clip(rect, area) else {
                continue;
            };

            let is_selected = self.selected == Some(view.card_id);
            render_block(view, rect, buf, is_selected);
        }

        // Stickers float above the grid at free pixel positions
        for sticker in self.stickers {
            let x = area.x + (sticker.x / CELL_WIDTH_PX as f32) as u16;
            let y = area.y + (sticker.y / CELL_HEIGHT_PX as f32) as u16;
            if x < area.right() && y < area.bottom() {
                let line = Line::from(sticker.emoji.as_str());
                buf.set_line(x, y, &line, 2);
            }
        }
    }
}

fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    if clipped.width < 2 || clipped.height < 2 {
        None
    } else {
        Some(clipped)
    }
}

fn render_block(view: &BlockView, rect: Rect, buf: &mut Buffer, selected: bool) {
    let (border_color, icon, label) = block_face(&view.kind);
    let border_style = if selected {
        Style::default()
            .fg(palette::BORDER_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(border_color)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(rect);
    block.render(rect, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let face = Line::from(vec![
        Span::raw(icon),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(palette::TEXT_PRIMARY)),
    ]);
    buf.set_line(inner.x, inner.y, &face, inner.width);
}

/// Border color, icon, and one-line label for a block payload.
fn block_face(kind: &BlockKind) -> (ratatui::style::Color, String, String) {
    match kind {
        BlockKind::Social { info, handle, .. } => (
            palette::hex_color(info.color),
            info.icon.to_string(),
            if handle.is_empty() {
                info.button_label.to_string()
            } else {
                handle.clone()
            },
        ),
        BlockKind::Link { title, url } => (
            palette::BORDER_DIM,
            "🔗".to_string(),
            if title.is_empty() { url.clone() } else { title.clone() },
        ),
        BlockKind::Note { title, text, .. } => (
            palette::BORDER_DIM,
            "📝".to_string(),
            title.clone().unwrap_or_else(|| first_line(text)),
        ),
        BlockKind::Terminal { command } => {
            (palette::STATUS_GREEN, "$".to_string(), command.clone())
        }
        BlockKind::QrCode { payload } => (palette::BORDER_DIM, "▦".to_string(), payload.clone()),
        BlockKind::Map { lat, lng, .. } => (
            palette::STATUS_GREEN,
            "📍".to_string(),
            format!("{lat:.3}, {lng:.3}"),
        ),
        BlockKind::Tv { video_id } => (palette::STATUS_RED, "📺".to_string(), video_id.clone()),
        BlockKind::Image { caption, .. } => (
            palette::BORDER_DIM,
            "🖼".to_string(),
            caption.clone().unwrap_or_else(|| "image".to_string()),
        ),
        BlockKind::VideoFile { url } => (palette::BORDER_DIM, "🎞".to_string(), url.clone()),
        BlockKind::Product { title, price, .. } => (
            palette::STATUS_YELLOW,
            "🛒".to_string(),
            match price {
                Some(price) => format!("{title} {price}"),
                None => title.clone(),
            },
        ),
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_core::{Breakpoint, CardFields, CardStore, GridLayout, Platform, Size};
    use ratatui::layout::Position;

    fn render_to_buffer(canvas: GridCanvas, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        canvas.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_empty_canvas_shows_hint() {
        let buf = render_to_buffer(GridCanvas::new(&[], 4), 60, 20);
        let hint_cell = buf.cell(Position::new(2, 1)).unwrap();
        assert_eq!(hint_cell.symbol(), "p"); // "press 'a' to add..."
    }

    #[test]
    fn test_every_platform_renders_without_panic() {
        let mut cards = CardStore::new();
        let mut layout = GridLayout::new();
        for platform in Platform::ALL {
            let id = cards.add(platform, CardFields::default());
            layout.add_entry(id, Size::new(1, 1));
        }
        let views = pagegrid_app::all_block_views(&cards, &layout, Breakpoint::Lg);

        let _ = render_to_buffer(GridCanvas::new(&views, 4), 80, 200);
    }

    #[test]
    fn test_block_draws_border_at_its_cell() {
        let mut cards = CardStore::new();
        let mut layout = GridLayout::new();
        let id = cards.add(Platform::Github, CardFields::default());
        layout.add_entry(id, Size::new(2, 1));
        let views = pagegrid_app::all_block_views(&cards, &layout, Breakpoint::Lg);

        let buf = render_to_buffer(GridCanvas::new(&views, 4), 80, 20);
        // Top-left corner of the first block's border
        assert_ne!(buf.cell(Position::new(0, 0)).unwrap().symbol(), " ");
    }
}
