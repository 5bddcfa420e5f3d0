//! Page header widget
//!
//! Shows the page title and subtitle the way the exported page would, plus
//! the claimed username on the right edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use pagegrid_app::state::Profile;
use pagegrid_core::PageStyle;

use crate::theme::palette;

pub struct PageHeader<'a> {
    style: &'a PageStyle,
    profile: &'a Profile,
}

impl<'a> PageHeader<'a> {
    pub fn new(style: &'a PageStyle, profile: &'a Profile) -> Self {
        Self { style, profile }
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            self.style.title.text.as_str(),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(2));

        if inner.height >= 2 {
            let subtitle = Line::from(Span::styled(
                self.style.subtitle.text.as_str(),
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
            buf.set_line(
                inner.x + 1,
                inner.y + 1,
                &subtitle,
                inner.width.saturating_sub(2),
            );
        }

        // Claimed username, right-aligned on the title row
        if let Some(username) = self.profile.username.as_deref() {
            let tag = format!("@{username}");
            let tag_width = tag.width() as u16;
            if inner.width > tag_width + 2 {
                let line = Line::from(Span::styled(tag, Style::default().fg(palette::ACCENT)));
                buf.set_line(
                    inner.x + inner.width - tag_width - 1,
                    inner.y,
                    &line,
                    tag_width,
                );
            }
        }
    }
}
