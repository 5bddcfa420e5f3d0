//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::palette;

pub struct ConfirmDialog;

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 40.min(area.width);
        let height = 5.min(area.height);
        let modal = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        Clear.render(modal, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Unsaved changes",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(palette::STATUS_RED)),
                Span::styled(" quit anyway   ", Style::default().fg(palette::TEXT_SECONDARY)),
                Span::styled("n", Style::default().fg(palette::STATUS_GREEN)),
                Span::styled(" keep editing", Style::default().fg(palette::TEXT_SECONDARY)),
            ]),
        ];

        let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette::BORDER_ACTIVE))
                .style(Style::default().bg(palette::POPUP_BG)),
        );
        dialog.render(modal, buf);
    }
}
