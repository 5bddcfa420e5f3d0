//! Username claim prompt with live availability feedback

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use pagegrid_app::state::UsernameState;
use pagegrid_app::AvailabilityDisplay;

use crate::theme::palette;

pub struct UsernamePrompt<'a> {
    username: &'a UsernameState,
}

impl<'a> UsernamePrompt<'a> {
    pub fn new(username: &'a UsernameState) -> Self {
        Self { username }
    }

    fn feedback_style(&self) -> Style {
        let color = match self.username.display {
            AvailabilityDisplay::Available => palette::STATUS_GREEN,
            AvailabilityDisplay::Taken | AvailabilityDisplay::Invalid => palette::STATUS_RED,
            AvailabilityDisplay::Checking | AvailabilityDisplay::Unavailable => {
                palette::STATUS_YELLOW
            }
            AvailabilityDisplay::Unknown => palette::TEXT_MUTED,
        };
        Style::default().fg(color)
    }
}

impl Widget for UsernamePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 44.min(area.width);
        let height = 5.min(area.height);
        let modal = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" claim your username ")
            .border_style(Style::default().fg(palette::BORDER_ACTIVE))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 {
            return;
        }

        let input = Line::from(vec![
            Span::styled("@", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled(
                self.username.input.as_str(),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(palette::ACCENT)),
        ]);
        buf.set_line(inner.x + 1, inner.y, &input, inner.width.saturating_sub(2));

        if inner.height >= 3 {
            let feedback = Line::from(Span::styled(
                self.username.display.label(),
                self.feedback_style(),
            ));
            buf.set_line(
                inner.x + 1,
                inner.y + 2,
                &feedback,
                inner.width.saturating_sub(2),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_prompt_shows_input_and_feedback() {
        let username = UsernameState {
            input: "maria".to_string(),
            token: 3,
            display: AvailabilityDisplay::Available,
        };

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        UsernamePrompt::new(&username).render(area, &mut buf);

        let rendered: String = (0..area.height)
            .flat_map(|y| {
                (0..area.width).map(move |x| (x, y))
            })
            .map(|(x, y)| buf.cell(Position::new(x, y)).unwrap().symbol().to_string())
            .collect();
        assert!(rendered.contains("maria"));
        assert!(rendered.contains("available"));
    }
}
