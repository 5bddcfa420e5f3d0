//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Page header (title + subtitle + claimed username)
    pub header: Rect,

    /// Block grid canvas
    pub canvas: Rect,

    /// One-line status bar (mode, selection, save feedback)
    pub status: Rect,
}

/// Split the terminal into header, canvas, and status bar.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Header (border + title row + subtitle row + border)
        Constraint::Min(3),    // Canvas
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        canvas: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(areas.header.height, 4);
        assert_eq!(areas.canvas.y, 4);
        assert_eq!(areas.canvas.height, 19); // 24 - 4 - 1
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.status.height, 1);
    }

    #[test]
    fn test_tiny_terminal_still_splits() {
        let area = Rect::new(0, 0, 20, 8);
        let areas = create(area);
        assert!(areas.canvas.height >= 3);
    }
}
