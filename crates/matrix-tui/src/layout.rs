//! Layout helpers for the preview.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the catalog list pane.
pub const LIST_WIDTH: u16 = 28;

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Header line, body, footer line.
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Catalog list on the left, preview on the right.
pub fn body_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LIST_WIDTH), Constraint::Min(10)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(2, 2, 10, 4);
        assert_eq!(centered_fixed(40, 10, area), Rect::new(2, 2, 10, 4));
    }

    #[test]
    fn test_main_layout() {
        let (header, body, footer) = main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(body, Rect::new(0, 1, 80, 22));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_body_layout() {
        let (list, preview) = body_layout(Rect::new(0, 1, 80, 22));
        assert_eq!(list, Rect::new(0, 1, LIST_WIDTH, 22));
        assert_eq!(preview, Rect::new(LIST_WIDTH, 1, 80 - LIST_WIDTH, 22));
    }
}
