//! Screen definitions for the preview.

pub mod catalog;

use crate::app::App;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, theme: &Theme) {
    use crate::layout::centered_fixed;
    use ratatui::style::{Modifier, Style};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let help_text = r"
  Catalog
    j/k or Up/Down    Select component
    Enter / Space     Activate preview
    Esc               Stop editing
    c                 Toggle CRT overlay
    r                 Reset preview
    q                 Quit
    ?                 Toggle this help

  [Press any key to close]
";

    let width = 50.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().fg(theme.subtext).bg(theme.base));

    Paragraph::new(help_text)
        .block(block)
        .render(overlay_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_help_overlay_lists_keys() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_help_overlay(area, &mut buf, &Theme::default());
        let text = buffer_to_string(&buf);
        assert!(text.contains(" Help "));
        assert!(text.contains("Toggle CRT overlay"));
        assert!(text.contains("[Press any key to close]"));
    }
}
