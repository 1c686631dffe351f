//! Bordered pane with an optional title.
//!
//! Focused panes use the focused border set and the bright phosphor color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::theme::{BorderSet, Theme};

pub struct Pane<'a> {
    title: Option<&'a str>,
    focused: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            focused: false,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let (border_set, border_color, title_style) = if self.focused {
            (
                self.borders.focused(),
                self.theme.border_focused,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                self.borders.normal(),
                self.theme.border,
                Style::default().fg(self.theme.subtext),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.base));

        match self.title {
            Some(title) => block.title(format!(" {title} ")).title_style(title_style),
            None => block,
        }
    }

    /// Area left for content once the border is drawn.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use matrix_engine::GlyphMode;

    #[test]
    fn test_pane_builder() {
        let theme = Theme::default();
        let borders = BorderSet::new(GlyphMode::Unicode);

        let pane = Pane::new(&theme, &borders).title("Preview").focused(true);

        assert_eq!(pane.title, Some("Preview"));
        assert!(pane.focused);
    }

    #[test]
    fn test_pane_inner_excludes_border() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let inner = Pane::new(&theme, &borders).inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn test_pane_renders_title() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        Pane::new(&theme, &borders).title("LIST").render(area, &mut buf);
        let text = buffer_to_string(&buf);
        assert_eq!(text.lines().next(), Some("┌ LIST ────┐"));
    }
}
