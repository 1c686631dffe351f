//! Keyboard hint bar: `[↑↓] navigate  [Enter] select`.
//!
//! Keys are drawn in the bar color, labels one step dimmer.

use matrix_engine::components::KeyboardHints;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

pub struct HintsView<'a> {
    props: &'a KeyboardHints,
    theme: &'a Theme,
}

impl<'a> HintsView<'a> {
    pub fn new(props: &'a KeyboardHints, theme: &'a Theme) -> Self {
        Self { props, theme }
    }

    fn line(&self) -> Line<'static> {
        let key_style = self.theme.fg(self.props.color).add_modifier(Modifier::BOLD);
        let label_style = self.theme.fg(self.props.label_color());

        let mut spans = Vec::with_capacity(self.props.hints.len() * 4);
        for (i, hint) in self.props.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.props.separator.clone()));
            }
            spans.push(Span::styled(self.props.key_text(hint), key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(hint.label.clone(), label_style));
        }
        Line::from(spans)
    }
}

impl Widget for HintsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use matrix_engine::components::KeyHint;
    use matrix_engine::PaletteToken;
    use ratatui::style::Color;

    #[test]
    fn test_hints_text_matches_props() {
        let props = KeyboardHints::new(vec![KeyHint::new("Tab", "focus"), KeyHint::new("?", "help")]);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        HintsView::new(&props, &theme).render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "[Tab] focus  [?] help");
    }

    #[test]
    fn test_label_is_dimmer_than_key() {
        let props = KeyboardHints::new(vec![KeyHint::new("Q", "quit")]);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        HintsView::new(&props, &theme).render(area, &mut buf);

        let key = buf.cell((1, 0)).unwrap();
        let label = buf.cell((4, 0)).unwrap();
        assert_eq!(key.fg, theme.color(PaletteToken::Green300));
        assert_eq!(label.fg, Color::Rgb(0, 143, 17));
    }
}
