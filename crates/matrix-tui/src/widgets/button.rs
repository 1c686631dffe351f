//! Bracketed command button.

use matrix_engine::components::{ButtonVariant, TerminalButton};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// `[ EXECUTE ]`, reversed while focused and dimmed while disabled.
pub struct ButtonView<'a> {
    props: &'a TerminalButton,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ButtonView<'a> {
    pub fn new(props: &'a TerminalButton, theme: &'a Theme) -> Self {
        Self {
            props,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ButtonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = self.theme.fg(self.props.variant.color());
        if self.props.variant != ButtonVariant::Ghost {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.props.disabled {
            style = style.add_modifier(Modifier::DIM);
        } else if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Paragraph::new(Line::styled(self.props.label_text(), style)).render(area, buf);
    }
}
