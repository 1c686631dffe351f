//! Themed text with an optional blinking cursor.

use matrix_engine::components::TerminalText;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::blink_off;
use crate::theme::{IconSet, Theme};

pub struct TextView<'a> {
    props: &'a TerminalText,
    theme: &'a Theme,
    icons: &'a IconSet,
    tick: u64,
}

impl<'a> TextView<'a> {
    pub fn new(props: &'a TerminalText, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            props,
            theme,
            icons,
            tick: 0,
        }
    }

    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for TextView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.glow(self.props.color, self.props.glow);
        let mut spans = vec![Span::styled(self.props.text.clone(), style)];
        if self.props.cursor && !blink_off(self.tick) {
            spans.push(Span::styled(self.icons.cursor(), style));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
