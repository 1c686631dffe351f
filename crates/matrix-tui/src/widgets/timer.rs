//! Timer widget.

use matrix_engine::components::TimerDisplay;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// `UPTIME [ 01:02:05 ]`
pub struct TimerView<'a> {
    props: &'a TimerDisplay,
    theme: &'a Theme,
}

impl<'a> TimerView<'a> {
    pub fn new(props: &'a TimerDisplay, theme: &'a Theme) -> Self {
        Self { props, theme }
    }
}

impl Widget for TimerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(2);
        if let Some(label) = &self.props.label {
            spans.push(Span::styled(
                format!("{} ", label.to_uppercase()),
                Style::default().fg(self.theme.subtext),
            ));
        }
        spans.push(Span::styled(
            self.props.time_text(),
            self.theme.glow(self.props.color, true),
        ));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
