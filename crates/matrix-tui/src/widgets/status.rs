//! Status indicator and system info widgets.

use matrix_engine::components::{SystemInfo, TerminalStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::blink_off;
use crate::theme::{IconSet, Theme};

/// `● [ ONLINE ]`, with the dot pulsing for animated statuses.
pub struct StatusView<'a> {
    props: &'a TerminalStatus,
    theme: &'a Theme,
    icons: &'a IconSet,
    tick: u64,
}

impl<'a> StatusView<'a> {
    pub fn new(props: &'a TerminalStatus, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            props,
            theme,
            icons,
            tick: 0,
        }
    }

    /// Animation tick; pulsing statuses dim on alternate half-periods.
    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn line(&self) -> Line<'static> {
        let color = self.props.color();
        let mut spans = Vec::with_capacity(3);
        if self.props.show_indicator {
            let mut style = self.theme.fg(color);
            if self.props.animates() && blink_off(self.tick) {
                style = style.add_modifier(Modifier::DIM);
            }
            spans.push(Span::styled(self.icons.indicator(), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            self.props.label_text(),
            self.theme.glow(color, true),
        ));
        Line::from(spans)
    }
}

impl Widget for StatusView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

/// `[ UPTIME: 7200 | CPU: 15.3% | MEM: 256KB ]`
pub struct SystemInfoView<'a> {
    props: &'a SystemInfo,
    theme: &'a Theme,
}

impl<'a> SystemInfoView<'a> {
    pub fn new(props: &'a SystemInfo, theme: &'a Theme) -> Self {
        Self { props, theme }
    }
}

impl Widget for SystemInfoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.theme.fg(self.props.color);
        let muted = self.theme.muted();

        let mut spans = Vec::new();
        if self.props.show_brackets {
            spans.push(Span::styled("[ ", muted));
        }
        for (i, item) in self.props.items().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.props.separator.clone(), muted));
            }
            spans.push(Span::styled(item, text));
        }
        if self.props.show_brackets {
            spans.push(Span::styled(" ]", muted));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
