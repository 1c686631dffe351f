//! Boot sequence widget.
//!
//! The widget itself is stateless: the caller passes how many lines have
//! been revealed so far (usually from a [`matrix_engine::BootPlayer`]).

use matrix_engine::components::BootSequence;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::blink_off;
use crate::theme::{IconSet, Theme};

pub struct BootView<'a> {
    props: &'a BootSequence,
    theme: &'a Theme,
    icons: &'a IconSet,
    revealed: Option<usize>,
    tick: u64,
}

impl<'a> BootView<'a> {
    pub fn new(props: &'a BootSequence, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            props,
            theme,
            icons,
            revealed: None,
            tick: 0,
        }
    }

    /// Number of lines revealed so far. Without this the finished sequence
    /// is shown.
    #[must_use]
    pub fn revealed(mut self, revealed: usize) -> Self {
        self.revealed = Some(revealed);
        self
    }

    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let schedule = self.props.schedule();
        let total = schedule.len();
        let shown = self.revealed.map_or(total, |n| n.min(total));
        let style = self.theme.fg(self.props.color);

        let mut lines: Vec<Line> = schedule.lines()[..shown]
            .iter()
            .map(|line| {
                let style = if line.terminal {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                Line::styled(line.text.clone(), style)
            })
            .collect();

        if self.props.show_cursor && shown < total && !blink_off(self.tick) {
            lines.push(Line::from(Span::styled(self.icons.cursor(), style)));
        }
        lines
    }
}

impl Widget for BootView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use matrix_engine::components::BootLine;

    fn render(view: BootView<'_>) -> String {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    fn short_boot() -> BootSequence {
        BootSequence {
            lines: vec![
                BootLine::new("BIOS OK", 0),
                BootLine::new("LOADING", 100),
                BootLine::new("READY", 200).terminal(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_reveal_shows_cursor() {
        let props = short_boot();
        let theme = Theme::default();
        let icons = IconSet::default();
        let text = render(BootView::new(&props, &theme, &icons).revealed(1));
        assert_eq!(text, "BIOS OK\n█\n\n");
    }

    #[test]
    fn test_cursor_blinks() {
        let props = short_boot();
        let theme = Theme::default();
        let icons = IconSet::default();
        let text = render(BootView::new(&props, &theme, &icons).revealed(1).tick(5));
        assert_eq!(text, "BIOS OK\n\n\n");
    }

    #[test]
    fn test_finished_has_no_cursor() {
        let props = short_boot();
        let theme = Theme::default();
        let icons = IconSet::default();
        let text = render(BootView::new(&props, &theme, &icons));
        assert_eq!(text, "BIOS OK\nLOADING\nREADY\n");
    }

    #[test]
    fn test_reveal_count_is_clamped() {
        let props = short_boot();
        let theme = Theme::default();
        let icons = IconSet::default();
        let text = render(BootView::new(&props, &theme, &icons).revealed(99));
        assert_eq!(text, "BIOS OK\nLOADING\nREADY\n");
    }
}
