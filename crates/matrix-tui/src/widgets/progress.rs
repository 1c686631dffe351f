//! Progress bar widget.

use matrix_engine::components::ProgressBar;
use matrix_engine::GlyphMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{IconSet, Theme};

pub struct ProgressView<'a> {
    props: &'a ProgressBar,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> ProgressView<'a> {
    pub fn new(props: &'a ProgressBar, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            props,
            theme,
            icons,
        }
    }

    /// Props with non-ASCII bar glyphs swapped out in ASCII mode.
    fn bar(&self) -> ProgressBar {
        let ascii = self.props.fill.is_ascii() && self.props.empty.is_ascii();
        if self.icons.mode() == GlyphMode::Ascii && !ascii {
            ProgressBar {
                fill: self.icons.bar_fill().into(),
                empty: self.icons.bar_empty().into(),
                ..self.props.clone()
            }
        } else {
            self.props.clone()
        }
    }
}

impl Widget for ProgressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = self.bar();
        let mut spans = vec![Span::styled(bar.bar_text(), self.theme.fg(bar.color))];
        if bar.show_percent {
            spans.push(Span::styled(
                format!(" {}", bar.percent_text()),
                self.theme.glow(bar.color, true),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(props: &ProgressBar, mode: GlyphMode) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(mode);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        ProgressView::new(props, &theme, &icons).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_unicode_bar() {
        let props = ProgressBar {
            width: 10,
            ..ProgressBar::new(60.0)
        };
        assert_eq!(render(&props, GlyphMode::Unicode), "[██████░░░░] 60%");
    }

    #[test]
    fn test_ascii_bar() {
        let props = ProgressBar {
            width: 10,
            ..ProgressBar::new(60.0)
        };
        assert_eq!(render(&props, GlyphMode::Ascii), "[######....] 60%");
    }

    #[test]
    fn test_ascii_custom_glyphs_kept() {
        let props = ProgressBar {
            width: 4,
            fill: "=".into(),
            empty: "-".into(),
            ..ProgressBar::new(50.0)
        };
        assert_eq!(render(&props, GlyphMode::Ascii), "[==--] 50%");
    }
}
