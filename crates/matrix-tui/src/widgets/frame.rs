//! ASCII frame and box widget.
//!
//! Rows come from the engine's layout so the terminal and markup renderers
//! agree character for character. Lines wider than the area are clipped.

use matrix_engine::components::{AsciiBox, FrameRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

pub struct FrameView<'a> {
    props: &'a AsciiBox,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> FrameView<'a> {
    pub fn new(props: &'a AsciiBox, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            props,
            theme,
            borders,
        }
    }

    /// Rows to draw, empty when the frame characters do not resolve.
    pub fn rows(&self) -> Vec<(FrameRow, String)> {
        match self
            .borders
            .frame_chars(self.props.style, self.props.custom_chars.as_ref())
        {
            Some(chars) => self.props.rows_with(&chars),
            None => {
                tracing::debug!(style = %self.props.style, "frame characters incomplete, skipping");
                Vec::new()
            }
        }
    }
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.glow(self.props.color, self.props.glow);
        let lines: Vec<Line> = self
            .rows()
            .into_iter()
            .map(|(_, text)| Line::styled(text, style))
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}
