//! CRT effects for the terminal.
//!
//! [`CrtOverlay`] restyles cells already in the buffer, so it is drawn
//! after whatever it covers:
//! - scanlines tint the background of every other row
//! - the vignette dims the outermost ring of cells
//! - flicker dims the whole region on the active tick

use matrix_engine::components::{clamp_opacity, CrtMonitor};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Scanline background for an opacity in `0.0..=1.0`.
pub(crate) fn scanline_color(opacity: f32) -> Color {
    Color::Rgb(0, (clamp_opacity(opacity) * 160.0).round() as u8, 0)
}

/// Effects layer over an already-drawn region.
pub struct CrtOverlay<'a> {
    props: &'a CrtMonitor,
    tick: u64,
}

impl<'a> CrtOverlay<'a> {
    pub fn new(props: &'a CrtMonitor) -> Self {
        Self { props, tick: 0 }
    }

    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for CrtOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let scanline = scanline_color(self.props.scanline_opacity);
        let flicker = self.props.flicker_active(self.tick);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                if self.props.scanlines && (y - area.top()) % 2 == 1 {
                    cell.set_bg(scanline);
                }
                let edge = x == area.left()
                    || x == area.right() - 1
                    || y == area.top()
                    || y == area.bottom() - 1;
                if flicker || (self.props.vignette && edge) {
                    cell.modifier.insert(Modifier::DIM);
                }
            }
        }
    }
}

/// A CRT monitor showing its own content lines.
pub struct CrtView<'a> {
    props: &'a CrtMonitor,
    theme: &'a Theme,
    tick: u64,
}

impl<'a> CrtView<'a> {
    pub fn new(props: &'a CrtMonitor, theme: &'a Theme) -> Self {
        Self {
            props,
            theme,
            tick: 0,
        }
    }

    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for CrtView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self
            .theme
            .fg(self.props.color)
            .bg(self.theme.base);
        let lines: Vec<Line> = self
            .props
            .content
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        Paragraph::new(lines).style(style).render(area, buf);
        CrtOverlay::new(self.props).tick(self.tick).render(area, buf);
    }
}
