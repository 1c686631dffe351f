//! Framed text: [`AsciiFrame`] and [`AsciiBox`].
//!
//! Layout of a box of width `w`:
//!
//! ```text
//! ┌── TITLE ─────┐   top, title interpolated (or plain fill)
//! │              │   padding lines
//! │ content      │   content, one margin space each side
//! │              │
//! └──────────────┘   bottom
//! ```

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::text::{fit_to_width, visual_width, wrap_to_width};
use crate::tokens::{resolve_frame_chars, CustomChars, FrameChars, FrameStyle, PaletteToken};

/// Default frame width in characters.
pub const DEFAULT_FRAME_WIDTH: usize = 40;

/// Characters spent on the title decoration: two corners, two leading fill
/// characters and one space on each side of the title.
const TITLE_OVERHEAD: usize = 6;

/// Number of fill characters after an interpolated title.
///
/// Clamped at zero, so an over-long title makes the line longer than
/// `width` rather than failing.
pub fn title_fill(width: usize, title: &str) -> usize {
    width.saturating_sub(visual_width(title) + TITLE_OVERHEAD)
}

/// Top border, with the title interpolated when given.
pub fn top_border(chars: &FrameChars, width: usize, title: Option<&str>) -> String {
    match title {
        Some(title) => format!(
            "{tl}{h}{h} {title} {fill}{tr}",
            tl = chars.top_left,
            h = chars.horizontal,
            fill = chars.horizontal.repeat(title_fill(width, title)),
            tr = chars.top_right,
        ),
        None => format!(
            "{}{}{}",
            chars.top_left,
            chars.horizontal.repeat(width.saturating_sub(2)),
            chars.top_right
        ),
    }
}

pub fn bottom_border(chars: &FrameChars, width: usize) -> String {
    format!(
        "{}{}{}",
        chars.bottom_left,
        chars.horizontal.repeat(width.saturating_sub(2)),
        chars.bottom_right
    )
}

/// One content row. Frames too narrow for margins drop them.
pub fn content_line(chars: &FrameChars, width: usize, text: &str) -> String {
    let inner = width.saturating_sub(2);
    if inner >= 2 {
        format!(
            "{v} {text} {v}",
            v = chars.vertical,
            text = fit_to_width(text, inner - 2)
        )
    } else {
        format!("{v}{}{v}", fit_to_width(text, inner), v = chars.vertical)
    }
}

pub fn blank_line(chars: &FrameChars, width: usize) -> String {
    format!(
        "{v}{}{v}",
        " ".repeat(width.saturating_sub(2)),
        v = chars.vertical
    )
}

/// Role of a rendered frame row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRow {
    Border,
    Padding,
    Content,
}

impl FrameRow {
    fn class(self) -> &'static str {
        match self {
            Self::Border => "frame-border",
            Self::Padding => "frame-padding",
            Self::Content => "frame-content",
        }
    }
}

/// Everything needed to lay out a frame once characters are resolved.
struct FrameLayout<'a> {
    chars: &'a FrameChars,
    width: usize,
    title: Option<&'a str>,
    content: &'a [String],
    padding: usize,
    wrap: bool,
}

impl FrameLayout<'_> {
    fn rows(&self) -> Vec<(FrameRow, String)> {
        let mut rows = vec![(
            FrameRow::Border,
            top_border(self.chars, self.width, self.title),
        )];

        let padding = (0..self.padding).map(|_| (FrameRow::Padding, blank_line(self.chars, self.width)));
        rows.extend(padding.clone());

        let text_width = self.width.saturating_sub(4).max(1);
        for text in self.content {
            if self.wrap {
                for piece in wrap_to_width(text, text_width) {
                    rows.push((FrameRow::Content, content_line(self.chars, self.width, &piece)));
                }
            } else {
                rows.push((FrameRow::Content, content_line(self.chars, self.width, text)));
            }
        }

        rows.extend(padding);
        rows.push((FrameRow::Border, bottom_border(self.chars, self.width)));
        rows
    }
}

fn frame_element(rows: Vec<(FrameRow, String)>, color: PaletteToken, glow: bool, kind: &str) -> Element {
    Element::new("pre")
        .class(kind)
        .classes(["font-mono", "whitespace-pre", "leading-none"])
        .class(color.text_class())
        .class_opt(if glow { color.glow_class() } else { None })
        .children(
            rows.into_iter()
                .map(|(row, line)| Element::new("div").class("frame-line").class(row.class()).text(line)),
        )
}

/// A bare frame around content lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AsciiFrame {
    pub width: usize,
    pub style: FrameStyle,
    pub custom_chars: Option<CustomChars>,
    pub content: Vec<String>,
    pub color: PaletteToken,
    pub glow: bool,
    /// Wrap long content instead of truncating it.
    pub wrap: bool,
}

impl Default for AsciiFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            style: FrameStyle::default(),
            custom_chars: None,
            content: Vec::new(),
            color: PaletteToken::default(),
            glow: false,
            wrap: false,
        }
    }
}

impl AsciiFrame {
    pub fn chars(&self) -> Option<FrameChars> {
        resolve_frame_chars(self.style, self.custom_chars.as_ref())
    }

    fn rows_with(&self, chars: &FrameChars) -> Vec<(FrameRow, String)> {
        FrameLayout {
            chars,
            width: self.width,
            title: None,
            content: &self.content,
            padding: 0,
            wrap: self.wrap,
        }
        .rows()
    }

    /// Rendered rows, or nothing when the character set is incomplete.
    pub fn rows(&self) -> Vec<(FrameRow, String)> {
        match self.chars() {
            Some(chars) => self.rows_with(&chars),
            None => {
                tracing::debug!(style = %self.style, "frame characters incomplete, rendering nothing");
                Vec::new()
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows().into_iter().map(|(_, line)| line).collect()
    }

    pub fn render(&self) -> Option<Element> {
        let rows = self.rows();
        if rows.is_empty() {
            return None;
        }
        Some(frame_element(rows, self.color, self.glow, "ascii-frame"))
    }
}

/// A titled frame with vertical padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AsciiBox {
    pub width: usize,
    pub style: FrameStyle,
    pub custom_chars: Option<CustomChars>,
    pub title: Option<String>,
    pub content: Vec<String>,
    /// Blank lines above and below the content.
    pub padding: usize,
    pub color: PaletteToken,
    pub glow: bool,
    pub wrap: bool,
}

impl Default for AsciiBox {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            style: FrameStyle::default(),
            custom_chars: None,
            title: None,
            content: Vec::new(),
            padding: 1,
            color: PaletteToken::default(),
            glow: false,
            wrap: false,
        }
    }
}

impl AsciiBox {
    pub fn chars(&self) -> Option<FrameChars> {
        resolve_frame_chars(self.style, self.custom_chars.as_ref())
    }

    /// Rows rendered with an explicit character set, bypassing the style.
    pub fn rows_with(&self, chars: &FrameChars) -> Vec<(FrameRow, String)> {
        FrameLayout {
            chars,
            width: self.width,
            title: self.title.as_deref(),
            content: &self.content,
            padding: self.padding,
            wrap: self.wrap,
        }
        .rows()
    }

    pub fn rows(&self) -> Vec<(FrameRow, String)> {
        match self.chars() {
            Some(chars) => self.rows_with(&chars),
            None => {
                tracing::debug!(style = %self.style, "box characters incomplete, rendering nothing");
                Vec::new()
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows().into_iter().map(|(_, line)| line).collect()
    }

    pub fn render(&self) -> Option<Element> {
        let rows = self.rows();
        if rows.is_empty() {
            return None;
        }
        let element = frame_element(rows, self.color, self.glow, "ascii-box");
        Some(match &self.title {
            Some(title) => element.attr("aria-label", title.clone()),
            None => element,
        })
    }
}

impl From<AsciiFrame> for AsciiBox {
    fn from(frame: AsciiFrame) -> Self {
        Self {
            width: frame.width,
            style: frame.style,
            custom_chars: frame.custom_chars,
            title: None,
            content: frame.content,
            padding: 0,
            color: frame.color,
            glow: frame.glow,
            wrap: frame.wrap,
        }
    }
}
