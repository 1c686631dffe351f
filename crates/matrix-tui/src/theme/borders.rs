//! Border sets for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` (via [`GlyphMode::Ascii`]) by drawing frames with
//! `+`, `-` and `|`.

use matrix_engine::{resolve_frame_chars, CustomChars, FrameChars, FrameStyle, GlyphMode};
use ratatui::symbols::border;

/// Border set based on glyph mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: GlyphMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(GlyphMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Characters for an ASCII frame component.
    ///
    /// In ASCII mode built-in styles collapse to `+-|`; custom characters
    /// are the caller's choice and pass through unchanged.
    pub fn frame_chars(
        &self,
        style: FrameStyle,
        overrides: Option<&CustomChars>,
    ) -> Option<FrameChars> {
        match self.mode {
            GlyphMode::Ascii if style != FrameStyle::Custom => Some(FrameChars::ascii()),
            _ => resolve_frame_chars(style, overrides),
        }
    }

    /// Normal (unfocused) pane borders - single line, `+-|` in ASCII.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::PLAIN,
            GlyphMode::Ascii => ASCII_NORMAL,
        }
    }

    /// Focused pane borders - double line, `+=|` in ASCII.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::DOUBLE,
            GlyphMode::Ascii => ASCII_FOCUSED,
        }
    }
}

const ASCII_NORMAL: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

const ASCII_FOCUSED: border::Set = border::Set {
    horizontal_top: "=",
    horizontal_bottom: "=",
    ..ASCII_NORMAL
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode_mode() {
        assert_eq!(BorderSet::default().mode(), GlyphMode::Unicode);
    }

    #[test]
    fn test_unicode_frame_chars() {
        let borders = BorderSet::new(GlyphMode::Unicode);
        let chars = borders.frame_chars(FrameStyle::Rounded, None).unwrap();
        assert_eq!(chars.top_left, "╭");
    }

    #[test]
    fn test_ascii_frame_chars() {
        let borders = BorderSet::new(GlyphMode::Ascii);
        let chars = borders.frame_chars(FrameStyle::Double, None).unwrap();
        assert_eq!(chars, FrameChars::ascii());
    }

    #[test]
    fn test_ascii_keeps_custom() {
        let borders = BorderSet::new(GlyphMode::Ascii);
        let custom = CustomChars::full("#", "#", "#", "#", "=", "!");
        let chars = borders
            .frame_chars(FrameStyle::Custom, Some(&custom))
            .unwrap();
        assert_eq!(chars.vertical, "!");
        assert!(borders.frame_chars(FrameStyle::Custom, None).is_none());
    }

    #[test]
    fn test_pane_borders() {
        let unicode = BorderSet::new(GlyphMode::Unicode);
        assert_eq!(unicode.normal().top_left, "┌");
        assert_eq!(unicode.focused().top_left, "╔");

        let ascii = BorderSet::new(GlyphMode::Ascii);
        assert_eq!(ascii.normal().horizontal_top, "-");
        assert_eq!(ascii.focused().horizontal_top, "=");
        assert_eq!(ascii.focused().vertical_left, "|");
    }
}
