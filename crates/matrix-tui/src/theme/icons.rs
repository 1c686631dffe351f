//! Glyphs for indicators, cursors and bars, with ASCII fallback.

use matrix_engine::GlyphMode;

/// Icon set based on configured glyph mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: GlyphMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(GlyphMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Get the current glyph mode.
    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Status indicator dot.
    pub fn indicator(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "●",
            GlyphMode::Ascii => "*",
        }
    }

    /// Block cursor.
    pub fn cursor(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "█",
            GlyphMode::Ascii => "_",
        }
    }

    /// Selected list item marker.
    pub fn selected(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "▸",
            GlyphMode::Ascii => ">",
        }
    }

    pub fn bar_fill(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "█",
            GlyphMode::Ascii => "#",
        }
    }

    pub fn bar_empty(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "░",
            GlyphMode::Ascii => ".",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        let icons = IconSet::default();
        assert_eq!(icons.mode(), GlyphMode::Unicode);
        assert_eq!(icons.indicator(), "●");
    }

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        let icons = IconSet::new(GlyphMode::Ascii);
        for glyph in [
            icons.indicator(),
            icons.cursor(),
            icons.selected(),
            icons.bar_fill(),
            icons.bar_empty(),
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ascii");
        }
    }
}
