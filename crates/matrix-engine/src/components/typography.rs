//! Themed terminal text.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::tokens::{PaletteToken, Size};

/// Block cursor glyph.
pub const CURSOR: &str = "█";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalText {
    pub text: String,
    pub color: PaletteToken,
    pub glow: bool,
    pub size: Size,
    /// Trailing blinking block cursor.
    pub cursor: bool,
}

impl TerminalText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn render(&self) -> Element {
        Element::new("span")
            .classes(["terminal-text", "font-mono"])
            .class(self.size.text_class())
            .class(self.color.text_class())
            .class_opt(if self.glow { self.color.glow_class() } else { None })
            .text(self.text.clone())
            .child_opt(self.cursor.then(|| {
                Element::new("span")
                    .classes(["terminal-cursor", "animate-blink"])
                    .attr("aria-hidden", "true")
                    .text(CURSOR)
            }))
    }
}
