//! Keyboard shortcut hints: `[Tab] focus  [Esc] back`.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::tokens::{PaletteToken, Size};

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+Q").
    pub key: String,
    /// What the key does (e.g., "focus", "quit").
    pub label: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The stock navigation hints.
pub fn default_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "navigate"),
        KeyHint::new("Enter", "select"),
        KeyHint::new("Esc", "back"),
        KeyHint::new("Q", "quit"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardHints {
    pub hints: Vec<KeyHint>,
    pub separator: String,
    pub show_brackets: bool,
    /// Color of the key caps; labels use the next dimmer green.
    pub color: PaletteToken,
    pub size: Size,
}

impl Default for KeyboardHints {
    fn default() -> Self {
        Self {
            hints: default_hints(),
            separator: "  ".into(),
            show_brackets: true,
            color: PaletteToken::Green300,
            size: Size::Sm,
        }
    }
}

impl KeyboardHints {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self {
            hints,
            ..Default::default()
        }
    }

    pub fn key_text(&self, hint: &KeyHint) -> String {
        if self.show_brackets {
            format!("[{}]", hint.key)
        } else {
            hint.key.clone()
        }
    }

    /// Label color: one step dimmer than the key, never below `green-100`.
    pub fn label_color(&self) -> PaletteToken {
        match self.color {
            PaletteToken::Green400 => PaletteToken::Green300,
            PaletteToken::Green300 => PaletteToken::Green200,
            PaletteToken::Green200 | PaletteToken::Green100 => PaletteToken::Green100,
            other => other,
        }
    }

    pub fn text(&self) -> String {
        self.hints
            .iter()
            .map(|hint| format!("{} {}", self.key_text(hint), hint.label))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    pub fn render(&self) -> Element {
        let mut root = Element::new("div")
            .classes(["keyboard-hints", "flex", "flex-wrap", "font-mono"])
            .class(self.size.text_class());

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                root = root.child(
                    Element::new("span")
                        .class("key-hint-separator")
                        .text(self.separator.clone()),
                );
            }
            root = root.child(
                Element::new("span")
                    .class("key-hint")
                    .child(
                        Element::new("kbd")
                            .class("key-hint-key")
                            .class(self.color.text_class())
                            .text(self.key_text(hint)),
                    )
                    .text(" ")
                    .child(
                        Element::new("span")
                            .class("key-hint-label")
                            .class(self.label_color().text_class())
                            .text(hint.label.clone()),
                    ),
            );
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("Tab", "focus");
        assert_eq!(hint.key, "Tab");
        assert_eq!(hint.label, "focus");
    }

    #[test]
    fn test_default_hints() {
        let hints = default_hints();
        assert_eq!(hints.len(), 4);
        assert!(hints.iter().any(|h| h.key == "Esc" && h.label == "back"));
    }

    #[test]
    fn test_text_and_markup_agree() {
        let hints = KeyboardHints::new(vec![KeyHint::new("Tab", "focus"), KeyHint::new("?", "help")]);
        assert_eq!(hints.text(), "[Tab] focus  [?] help");
        assert_eq!(hints.render().text_content(), hints.text());
        assert_eq!(hints.render().find_by_class("key-hint").len(), 2);
    }

    #[test]
    fn test_without_brackets() {
        let hints = KeyboardHints {
            hints: vec![KeyHint::new("F1", "help")],
            show_brackets: false,
            ..Default::default()
        };
        assert_eq!(hints.text(), "F1 help");
    }

    #[test]
    fn test_label_color_steps_down() {
        let hints = KeyboardHints::default();
        assert_eq!(hints.label_color(), PaletteToken::Green200);
        let amber = KeyboardHints {
            color: PaletteToken::Amber,
            ..Default::default()
        };
        assert_eq!(amber.label_color(), PaletteToken::Amber);
    }

    #[test]
    fn test_empty_hints() {
        let hints = KeyboardHints::new(Vec::new());
        assert_eq!(hints.text(), "");
        assert!(hints.render().children.is_empty());
    }
}
