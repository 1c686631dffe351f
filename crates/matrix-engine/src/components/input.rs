//! Prompt-style text input with an optional password visibility toggle.
//!
//! [`TerminalInput`] is the immutable props; [`InputState`] is the editable
//! value owned by one input instance and dropped with it.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::tokens::{PaletteToken, Size};

/// Mask character for hidden password input.
pub const MASK_CHAR: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    Password,
}

impl InputType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalInput {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub prompt: String,
    pub input_type: InputType,
    /// Initial value.
    pub value: String,
    pub error: Option<String>,
    pub disabled: bool,
    /// Show the `[SHOW]`/`[HIDE]` control on password inputs.
    pub show_toggle: bool,
    pub color: PaletteToken,
    pub size: Size,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            prompt: "> ".into(),
            input_type: InputType::default(),
            value: String::new(),
            error: None,
            disabled: false,
            show_toggle: true,
            color: PaletteToken::default(),
            size: Size::default(),
        }
    }
}

/// Editable state of one input instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    value: String,
    /// Cursor position as a char index.
    cursor: usize,
    /// Password visibility.
    revealed: bool,
}

impl InputState {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            revealed: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle_visibility(&mut self) {
        self.revealed = !self.revealed;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Take the value, leaving the input empty.
    pub fn submit(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }
}

impl TerminalInput {
    pub fn password() -> Self {
        Self {
            input_type: InputType::Password,
            ..Default::default()
        }
    }

    /// Fresh state seeded with the initial value.
    pub fn state(&self) -> InputState {
        InputState::new(self.value.clone())
    }

    pub fn is_masked(&self, state: &InputState) -> bool {
        self.input_type == InputType::Password && !state.is_revealed()
    }

    /// Value as it should appear on screen.
    pub fn display_value(&self, state: &InputState) -> String {
        if self.is_masked(state) {
            MASK_CHAR.to_string().repeat(state.value().chars().count())
        } else {
            state.value().to_string()
        }
    }

    pub fn toggle_text(&self, state: &InputState) -> Option<&'static str> {
        if self.input_type != InputType::Password || !self.show_toggle {
            return None;
        }
        Some(if state.is_revealed() { "[HIDE]" } else { "[SHOW]" })
    }

    pub fn render_with(&self, state: &InputState) -> Element {
        let label = self.label.as_ref().map(|label| {
            Element::new("label")
                .classes(["terminal-input-label", "block", "uppercase"])
                .class(PaletteToken::Green200.text_class())
                .text(label.clone())
        });

        let value = if state.is_empty() {
            Element::new("span")
                .classes(["terminal-input-placeholder", "opacity-50"])
                .text(self.placeholder.clone().unwrap_or_default())
        } else {
            Element::new("span")
                .class("terminal-input-value")
                .text(self.display_value(state))
        };

        let toggle = self.toggle_text(state).map(|text| {
            Element::new("button")
                .classes(["terminal-input-toggle", "ml-2"])
                .class(PaletteToken::Green200.text_class())
                .attr("type", "button")
                .attr("aria-pressed", state.is_revealed().to_string())
                .text(text)
        });

        let field = Element::new("div")
            .classes(["terminal-input-field", "flex", "items-center", "border-b"])
            .class(if self.error.is_some() {
                PaletteToken::Red.border_class()
            } else {
                self.color.border_class()
            })
            .child(
                Element::new("span")
                    .class("terminal-input-prompt")
                    .text(self.prompt.clone()),
            )
            .child(value)
            .child_opt(toggle);

        let error = self.error.as_ref().map(|error| {
            Element::new("p")
                .classes(["terminal-input-error", "mt-1"])
                .class(PaletteToken::Red.text_class())
                .attr("role", "alert")
                .text(error.clone())
        });

        let mut root = Element::new("div")
            .classes(["terminal-input", "font-mono"])
            .class(self.size.text_class())
            .class(self.color.text_class())
            .attr("data-type", self.input_type.name());
        if self.disabled {
            root = root
                .classes(["opacity-50", "cursor-not-allowed"])
                .attr("aria-disabled", "true");
        }
        root.child_opt(label).child(field).child_opt(error)
    }

    pub fn render(&self) -> Element {
        self.render_with(&self.state())
    }
}
