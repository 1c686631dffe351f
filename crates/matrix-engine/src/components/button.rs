//! Bracketed command button: `[ EXECUTE ]`.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::text::bracketed;
use crate::tokens::{PaletteToken, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    /// No border.
    Ghost,
}

impl ButtonVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }

    pub fn color(self) -> PaletteToken {
        match self {
            Self::Primary => PaletteToken::Green300,
            Self::Secondary | Self::Ghost => PaletteToken::Green200,
            Self::Danger => PaletteToken::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalButton {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: Size,
    pub disabled: bool,
    pub show_brackets: bool,
}

impl Default for TerminalButton {
    fn default() -> Self {
        Self {
            label: "EXECUTE".into(),
            variant: ButtonVariant::default(),
            size: Size::default(),
            disabled: false,
            show_brackets: true,
        }
    }
}

impl TerminalButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn label_text(&self) -> String {
        bracketed(&self.label.to_uppercase(), self.show_brackets)
    }

    pub fn render(&self) -> Element {
        let color = self.variant.color();
        let mut el = Element::new("button")
            .classes(["terminal-button", "font-mono", "uppercase", "tracking-wider"])
            .class(format!("terminal-button-{}", self.variant.name()))
            .classes(self.size.padding_classes())
            .class(self.size.text_class())
            .class(color.text_class())
            .attr("type", "button");

        el = match self.variant {
            ButtonVariant::Ghost => el.classes(["border", "border-transparent"]),
            _ => el.class("border").class(color.border_class()),
        };

        if self.disabled {
            el = el
                .classes(["opacity-50", "cursor-not-allowed"])
                .attr("disabled", "disabled");
        } else {
            el = el.class(format!("hover:{}", color.bg_class())).class("hover:text-black");
        }

        el.text(self.label_text())
    }
}
