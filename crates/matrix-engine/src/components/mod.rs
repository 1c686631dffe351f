//! Components and their props.
//!
//! Every component is plain data with defaults. Rendering is a pure function
//! of the props, so rendering the same props twice yields the same tree.

mod boot;
mod button;
mod crt;
mod frame;
mod hints;
mod input;
mod progress;
pub(crate) mod status;
mod timer;
mod typography;

use serde::{Deserialize, Serialize};

pub use boot::{default_boot_lines, BootLine, BootSequence};
pub use button::{ButtonVariant, TerminalButton};
pub use crt::{clamp_opacity, opacity_class, CrtMonitor, Overlay};
pub use frame::{
    blank_line, bottom_border, content_line, title_fill, top_border, AsciiBox, AsciiFrame,
    FrameRow, DEFAULT_FRAME_WIDTH,
};
pub use hints::{default_hints, KeyHint, KeyboardHints};
pub use input::{InputState, InputType, TerminalInput, MASK_CHAR};
pub use progress::ProgressBar;
pub use status::{
    clock_string, SystemInfo, SystemInfoLabels, TerminalStatus, UptimeFormat, INDICATOR_CLASS,
};
pub use timer::{format_seconds, Stopwatch, TimeFormat, TimerDisplay, TimerMode};
pub use typography::{TerminalText, CURSOR};

use crate::markup::Element;
use crate::tokens::{FlickerIntensity, FrameStyle, PaletteToken, Size, StatusToken};

/// Any component, tagged by name.
///
/// This is the JSON prop API: `{"component": "terminal-status", "status": "error"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "kebab-case")]
pub enum Component {
    AsciiFrame(AsciiFrame),
    AsciiBox(AsciiBox),
    TerminalStatus(TerminalStatus),
    SystemInfo(SystemInfo),
    CrtMonitor(CrtMonitor),
    BootSequence(BootSequence),
    TimerDisplay(TimerDisplay),
    KeyboardHints(KeyboardHints),
    TerminalInput(TerminalInput),
    TerminalButton(TerminalButton),
    TerminalText(TerminalText),
    ProgressBar(ProgressBar),
}

impl Component {
    /// Names accepted in the `component` tag.
    pub const NAMES: [&'static str; 12] = [
        "ascii-frame",
        "ascii-box",
        "terminal-status",
        "system-info",
        "crt-monitor",
        "boot-sequence",
        "timer-display",
        "keyboard-hints",
        "terminal-input",
        "terminal-button",
        "terminal-text",
        "progress-bar",
    ];

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AsciiFrame(_) => "ascii-frame",
            Self::AsciiBox(_) => "ascii-box",
            Self::TerminalStatus(_) => "terminal-status",
            Self::SystemInfo(_) => "system-info",
            Self::CrtMonitor(_) => "crt-monitor",
            Self::BootSequence(_) => "boot-sequence",
            Self::TimerDisplay(_) => "timer-display",
            Self::KeyboardHints(_) => "keyboard-hints",
            Self::TerminalInput(_) => "terminal-input",
            Self::TerminalButton(_) => "terminal-button",
            Self::TerminalText(_) => "terminal-text",
            Self::ProgressBar(_) => "progress-bar",
        }
    }

    /// Markup tree. `None` only for frames whose characters do not resolve.
    pub fn render(&self) -> Option<Element> {
        match self {
            Self::AsciiFrame(props) => props.render(),
            Self::AsciiBox(props) => props.render(),
            Self::TerminalStatus(props) => Some(props.render()),
            Self::SystemInfo(props) => Some(props.render()),
            Self::CrtMonitor(props) => Some(props.render()),
            Self::BootSequence(props) => Some(props.render()),
            Self::TimerDisplay(props) => Some(props.render()),
            Self::KeyboardHints(props) => Some(props.render()),
            Self::TerminalInput(props) => Some(props.render()),
            Self::TerminalButton(props) => Some(props.render()),
            Self::TerminalText(props) => Some(props.render()),
            Self::ProgressBar(props) => Some(props.render()),
        }
    }

    /// Plain text rendering, one line per visual row.
    pub fn to_text(&self) -> String {
        match self {
            Self::AsciiFrame(props) => props.lines().join("\n"),
            Self::AsciiBox(props) => props.lines().join("\n"),
            Self::BootSequence(props) => {
                let schedule = props.schedule();
                schedule
                    .visible_at(schedule.total_duration())
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Self::CrtMonitor(props) => props.content.join("\n"),
            other => other.render().map(|el| el.text_content()).unwrap_or_default(),
        }
    }

    pub fn to_html(&self) -> String {
        self.render().map(|el| el.to_html()).unwrap_or_default()
    }
}

/// A named example configuration.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub component: Component,
}

impl CatalogEntry {
    fn new(title: &'static str, component: Component) -> Self {
        Self { title, component }
    }
}

/// Fixed example configurations used by the preview and `matrix render --example`.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "Frame / single",
            Component::AsciiFrame(AsciiFrame {
                content: vec!["THE MATRIX HAS YOU".into()],
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Box / double with title",
            Component::AsciiBox(AsciiBox {
                width: 45,
                style: FrameStyle::Double,
                title: Some("TERMINAL".into()),
                content: vec!["FOLLOW THE WHITE RABBIT.".into(), "KNOCK, KNOCK, NEO.".into()],
                glow: true,
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Box / heavy amber",
            Component::AsciiBox(AsciiBox {
                style: FrameStyle::Heavy,
                title: Some("WARNING".into()),
                content: vec!["AGENT DETECTED IN SECTOR 7".into()],
                color: PaletteToken::Amber,
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Status / online",
            Component::TerminalStatus(TerminalStatus::new(StatusToken::Online)),
        ),
        CatalogEntry::new(
            "Status / error large",
            Component::TerminalStatus(TerminalStatus {
                status: StatusToken::Error,
                size: Size::Lg,
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "System info",
            Component::SystemInfo(SystemInfo {
                uptime: 7200,
                cpu: 15.3,
                memory: "256KB".into(),
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "CRT monitor",
            Component::CrtMonitor(CrtMonitor {
                flicker_intensity: FlickerIntensity::Medium,
                content: vec!["WAKE UP, NEO...".into()],
                ..Default::default()
            }),
        ),
        CatalogEntry::new("Boot sequence", Component::BootSequence(BootSequence::default())),
        CatalogEntry::new(
            "Timer",
            Component::TimerDisplay(TimerDisplay {
                seconds: 3725,
                label: Some("uptime".into()),
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Timer / countdown",
            Component::TimerDisplay(TimerDisplay {
                seconds: 10,
                format: TimeFormat::MmSs,
                label: Some("t-minus".into()),
                mode: TimerMode::Down,
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Keyboard hints",
            Component::KeyboardHints(KeyboardHints::default()),
        ),
        CatalogEntry::new(
            "Password input",
            Component::TerminalInput(TerminalInput {
                label: Some("ACCESS CODE".into()),
                input_type: InputType::Password,
                value: "redpill".into(),
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Buttons",
            Component::TerminalButton(TerminalButton::new("jack in")),
        ),
        CatalogEntry::new(
            "Text / glow",
            Component::TerminalText(TerminalText {
                text: "There is no spoon.".into(),
                glow: true,
                cursor: true,
                ..Default::default()
            }),
        ),
        CatalogEntry::new(
            "Progress",
            Component::ProgressBar(ProgressBar::new(64.0)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_json_round_trip() {
        let json = r#"{"component": "terminal-status", "status": "warning", "showBrackets": false}"#;
        let component = Component::from_json(json).unwrap();
        assert_eq!(component.name(), "terminal-status");
        assert_eq!(component.to_text(), "WARNING");

        let back = serde_json::to_string(&component).unwrap();
        assert_eq!(Component::from_json(&back).unwrap(), component);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let json = r#"{"component": "terminal-status", "status": "rebooting"}"#;
        assert!(Component::from_json(json).is_err());
        let json = r#"{"component": "hologram"}"#;
        assert!(Component::from_json(json).is_err());
    }

    #[test]
    fn test_names_match_tags() {
        for entry in catalog() {
            assert!(Component::NAMES.contains(&entry.component.name()));
        }
        for name in Component::NAMES {
            let json = format!(r#"{{"component": "{name}"}}"#);
            let component = Component::from_json(&json).unwrap();
            assert_eq!(component.name(), name);
        }
    }

    #[test]
    fn test_catalog_renders() {
        for entry in catalog() {
            let first = entry.component.to_html();
            assert!(!first.is_empty(), "{} rendered nothing", entry.title);
            assert_eq!(first, entry.component.to_html(), "{} not idempotent", entry.title);
        }
    }

    #[test]
    fn test_frame_text() {
        let component = Component::AsciiFrame(AsciiFrame {
            width: 6,
            ..Default::default()
        });
        assert_eq!(component.to_text(), "┌────┐\n└────┘");
    }

    #[test]
    fn test_incomplete_frame_renders_empty() {
        let component = Component::from_json(r#"{"component": "ascii-frame", "style": "custom"}"#)
            .unwrap();
        assert!(component.render().is_none());
        assert_eq!(component.to_text(), "");
        assert_eq!(component.to_html(), "");
    }
}
