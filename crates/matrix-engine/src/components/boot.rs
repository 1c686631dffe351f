//! Boot sequence props and markup.
//!
//! Timing lives in [`crate::playback`]; this module only describes the lines
//! and renders whatever is visible at a given moment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::playback::BootSchedule;
use crate::tokens::PaletteToken;

/// One scripted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootLine {
    pub text: String,
    /// Delay from sequence start, not from the previous line.
    pub delay_ms: u64,
    /// Revealing this line completes the sequence.
    #[serde(default)]
    pub terminal: bool,
}

impl BootLine {
    pub fn new(text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            text: text.into(),
            delay_ms,
            terminal: false,
        }
    }

    #[must_use]
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// The stock boot script.
pub fn default_boot_lines() -> Vec<BootLine> {
    vec![
        BootLine::new("INITIALIZING SYSTEM...", 0),
        BootLine::new("LOADING KERNEL MODULES... OK", 400),
        BootLine::new("MOUNTING FILESYSTEMS... OK", 800),
        BootLine::new("ESTABLISHING UPLINK... OK", 1200),
        BootLine::new("DECRYPTING CONSTRUCT... OK", 1600),
        BootLine::new("SYSTEM READY.", 2000).terminal(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootSequence {
    pub lines: Vec<BootLine>,
    /// Blinking cursor while the sequence is still running.
    pub show_cursor: bool,
    pub color: PaletteToken,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self {
            lines: default_boot_lines(),
            show_cursor: true,
            color: PaletteToken::default(),
        }
    }
}

impl BootSequence {
    pub fn schedule(&self) -> BootSchedule {
        BootSchedule::new(self.lines.clone())
    }

    /// Markup as it looks `elapsed` after start.
    pub fn render_at(&self, elapsed: Duration) -> Element {
        let schedule = self.schedule();
        let visible = schedule.visible_at(elapsed);
        let running = !schedule.is_complete(elapsed);

        Element::new("div")
            .classes(["boot-sequence", "font-mono", "whitespace-pre"])
            .class(self.color.text_class())
            .children(visible.iter().map(|line| {
                Element::new("div")
                    .class("boot-line")
                    .class_opt(line.terminal.then_some("boot-line-terminal"))
                    .text(line.text.clone())
            }))
            .child_opt((self.show_cursor && running).then(|| {
                Element::new("span")
                    .classes(["boot-cursor", "animate-blink"])
                    .text("█")
            }))
    }

    /// Markup of the finished sequence.
    pub fn render(&self) -> Element {
        self.render_at(self.schedule().total_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_ends_with_terminal_line() {
        let lines = default_boot_lines();
        assert!(lines.last().unwrap().terminal);
        assert_eq!(lines.iter().filter(|l| l.terminal).count(), 1);
    }

    #[test]
    fn test_render_at_reveals_progressively() {
        let seq = BootSequence::default();
        let early = seq.render_at(Duration::from_millis(500));
        assert_eq!(early.find_by_class("boot-line").len(), 2);
        assert_eq!(early.find_by_class("boot-cursor").len(), 1);

        let done = seq.render();
        assert_eq!(done.find_by_class("boot-line").len(), 6);
        assert!(done.find_by_class("boot-cursor").is_empty());
        assert_eq!(done.find_by_class("boot-line-terminal").len(), 1);
    }

    #[test]
    fn test_deserialize_lines() {
        let seq: BootSequence = serde_json::from_str(
            r#"{"lines": [{"text": "A", "delayMs": 10}, {"text": "B", "delayMs": 20, "terminal": true}]}"#,
        )
        .unwrap();
        assert_eq!(seq.lines.len(), 2);
        assert!(seq.lines[1].terminal);
        assert!(seq.show_cursor);
    }
}
