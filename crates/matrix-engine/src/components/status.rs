//! Status displays: [`TerminalStatus`] and [`SystemInfo`].

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::text::bracketed;
use crate::tokens::{PaletteToken, Size, StatusToken};

/// Marker class carried by the status indicator dot.
pub const INDICATOR_CLASS: &str = "status-indicator";

/// A status label with an optional indicator dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalStatus {
    pub status: StatusToken,
    /// Replaces the status's own label text.
    pub label: Option<String>,
    pub show_brackets: bool,
    pub show_indicator: bool,
    pub size: Size,
    /// Replaces the status's own color.
    pub color: Option<PaletteToken>,
}

impl Default for TerminalStatus {
    fn default() -> Self {
        Self {
            status: StatusToken::default(),
            label: None,
            show_brackets: true,
            show_indicator: true,
            size: Size::default(),
            color: None,
        }
    }
}

impl TerminalStatus {
    pub fn new(status: StatusToken) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn color(&self) -> PaletteToken {
        self.color.unwrap_or(self.status.look().color)
    }

    pub fn animates(&self) -> bool {
        self.status.look().animate
    }

    /// Label text, uppercased and optionally bracketed.
    pub fn label_text(&self) -> String {
        let label = self
            .label
            .as_deref()
            .unwrap_or(self.status.look().label)
            .to_uppercase();
        bracketed(&label, self.show_brackets)
    }

    fn indicator(&self) -> Element {
        Element::new("span")
            .classes([INDICATOR_CLASS, "inline-block", "rounded-full"])
            .classes(self.size.indicator_classes())
            .class(self.color().bg_class())
            .class_opt(self.animates().then_some("animate-pulse"))
            .attr("aria-hidden", "true")
    }

    pub fn render(&self) -> Element {
        let color = self.color();
        let label = Element::new("span")
            .class("status-label")
            .class(color.text_class())
            .class_opt(color.glow_class())
            .text(self.label_text());

        Element::new("span")
            .classes(["terminal-status", "inline-flex", "items-center", "gap-2", "font-mono"])
            .class(self.size.text_class())
            .attr("role", "status")
            .attr("data-status", self.status.name())
            .child_opt(self.show_indicator.then(|| self.indicator()))
            .child(label)
    }
}

/// How uptime seconds are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UptimeFormat {
    /// Raw second count.
    #[default]
    Seconds,
    /// `HH:MM:SS`.
    Clock,
}

/// Per-item labels for [`SystemInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoLabels {
    pub uptime: String,
    pub cpu: String,
    pub memory: String,
}

impl Default for SystemInfoLabels {
    fn default() -> Self {
        Self {
            uptime: "UPTIME".into(),
            cpu: "CPU".into(),
            memory: "MEM".into(),
        }
    }
}

/// Uptime, CPU and memory on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemInfo {
    /// Uptime in seconds.
    pub uptime: u64,
    /// CPU usage in percent.
    pub cpu: f64,
    pub memory: String,
    pub separator: String,
    pub show_labels: bool,
    pub show_brackets: bool,
    pub labels: SystemInfoLabels,
    pub uptime_format: UptimeFormat,
    pub color: PaletteToken,
    pub size: Size,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            uptime: 0,
            cpu: 0.0,
            memory: "0KB".into(),
            separator: " | ".into(),
            show_labels: true,
            show_brackets: true,
            labels: SystemInfoLabels::default(),
            uptime_format: UptimeFormat::default(),
            color: PaletteToken::default(),
            size: Size::default(),
        }
    }
}

/// `HH:MM:SS`, hours unbounded.
pub fn clock_string(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

impl SystemInfo {
    fn uptime_value(&self) -> String {
        match self.uptime_format {
            UptimeFormat::Seconds => self.uptime.to_string(),
            UptimeFormat::Clock => clock_string(self.uptime),
        }
    }

    /// The three item strings, in display order.
    pub fn items(&self) -> [String; 3] {
        let values = [
            (&self.labels.uptime, self.uptime_value()),
            (&self.labels.cpu, format!("{}%", self.cpu)),
            (&self.labels.memory, self.memory.clone()),
        ];
        values.map(|(label, value)| {
            if self.show_labels {
                format!("{label}: {value}")
            } else {
                value
            }
        })
    }

    pub fn text(&self) -> String {
        bracketed(&self.items().join(&self.separator), self.show_brackets)
    }

    pub fn render(&self) -> Element {
        let mut root = Element::new("div")
            .classes(["system-info", "inline-flex", "font-mono"])
            .class(self.size.text_class())
            .class(self.color.text_class());

        if self.show_brackets {
            root = root.child(Element::new("span").class("system-info-bracket").text("[ "));
        }
        for (i, item) in self.items().into_iter().enumerate() {
            if i > 0 {
                root = root.child(
                    Element::new("span")
                        .class("system-info-separator")
                        .text(self.separator.clone()),
                );
            }
            root = root.child(Element::new("span").class("system-info-item").text(item));
        }
        if self.show_brackets {
            root = root.child(Element::new("span").class("system-info-bracket").text(" ]"));
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_for_every_status() {
        for status in StatusToken::ALL {
            let upper = status.look().label.to_uppercase();
            let mut props = TerminalStatus::new(status);
            assert_eq!(props.label_text(), format!("[ {upper} ]"));
            props.show_brackets = false;
            assert_eq!(props.label_text(), upper);
        }
    }

    #[test]
    fn test_custom_label_is_uppercased() {
        let props = TerminalStatus {
            label: Some("Syncing".into()),
            ..Default::default()
        };
        assert_eq!(props.label_text(), "[ SYNCING ]");
    }

    #[test]
    fn test_hiding_indicator_keeps_label() {
        let shown = TerminalStatus::new(StatusToken::Warning).render();
        assert_eq!(shown.find_by_class(INDICATOR_CLASS).len(), 1);

        let hidden = TerminalStatus {
            status: StatusToken::Warning,
            show_indicator: false,
            ..Default::default()
        }
        .render();
        assert!(hidden.find_by_class(INDICATOR_CLASS).is_empty());
        assert_eq!(hidden.text_content(), "[ WARNING ]");
    }

    #[test]
    fn test_indicator_classes() {
        let el = TerminalStatus {
            status: StatusToken::Loading,
            size: Size::Lg,
            ..Default::default()
        }
        .render();
        let dot = el.first_by_class(INDICATOR_CLASS).unwrap();
        assert!(dot.has_class("h-3"));
        assert!(dot.has_class("bg-matrix-green-200"));
        assert!(dot.has_class("animate-pulse"));

        let idle = TerminalStatus::new(StatusToken::Idle).render();
        assert!(!idle.first_by_class(INDICATOR_CLASS).unwrap().has_class("animate-pulse"));
    }

    #[test]
    fn test_color_override() {
        let el = TerminalStatus {
            status: StatusToken::Online,
            color: Some(PaletteToken::Amber),
            ..Default::default()
        }
        .render();
        let label = el.first_by_class("status-label").unwrap();
        assert!(label.has_class("text-matrix-amber"));
        assert!(!label.has_class("text-matrix-green-300"));
    }

    #[test]
    fn test_system_info_values() {
        let info = SystemInfo {
            uptime: 7200,
            cpu: 15.3,
            memory: "256KB".into(),
            ..Default::default()
        };
        let text = info.render().text_content();
        assert!(text.contains("7200"));
        assert!(text.contains("15.3%"));
        assert!(text.contains("256KB"));
        assert_eq!(text, "[ UPTIME: 7200 | CPU: 15.3% | MEM: 256KB ]");
        assert_eq!(text, info.text());
    }

    #[test]
    fn test_system_info_without_labels_or_brackets() {
        let info = SystemInfo {
            uptime: 3725,
            cpu: 99.0,
            memory: "1MB".into(),
            separator: " / ".into(),
            show_labels: false,
            show_brackets: false,
            uptime_format: UptimeFormat::Clock,
            ..Default::default()
        };
        assert_eq!(info.text(), "01:02:05 / 99% / 1MB");
        assert!(info.render().find_by_class("system-info-bracket").is_empty());
    }

    #[test]
    fn test_status_deserialize_camel_case() {
        let props: TerminalStatus =
            serde_json::from_str(r#"{"status": "error", "showIndicator": false}"#).unwrap();
        assert_eq!(props.status, StatusToken::Error);
        assert!(!props.show_indicator);
        assert!(props.show_brackets);
    }
}
