//! Character-cell progress bar: `[██████░░░░] 60%`.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::tokens::PaletteToken;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressBar {
    /// Percent complete; clamped to `0..=100`.
    pub value: f64,
    /// Bar width in cells, excluding brackets and percent.
    pub width: usize,
    pub fill: String,
    pub empty: String,
    pub show_percent: bool,
    pub show_brackets: bool,
    pub color: PaletteToken,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 0.0,
            width: 20,
            fill: "█".into(),
            empty: "░".into(),
            show_percent: true,
            show_brackets: true,
            color: PaletteToken::default(),
        }
    }
}

impl ProgressBar {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Clamped value; NaN counts as zero.
    pub fn percent(&self) -> f64 {
        if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 100.0)
        }
    }

    pub fn filled_cells(&self) -> usize {
        let cells = (self.percent() / 100.0 * self.width as f64).round() as usize;
        cells.min(self.width)
    }

    pub fn bar_text(&self) -> String {
        let filled = self.filled_cells();
        let bar = format!(
            "{}{}",
            self.fill.repeat(filled),
            self.empty.repeat(self.width - filled)
        );
        if self.show_brackets {
            format!("[{bar}]")
        } else {
            bar
        }
    }

    pub fn percent_text(&self) -> String {
        format!("{:.0}%", self.percent())
    }

    pub fn text(&self) -> String {
        if self.show_percent {
            format!("{} {}", self.bar_text(), self.percent_text())
        } else {
            self.bar_text()
        }
    }

    pub fn render(&self) -> Element {
        Element::new("div")
            .classes(["progress-bar", "font-mono", "whitespace-pre"])
            .class(self.color.text_class())
            .attr("role", "progressbar")
            .attr("aria-valuemin", "0")
            .attr("aria-valuemax", "100")
            .attr("aria-valuenow", self.percent_text().trim_end_matches('%').to_string())
            .child(Element::new("span").class("progress-bar-track").text(self.bar_text()))
            .child_opt(self.show_percent.then(|| {
                Element::new("span")
                    .class("progress-bar-percent")
                    .text(format!(" {}", self.percent_text()))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let bar = ProgressBar {
            width: 10,
            ..ProgressBar::new(60.0)
        };
        assert_eq!(bar.text(), "[██████░░░░] 60%");
        assert_eq!(bar.render().text_content(), bar.text());
    }

    #[test]
    fn test_value_is_clamped() {
        let over = ProgressBar {
            width: 4,
            ..ProgressBar::new(250.0)
        };
        assert_eq!(over.bar_text(), "[████]");
        assert_eq!(over.percent_text(), "100%");

        let under = ProgressBar {
            width: 4,
            ..ProgressBar::new(-5.0)
        };
        assert_eq!(under.filled_cells(), 0);

        assert_eq!(ProgressBar::new(f64::NAN).percent(), 0.0);
    }

    #[test]
    fn test_custom_chars_and_no_percent() {
        let bar = ProgressBar {
            width: 4,
            fill: "#".into(),
            empty: ".".into(),
            show_percent: false,
            show_brackets: false,
            ..ProgressBar::new(50.0)
        };
        assert_eq!(bar.text(), "##..");
    }

    #[test]
    fn test_zero_width() {
        let bar = ProgressBar {
            width: 0,
            ..ProgressBar::new(50.0)
        };
        assert_eq!(bar.bar_text(), "[]");
    }
}
