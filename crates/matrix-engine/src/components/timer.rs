//! Timer display and the stopwatch state that feeds it.

use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::components::status::clock_string;
use crate::markup::Element;
use crate::text::bracketed;
use crate::tokens::{PaletteToken, Size};

/// How a second count is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFormat {
    /// `MM:SS` under an hour, `HH:MM:SS` from then on.
    #[default]
    Auto,
    HhMmSs,
    /// Minutes are not wrapped into hours.
    MmSs,
    Seconds,
}

pub fn format_seconds(seconds: u64, format: TimeFormat) -> String {
    match format {
        TimeFormat::Auto if seconds >= 3600 => clock_string(seconds),
        TimeFormat::HhMmSs => clock_string(seconds),
        TimeFormat::Auto | TimeFormat::MmSs => format!("{:02}:{:02}", seconds / 60, seconds % 60),
        TimeFormat::Seconds => format!("{seconds}s"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimerDisplay {
    pub seconds: u64,
    pub format: TimeFormat,
    pub label: Option<String>,
    pub show_brackets: bool,
    pub color: PaletteToken,
    pub size: Size,
    /// How a live host runs the timer; a countdown starts at `seconds`.
    pub mode: TimerMode,
}

impl Default for TimerDisplay {
    fn default() -> Self {
        Self {
            seconds: 0,
            format: TimeFormat::default(),
            label: None,
            show_brackets: true,
            color: PaletteToken::default(),
            size: Size::default(),
            mode: TimerMode::default(),
        }
    }
}

impl TimerDisplay {
    pub fn new(seconds: u64) -> Self {
        Self {
            seconds,
            ..Default::default()
        }
    }

    /// A wall clock reading, always `HH:MM:SS`.
    pub fn clock(time: NaiveTime) -> Self {
        Self {
            seconds: u64::from(time.num_seconds_from_midnight()),
            format: TimeFormat::HhMmSs,
            ..Default::default()
        }
    }

    /// Stopwatch that drives this display in a live host.
    pub fn stopwatch(&self) -> Stopwatch {
        match self.mode {
            TimerMode::Up => Stopwatch::new(),
            TimerMode::Down => Stopwatch::countdown(Duration::from_secs(self.seconds)),
        }
    }

    pub fn time_text(&self) -> String {
        bracketed(&format_seconds(self.seconds, self.format), self.show_brackets)
    }

    /// Label (uppercased) followed by the time.
    pub fn text(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}", label.to_uppercase(), self.time_text()),
            None => self.time_text(),
        }
    }

    pub fn render(&self) -> Element {
        let label = self.label.as_ref().map(|label| {
            Element::new("span")
                .class("timer-label")
                .text(format!("{} ", label.to_uppercase()))
        });

        Element::new("span")
            .classes(["timer-display", "font-mono", "tabular-nums"])
            .class(self.size.text_class())
            .class(self.color.text_class())
            .attr("role", "timer")
            .child_opt(label)
            .child(Element::new("span").class("timer-value").text(self.time_text()))
    }
}

/// Direction a [`Stopwatch`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    #[default]
    Up,
    /// Counts down from the limit to zero.
    Down,
}

/// Elapsed-time state advanced by host ticks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stopwatch {
    mode: TimerMode,
    elapsed: Duration,
    limit: Option<Duration>,
    running: bool,
}

impl Stopwatch {
    /// Count-up stopwatch with no limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countdown(limit: Duration) -> Self {
        Self {
            mode: TimerMode::Down,
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Count-up stopwatch that stops at `limit`.
    #[must_use]
    pub fn with_limit(mut self, limit: Duration) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(&mut self) {
        if !self.is_finished() {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.limit.is_some_and(|limit| self.elapsed >= limit)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance by `dt` while running; stops at the limit.
    pub fn tick(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        self.elapsed += dt;
        if let Some(limit) = self.limit {
            if self.elapsed >= limit {
                self.elapsed = limit;
                self.running = false;
            }
        }
    }

    /// Seconds to show. Countdowns round up so the start value is shown in full.
    pub fn display_seconds(&self) -> u64 {
        match (self.mode, self.limit) {
            (TimerMode::Down, Some(limit)) => {
                let remaining = limit.saturating_sub(self.elapsed);
                remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
            }
            _ => self.elapsed.as_secs(),
        }
    }

    pub fn display(&self, format: TimeFormat) -> TimerDisplay {
        TimerDisplay {
            seconds: self.display_seconds(),
            format,
            mode: self.mode,
            ..Default::default()
        }
    }
}
