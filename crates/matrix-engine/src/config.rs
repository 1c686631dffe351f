//! Configuration for matrix.
//!
//! Holds the kit-wide defaults a host applies when props leave something
//! unset, plus terminal preview settings. Stored as JSON, by default in
//! `.matrix/config.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::Component;
use crate::tokens::{FlickerIntensity, FrameStyle, PaletteToken};

/// Directory holding matrix state, relative to the working directory.
pub const CONFIG_DIR: &str = ".matrix";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeDefaults,

    #[serde(default)]
    pub crt: CrtDefaults,

    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Defaults for props that most components share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefaults {
    #[serde(default)]
    pub color: PaletteToken,

    #[serde(default)]
    pub frame_style: FrameStyle,

    #[serde(default = "default_true")]
    pub brackets: bool,

    #[serde(default)]
    pub glow: bool,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            color: PaletteToken::default(),
            frame_style: FrameStyle::default(),
            brackets: true,
            glow: false,
        }
    }
}

impl ThemeDefaults {
    /// Fill in props the component leaves at the kit default.
    ///
    /// A prop still equal to the kit default counts as unset, so a
    /// default theme leaves every component unchanged.
    pub fn apply(&self, component: &mut Component) {
        let kit = Self::default();
        let color = |value: &mut PaletteToken| fill(value, kit.color, self.color);
        let brackets = |value: &mut bool| fill(value, kit.brackets, self.brackets);
        let glow = |value: &mut bool| fill(value, kit.glow, self.glow);

        match component {
            Component::AsciiFrame(props) => {
                color(&mut props.color);
                fill(&mut props.style, kit.frame_style, self.frame_style);
                glow(&mut props.glow);
            }
            Component::AsciiBox(props) => {
                color(&mut props.color);
                fill(&mut props.style, kit.frame_style, self.frame_style);
                glow(&mut props.glow);
            }
            // Status color follows the status unless overridden.
            Component::TerminalStatus(props) => brackets(&mut props.show_brackets),
            Component::SystemInfo(props) => {
                color(&mut props.color);
                brackets(&mut props.show_brackets);
            }
            Component::CrtMonitor(props) => color(&mut props.color),
            Component::BootSequence(props) => color(&mut props.color),
            Component::TimerDisplay(props) => {
                color(&mut props.color);
                brackets(&mut props.show_brackets);
            }
            Component::KeyboardHints(props) => {
                color(&mut props.color);
                brackets(&mut props.show_brackets);
            }
            Component::TerminalInput(props) => color(&mut props.color),
            Component::TerminalButton(props) => brackets(&mut props.show_brackets),
            Component::TerminalText(props) => {
                color(&mut props.color);
                glow(&mut props.glow);
            }
            Component::ProgressBar(props) => {
                color(&mut props.color);
                brackets(&mut props.show_brackets);
            }
        }
    }
}

fn fill<T: PartialEq + Copy>(value: &mut T, kit: T, configured: T) {
    if *value == kit {
        *value = configured;
    }
}

/// Defaults for the CRT overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrtDefaults {
    #[serde(default = "default_true")]
    pub flicker: bool,

    #[serde(default)]
    pub flicker_intensity: FlickerIntensity,

    #[serde(default = "default_true")]
    pub scanlines: bool,

    #[serde(default = "default_scanline_opacity")]
    pub scanline_opacity: f32,

    #[serde(default = "default_true")]
    pub vignette: bool,
}

impl Default for CrtDefaults {
    fn default() -> Self {
        Self {
            flicker: true,
            flicker_intensity: FlickerIntensity::default(),
            scanlines: true,
            scanline_opacity: default_scanline_opacity(),
            vignette: true,
        }
    }
}

/// Which glyphs the terminal target may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlyphMode {
    /// Box-drawing characters and block glyphs.
    #[default]
    Unicode,
    /// Plain ASCII only (also forced by `NO_COLOR`).
    Ascii,
}

/// Terminal preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default)]
    pub glyphs: GlyphMode,

    /// Event loop tick in milliseconds; drives timers and flicker.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scanline_opacity() -> f32 {
    0.1
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default config");
                Self::default()
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides. `NO_COLOR` forces ASCII glyphs.
    pub fn apply_env(&mut self) {
        self.apply_no_color(std::env::var_os("NO_COLOR").is_some());
    }

    fn apply_no_color(&mut self, no_color: bool) {
        if no_color {
            self.preview.glyphs = GlyphMode::Ascii;
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Serialize error.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
