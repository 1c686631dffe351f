//! Closed token sets shared by every component.
//!
//! Tokens are the whole theming vocabulary of the kit:
//! - [`PaletteToken`] - foreground, background, border and glow classes
//! - [`FrameStyle`] - box-drawing character sets for framed text
//! - [`StatusToken`] - label, color and animation for status displays
//! - [`Size`] / [`FlickerIntensity`] - small enumerated modifiers
//!
//! Every mapping is a pure lookup. Unknown names never reach a renderer:
//! they fail at parse time with [`TokenError::Unknown`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a token from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The name is not part of the token set.
    #[error("unknown {kind} token: {name}")]
    Unknown { kind: &'static str, name: String },
}

impl TokenError {
    fn unknown(kind: &'static str, name: &str) -> Self {
        Self::Unknown {
            kind,
            name: name.to_string(),
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Themed color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaletteToken {
    #[serde(rename = "green-100")]
    Green100,
    #[serde(rename = "green-200")]
    Green200,
    #[default]
    #[serde(rename = "green-300")]
    Green300,
    #[serde(rename = "green-400")]
    Green400,
    #[serde(rename = "amber")]
    Amber,
    #[serde(rename = "red")]
    Red,
}

impl PaletteToken {
    /// Every palette token, dimmest green first.
    pub const ALL: [PaletteToken; 6] = [
        Self::Green100,
        Self::Green200,
        Self::Green300,
        Self::Green400,
        Self::Amber,
        Self::Red,
    ];

    /// Token name as used in props.
    pub fn name(self) -> &'static str {
        match self {
            Self::Green100 => "green-100",
            Self::Green200 => "green-200",
            Self::Green300 => "green-300",
            Self::Green400 => "green-400",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }

    /// Foreground color class.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Green100 => "text-matrix-green-100",
            Self::Green200 => "text-matrix-green-200",
            Self::Green300 => "text-matrix-green-300",
            Self::Green400 => "text-matrix-green-400",
            Self::Amber => "text-matrix-amber",
            Self::Red => "text-matrix-red",
        }
    }

    /// Background color class (indicator dots, filled buttons).
    pub fn bg_class(self) -> &'static str {
        match self {
            Self::Green100 => "bg-matrix-green-100",
            Self::Green200 => "bg-matrix-green-200",
            Self::Green300 => "bg-matrix-green-300",
            Self::Green400 => "bg-matrix-green-400",
            Self::Amber => "bg-matrix-amber",
            Self::Red => "bg-matrix-red",
        }
    }

    /// Border color class.
    pub fn border_class(self) -> &'static str {
        match self {
            Self::Green100 => "border-matrix-green-100",
            Self::Green200 => "border-matrix-green-200",
            Self::Green300 => "border-matrix-green-300",
            Self::Green400 => "border-matrix-green-400",
            Self::Amber => "border-matrix-amber",
            Self::Red => "border-matrix-red",
        }
    }

    /// Text-shadow glow class. The dimmest green never glows.
    pub fn glow_class(self) -> Option<&'static str> {
        match self {
            Self::Green100 => None,
            Self::Green200 => Some("glow-matrix-green-200"),
            Self::Green300 => Some("glow-matrix-green-300"),
            Self::Green400 => Some("glow-matrix-green-400"),
            Self::Amber => Some("glow-matrix-amber"),
            Self::Red => Some("glow-matrix-red"),
        }
    }

    /// Hex color, for stylesheet generation and terminal output.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green100 => "#0d4d1a",
            Self::Green200 => "#008f11",
            Self::Green300 => "#00ff41",
            Self::Green400 => "#8cff9e",
            Self::Amber => "#ffb000",
            Self::Red => "#ff3333",
        }
    }

    /// RGB components of [`hex`](Self::hex).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green100 => (13, 77, 26),
            Self::Green200 => (0, 143, 17),
            Self::Green300 => (0, 255, 65),
            Self::Green400 => (140, 255, 158),
            Self::Amber => (255, 176, 0),
            Self::Red => (255, 51, 51),
        }
    }
}

impl fmt::Display for PaletteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| TokenError::unknown("palette", s))
    }
}

// ============================================================================
// Frame styles
// ============================================================================

/// Border-drawing style for framed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameStyle {
    #[default]
    Single,
    Double,
    Rounded,
    Heavy,
    Dashed,
    /// No built-in characters; everything comes from [`CustomChars`].
    Custom,
}

impl FrameStyle {
    pub const ALL: [FrameStyle; 6] = [
        Self::Single,
        Self::Double,
        Self::Rounded,
        Self::Heavy,
        Self::Dashed,
        Self::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Rounded => "rounded",
            Self::Heavy => "heavy",
            Self::Dashed => "dashed",
            Self::Custom => "custom",
        }
    }

    /// Built-in character set. `Custom` yields an all-empty set.
    pub fn chars(self) -> FrameChars {
        let (tl, tr, bl, br, h, v) = match self {
            Self::Single => ("┌", "┐", "└", "┘", "─", "│"),
            Self::Double => ("╔", "╗", "╚", "╝", "═", "║"),
            Self::Rounded => ("╭", "╮", "╰", "╯", "─", "│"),
            Self::Heavy => ("┏", "┓", "┗", "┛", "━", "┃"),
            Self::Dashed => ("┌", "┐", "└", "┘", "╌", "╎"),
            Self::Custom => ("", "", "", "", "", ""),
        };
        FrameChars::new(tl, tr, bl, br, h, v)
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameStyle {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| TokenError::unknown("frame style", s))
    }
}

/// The six characters a frame is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameChars {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub horizontal: String,
    pub vertical: String,
}

impl FrameChars {
    pub fn new(tl: &str, tr: &str, bl: &str, br: &str, h: &str, v: &str) -> Self {
        Self {
            top_left: tl.to_string(),
            top_right: tr.to_string(),
            bottom_left: bl.to_string(),
            bottom_right: br.to_string(),
            horizontal: h.to_string(),
            vertical: v.to_string(),
        }
    }

    /// Plain ASCII set used when box-drawing glyphs are unavailable.
    pub fn ascii() -> Self {
        Self::new("+", "+", "+", "+", "-", "|")
    }

    /// True when all six characters are present.
    pub fn is_complete(&self) -> bool {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
            &self.horizontal,
            &self.vertical,
        ]
        .iter()
        .all(|c| !c.is_empty())
    }

    /// Replace every character the overrides specify.
    #[must_use]
    pub fn overlay(mut self, overrides: &CustomChars) -> Self {
        let slots = [
            (&mut self.top_left, &overrides.top_left),
            (&mut self.top_right, &overrides.top_right),
            (&mut self.bottom_left, &overrides.bottom_left),
            (&mut self.bottom_right, &overrides.bottom_right),
            (&mut self.horizontal, &overrides.horizontal),
            (&mut self.vertical, &overrides.vertical),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
        self
    }
}

/// Partial character override. Any subset may be given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomChars {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
}

impl CustomChars {
    /// Override all six characters at once.
    pub fn full(tl: &str, tr: &str, bl: &str, br: &str, h: &str, v: &str) -> Self {
        Self {
            top_left: Some(tl.to_string()),
            top_right: Some(tr.to_string()),
            bottom_left: Some(bl.to_string()),
            bottom_right: Some(br.to_string()),
            horizontal: Some(h.to_string()),
            vertical: Some(v.to_string()),
        }
    }
}

/// Resolve the characters for a style plus optional overrides.
///
/// Returns `None` unless all six characters end up non-empty.
pub fn resolve_frame_chars(
    style: FrameStyle,
    overrides: Option<&CustomChars>,
) -> Option<FrameChars> {
    let chars = match overrides {
        Some(overrides) => style.chars().overlay(overrides),
        None => style.chars(),
    };
    chars.is_complete().then_some(chars)
}

// ============================================================================
// Status
// ============================================================================

/// Status display token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusToken {
    #[default]
    Online,
    Offline,
    Warning,
    Error,
    Loading,
    Idle,
}

/// What a status token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLook {
    pub label: &'static str,
    pub color: PaletteToken,
    pub animate: bool,
}

impl StatusToken {
    pub const ALL: [StatusToken; 6] = [
        Self::Online,
        Self::Offline,
        Self::Warning,
        Self::Error,
        Self::Loading,
        Self::Idle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Loading => "loading",
            Self::Idle => "idle",
        }
    }

    pub fn look(self) -> StatusLook {
        let (label, color, animate) = match self {
            Self::Online => ("ONLINE", PaletteToken::Green300, true),
            Self::Offline => ("OFFLINE", PaletteToken::Green100, false),
            Self::Warning => ("WARNING", PaletteToken::Amber, false),
            Self::Error => ("ERROR", PaletteToken::Red, true),
            Self::Loading => ("LOADING", PaletteToken::Green200, true),
            Self::Idle => ("IDLE", PaletteToken::Green200, false),
        };
        StatusLook {
            label,
            color,
            animate,
        }
    }
}

impl fmt::Display for StatusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatusToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| TokenError::unknown("status", s))
    }
}

// ============================================================================
// Modifiers
// ============================================================================

/// Component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Sm => "text-xs",
            Self::Md => "text-sm",
            Self::Lg => "text-base",
        }
    }

    /// Height and width classes for a status indicator dot.
    pub fn indicator_classes(self) -> [&'static str; 2] {
        match self {
            Self::Sm => ["h-1.5", "w-1.5"],
            Self::Md => ["h-2", "w-2"],
            Self::Lg => ["h-3", "w-3"],
        }
    }

    /// Padding classes for clickable components.
    pub fn padding_classes(self) -> [&'static str; 2] {
        match self {
            Self::Sm => ["px-2", "py-0.5"],
            Self::Md => ["px-4", "py-1"],
            Self::Lg => ["px-6", "py-2"],
        }
    }
}

impl FromStr for Size {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Sm, Self::Md, Self::Lg]
            .into_iter()
            .find(|size| size.name() == s)
            .ok_or_else(|| TokenError::unknown("size", s))
    }
}

/// Strength of the CRT flicker overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlickerIntensity {
    #[default]
    Low,
    Medium,
    High,
}

impl FlickerIntensity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn animation_class(self) -> &'static str {
        match self {
            Self::Low => "animate-flicker-low",
            Self::Medium => "animate-flicker-medium",
            Self::High => "animate-flicker-high",
        }
    }

    /// Ticks between flicker frames on a terminal.
    pub fn period_ticks(self) -> u64 {
        match self {
            Self::Low => 16,
            Self::Medium => 8,
            Self::High => 4,
        }
    }
}

impl FromStr for FlickerIntensity {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Low, Self::Medium, Self::High]
            .into_iter()
            .find(|intensity| intensity.name() == s)
            .ok_or_else(|| TokenError::unknown("flicker intensity", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_round_trips_through_name() {
        for token in PaletteToken::ALL {
            assert_eq!(token.name().parse::<PaletteToken>(), Ok(token));
        }
    }

    #[test]
    fn test_palette_unknown_name() {
        let err = "green-500".parse::<PaletteToken>().unwrap_err();
        assert_eq!(err.to_string(), "unknown palette token: green-500");
    }

    #[test]
    fn test_palette_serde_names() {
        let json = serde_json::to_string(&PaletteToken::Green100).unwrap();
        assert_eq!(json, "\"green-100\"");
        let token: PaletteToken = serde_json::from_str("\"amber\"").unwrap();
        assert_eq!(token, PaletteToken::Amber);
        assert!(serde_json::from_str::<PaletteToken>("\"blue\"").is_err());
    }

    #[test]
    fn test_glow_only_above_dimmest_green() {
        assert_eq!(PaletteToken::Green100.glow_class(), None);
        assert_eq!(
            PaletteToken::Green300.glow_class(),
            Some("glow-matrix-green-300")
        );
    }

    #[test]
    fn test_builtin_styles_are_complete() {
        for style in FrameStyle::ALL {
            if style == FrameStyle::Custom {
                assert!(!style.chars().is_complete());
            } else {
                assert!(style.chars().is_complete(), "{style} should be complete");
            }
        }
    }

    #[test]
    fn test_resolve_custom_needs_all_six() {
        let partial = CustomChars {
            top_left: Some("*".into()),
            ..Default::default()
        };
        assert!(resolve_frame_chars(FrameStyle::Custom, Some(&partial)).is_none());
        assert!(resolve_frame_chars(FrameStyle::Custom, None).is_none());

        let full = CustomChars::full("*", "*", "*", "*", "=", "!");
        let chars = resolve_frame_chars(FrameStyle::Custom, Some(&full)).unwrap();
        assert_eq!(chars.horizontal, "=");
    }

    #[test]
    fn test_overrides_replace_subset() {
        let overrides = CustomChars {
            horizontal: Some("~".into()),
            ..Default::default()
        };
        let chars = resolve_frame_chars(FrameStyle::Double, Some(&overrides)).unwrap();
        assert_eq!(chars.horizontal, "~");
        assert_eq!(chars.top_left, "╔");
    }

    #[test]
    fn test_empty_override_suppresses_frame() {
        let overrides = CustomChars {
            horizontal: Some(String::new()),
            ..Default::default()
        };
        assert!(resolve_frame_chars(FrameStyle::Single, Some(&overrides)).is_none());
    }

    #[test]
    fn test_status_looks() {
        let online = StatusToken::Online.look();
        assert_eq!(online.label, "ONLINE");
        assert!(online.animate);
        assert_eq!(StatusToken::Warning.look().color, PaletteToken::Amber);
        assert_eq!(StatusToken::Error.look().color, PaletteToken::Red);
        assert!(!StatusToken::Idle.look().animate);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("loading".parse::<StatusToken>(), Ok(StatusToken::Loading));
        assert!("rebooting".parse::<StatusToken>().is_err());
    }

    #[test]
    fn test_flicker_periods_shrink_with_intensity() {
        assert!(FlickerIntensity::Low.period_ticks() > FlickerIntensity::Medium.period_ticks());
        assert!(FlickerIntensity::Medium.period_ticks() > FlickerIntensity::High.period_ticks());
    }
}
