//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Palette token to terminal color mapping (Matrix/High Contrast)
//! - [`IconSet`] - Indicator, cursor and bar glyphs with ASCII fallback
//! - [`BorderSet`] - Frame characters and pane borders with ASCII fallback

mod borders;
mod colors;
mod icons;

pub use borders::BorderSet;
pub use colors::Theme;
pub use icons::IconSet;
