//! matrix-engine: Token resolution and prop-driven rendering
//!
//! This crate holds everything about the component kit that does not depend
//! on a terminal:
//! - Closed token sets (palette, frame styles, statuses) and their mappings
//! - Component props with defaults, rendered to [`markup::Element`] trees
//! - Boot sequence scheduling and real-time playback
//! - Configuration

pub mod components;
pub mod config;
pub mod markup;
pub mod playback;
pub mod text;
pub mod tokens;

// Re-export commonly used types
pub use components::{catalog, CatalogEntry, Component};
pub use config::{Config, ConfigError, GlyphMode};
pub use markup::{ClassList, Element, Node};
pub use playback::{BootEvent, BootPlayer, BootSchedule};
pub use tokens::{
    resolve_frame_chars, CustomChars, FlickerIntensity, FrameChars, FrameStyle, PaletteToken,
    Size, StatusToken, TokenError,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
