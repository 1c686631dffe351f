//! Matrix color palette for the TUI.
//!
//! Palette tokens resolve to the engine's RGB values; the high contrast
//! theme swaps them for the terminal's named colors.

use matrix_engine::PaletteToken;
use ratatui::style::{Color, Modifier, Style};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,

    high_contrast: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}

fn rgb(token: PaletteToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb(r, g, b)
}

impl Theme {
    /// Phosphor green on black (default).
    pub fn matrix() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(0, 0, 0),
            surface: Color::Rgb(4, 20, 8),

            // Foregrounds
            text: rgb(PaletteToken::Green300),
            subtext: rgb(PaletteToken::Green200),
            muted: rgb(PaletteToken::Green100),

            // Borders
            border: rgb(PaletteToken::Green100),
            border_focused: rgb(PaletteToken::Green300),

            high_contrast: false,
        }
    }

    /// Named terminal colors only, for limited palettes.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Black,

            text: Color::LightGreen,
            subtext: Color::Green,
            muted: Color::DarkGray,

            border: Color::Green,
            border_focused: Color::LightGreen,

            high_contrast: true,
        }
    }

    /// Terminal color for a palette token.
    pub fn color(&self, token: PaletteToken) -> Color {
        if !self.high_contrast {
            return rgb(token);
        }
        match token {
            PaletteToken::Green100 => Color::DarkGray,
            PaletteToken::Green200 => Color::Green,
            PaletteToken::Green300 | PaletteToken::Green400 => Color::LightGreen,
            PaletteToken::Amber => Color::Yellow,
            PaletteToken::Red => Color::LightRed,
        }
    }

    /// Foreground style for a token.
    pub fn fg(&self, token: PaletteToken) -> Style {
        Style::default().fg(self.color(token))
    }

    /// Foreground style with glow rendered as bold, when the token glows.
    pub fn glow(&self, token: PaletteToken, glow: bool) -> Style {
        let style = self.fg(token);
        if glow && token.glow_class().is_some() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_theme_uses_token_rgb() {
        let theme = Theme::matrix();
        assert_eq!(theme.color(PaletteToken::Green300), Color::Rgb(0, 255, 65));
        assert_eq!(theme.color(PaletteToken::Amber), Color::Rgb(255, 176, 0));
    }

    #[test]
    fn test_high_contrast_uses_named_colors() {
        let theme = Theme::high_contrast();
        assert_eq!(theme.color(PaletteToken::Red), Color::LightRed);
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_default_is_matrix() {
        assert!(matches!(Theme::default().base, Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_glow_is_bold_only_when_token_glows() {
        let theme = Theme::default();
        assert!(theme
            .glow(PaletteToken::Green300, true)
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(!theme
            .glow(PaletteToken::Green100, true)
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(!theme
            .glow(PaletteToken::Green300, false)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
