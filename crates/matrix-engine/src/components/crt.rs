//! CRT monitor effect layers.
//!
//! Up to three overlays (flicker, scanlines, vignette) are stacked behind
//! the content. Each is toggled on its own and none affects layout.

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::tokens::{FlickerIntensity, PaletteToken};

/// One visual overlay layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    Flicker(FlickerIntensity),
    Scanlines { opacity: f32 },
    Vignette,
}

impl Overlay {
    pub fn classes(self) -> Vec<String> {
        let mut classes: Vec<String> = ["crt-overlay", "pointer-events-none", "absolute", "inset-0", "z-0"]
            .into_iter()
            .map(String::from)
            .collect();
        match self {
            Self::Flicker(intensity) => {
                classes.push("crt-flicker".into());
                classes.push(intensity.animation_class().into());
            }
            Self::Scanlines { opacity } => {
                classes.push("crt-scanlines".into());
                classes.push("bg-scanlines".into());
                classes.push(opacity_class(opacity));
            }
            Self::Vignette => {
                classes.push("crt-vignette".into());
                classes.push("bg-vignette".into());
            }
        }
        classes
    }
}

/// Clamp an opacity into `0.0..=1.0`. NaN counts as fully transparent.
pub fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

/// Quantize an opacity to the nearest `opacity-N` class (steps of 5).
pub fn opacity_class(opacity: f32) -> String {
    let step = (clamp_opacity(opacity) * 20.0).round() as u32 * 5;
    format!("opacity-{step}")
}

/// Full-viewport CRT effect wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrtMonitor {
    pub flicker: bool,
    pub flicker_intensity: FlickerIntensity,
    pub scanlines: bool,
    pub scanline_opacity: f32,
    pub vignette: bool,
    pub color: PaletteToken,
    /// Text lines shown on the screen when rendered standalone.
    pub content: Vec<String>,
}

impl Default for CrtMonitor {
    fn default() -> Self {
        Self {
            flicker: true,
            flicker_intensity: FlickerIntensity::default(),
            scanlines: true,
            scanline_opacity: 0.1,
            vignette: true,
            color: PaletteToken::default(),
            content: Vec::new(),
        }
    }
}

impl CrtMonitor {
    /// Enabled overlays, bottom-most first.
    pub fn layers(&self) -> Vec<Overlay> {
        let mut layers = Vec::with_capacity(3);
        if self.flicker {
            layers.push(Overlay::Flicker(self.flicker_intensity));
        }
        if self.scanlines {
            layers.push(Overlay::Scanlines {
                opacity: clamp_opacity(self.scanline_opacity),
            });
        }
        if self.vignette {
            layers.push(Overlay::Vignette);
        }
        layers
    }

    /// Whether the flicker frame is showing at `tick`.
    pub fn flicker_active(&self, tick: u64) -> bool {
        if !self.flicker {
            return false;
        }
        let period = self.flicker_intensity.period_ticks();
        tick % period == period - 1
    }

    /// Wrap already-rendered content with the overlays.
    pub fn render_with(&self, content: Element) -> Element {
        let overlays = self
            .layers()
            .into_iter()
            .map(|layer| Element::new("div").classes(layer.classes()).attr("aria-hidden", "true"));

        Element::new("div")
            .classes(["crt-monitor", "relative", "overflow-hidden", "bg-black"])
            .class(self.color.text_class())
            .children(overlays)
            .child(
                Element::new("div")
                    .classes(["crt-content", "relative", "z-10"])
                    .child(content),
            )
    }

    pub fn render(&self) -> Element {
        let screen = Element::new("div").class("crt-screen").children(
            self.content
                .iter()
                .map(|line| Element::new("p").class("crt-line").text(line.clone())),
        );
        self.render_with(screen)
    }
}
