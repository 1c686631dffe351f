//! Terminal widgets for the component kit.
//!
//! Each widget borrows a component's props and draws it into a ratatui
//! buffer, using the same text the markup renderer produces:
//! - [`FrameView`] - ASCII frames and boxes
//! - [`StatusView`] / [`SystemInfoView`] - Status indicator and system readout
//! - [`CrtOverlay`] / [`CrtView`] - Scanlines, vignette and flicker over a region
//! - [`BootView`] - Boot sequence with a revealed-line count
//! - [`TimerView`], [`HintsView`], [`InputView`], [`ButtonView`], [`TextView`], [`ProgressView`]
//! - [`ComponentView`] - Dispatch over any [`matrix_engine::Component`]
//! - [`Pane`] - Bordered pane with optional title

mod boot;
mod button;
mod component;
mod crt;
mod frame;
mod hints;
mod input;
mod pane;
mod progress;
mod status;
mod text;
mod timer;

pub use boot::BootView;
pub use button::ButtonView;
pub use component::ComponentView;
pub use crt::{CrtOverlay, CrtView};
pub use frame::FrameView;
pub use hints::HintsView;
pub use input::InputView;
pub use pane::Pane;
pub use progress::ProgressView;
pub use status::{StatusView, SystemInfoView};
pub use text::TextView;
pub use timer::TimerView;

/// Ticks per half-period of pulse and blink animations.
pub(crate) const BLINK_TICKS: u64 = 5;

/// Whether a blinking element is in its "off" half at `tick`.
pub(crate) fn blink_off(tick: u64) -> bool {
    (tick / BLINK_TICKS) % 2 == 1
}
