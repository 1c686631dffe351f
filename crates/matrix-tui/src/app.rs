//! Application state and update logic for the component preview.

use std::borrow::Cow;
use std::time::Duration;

use matrix_engine::components::{CrtMonitor, InputState, Stopwatch, TimerDisplay};
use matrix_engine::{catalog, BootEvent, BootPlayer, CatalogEntry, Component, Config};
use tokio::sync::mpsc;

use crate::event::Action;
use crate::theme::{BorderSet, IconSet, Theme};

/// Ticks a pressed button stays highlighted.
const PRESS_TICKS: u64 = 3;

/// A boot sequence being played in real time.
struct BootPlayback {
    _player: BootPlayer,
    events: mpsc::UnboundedReceiver<BootEvent>,
}

/// Preview application state.
pub struct App {
    /// Example configurations shown in the list.
    pub entries: Vec<CatalogEntry>,
    /// Index of the selected entry.
    pub selected: usize,
    /// Tick counter for animations.
    pub tick: u64,
    pub show_help: bool,
    pub should_quit: bool,

    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,

    /// Whether the CRT overlay covers the preview pane.
    pub crt_enabled: bool,
    /// Overlay settings, taken from the config.
    pub crt: CrtMonitor,

    /// Stopwatch behind the selected timer entry.
    pub stopwatch: Stopwatch,
    /// Live state for the input entry.
    pub input_state: InputState,
    /// Keys go to the input field instead of the catalog.
    pub editing: bool,
    /// Boot lines revealed by the running player; `None` shows the finished sequence.
    pub boot_revealed: Option<usize>,

    pressed_until: u64,
    boot: Option<BootPlayback>,
    boot_requested: bool,
    tick_rate: Duration,
}

impl App {
    /// Create the app from configuration.
    pub fn new(config: &Config) -> Self {
        let mut entries = catalog();
        for entry in &mut entries {
            config.theme.apply(&mut entry.component);
        }
        let input_state = Self::initial_input(entries.first());
        let stopwatch = Self::initial_stopwatch(entries.first());
        Self {
            entries,
            selected: 0,
            tick: 0,
            show_help: false,
            should_quit: false,
            theme: Theme::matrix(),
            icons: IconSet::new(config.preview.glyphs),
            borders: BorderSet::new(config.preview.glyphs),
            crt_enabled: true,
            crt: CrtMonitor {
                flicker: config.crt.flicker,
                flicker_intensity: config.crt.flicker_intensity,
                scanlines: config.crt.scanlines,
                scanline_opacity: config.crt.scanline_opacity,
                vignette: config.crt.vignette,
                color: config.theme.color,
                content: Vec::new(),
            },
            stopwatch,
            input_state,
            editing: false,
            boot_revealed: None,
            pressed_until: 0,
            boot: None,
            boot_requested: false,
            tick_rate: Duration::from_millis(config.preview.tick_rate_ms),
        }
    }

    /// App with default configuration, for tests.
    pub fn new_for_test() -> Self {
        Self::new(&Config::default())
    }

    fn initial_input(entry: Option<&CatalogEntry>) -> InputState {
        match entry.map(|e| &e.component) {
            Some(Component::TerminalInput(props)) => props.state(),
            _ => InputState::default(),
        }
    }

    fn initial_stopwatch(entry: Option<&CatalogEntry>) -> Stopwatch {
        match entry.map(|e| &e.component) {
            Some(Component::TimerDisplay(props)) => props.stopwatch(),
            _ => Stopwatch::new(),
        }
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.entries.get(self.selected)
    }

    /// Selected component with live state folded in.
    pub fn preview_component(&self) -> Option<Cow<'_, Component>> {
        let entry = self.selected_entry()?;
        let stopwatch_used =
            self.stopwatch.is_running() || self.stopwatch.elapsed() > Duration::ZERO;
        Some(match &entry.component {
            Component::TimerDisplay(props) if stopwatch_used => {
                Cow::Owned(Component::TimerDisplay(TimerDisplay {
                    seconds: self.stopwatch.display_seconds(),
                    ..props.clone()
                }))
            }
            component => Cow::Borrowed(component),
        })
    }

    /// Whether the selected button shows as pressed.
    pub fn button_pressed(&self) -> bool {
        self.tick < self.pressed_until
    }

    /// Whether a boot sequence is currently playing.
    pub fn boot_running(&self) -> bool {
        self.boot.is_some()
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            // Any key closes help
            self.show_help = false;
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Up => self.select(self.selected.saturating_sub(1)),
            Action::Down => {
                let last = self.entries.len().saturating_sub(1);
                self.select((self.selected + 1).min(last));
            }
            Action::Select => self.activate(),
            Action::Back => self.editing = false,
            Action::ToggleCrt => self.crt_enabled = !self.crt_enabled,
            Action::Reset => self.reset_preview(),
            Action::None => {}
        }
    }

    fn select(&mut self, index: usize) {
        if index != self.selected {
            self.selected = index;
            self.reset_preview();
        }
    }

    /// Act on the selected entry.
    fn activate(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        match entry.component {
            Component::BootSequence(_) => self.boot_requested = true,
            Component::TimerDisplay(_) => self.stopwatch.toggle(),
            Component::TerminalInput(ref props) if !props.disabled => self.editing = true,
            Component::TerminalButton(ref props) if !props.disabled => {
                self.pressed_until = self.tick + PRESS_TICKS;
            }
            _ => {}
        }
    }

    /// Put every live preview back to its initial state.
    pub fn reset_preview(&mut self) {
        self.stopwatch = Self::initial_stopwatch(self.selected_entry());
        self.input_state = Self::initial_input(self.selected_entry());
        self.editing = false;
        self.pressed_until = 0;
        self.boot = None;
        self.boot_revealed = None;
        self.boot_requested = false;
    }

    /// Start a requested boot playback. Must run inside a tokio runtime.
    pub fn start_requested_boot(&mut self) {
        if !std::mem::take(&mut self.boot_requested) {
            return;
        }
        let Some(Component::BootSequence(props)) = self.selected_entry().map(|e| &e.component)
        else {
            return;
        };
        let (player, events) = BootPlayer::start(props.schedule());
        tracing::debug!("boot playback started");
        self.boot = Some(BootPlayback {
            _player: player,
            events,
        });
        self.boot_revealed = Some(0);
    }

    /// Drain boot events delivered since the last call.
    pub fn process_boot_events(&mut self) {
        let Some(boot) = &mut self.boot else {
            return;
        };
        let mut complete = false;
        while let Ok(event) = boot.events.try_recv() {
            match event {
                BootEvent::Reveal(index) => self.boot_revealed = Some(index + 1),
                BootEvent::Complete => complete = true,
            }
        }
        if complete {
            tracing::debug!("boot playback complete");
            self.boot = None;
        }
    }

    /// Advance animations and timers by one tick.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.stopwatch.tick(self.tick_rate);
        self.process_boot_events();
    }
}
