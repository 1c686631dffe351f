//! matrix-tui: Terminal rendering for the matrix component kit
//!
//! This crate provides:
//! - ratatui widgets for every component, sharing layout with the engine
//! - CRT effects applied to buffer regions
//! - An interactive catalog preview with live boot playback, stopwatch and input

mod app;
mod event;
pub mod layout;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

use screens::Screen as ScreenTrait;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use matrix_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use matrix_engine::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the interactive component preview.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit, including on error.
pub async fn run_preview(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let mut events = EventHandler::new(config.preview.tick_rate_ms);
    tracing::info!(entries = app.entries.len(), "preview started");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            screens::catalog::CatalogScreen.render(app, area, buf);
            if app.show_help {
                screens::render_help_overlay(area, buf, &app.theme);
            }
        })?;

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if !(app.editing && handle_input_key(app, key)) {
                    app.handle_action(key_to_action(key));
                }
            }
            Event::Tick => app.tick(),
            Event::Resize(_, _) => {}
        }

        app.start_requested_boot();
        app.process_boot_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route a key to the input being edited.
/// Returns true if the key was consumed.
fn handle_input_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    let state = &mut app.input_state;
    match key.code {
        KeyCode::Esc => false,
        KeyCode::Tab => {
            state.toggle_visibility();
            true
        }
        KeyCode::Enter => {
            let value = state.submit();
            tracing::debug!(chars = value.chars().count(), "input submitted");
            true
        }
        KeyCode::Char(c) => {
            state.insert(c);
            true
        }
        KeyCode::Backspace => {
            state.backspace();
            true
        }
        KeyCode::Delete => {
            state.delete();
            true
        }
        KeyCode::Left => {
            state.move_left();
            true
        }
        KeyCode::Right => {
            state.move_right();
            true
        }
        KeyCode::Home => {
            state.move_home();
            true
        }
        KeyCode::End => {
            state.move_end();
            true
        }
        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_input_keys_edit_state() {
        let mut app = App::new_for_test();
        app.input_state = matrix_engine::components::InputState::new("");
        app.editing = true;

        for c in "zion".chars() {
            assert!(handle_input_key(&mut app, key(KeyCode::Char(c))));
        }
        assert!(handle_input_key(&mut app, key(KeyCode::Backspace)));
        assert!(handle_input_key(&mut app, key(KeyCode::Home)));
        assert!(handle_input_key(&mut app, key(KeyCode::Delete)));
        assert_eq!(app.input_state.value(), "io");

        assert!(handle_input_key(&mut app, key(KeyCode::Tab)));
        assert!(app.input_state.is_revealed());

        assert!(handle_input_key(&mut app, key(KeyCode::Enter)));
        assert!(app.input_state.is_empty());
    }

    #[test]
    fn test_escape_and_ctrl_fall_through() {
        let mut app = App::new_for_test();
        app.editing = true;
        assert!(!handle_input_key(&mut app, key(KeyCode::Esc)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_input_key(&mut app, ctrl_c));
    }
}
