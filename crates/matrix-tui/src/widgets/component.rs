//! Draw any component.

use matrix_engine::components::{AsciiBox, InputState};
use matrix_engine::Component;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{
    BootView, ButtonView, CrtView, FrameView, HintsView, InputView, ProgressView, StatusView,
    SystemInfoView, TextView, TimerView,
};
use crate::theme::{BorderSet, IconSet, Theme};

/// Dispatches a [`Component`] to its widget, forwarding live preview state
/// to the components that use it.
pub struct ComponentView<'a> {
    component: &'a Component,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    tick: u64,
    revealed: Option<usize>,
    input: Option<&'a InputState>,
    focused: bool,
}

impl<'a> ComponentView<'a> {
    pub fn new(
        component: &'a Component,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            component,
            theme,
            icons,
            borders,
            tick: 0,
            revealed: None,
            input: None,
            focused: false,
        }
    }

    /// Animation tick for pulses, blinks and flicker.
    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Boot lines revealed so far.
    #[must_use]
    pub fn revealed(mut self, revealed: Option<usize>) -> Self {
        self.revealed = revealed;
        self
    }

    /// Live state for input components.
    #[must_use]
    pub fn input(mut self, state: &'a InputState) -> Self {
        self.input = Some(state);
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ComponentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (theme, icons) = (self.theme, self.icons);
        match self.component {
            Component::AsciiFrame(props) => {
                let boxed = AsciiBox::from(props.clone());
                FrameView::new(&boxed, theme, self.borders).render(area, buf);
            }
            Component::AsciiBox(props) => FrameView::new(props, theme, self.borders).render(area, buf),
            Component::TerminalStatus(props) => StatusView::new(props, theme, icons)
                .tick(self.tick)
                .render(area, buf),
            Component::SystemInfo(props) => SystemInfoView::new(props, theme).render(area, buf),
            Component::CrtMonitor(props) => CrtView::new(props, theme)
                .tick(self.tick)
                .render(area, buf),
            Component::BootSequence(props) => {
                let view = BootView::new(props, theme, icons).tick(self.tick);
                match self.revealed {
                    Some(n) => view.revealed(n).render(area, buf),
                    None => view.render(area, buf),
                }
            }
            Component::TimerDisplay(props) => TimerView::new(props, theme).render(area, buf),
            Component::KeyboardHints(props) => HintsView::new(props, theme).render(area, buf),
            Component::TerminalInput(props) => {
                let view = InputView::new(props, theme, icons).focused(self.focused);
                match self.input {
                    Some(state) => view.state(state).render(area, buf),
                    None => view.render(area, buf),
                }
            }
            Component::TerminalButton(props) => ButtonView::new(props, theme)
                .focused(self.focused)
                .render(area, buf),
            Component::TerminalText(props) => TextView::new(props, theme, icons)
                .tick(self.tick)
                .render(area, buf),
            Component::ProgressBar(props) => {
                ProgressView::new(props, theme, icons).render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use matrix_engine::catalog;

    fn render(component: &Component) -> String {
        let theme = Theme::default();
        let icons = IconSet::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        ComponentView::new(component, &theme, &icons, &borders).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_every_catalog_entry_draws_something() {
        for entry in catalog() {
            let text = render(&entry.component);
            assert!(!text.trim().is_empty(), "{} drew nothing", entry.title);
        }
    }

    #[test]
    fn test_frame_matches_text_rendering() {
        let component = Component::from_json(
            r#"{"component": "ascii-frame", "width": 12, "content": ["hello"]}"#,
        )
        .unwrap();
        let text = render(&component);
        assert!(text.starts_with(&component.to_text()));
    }

    #[test]
    fn test_single_line_components_match_text() {
        for json in [
            r#"{"component": "terminal-button", "label": "run"}"#,
            r#"{"component": "progress-bar", "value": 25, "width": 8}"#,
            r#"{"component": "system-info", "uptime": 60, "cpu": 1.5, "memory": "1MB"}"#,
            r#"{"component": "timer-display", "seconds": 90}"#,
        ] {
            let component = Component::from_json(json).unwrap();
            let text = render(&component);
            assert_eq!(text.lines().next(), Some(component.to_text().as_str()), "{json}");
        }
    }
}
