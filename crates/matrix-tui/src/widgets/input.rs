//! Terminal input field with password masking.
//!
//! Layout:
//!
//! ```text
//! ACCESS CODE
//! > *******█ [SHOW]
//! invalid code
//! ```

use matrix_engine::components::{InputState, TerminalInput};
use matrix_engine::PaletteToken;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{IconSet, Theme};

pub struct InputView<'a> {
    props: &'a TerminalInput,
    state: Option<&'a InputState>,
    theme: &'a Theme,
    icons: &'a IconSet,
    focused: bool,
}

impl<'a> InputView<'a> {
    pub fn new(props: &'a TerminalInput, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            props,
            state: None,
            theme,
            icons,
            focused: false,
        }
    }

    /// Live editing state. Without it the props' initial value is shown.
    #[must_use]
    pub fn state(mut self, state: &'a InputState) -> Self {
        self.state = Some(state);
        self
    }

    /// Focused inputs draw a block cursor.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field(&self, state: &InputState) -> Line<'static> {
        let style = self.theme.fg(self.props.color);
        let mut spans = vec![Span::styled(self.props.prompt.clone(), style)];

        if state.is_empty() && !self.focused {
            let placeholder = self.props.placeholder.clone().unwrap_or_default();
            spans.push(Span::styled(placeholder, self.theme.muted()));
        } else {
            let shown: Vec<char> = self.props.display_value(state).chars().collect();
            let at = state.cursor().min(shown.len());
            spans.push(Span::styled(shown[..at].iter().collect::<String>(), style));
            if self.focused && !self.props.disabled {
                spans.push(Span::styled(self.icons.cursor(), style));
            }
            spans.push(Span::styled(shown[at..].iter().collect::<String>(), style));
        }

        if let Some(toggle) = self.props.toggle_text(state) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(toggle, self.theme.fg(PaletteToken::Green200)));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let initial;
        let state = match self.state {
            Some(state) => state,
            None => {
                initial = self.props.state();
                &initial
            }
        };

        let mut lines = Vec::with_capacity(3);
        if let Some(label) = &self.props.label {
            lines.push(Line::styled(
                label.to_uppercase(),
                self.theme.fg(PaletteToken::Green200),
            ));
        }
        lines.push(self.field(state));
        if let Some(error) = &self.props.error {
            lines.push(Line::styled(error.clone(), self.theme.fg(PaletteToken::Red)));
        }

        if self.props.disabled {
            lines
                .into_iter()
                .map(|line| line.patch_style(Style::new().add_modifier(Modifier::DIM)))
                .collect()
        } else {
            lines
        }
    }
}

impl Widget for InputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
