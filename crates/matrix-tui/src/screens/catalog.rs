//! Catalog screen: component list on the left, live preview on the right.
//!
//! ```text
//! MATRIX // COMPONENT CATALOG                              ● [ ONLINE ]
//! ╔ CATALOG ══════════════╗┌ Frame / single ─────────────────────────┐
//! ║▸ Frame / single       ║│┌──────────────────────────────┐        │
//! ║  Box / double with... ║││ THE MATRIX HAS YOU           │        │
//! ║                       ║│<ascii-frame>                            │
//! ╚═══════════════════════╝└─────────────────────────────────────────┘
//! [↑↓] navigate  [Enter] activate  [c] crt  [r] reset  [?] help  [q] quit
//! ```

use matrix_engine::components::{KeyHint, KeyboardHints, TerminalStatus};
use matrix_engine::text::{fit_to_width, visual_width};
use matrix_engine::{Component, StatusToken};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Screen;
use crate::app::App;
use crate::layout::{body_layout, main_layout};
use crate::widgets::{ComponentView, CrtOverlay, HintsView, Pane, StatusView};

pub const TITLE: &str = "MATRIX // COMPONENT CATALOG";

/// Footer hints for the catalog.
pub fn catalog_hints() -> KeyboardHints {
    KeyboardHints::new(vec![
        KeyHint::new("↑↓", "navigate"),
        KeyHint::new("Enter", "activate"),
        KeyHint::new("c", "crt"),
        KeyHint::new("r", "reset"),
        KeyHint::new("?", "help"),
        KeyHint::new("q", "quit"),
    ])
}

pub struct CatalogScreen;

impl CatalogScreen {
    fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            TITLE,
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        );
        Paragraph::new(Line::from(title)).render(area, buf);

        let status = TerminalStatus::new(if app.boot_running() {
            StatusToken::Loading
        } else {
            StatusToken::Online
        });
        let width = (visual_width(&status.label_text()) + 2) as u16;
        let width = width.min(area.width);
        let status_area = Rect::new(area.right() - width, area.y, width, 1);
        StatusView::new(&status, &app.theme, &app.icons)
            .tick(app.tick)
            .render(status_area, buf);
    }

    fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
        let pane = Pane::new(&app.theme, &app.borders)
            .title("CATALOG")
            .focused(!app.editing);
        let inner = pane.inner(area);
        pane.render(area, buf);

        let visible = usize::from(inner.height).max(1);
        let offset = app.selected.saturating_sub(visible - 1);
        let item_width = usize::from(inner.width).saturating_sub(2);

        let lines: Vec<Line> = app
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, entry)| {
                let title = fit_to_width(entry.title, item_width);
                if i == app.selected {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", app.icons.selected()),
                            Style::default().fg(app.theme.text),
                        ),
                        Span::styled(
                            title,
                            Style::default()
                                .fg(app.theme.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::styled(format!("  {title}"), Style::default().fg(app.theme.subtext))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_preview(app: &App, area: Rect, buf: &mut Buffer) {
        let Some(entry) = app.selected_entry() else {
            return;
        };
        let pane = Pane::new(&app.theme, &app.borders)
            .title(entry.title)
            .focused(app.editing);
        let inner = pane.inner(area);
        pane.render(area, buf);

        let Some(component) = app.preview_component() else {
            return;
        };
        if inner.height == 0 {
            return;
        }

        // Last row names the component
        let body = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        let tag = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);

        let focused = match component.as_ref() {
            Component::TerminalInput(_) => app.editing,
            Component::TerminalButton(_) => app.button_pressed(),
            _ => false,
        };
        let revealed = match component.as_ref() {
            Component::BootSequence(_) => app.boot_revealed,
            _ => None,
        };

        ComponentView::new(component.as_ref(), &app.theme, &app.icons, &app.borders)
            .tick(app.tick)
            .revealed(revealed)
            .input(&app.input_state)
            .focused(focused)
            .render(body, buf);

        Paragraph::new(Line::styled(
            format!("<{}>", component.name()),
            app.theme.muted(),
        ))
        .render(tag, buf);

        if app.crt_enabled {
            CrtOverlay::new(&app.crt).tick(app.tick).render(inner, buf);
        }
    }
}

impl Screen for CatalogScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(app.theme.base));

        let (header, body, footer) = main_layout(area);
        let (list, preview) = body_layout(body);

        Self::render_header(app, header, buf);
        Self::render_list(app, list, buf);
        Self::render_preview(app, preview, buf);
        HintsView::new(&catalog_hints(), &app.theme).render(footer, buf);
    }
}
