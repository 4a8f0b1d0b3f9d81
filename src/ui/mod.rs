//! UI module for release-note-tui
//!
//! This module contains the rendering functions for the form, the note
//! preview, the toast overlay and the key-hint bar.

mod form;
mod helpers;
mod preview;
mod toast;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme::{BG_PRIMARY, CYAN_PRIMARY, TEXT_MUTED};

use form::{form_height, render_form};
use preview::render_preview;
use toast::render_toast;

/// Draw one full frame
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height(app)), // Form card
            Constraint::Min(3),                   // Preview card
            Constraint::Length(1),                // Key hints
        ])
        .split(area);

    render_form(layout[0], app, frame);
    render_preview(layout[1], &app.state, frame);
    frame.render_widget(Paragraph::new(key_hints(app)), layout[2]);

    if let Some(toast) = app.toasts.current() {
        render_toast(area, toast, frame);
    }
}

/// Bottom bar; actions that are currently unavailable are dimmed
pub fn key_hints(app: &App) -> Line<'static> {
    let hint = |keys: &'static str, label: &'static str, enabled: bool| {
        let key_style = if enabled {
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        let label_style = if enabled {
            Style::default()
        } else {
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM)
        };
        [
            Span::styled(format!(" {keys} "), key_style),
            Span::styled(format!("{label} "), label_style),
        ]
    };

    let dev_label = if app.state.include_dev_channels() {
        "Hide dev"
    } else {
        "Show dev"
    };

    let spans: Vec<Span<'static>> = [
        hint("Enter", "Copy note", app.state.is_valid()),
        hint("^A", "Auto-fill", app.state.can_auto_fill()),
        hint("^R", "Reset", true),
        hint("^D", dev_label, true),
        hint("^P", "Preview", true),
        hint("^Q", "Quit", true),
    ]
    .into_iter()
    .flatten()
    .collect();

    Line::from(spans)
}
