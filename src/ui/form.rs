//! Form card rendering: general info and build-number fields

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{BuildChannel, FormField};
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, RED_ERROR, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, badge_color,
};

use super::helpers::pad_label;

const LABEL_WIDTH: usize = 17;
const BADGE_WIDTH: usize = 6;

/// Number of rows the form card needs, borders included
pub fn form_height(app: &App) -> u16 {
    // 2 section headers + version + status + blank spacer + channels + 2 borders
    (2 + 2 + 1 + app.state.visible_channels().len() + 2) as u16
}

/// Render the form card
pub fn render_form(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(" Release Note ")
        .title_style(Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let mut lines = vec![section_header("General Info")];
    lines.push(field_line(app, FormField::Version));
    lines.push(field_line(app, FormField::Status));
    lines.push(Line::default());

    let mut build_header = section_header("Build Numbers");
    if !app.state.include_dev_channels() {
        build_header
            .spans
            .push(Span::styled("  (dev hidden)", Style::default().fg(TEXT_MUTED)));
    }
    lines.push(build_header);
    for channel in app.state.visible_channels() {
        lines.push(field_line(app, FormField::Build(*channel)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_uppercase(),
        Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field_line(app: &App, field: FormField) -> Line<'static> {
    let focused = app.focus == field;
    let value = app.field_value(field).to_string();

    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(CYAN_PRIMARY)),
        Span::styled(pad_label(field.label(), LABEL_WIDTH), label_style),
    ];

    match field {
        FormField::Build(channel) => {
            let category = channel.category();
            spans.push(Span::styled(
                pad_label(category.badge(), BADGE_WIDTH),
                Style::default()
                    .fg(badge_color(category))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        _ => spans.push(Span::raw(" ".repeat(BADGE_WIDTH))),
    }

    let value_style = if focused {
        Style::default().fg(TEXT_PRIMARY).bg(BG_TERTIARY)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder(field),
            Style::default().fg(placeholder_color(field)),
        ));
    } else {
        spans.push(Span::styled(value, value_style));
    }

    if focused {
        spans.push(Span::styled("▏", Style::default().fg(CYAN_PRIMARY)));
    }

    Line::from(spans)
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Version => "e.g. 2.35.0",
        FormField::Status => "required",
        FormField::Build(BuildChannel::Production) => "required",
        FormField::Build(_) => "—",
    }
}

fn placeholder_color(field: FormField) -> Color {
    match field {
        FormField::Build(BuildChannel::Production) | FormField::Version | FormField::Status => {
            RED_ERROR
        }
        FormField::Build(_) => TEXT_MUTED,
    }
}
