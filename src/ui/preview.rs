//! Collapsible preview of the rendered note

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::release_note::ReleaseNoteState;
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};

pub fn preview_title(state: &ReleaseNoteState) -> String {
    let chevron = if state.preview_expanded() { "▴" } else { "▾" };
    format!(" Preview {chevron} ")
}

/// Lines shown in the preview card body
pub fn preview_lines(state: &ReleaseNoteState) -> Vec<Line<'static>> {
    if !state.preview_expanded() {
        return vec![Line::from(Span::styled(
            "Ctrl-P to show the generated note",
            Style::default().fg(TEXT_MUTED),
        ))];
    }

    state
        .render_release_note()
        .lines()
        .map(|line| {
            let style = if line.starts_with('*') {
                Style::default().fg(CYAN_PRIMARY)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            Line::from(Span::styled(line.to_string(), style))
        })
        .collect()
}

pub fn render_preview(area: Rect, state: &ReleaseNoteState, frame: &mut Frame) {
    let block = Block::default()
        .title(preview_title(state))
        .title_style(Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let paragraph = Paragraph::new(preview_lines(state))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
