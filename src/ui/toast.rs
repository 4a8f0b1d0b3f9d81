//! Toast overlay rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::Toast;
use crate::theme::{BG_TERTIARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, toast_color};

use super::helpers::{top_centered_rect, wrap_text};

const TOAST_WIDTH: u16 = 48;
const TOAST_TOP_OFFSET: u16 = 1;

/// Draw `toast` over the top of `area`
pub fn render_toast(area: Rect, toast: &Toast, frame: &mut Frame) {
    let color = toast_color(toast.style);
    // Borders plus the icon column
    let text_width = TOAST_WIDTH.min(area.width).saturating_sub(6) as usize;
    let message_lines = wrap_text(&toast.message, text_width);

    let mut lines: Vec<Line> = message_lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let icon = if i == 0 { toast.style.icon() } else { " " };
            Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(text, Style::default().fg(TEXT_PRIMARY)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(TEXT_MUTED),
    )));

    let height = lines.len() as u16 + 2;
    let rect = top_centered_rect(area, TOAST_WIDTH, height, TOAST_TOP_OFFSET);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(BG_TERTIARY));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
