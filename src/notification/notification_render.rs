//! Notification rendering
//!
//! Draws the banner for the currently displayed notification as an overlay
//! along the top edge of the frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_queue::NotificationQueue;
use crate::theme;
use crate::widgets::popup;

/// Widest the banner gets, borders included
const MAX_BANNER_WIDTH: u16 = 64;

/// Two content lines plus borders
const BANNER_HEIGHT: u16 = 4;

/// Render the banner for the current notification, if any.
///
/// Call after the main UI so the banner lands on top. Returns the area drawn
/// into so callers can hit-test taps.
pub fn render_banner(frame: &mut Frame, queue: &NotificationQueue) -> Option<Rect> {
    let notif = queue.current()?;

    let area = banner_area(frame.area())?;
    let colors = theme::notification::colors(notif.category());

    popup::clear_area(frame, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg))
        .title(Span::styled(
            format!(" {} ", notif.category().label()),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ));

    let waiting = queue.pending_len();
    if waiting > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" +{} more ", waiting),
                theme::notification::QUEUE_BADGE,
            ))
            .right_aligned(),
        );
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate(notif.title(), text_width)),
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", truncate(notif.body(), text_width)),
            Style::default().fg(colors.fg),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
    Some(area)
}

/// Banner position: horizontally centered, one row below the top edge.
/// `None` when the frame is too small to hold it.
pub fn banner_area(frame_area: Rect) -> Option<Rect> {
    let width = frame_area.width.saturating_sub(4).min(MAX_BANNER_WIDTH);
    if width < 12 || frame_area.height < BANNER_HEIGHT + 1 {
        return None;
    }

    Some(popup::top_centered(frame_area, width, BANNER_HEIGHT, 1))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
