use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::navigation::{render_panel, render_tabs};
use crate::notification::render_banner;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

        render_tabs(frame, layout[0], &self.navigation);
        render_panel(frame, layout[1], &self.navigation);
        self.render_status(frame, layout[2]);
        render_help_line(self, frame, layout[3]);

        // Banner is drawn last so it sits above everything else
        render_banner(frame, &self.notifications);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let banner = match self.notifications.current() {
            Some(current) => format!("{}: {}", current.category().label(), current.title()),
            None => "none".to_string(),
        };

        let poller = match (&self.poller, &self.last_poll_error) {
            (_, Some(error)) => format!("error: {}", error),
            (Some(handle), None) if handle.is_running() => "running".to_string(),
            (Some(_), None) => "stopped".to_string(),
            (None, None) => "off".to_string(),
        };

        let lines = vec![
            status_field("Banner", banner),
            status_field("Queued", self.notifications.pending_len().to_string()),
            status_field("Shown", self.notifications.shown_count().to_string()),
            status_field("Poller", poller),
        ];

        let status = Paragraph::new(lines).block(
            Block::default()
                .title(" Delivery ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::navigation::BORDER)),
        );
        frame.render_widget(status, area);
    }
}

fn status_field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<12}", label), theme::navigation::LABEL),
        Span::styled(value, theme::navigation::VALUE),
    ])
}

fn context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.notifications.is_displaying() {
        hints!["Enter" => "Open", "Esc" => "Dismiss", "1-5" => "Sample", "q" => "Quit"]
    } else {
        hints!["1-5" => "Sample", "\u{2190}/\u{2192}" => "Tabs", "f" => "Forum", "r" => "Reset", "c" => "Clear Shown", "q" => "Quit"]
    }
}

fn render_help_line(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let hints = context_hints(app);
    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
