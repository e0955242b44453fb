//! Tab bar and navigation panel rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::navigation_router::NavigationRouter;
use super::navigation_types::{Destination, Tab};
use crate::theme;

pub fn render_tabs(frame: &mut Frame, area: Rect, router: &NavigationRouter) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.index(), tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(router.selected_tab().index())
        .style(theme::navigation::TAB)
        .highlight_style(theme::navigation::TAB_SELECTED)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme::navigation::BORDER)),
        );

    frame.render_widget(tabs, area);
}

/// Panel describing the latest navigation request
pub fn render_panel(frame: &mut Frame, area: Rect, router: &NavigationRouter) {
    let mut lines = vec![field("Tab", router.selected_tab().title().to_string())];

    match router.trigger() {
        Some(trigger) => {
            lines.push(field("Destination", describe(trigger.target.destination)));
            lines.push(field(
                "Requested",
                trigger.triggered_at.format("%H:%M:%S%.3f").to_string(),
            ));
            lines.push(field("Generation", trigger.generation.to_string()));
        }
        None => lines.push(field("Destination", "nothing requested yet".to_string())),
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Navigation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::navigation::BORDER)),
    );
    frame.render_widget(panel, area);
}

pub fn describe(destination: Destination) -> String {
    match destination {
        Destination::Chat { message_id } => format!("chat for message {}", message_id),
        Destination::Channel {
            channel_id,
            circle_id,
        } => format!("channel {} in circle {}", channel_id, circle_id),
        Destination::Circle { circle_id } => format!("circle {}", circle_id),
        Destination::Forum => "forum".to_string(),
        Destination::None => "tab root".to_string(),
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<12}", label), theme::navigation::LABEL),
        Span::styled(value, theme::navigation::VALUE),
    ])
}
