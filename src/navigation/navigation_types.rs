//! Navigation values shared by the router and its observers

use chrono::{DateTime, Local};

/// Top-level tabs of the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Forum,
    Network,
    Circles,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Forum, Tab::Network, Tab::Circles];

    pub fn index(self) -> usize {
        match self {
            Tab::Forum => 0,
            Tab::Network => 1,
            Tab::Circles => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Forum => "Forum",
            Tab::Network => "Network",
            Tab::Circles => "Circles",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Where inside a tab to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Chat { message_id: i64 },
    Channel { channel_id: i64, circle_id: i64 },
    Circle { circle_id: i64 },
    Forum,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    pub tab: Tab,
    pub destination: Destination,
}

impl NavigationTarget {
    pub fn tab(tab: Tab) -> Self {
        Self {
            tab,
            destination: Destination::None,
        }
    }

    pub fn chat(message_id: i64) -> Self {
        Self {
            tab: Tab::Network,
            destination: Destination::Chat { message_id },
        }
    }

    pub fn channel(channel_id: i64, circle_id: i64) -> Self {
        Self {
            tab: Tab::Circles,
            destination: Destination::Channel {
                channel_id,
                circle_id,
            },
        }
    }

    pub fn circle(circle_id: i64) -> Self {
        Self {
            tab: Tab::Circles,
            destination: Destination::Circle { circle_id },
        }
    }

    pub fn forum() -> Self {
        Self {
            tab: Tab::Forum,
            destination: Destination::Forum,
        }
    }
}

/// A published navigation request.
///
/// `generation` increases on every request, so observers can tell a repeat
/// navigation to the same tab apart from no navigation at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTrigger {
    pub target: NavigationTarget,
    pub triggered_at: DateTime<Local>,
    pub generation: u64,
}
