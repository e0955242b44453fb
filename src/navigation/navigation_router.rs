//! Notification tap routing
//!
//! Turns a tapped notification into the tab and destination the UI should
//! switch to, and keeps the latest request for observers.

use chrono::Local;

use super::navigation_types::{NavigationTarget, NavigationTrigger, Tab};
use crate::notification::{Notification, NotificationCategory};

/// Destination for a tapped notification, `None` when it should not navigate
pub fn target_for(notification: &Notification) -> Option<NavigationTarget> {
    match notification.category() {
        NotificationCategory::DirectMessage => Some(match notification.message_id() {
            Some(message_id) => NavigationTarget::chat(message_id),
            None => NavigationTarget::tab(Tab::Network),
        }),
        NotificationCategory::ChannelMessage => {
            Some(match (notification.channel_id(), notification.circle_id()) {
                (Some(channel_id), Some(circle_id)) => {
                    NavigationTarget::channel(channel_id, circle_id)
                }
                _ => NavigationTarget::tab(Tab::Circles),
            })
        }
        NotificationCategory::ConnectionRequest => Some(NavigationTarget::tab(Tab::Network)),
        NotificationCategory::CircleInvite => Some(match notification.circle_id() {
            Some(circle_id) => NavigationTarget::circle(circle_id),
            None => NavigationTarget::tab(Tab::Circles),
        }),
        NotificationCategory::SystemNotification => None,
    }
}

/// Selected tab plus the most recent navigation request
#[derive(Debug, Default)]
pub struct NavigationRouter {
    selected_tab: Tab,
    trigger: Option<NavigationTrigger>,
    generation: u64,
}

impl NavigationRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate for a tapped notification. Returns the new trigger, or
    /// `None` (leaving all state untouched) for notifications that do not
    /// navigate.
    pub fn route(&mut self, notification: &Notification) -> Option<&NavigationTrigger> {
        let target = target_for(notification)?;
        Some(self.navigate(target))
    }

    pub fn navigate_to_chat(&mut self, message_id: i64) -> &NavigationTrigger {
        self.navigate(NavigationTarget::chat(message_id))
    }

    pub fn navigate_to_channel(&mut self, channel_id: i64, circle_id: i64) -> &NavigationTrigger {
        self.navigate(NavigationTarget::channel(channel_id, circle_id))
    }

    pub fn navigate_to_circle(&mut self, circle_id: i64) -> &NavigationTrigger {
        self.navigate(NavigationTarget::circle(circle_id))
    }

    pub fn navigate_to_network(&mut self) -> &NavigationTrigger {
        self.navigate(NavigationTarget::tab(Tab::Network))
    }

    pub fn navigate_to_circles(&mut self) -> &NavigationTrigger {
        self.navigate(NavigationTarget::tab(Tab::Circles))
    }

    pub fn navigate_to_forum(&mut self) -> &NavigationTrigger {
        self.navigate(NavigationTarget::forum())
    }

    /// Switch tabs with a fresh trigger even if the tab is already selected
    pub fn force_navigate_to(&mut self, tab: Tab) -> &NavigationTrigger {
        self.navigate(NavigationTarget::tab(tab))
    }

    /// Back to the forum tab with no pending request. The generation counter
    /// keeps counting so observers never see an old value again.
    pub fn reset(&mut self) {
        log::debug!("Resetting navigation state");
        self.selected_tab = Tab::Forum;
        self.trigger = None;
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn trigger(&self) -> Option<&NavigationTrigger> {
        self.trigger.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when a navigation happened after the observer last saw `generation`
    pub fn changed_since(&self, generation: u64) -> bool {
        self.trigger
            .as_ref()
            .is_some_and(|trigger| trigger.generation > generation)
    }

    fn navigate(&mut self, target: NavigationTarget) -> &NavigationTrigger {
        if self.selected_tab != target.tab {
            log::debug!(
                "Selected tab changed from {} to {}",
                self.selected_tab.index(),
                target.tab.index()
            );
        }
        self.generation += 1;
        self.selected_tab = target.tab;
        self.trigger.insert(NavigationTrigger {
            target,
            triggered_at: Local::now(),
            generation: self.generation,
        })
    }
}

#[cfg(test)]
#[path = "navigation_router_tests.rs"]
mod navigation_router_tests;
