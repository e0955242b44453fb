//! Notification delivery queue
//!
//! Shows at most one notification at a time, queues the rest in arrival
//! order and refuses to show any identifier twice. Auto-dismiss and the
//! short gap before the next queued notification are single-shot timers
//! stored in one slot; they fire when the owner calls [`NotificationQueue::tick`]
//! from its event loop, so every state change happens on the owning thread.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::notification_types::Notification;
use super::shown_set::ShownSet;
use crate::config::NotificationConfig;

/// How long a banner stays visible
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(4);

/// Pause between one banner leaving and the next arriving
pub const DEFAULT_REDISPLAY_DELAY: Duration = Duration::from_millis(300);

/// Whether a notification is currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPhase {
    Idle,
    Displaying,
}

/// What an armed timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    AutoDismiss,
    Redisplay,
}

/// The single pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub kind: TimerKind,
    pub deadline: Instant,
}

impl ScheduledTimer {
    fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Result of a submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Identifier was already shown; nothing changed
    Duplicate,
    /// Went straight on screen
    Displayed,
    /// Waiting behind the current notification
    Queued,
}

/// Delivery state for in-app notifications
#[derive(Debug)]
pub struct NotificationQueue {
    current: Option<Notification>,
    pending: VecDeque<Notification>,
    shown: ShownSet,
    timer: Option<ScheduledTimer>,
    display_duration: Duration,
    redisplay_delay: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_timings(DEFAULT_DISPLAY_DURATION, DEFAULT_REDISPLAY_DELAY)
    }

    pub fn with_timings(display_duration: Duration, redisplay_delay: Duration) -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
            shown: ShownSet::new(),
            timer: None,
            display_duration,
            redisplay_delay,
        }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        let mut queue = Self::with_timings(config.display_duration(), config.redisplay_delay());
        queue.shown = ShownSet::with_capacity(config.shown_capacity);
        queue
    }

    /// Submit a notification for display
    pub fn submit(&mut self, notification: Notification) -> SubmitOutcome {
        self.submit_at(notification, Instant::now())
    }

    pub fn submit_at(&mut self, notification: Notification, now: Instant) -> SubmitOutcome {
        if let Some(id) = notification.identifier()
            && self.shown.contains(id)
        {
            log::debug!("Skipping already shown notification {}", id);
            return SubmitOutcome::Duplicate;
        }

        // A scheduled re-display means the queue head is next in line
        if self.current.is_some() || self.redisplay_pending() {
            self.pending.push_back(notification);
            log::debug!("Queued notification, {} pending", self.pending.len());
            return SubmitOutcome::Queued;
        }

        self.display(notification, now);
        SubmitOutcome::Displayed
    }

    /// Take the current notification off screen and schedule the next one
    pub fn dismiss(&mut self) {
        self.dismiss_at(Instant::now());
    }

    pub fn dismiss_at(&mut self, now: Instant) {
        if self.current.take().is_none() {
            return;
        }
        self.timer = None;

        if !self.pending.is_empty() {
            self.timer = Some(ScheduledTimer {
                kind: TimerKind::Redisplay,
                deadline: now + self.redisplay_delay,
            });
        }
        log::debug!("Dismissed notification, {} pending", self.pending.len());
    }

    /// Fire the armed timer if its deadline has passed. Returns true when
    /// the visible state changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let timer = match self.timer {
            Some(timer) if timer.is_due(now) => timer,
            _ => return false,
        };

        match timer.kind {
            TimerKind::AutoDismiss => {
                log::debug!("Notification timed out");
                self.dismiss_at(now);
                true
            }
            TimerKind::Redisplay => {
                self.timer = None;
                self.display_next(now)
            }
        }
    }

    /// Pre-mark an identifier as shown so later submits with it are ignored
    pub fn mark_shown(&mut self, id: &str) {
        self.shown.insert(id);
    }

    pub fn has_been_shown(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    pub fn clear_shown(&mut self) {
        self.shown.clear();
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_displaying(&self) -> bool {
        self.current.is_some()
    }

    pub fn phase(&self) -> DeliveryPhase {
        if self.current.is_some() {
            DeliveryPhase::Displaying
        } else {
            DeliveryPhase::Idle
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Whether a notification with this identifier is waiting in the queue
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.iter().any(|n| n.identifier() == Some(id))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn timer(&self) -> Option<ScheduledTimer> {
        self.timer
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    /// Time until the armed timer fires, zero if already due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn redisplay_pending(&self) -> bool {
        matches!(
            self.timer,
            Some(ScheduledTimer {
                kind: TimerKind::Redisplay,
                ..
            })
        )
    }

    /// Pop queued notifications until one that has not been shown yet
    fn display_next(&mut self, now: Instant) -> bool {
        while let Some(next) = self.pending.pop_front() {
            if let Some(id) = next.identifier()
                && self.shown.contains(id)
            {
                log::debug!("Dropping queued duplicate {}", id);
                continue;
            }
            self.display(next, now);
            return true;
        }
        false
    }

    fn display(&mut self, notification: Notification, now: Instant) {
        if let Some(id) = notification.identifier() {
            self.shown.insert(id);
        }
        log::debug!(
            "Displaying {:?} notification: {}",
            notification.category(),
            notification.title()
        );
        self.current = Some(notification);
        self.timer = Some(ScheduledTimer {
            kind: TimerKind::AutoDismiss,
            deadline: now + self.display_duration,
        });
    }
}

#[cfg(test)]
#[path = "notification_queue_tests.rs"]
mod notification_queue_tests;
