use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::config::{Config, PollerConfig};
use crate::error::CirclError;
use crate::navigation::{NavigationRouter, NavigationTrigger};
use crate::notification::{Notification, NotificationCategory, NotificationQueue, SubmitOutcome};
use crate::poller::{self, PollEvent, PollerHandle};
use crate::push::PushEnvelope;

/// Message ids used by the sample shortcuts start here so they never
/// collide with small ids coming from pushes in tests
const SAMPLE_ID_BASE: i64 = 900_000;

/// Terminal host for the notification core. Owns the queue and the router;
/// everything that mutates them runs on the thread that owns the `App`.
pub struct App {
    pub notifications: NotificationQueue,
    pub navigation: NavigationRouter,
    pub poll_rx: Option<Receiver<PollEvent>>,
    pub poller: Option<PollerHandle>,
    pub last_poll_error: Option<String>,
    pub last_seen_generation: u64,
    pub should_quit: bool,
    pub needs_render: bool,
    sample_counter: i64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            notifications: NotificationQueue::from_config(&config.notifications),
            navigation: NavigationRouter::new(),
            poll_rx: None,
            poller: None,
            last_poll_error: None,
            last_seen_generation: 0,
            should_quit: false,
            needs_render: true,
            sample_counter: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Start the message poller, restarting it if one is already running
    pub fn start_poller(&mut self, config: &PollerConfig) -> Result<(), CirclError> {
        if self.poller.is_some() {
            log::debug!("Message poller already running - restarting");
            self.stop_poller();
        }

        let (event_tx, event_rx) = mpsc::channel();
        let handle = poller::spawn_poller(config, event_tx)?;
        self.poller = Some(handle);
        self.poll_rx = Some(event_rx);
        Ok(())
    }

    pub fn stop_poller(&mut self) {
        if let Some(mut handle) = self.poller.take() {
            handle.stop();
        }
        self.poll_rx = None;
    }

    /// Submit on the UI thread and flag a redraw when something changed
    pub fn submit(&mut self, notification: Notification) -> SubmitOutcome {
        let outcome = self.notifications.submit(notification);
        if outcome != SubmitOutcome::Duplicate {
            self.mark_dirty();
        }
        outcome
    }

    /// Banner tapped: navigate for it, then dismiss it
    pub fn tap_notification(&mut self) {
        let Some(current) = self.notifications.current() else {
            return;
        };

        if let Some(trigger) = self.navigation.route(current) {
            log::debug!("Tap navigated to {:?}", trigger.target);
        }
        self.dismiss_notification();
    }

    pub fn dismiss_notification(&mut self) {
        if self.notifications.is_displaying() {
            self.notifications.dismiss();
            self.mark_dirty();
        }
    }

    /// Fire due notification timers
    pub fn tick(&mut self) -> bool {
        let changed = self.notifications.tick();
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Drain everything the poller has sent since the last call
    pub fn poll_background(&mut self) {
        loop {
            let event = match &self.poll_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(event) => event,
                    Err(TryRecvError::Empty) => return,
                    Err(TryRecvError::Disconnected) => {
                        log::debug!("Poller channel closed");
                        self.poll_rx = None;
                        return;
                    }
                },
                None => return,
            };
            self.handle_poll_event(event);
        }
    }

    pub fn handle_poll_event(&mut self, event: PollEvent) {
        match event {
            PollEvent::Message(message) => {
                self.clear_poll_error();

                // Unread messages come back every cycle until they are read
                let id = message.identifier();
                if self.notifications.has_been_shown(&id) || self.notifications.is_pending(&id) {
                    return;
                }
                self.submit(message.into_notification());
            }
            PollEvent::Checked { sent } => {
                log::debug!("Poller check finished with {} messages", sent);
                self.clear_poll_error();
            }
            PollEvent::Error(error) => {
                self.last_poll_error = Some(error);
                self.mark_dirty();
            }
        }
    }

    fn clear_poll_error(&mut self) {
        if self.last_poll_error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Decode a push and submit it; unknown push types are ignored
    pub fn handle_push(&mut self, envelope: &PushEnvelope) -> Option<SubmitOutcome> {
        let notification = envelope.decode()?;
        Some(self.submit(notification))
    }

    /// Latest navigation request the UI has not reacted to yet
    pub fn take_navigation(&mut self) -> Option<NavigationTrigger> {
        if !self.navigation.changed_since(self.last_seen_generation) {
            return None;
        }
        let trigger = self.navigation.trigger()?.clone();
        self.last_seen_generation = trigger.generation;
        Some(trigger)
    }

    /// Submit a canned notification of the given category
    pub fn submit_sample(&mut self, category: NotificationCategory) -> SubmitOutcome {
        self.sample_counter += 1;
        let id = SAMPLE_ID_BASE + self.sample_counter;

        let notification = match category {
            NotificationCategory::DirectMessage => {
                Notification::message("Maya", "Are we still on for coffee?", Some(id), None, None)
            }
            NotificationCategory::ChannelMessage => Notification::message(
                "Leo",
                "Pitch deck review moved to 3pm",
                Some(id),
                Some(5),
                Some(9),
            ),
            NotificationCategory::ConnectionRequest => Notification::connection_request(
                "Priya",
                "New Connection Request",
                "Priya wants to connect",
            ),
            NotificationCategory::CircleInvite => {
                Notification::circle_invite("Sam", "Founders Lounge", 9)
            }
            NotificationCategory::SystemNotification => {
                Notification::system("Circl", "Your weekly digest is ready")
            }
        };

        self.submit(notification)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
