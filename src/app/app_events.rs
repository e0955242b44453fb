use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::notification::NotificationCategory;

/// Longest wait for terminal input; keeps poller events and timers responsive
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_background();
        self.tick();

        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Wait no longer than the next notification timer
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.notifications
            .time_until_next(now)
            .map_or(EVENT_POLL_TIMEOUT, |until| until.min(EVENT_POLL_TIMEOUT))
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter => self.tap_notification(),
            KeyCode::Esc => self.dismiss_notification(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.submit_sample(NotificationCategory::ALL[index]);
            }
            KeyCode::Left => {
                let tab = self.navigation.selected_tab().previous();
                self.navigation.force_navigate_to(tab);
                self.mark_dirty();
            }
            KeyCode::Right | KeyCode::Tab => {
                let tab = self.navigation.selected_tab().next();
                self.navigation.force_navigate_to(tab);
                self.mark_dirty();
            }
            KeyCode::Char('f') => {
                self.navigation.navigate_to_forum();
                self.mark_dirty();
            }
            KeyCode::Char('r') => {
                self.navigation.reset();
                self.mark_dirty();
            }
            KeyCode::Char('c') => {
                self.notifications.clear_shown();
                self.mark_dirty();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
