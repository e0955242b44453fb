//! Unread-message poller thread
//!
//! Runs a current-thread tokio runtime on its own thread, checks the
//! message endpoint on a fixed interval and sends what it finds back to the
//! UI thread over a channel. The UI thread owns the notification queue; the
//! poller never touches it.

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::api::{CirclApiClient, Profile, select_unread};
use crate::config::PollerConfig;
use crate::error::CirclError;
use crate::notification::Notification;

/// Name shown when the sender's profile can't be loaded
const UNKNOWN_SENDER: &str = "Someone";

/// Distinct senders kept in the profile cache before it starts over
const PROFILE_CACHE_LIMIT: usize = 512;

/// An unread message ready to be announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadMessage {
    pub message_id: i64,
    pub sender_name: String,
    pub content: String,
    pub avatar_url: Option<String>,
}

impl UnreadMessage {
    pub fn identifier(&self) -> String {
        self.message_id.to_string()
    }

    pub fn into_notification(self) -> Notification {
        let notification = Notification::message(
            &self.sender_name,
            &self.content,
            Some(self.message_id),
            None,
            None,
        );
        match self.avatar_url {
            Some(url) => notification.with_avatar(url),
            None => notification,
        }
    }
}

/// Messages from the poller thread to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Message(UnreadMessage),
    /// A check completed; `sent` messages were reported before it
    Checked { sent: usize },
    Error(String),
}

/// Handle to a running poller. Dropping it stops the poller.
#[derive(Debug)]
pub struct PollerHandle {
    cancel_token: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Signal the poller to stop; does not wait for the thread
    pub fn stop(&mut self) {
        if !self.cancel_token.is_cancelled() {
            log::debug!("Stopping message poller");
            self.cancel_token.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.cancel_token.is_cancelled()
            && self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop and wait for the thread to exit
    pub fn join(mut self) {
        self.stop();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the poller thread
///
/// The first check runs immediately, then every `config.interval()`.
pub fn spawn_poller(
    config: &PollerConfig,
    event_tx: Sender<PollEvent>,
) -> Result<PollerHandle, CirclError> {
    let user_id = config
        .user_id
        .ok_or_else(|| CirclError::Config("poller needs a user_id".to_string()))?;
    let client = CirclApiClient::new(&config.base_url, config.auth_token.clone())?;
    let interval = config.interval();
    let max_per_poll = config.max_per_poll;

    let cancel_token = CancellationToken::new();
    let worker_token = cancel_token.clone();

    let thread = std::thread::Builder::new()
        .name("circl-poller".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create poller runtime: {}", e);
                    let _ = event_tx.send(PollEvent::Error(format!("Poller failed to start: {}", e)));
                    return;
                }
            };

            rt.block_on(poll_loop(
                client,
                user_id,
                interval,
                max_per_poll,
                worker_token,
                event_tx,
            ));
        })?;

    log::debug!(
        "Started message poller for user {} every {:?}",
        user_id,
        interval
    );

    Ok(PollerHandle {
        cancel_token,
        thread: Some(thread),
    })
}

async fn poll_loop(
    client: CirclApiClient,
    user_id: i64,
    interval: Duration,
    max_per_poll: usize,
    cancel_token: CancellationToken,
    event_tx: Sender<PollEvent>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut profiles: HashMap<i64, Profile> = HashMap::new();

    loop {
        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => break,
            result = check_once(&client, user_id, max_per_poll, &mut profiles, &event_tx) => result,
        };

        match result {
            Ok(sent) => {
                log::debug!("Message check sent {} candidates", sent);
                if event_tx.send(PollEvent::Checked { sent }).is_err() {
                    break;
                }
            }
            Err(PollError::Disconnected) => {
                log::debug!("UI thread gone, stopping poller");
                break;
            }
            Err(PollError::Request(e)) => {
                log::warn!("Background message check failed: {}", e);
                if event_tx.send(PollEvent::Error(e.to_string())).is_err() {
                    break;
                }
            }
        }
    }

    log::debug!("Message poller stopped");
}

#[derive(Debug)]
enum PollError {
    Request(CirclError),
    Disconnected,
}

impl From<CirclError> for PollError {
    fn from(e: CirclError) -> Self {
        PollError::Request(e)
    }
}

/// One fetch-filter-resolve cycle. Returns how many messages were sent.
async fn check_once(
    client: &CirclApiClient,
    user_id: i64,
    max_per_poll: usize,
    profiles: &mut HashMap<i64, Profile>,
    event_tx: &Sender<PollEvent>,
) -> Result<usize, PollError> {
    let messages = client.fetch_messages(user_id).await?;
    let unread = select_unread(messages, user_id, max_per_poll);

    let mut sent = 0;
    for message in unread {
        let profile = match profiles.get(&message.sender_id) {
            Some(profile) => profile.clone(),
            None => match client.fetch_profile(message.sender_id).await {
                Ok(profile) => {
                    remember_profile(
                        profiles,
                        message.sender_id,
                        profile.clone(),
                        PROFILE_CACHE_LIMIT,
                    );
                    profile
                }
                Err(e) => {
                    // Not cached so the next cycle retries
                    log::warn!("Profile fetch for {} failed: {}", message.sender_id, e);
                    Profile::default()
                }
            },
        };

        let unread_message = UnreadMessage {
            message_id: message.id,
            sender_name: profile
                .first_name
                .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
            content: message.content,
            avatar_url: profile.profile_image,
        };

        event_tx
            .send(PollEvent::Message(unread_message))
            .map_err(|_| PollError::Disconnected)?;
        sent += 1;
    }

    Ok(sent)
}

/// Cache a sender's profile, dropping everything once `limit` senders are held
fn remember_profile(
    profiles: &mut HashMap<i64, Profile>,
    sender_id: i64,
    profile: Profile,
    limit: usize,
) {
    if profiles.len() >= limit && !profiles.contains_key(&sender_id) {
        log::debug!("Profile cache full ({} senders), clearing", profiles.len());
        profiles.clear();
    }
    profiles.insert(sender_id, profile);
}

#[cfg(test)]
#[path = "poller_worker_tests.rs"]
mod poller_worker_tests;
