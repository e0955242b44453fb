//! Push payload decoding
//!
//! The server tags each push with a `type` string and a loosely typed
//! key/value payload. Missing or mistyped fields fall back to defaults;
//! only an unknown `type` yields no notification.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::notification::Notification;

/// How many events a tomorrow summary lists by name
const SUMMARY_EVENT_LIMIT: usize = 3;

/// Push types the app knows how to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushKind {
    Message,
    ConnectionRequest,
    ConnectionAccepted,
    Announcement,
    EventReminder,
    EventsTomorrowSummary,
}

impl PushKind {
    pub fn parse(tag: &str) -> Option<PushKind> {
        match tag {
            "message" => Some(PushKind::Message),
            "connection_request" => Some(PushKind::ConnectionRequest),
            "connection_accepted" => Some(PushKind::ConnectionAccepted),
            "announcement" => Some(PushKind::Announcement),
            "event_reminder" => Some(PushKind::EventReminder),
            "events_tomorrow_summary" => Some(PushKind::EventsTomorrowSummary),
            _ => None,
        }
    }
}

/// One push as delivered: `{"type": "...", ...payload}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PushEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl PushEnvelope {
    pub fn decode(&self) -> Option<Notification> {
        decode_push(&self.kind, &self.payload)
    }
}

/// Map a push type tag and payload to a notification
pub fn decode_push(kind: &str, payload: &Map<String, Value>) -> Option<Notification> {
    let Some(kind) = PushKind::parse(kind) else {
        log::debug!("Ignoring push with unknown type {:?}", kind);
        return None;
    };

    let notification = match kind {
        PushKind::Message => Notification::message(
            &string_or(payload, "sender_name", "Someone"),
            &string_or(payload, "excerpt", ""),
            int_field(payload, "message_id"),
            int_field(payload, "channel_id"),
            int_field(payload, "circle_id"),
        ),
        PushKind::ConnectionRequest => {
            let sender = string_or(payload, "sender_name", "Someone");
            Notification::connection_request(
                &sender,
                "New Connection Request",
                &format!("{} wants to connect", sender),
            )
        }
        PushKind::ConnectionAccepted => {
            let accepter = string_or(payload, "accepter_name", "Someone");
            Notification::system(
                "Connection Accepted",
                &format!("{} accepted your request", accepter),
            )
        }
        PushKind::Announcement => Notification::system(
            &string_or(payload, "title", "Announcement"),
            &string_or(payload, "excerpt", ""),
        ),
        PushKind::EventReminder => Notification::system(
            &string_or(payload, "title", "Event Reminder"),
            &format!("Starts at {}", string_or(payload, "start_time", "")),
        ),
        PushKind::EventsTomorrowSummary => events_summary(payload),
    };

    log::debug!("Decoded {:?} push into {:?}", kind, notification.category());
    Some(notification)
}

fn events_summary(payload: &Map<String, Value>) -> Notification {
    let Some(events) = payload.get("events").and_then(Value::as_array) else {
        return Notification::system("Events Tomorrow", "You have events tomorrow.");
    };

    let listed: Vec<String> = events
        .iter()
        .take(SUMMARY_EVENT_LIMIT)
        .filter_map(|event| {
            let title = event.get("title")?.as_str()?;
            let time = event.get("time_local")?.as_str()?;
            Some(format!("{} at {}", title, time))
        })
        .collect();

    Notification::system(
        &format!("{} Events Tomorrow", events.len()),
        &listed.join(", "),
    )
}

fn string_or(payload: &Map<String, Value>, key: &str, default: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Integer field, accepting JSON numbers and numeric strings
fn int_field(payload: &Map<String, Value>, key: &str) -> Option<i64> {
    match payload.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "push_decoder_tests.rs"]
mod push_decoder_tests;
