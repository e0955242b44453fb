//! Tests for app_state

use super::*;
use crate::navigation::{Destination, Tab};
use crate::poller::UnreadMessage;
use crate::test_utils::test_helpers::{test_app, unread};

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert!(!app.should_quit());
    assert!(app.should_render());
    assert!(app.notifications.current().is_none());
    assert_eq!(app.navigation.selected_tab(), Tab::Forum);
    assert!(app.poller.is_none());
    assert!(app.poll_rx.is_none());
}

#[test]
fn test_tap_routes_then_dismisses() {
    let mut app = test_app();
    app.submit(Notification::message("Leo", "hi", Some(3), Some(5), Some(9)));

    app.tap_notification();

    assert!(app.notifications.current().is_none());
    assert_eq!(app.navigation.selected_tab(), Tab::Circles);
    assert_eq!(
        app.navigation.trigger().map(|t| t.target.destination),
        Some(Destination::Channel {
            channel_id: 5,
            circle_id: 9
        })
    );
}

#[test]
fn test_tap_on_system_notification_only_dismisses() {
    let mut app = test_app();
    app.submit(Notification::system("Maintenance", "tonight"));

    app.tap_notification();

    assert!(app.notifications.current().is_none());
    assert!(app.navigation.trigger().is_none());
    assert_eq!(app.navigation.selected_tab(), Tab::Forum);
}

#[test]
fn test_tap_without_banner_does_nothing() {
    let mut app = test_app();
    app.tap_notification();
    assert!(app.navigation.trigger().is_none());
}

#[test]
fn test_poll_message_is_submitted_once() {
    let mut app = test_app();

    app.handle_poll_event(PollEvent::Message(unread(12, "Ana")));
    assert_eq!(
        app.notifications.current().and_then(|n| n.identifier()),
        Some("12")
    );

    app.dismiss_notification();
    app.handle_poll_event(PollEvent::Message(unread(12, "Ana")));
    assert!(app.notifications.current().is_none());
    assert_eq!(app.notifications.pending_len(), 0);
}

#[test]
fn test_repeated_poll_of_queued_message_is_queued_once() {
    let mut app = test_app();
    app.handle_poll_event(PollEvent::Message(unread(1, "Ana")));

    // Three poll cycles report the same unread message
    for _ in 0..3 {
        app.handle_poll_event(PollEvent::Message(unread(2, "Ben")));
    }

    let ids: Vec<_> = app.notifications.pending().map(|n| n.identifier()).collect();
    assert_eq!(ids, vec![Some("2")]);
    assert_eq!(
        app.notifications.current().and_then(|n| n.identifier()),
        Some("1")
    );
}

#[test]
fn test_repeated_poll_of_displayed_message_is_ignored() {
    let mut app = test_app();
    app.handle_poll_event(PollEvent::Message(unread(4, "Ana")));
    app.handle_poll_event(PollEvent::Message(unread(4, "Ana")));

    assert_eq!(app.notifications.pending_len(), 0);
}

#[test]
fn test_successful_check_clears_poll_error() {
    let mut app = test_app();
    app.handle_poll_event(PollEvent::Error("timed out".to_string()));
    app.clear_dirty();

    app.handle_poll_event(PollEvent::Checked { sent: 0 });

    assert!(app.last_poll_error.is_none());
    assert!(app.should_render());
}

#[test]
fn test_reported_message_clears_poll_error() {
    let mut app = test_app();
    app.handle_poll_event(PollEvent::Error("timed out".to_string()));

    app.handle_poll_event(PollEvent::Message(unread(8, "Ana")));

    assert!(app.last_poll_error.is_none());
}

#[test]
fn test_poll_error_is_recorded() {
    let mut app = test_app();
    app.clear_dirty();

    app.handle_poll_event(PollEvent::Error("connection refused".to_string()));

    assert_eq!(app.last_poll_error.as_deref(), Some("connection refused"));
    assert!(app.should_render());
    assert!(app.notifications.current().is_none());
}

#[test]
fn test_poll_background_drains_channel() {
    let mut app = test_app();
    let (tx, rx) = mpsc::channel();
    app.poll_rx = Some(rx);

    tx.send(PollEvent::Message(unread(1, "Ana"))).unwrap();
    tx.send(PollEvent::Message(unread(2, "Ben"))).unwrap();
    tx.send(PollEvent::Message(UnreadMessage {
        message_id: 3,
        sender_name: "Cleo".to_string(),
        content: "third".to_string(),
        avatar_url: None,
    }))
    .unwrap();

    app.poll_background();

    assert_eq!(
        app.notifications.current().and_then(|n| n.identifier()),
        Some("1")
    );
    assert_eq!(app.notifications.pending_len(), 2);
    assert!(app.poll_rx.is_some());

    drop(tx);
    app.poll_background();
    assert!(app.poll_rx.is_none());
}

#[test]
fn test_push_is_decoded_and_submitted() {
    let mut app = test_app();
    let envelope: PushEnvelope =
        serde_json::from_str(r#"{"type": "connection_request", "sender_name": "Ben"}"#).unwrap();

    assert_eq!(app.handle_push(&envelope), Some(SubmitOutcome::Displayed));
    assert_eq!(
        app.notifications.current().map(|n| n.body()),
        Some("Ben wants to connect")
    );

    let unknown: PushEnvelope = serde_json::from_str(r#"{"type": "quiz"}"#).unwrap();
    assert_eq!(app.handle_push(&unknown), None);
}

#[test]
fn test_take_navigation_reports_each_request_once() {
    let mut app = test_app();
    assert!(app.take_navigation().is_none());

    app.navigation.navigate_to_network();
    let first = app.take_navigation().unwrap();
    assert_eq!(first.target.tab, Tab::Network);
    assert!(app.take_navigation().is_none());

    // Same tab again still counts as a new request
    app.navigation.navigate_to_network();
    assert!(app.take_navigation().is_some());
}

#[test]
fn test_samples_use_distinct_identifiers() {
    let mut app = test_app();

    assert_eq!(
        app.submit_sample(NotificationCategory::DirectMessage),
        SubmitOutcome::Displayed
    );
    assert_eq!(
        app.submit_sample(NotificationCategory::DirectMessage),
        SubmitOutcome::Queued
    );
    assert_eq!(app.notifications.pending_len(), 1);
}

#[test]
fn test_start_poller_requires_user_id() {
    let mut app = test_app();
    let err = app.start_poller(&PollerConfig::default()).unwrap_err();

    assert!(matches!(err, CirclError::Config(_)));
    assert!(app.poller.is_none());
}

#[test]
fn test_stop_poller_clears_channel() {
    let mut app = test_app();
    let (_tx, rx) = mpsc::channel();
    app.poll_rx = Some(rx);

    app.stop_poller();
    assert!(app.poll_rx.is_none());
}
