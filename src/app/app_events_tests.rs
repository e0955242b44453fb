//! Tests for app_events

use super::*;
use crate::navigation::{Destination, Tab};
use crate::notification::{DEFAULT_DISPLAY_DURATION, Notification};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_instead_of_clearing() {
    let mut app = test_app();
    app.notifications.mark_shown("7");

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert!(app.notifications.has_been_shown("7"));
}

#[test]
fn test_number_keys_submit_each_category() {
    for (i, category) in NotificationCategory::ALL.iter().enumerate() {
        let mut app = test_app();
        let digit = char::from_digit(i as u32 + 1, 10).unwrap();

        app.handle_key_event(key(KeyCode::Char(digit)));

        assert_eq!(
            app.notifications.current().map(|n| n.category()),
            Some(*category)
        );
    }
}

#[test]
fn test_enter_taps_banner() {
    let mut app = test_app();
    app.submit(Notification::message("Ana", "hi", Some(21), None, None));

    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.notifications.current().is_none());
    assert_eq!(app.navigation.selected_tab(), Tab::Network);
    assert_eq!(
        app.navigation.trigger().map(|t| t.target.destination),
        Some(Destination::Chat { message_id: 21 })
    );
}

#[test]
fn test_esc_dismisses_without_navigating() {
    let mut app = test_app();
    app.submit(Notification::circle_invite("Sam", "Makers", 4));

    app.handle_key_event(key(KeyCode::Esc));

    assert!(app.notifications.current().is_none());
    assert!(app.navigation.trigger().is_none());
}

#[test]
fn test_arrow_keys_cycle_tabs() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.navigation.selected_tab(), Tab::Network);

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.navigation.selected_tab(), Tab::Circles);
}

#[test]
fn test_forum_and_reset_keys() {
    let mut app = test_app();
    app.navigation.navigate_to_circle(3);

    app.handle_key_event(key(KeyCode::Char('f')));
    assert_eq!(
        app.navigation.trigger().map(|t| t.target.destination),
        Some(Destination::Forum)
    );

    app.handle_key_event(key(KeyCode::Char('r')));
    assert!(app.navigation.trigger().is_none());
    assert_eq!(app.navigation.selected_tab(), Tab::Forum);
}

#[test]
fn test_c_clears_shown_set() {
    let mut app = test_app();
    app.notifications.mark_shown("1");

    app.handle_key_event(key(KeyCode::Char('c')));

    assert!(!app.notifications.has_been_shown("1"));
}

#[test]
fn test_poll_timeout_is_capped() {
    let app = test_app();
    assert_eq!(app.poll_timeout(Instant::now()), EVENT_POLL_TIMEOUT);
}

#[test]
fn test_poll_timeout_shrinks_near_deadline() {
    let mut app = test_app();
    let now = Instant::now();
    app.notifications
        .submit_at(Notification::system("Soon", "gone"), now);

    let almost = now + DEFAULT_DISPLAY_DURATION - Duration::from_millis(20);
    assert_eq!(app.poll_timeout(almost), Duration::from_millis(20));
    assert_eq!(
        app.poll_timeout(now + DEFAULT_DISPLAY_DURATION * 2),
        Duration::ZERO
    );
}
