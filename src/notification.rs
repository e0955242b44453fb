//! Notification module for circl-notify
//!
//! In-app notification delivery: a de-duplicating queue that keeps at most
//! one banner on screen, plus the banner renderer.

mod notification_queue;
mod notification_render;
mod notification_types;
mod shown_set;

pub use notification_queue::{
    DEFAULT_DISPLAY_DURATION, DEFAULT_REDISPLAY_DELAY, DeliveryPhase, NotificationQueue,
    ScheduledTimer, SubmitOutcome, TimerKind,
};
pub use notification_render::{banner_area, render_banner};
pub use notification_types::{Notification, NotificationCategory};
pub use shown_set::ShownSet;
