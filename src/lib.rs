//! circl-notify library - In-app notifications for the Circl client
//!
//! Notification queue with de-duplication, tap navigation routing, push
//! decoding and the unread message poller, plus the terminal host around them.

pub mod app;
pub mod config;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod poller;
pub mod push;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::CirclError;
