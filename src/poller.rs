//! Background unread-message poller
//!
//! Periodically asks the Circl API for the user's messages and hands unread
//! ones to the UI thread, which decides whether to show them.

pub mod api;
mod poller_worker;

pub use api::{ApiMessage, CirclApiClient, Profile};
pub use poller_worker::{PollEvent, PollerHandle, UnreadMessage, spawn_poller};
