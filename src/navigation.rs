//! Navigation module for circl-notify
//!
//! Maps tapped notifications to the tab and destination the UI should show.

mod navigation_render;
mod navigation_router;
mod navigation_types;

pub use navigation_render::{describe, render_panel, render_tabs};
pub use navigation_router::{NavigationRouter, target_for};
pub use navigation_types::{Destination, NavigationTarget, NavigationTrigger, Tab};
