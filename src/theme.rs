//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Circl - teal brand accent over a deep navy background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(22, 27, 44);
    pub const BG_SURFACE: Color = Color::Rgb(33, 40, 62);

    pub const BRAND: Color = Color::Rgb(0, 74, 173);
    pub const TEAL: Color = Color::Rgb(38, 198, 180);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Banner colors, one set per notification category
pub mod notification {
    use super::*;
    use crate::notification::NotificationCategory;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
        pub accent: Color,
    }

    pub const DIRECT_MESSAGE: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::TEAL,
        accent: palette::TEAL,
    };

    pub const CHANNEL_MESSAGE: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::PURPLE,
        accent: palette::PURPLE,
    };

    pub const CONNECTION_REQUEST: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::GREEN,
        accent: palette::GREEN,
    };

    pub const CIRCLE_INVITE: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_SURFACE,
        border: palette::YELLOW,
        accent: palette::YELLOW,
    };

    pub const SYSTEM: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: Color::Rgb(55, 55, 85),
        border: palette::TEXT_MUTED,
        accent: palette::TEXT_MUTED,
    };

    pub fn colors(category: NotificationCategory) -> &'static NotificationColors {
        match category {
            NotificationCategory::DirectMessage => &DIRECT_MESSAGE,
            NotificationCategory::ChannelMessage => &CHANNEL_MESSAGE,
            NotificationCategory::ConnectionRequest => &CONNECTION_REQUEST,
            NotificationCategory::CircleInvite => &CIRCLE_INVITE,
            NotificationCategory::SystemNotification => &SYSTEM,
        }
    }

    pub const QUEUE_BADGE: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);
}

/// Tab bar and navigation panel styles
pub mod navigation {
    use super::*;

    pub const TAB: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const TAB_SELECTED: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BRAND)
        .add_modifier(Modifier::BOLD);
    pub const BORDER: Color = palette::TEXT_DIM;
    pub const LABEL: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const VALUE: Style = Style::new().fg(palette::TEXT);
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
