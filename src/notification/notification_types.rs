//! Notification values
//!
//! A [`Notification`] is built once by a producer (poller, push decoder, UI
//! shortcut) and never changes afterwards; the queue only moves it around.

/// What kind of event a notification announces. Drives styling and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationCategory {
    DirectMessage,
    ChannelMessage,
    ConnectionRequest,
    CircleInvite,
    SystemNotification,
}

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 5] = [
        NotificationCategory::DirectMessage,
        NotificationCategory::ChannelMessage,
        NotificationCategory::ConnectionRequest,
        NotificationCategory::CircleInvite,
        NotificationCategory::SystemNotification,
    ];

    /// Short label shown in the banner header
    pub fn label(self) -> &'static str {
        match self {
            NotificationCategory::DirectMessage => "Message",
            NotificationCategory::ChannelMessage => "Channel",
            NotificationCategory::ConnectionRequest => "Connection",
            NotificationCategory::CircleInvite => "Circle",
            NotificationCategory::SystemNotification => "Circl",
        }
    }
}

/// A single in-app notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    identifier: Option<String>,
    category: NotificationCategory,
    title: String,
    body: Option<String>,
    sender_name: Option<String>,
    avatar_url: Option<String>,
    message_id: Option<i64>,
    channel_id: Option<i64>,
    circle_id: Option<i64>,
}

impl Notification {
    pub fn new(category: NotificationCategory, title: impl Into<String>) -> Self {
        Self {
            identifier: None,
            category,
            title: title.into(),
            body: None,
            sender_name: None,
            avatar_url: None,
            message_id: None,
            channel_id: None,
            circle_id: None,
        }
    }

    /// Chat or channel message. Channel messages are recognised by the
    /// presence of `channel_id`; the message id doubles as the de-dup key.
    pub fn message(
        sender_name: &str,
        excerpt: &str,
        message_id: Option<i64>,
        channel_id: Option<i64>,
        circle_id: Option<i64>,
    ) -> Self {
        let category = if channel_id.is_some() {
            NotificationCategory::ChannelMessage
        } else {
            NotificationCategory::DirectMessage
        };

        let mut notification = Self::new(category, sender_name)
            .with_body(excerpt)
            .with_sender(sender_name);
        notification.identifier = message_id.map(|id| id.to_string());
        notification.message_id = message_id;
        notification.channel_id = channel_id;
        notification.circle_id = circle_id;
        notification
    }

    pub fn connection_request(from_user: &str, title: &str, subtitle: &str) -> Self {
        Self::new(NotificationCategory::ConnectionRequest, title)
            .with_body(subtitle)
            .with_sender(from_user)
    }

    pub fn circle_invite(sender_name: &str, circle_name: &str, circle_id: i64) -> Self {
        Self::new(NotificationCategory::CircleInvite, "Circle Invitation")
            .with_body(format!("{} invited you to join {}", sender_name, circle_name))
            .with_sender(sender_name)
            .with_circle_id(circle_id)
    }

    pub fn system(title: &str, message: &str) -> Self {
        Self::new(NotificationCategory::SystemNotification, title).with_body(message)
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_sender(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_message_id(mut self, message_id: i64) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn with_channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn with_circle_id(mut self, circle_id: i64) -> Self {
        self.circle_id = Some(circle_id);
        self
    }

    /// De-duplication key; `None` means the notification is never de-duplicated
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text, empty when the producer supplied none
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn message_id(&self) -> Option<i64> {
        self.message_id
    }

    pub fn channel_id(&self) -> Option<i64> {
        self.channel_id
    }

    pub fn circle_id(&self) -> Option<i64> {
        self.circle_id
    }
}
