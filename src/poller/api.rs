//! Circl HTTP API client
//!
//! Only the two endpoints the poller needs: a user's messages and a user's
//! public profile.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::CirclError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A message as returned by `users/get_messages`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub is_read: bool,
}

/// The endpoint answers either `{"messages": [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum MessagesResponse {
    Wrapped { messages: Vec<ApiMessage> },
    Bare(Vec<ApiMessage>),
}

/// The parts of a profile a notification shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

pub fn parse_messages(body: &str) -> Result<Vec<ApiMessage>, CirclError> {
    let response: MessagesResponse = serde_json::from_str(body)?;
    Ok(match response {
        MessagesResponse::Wrapped { messages } => messages,
        MessagesResponse::Bare(messages) => messages,
    })
}

/// Unread messages addressed to `user_id`, oldest first as served, capped at `limit`
pub fn select_unread(messages: Vec<ApiMessage>, user_id: i64, limit: usize) -> Vec<ApiMessage> {
    messages
        .into_iter()
        .filter(|m| m.receiver_id == user_id && !m.is_read)
        .take(limit)
        .collect()
}

#[derive(Debug, Clone)]
pub struct CirclApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl CirclApiClient {
    pub fn new(base_url: &str, auth_token: Option<String>) -> Result<Self, CirclError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    pub fn messages_url(&self, user_id: i64) -> String {
        format!("{}/users/get_messages/{}/", self.base_url, user_id)
    }

    pub fn profile_url(&self, user_id: i64) -> String {
        format!("{}/users/profile/{}/", self.base_url, user_id)
    }

    pub async fn fetch_messages(&self, user_id: i64) -> Result<Vec<ApiMessage>, CirclError> {
        let body = self.get(&self.messages_url(user_id)).await?;
        parse_messages(&body)
    }

    pub async fn fetch_profile(&self, user_id: i64) -> Result<Profile, CirclError> {
        let body = self.get(&self.profile_url(user_id)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, url: &str) -> Result<String, CirclError> {
        let mut request = self
            .client
            .get(url)
            .header("content-type", "application/json");
        if let Some(token) = &self.auth_token {
            request = request.header("authorization", format!("Token {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CirclError::Api { code, message });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, receiver_id: i64, is_read: bool) -> ApiMessage {
        ApiMessage {
            id,
            sender_id: 2,
            receiver_id,
            content: format!("message {}", id),
            timestamp: "2024-05-01T10:00:00Z".to_string(),
            is_read,
        }
    }

    #[test]
    fn test_parse_wrapped_messages() {
        let body = r#"{"messages": [{"id": 1, "sender_id": 2, "receiver_id": 3, "content": "hi", "timestamp": "t", "is_read": false}]}"#;
        let messages = parse_messages(body).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hi");
    }

    #[test]
    fn test_parse_bare_array() {
        let body = r#"[{"id": 1, "sender_id": 2, "receiver_id": 3}, {"id": 2, "sender_id": 3, "receiver_id": 2, "is_read": true}]"#;
        let messages = parse_messages(body).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(!messages[0].is_read);
        assert_eq!(messages[0].content, "");
        assert!(messages[1].is_read);
    }

    #[test]
    fn test_parse_unexpected_shape_fails() {
        assert!(matches!(
            parse_messages(r#"{"detail": "not found"}"#),
            Err(CirclError::Parse(_))
        ));
    }

    #[test]
    fn test_select_unread_filters_and_limits() {
        let messages = vec![
            message(1, 7, false),
            message(2, 8, false),
            message(3, 7, true),
            message(4, 7, false),
            message(5, 7, false),
            message(6, 7, false),
        ];

        let ids: Vec<i64> = select_unread(messages, 7, 3).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4, 5]);
    }

    #[test]
    fn test_profile_with_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"first_name": "Ana", "email": "a@b.c"}"#).unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Ana"));
        assert_eq!(profile.profile_image, None);
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = CirclApiClient::new("https://circlapp.online/api/", None).unwrap();
        assert_eq!(
            client.messages_url(12),
            "https://circlapp.online/api/users/get_messages/12/"
        );
        assert_eq!(
            client.profile_url(5),
            "https://circlapp.online/api/users/profile/5/"
        );
    }
}
