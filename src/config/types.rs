// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

/// Notification queue timing and de-duplication settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// How long a banner stays up before auto-dismissing
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    /// Gap between dismissing one banner and showing the next queued one
    #[serde(default = "default_redisplay_delay_ms")]
    pub redisplay_delay_ms: u64,
    /// Upper bound on remembered identifiers; unbounded when absent
    #[serde(default)]
    pub shown_capacity: Option<usize>,
}

fn default_display_ms() -> u64 {
    4000
}

fn default_redisplay_delay_ms() -> u64 {
    300
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn redisplay_delay(&self) -> Duration {
        Duration::from_millis(self.redisplay_delay_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            display_ms: default_display_ms(),
            redisplay_delay_ms: default_redisplay_delay_ms(),
            shown_capacity: None,
        }
    }
}

/// Unread-message poller settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PollerConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_max_per_poll")]
    pub max_per_poll: usize,
}

fn default_interval_secs() -> u64 {
    25
}

fn default_base_url() -> String {
    "https://circlapp.online/api".to_string()
}

fn default_max_per_poll() -> usize {
    3
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        // A zero interval would make tokio's interval panic
        Duration::from_secs(self.interval_secs.max(1))
    }

    /// Poller can run only when enabled and pointed at a user
    pub fn is_runnable(&self) -> bool {
        self.enabled && self.user_id.is_some()
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        PollerConfig {
            enabled: false,
            interval_secs: default_interval_secs(),
            base_url: default_base_url(),
            user_id: None,
            auth_token: None,
            max_per_poll: default_max_per_poll(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub poller: PollerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.notifications.display_ms, 4000);
        assert_eq!(config.notifications.redisplay_delay_ms, 300);
        assert_eq!(config.notifications.shown_capacity, None);
        assert!(!config.poller.enabled);
        assert_eq!(config.poller.interval_secs, 25);
        assert_eq!(config.poller.base_url, "https://circlapp.online/api");
        assert_eq!(config.poller.max_per_poll, 3);
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[notifications]
display_ms = 2500
redisplay_delay_ms = 100
shown_capacity = 500

[poller]
enabled = true
interval_secs = 10
base_url = "http://localhost:8000/api"
user_id = 42
auth_token = "abc123"
max_per_poll = 5
"#;
        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.notifications.display_duration(), Duration::from_millis(2500));
        assert_eq!(config.notifications.redisplay_delay(), Duration::from_millis(100));
        assert_eq!(config.notifications.shown_capacity, Some(500));
        assert!(config.poller.is_runnable());
        assert_eq!(config.poller.interval(), Duration::from_secs(10));
        assert_eq!(config.poller.user_id, Some(42));
        assert_eq!(config.poller.auth_token.as_deref(), Some("abc123"));
        assert_eq!(config.poller.max_per_poll, 5);
    }

    #[test]
    fn test_poller_enabled_without_user_is_not_runnable() {
        let config: Config = toml::from_str("[poller]\nenabled = true\n").unwrap();
        assert!(config.poller.enabled);
        assert!(!config.poller.is_runnable());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config: Config = toml::from_str("[poller]\ninterval_secs = 0\n").unwrap();
        assert_eq!(config.poller.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_wrong_type_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[notifications]\ndisplay_ms = \"soon\"\n");
        assert!(result.is_err());
    }

    // For any subset of notification fields present in the file, the missing
    // ones fall back to their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            display in proptest::option::of(1u64..60_000),
            delay in proptest::option::of(0u64..5_000),
        ) {
            let mut toml_content = String::from("[notifications]\n");
            if let Some(d) = display {
                toml_content.push_str(&format!("display_ms = {}\n", d));
            }
            if let Some(d) = delay {
                toml_content.push_str(&format!("redisplay_delay_ms = {}\n", d));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(config.notifications.display_ms, display.unwrap_or(4000));
            prop_assert_eq!(config.notifications.redisplay_delay_ms, delay.unwrap_or(300));
            prop_assert_eq!(config.poller, PollerConfig::default());
        }
    }
}
