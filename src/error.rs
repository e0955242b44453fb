use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CirclError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<std::io::Error> for CirclError {
    fn from(e: std::io::Error) -> Self {
        CirclError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CirclError {
    fn from(e: serde_json::Error) -> Self {
        CirclError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for CirclError {
    fn from(e: reqwest::Error) -> Self {
        CirclError::Network(e.to_string())
    }
}
