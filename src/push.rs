//! Push payload handling
//!
//! Decodes server push payloads into notifications, and reads recorded
//! pushes from a JSON lines file for replay.

mod push_decoder;

pub use push_decoder::{PushEnvelope, PushKind, decode_push};

use std::fs;
use std::path::Path;

use crate::error::CirclError;

/// Read one push envelope per non-empty line
pub fn load_push_file(path: &Path) -> Result<Vec<PushEnvelope>, CirclError> {
    let contents = fs::read_to_string(path)?;
    parse_push_lines(&contents)
}

pub fn parse_push_lines(contents: &str) -> Result<Vec<PushEnvelope>, CirclError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .map_err(|e| CirclError::Parse(format!("push line {}: {}", index + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_push_lines_skips_blank_lines() {
        let contents = r#"{"type": "announcement", "title": "Hello"}

{"type": "connection_request", "sender_name": "Ben"}
"#;
        let envelopes = parse_push_lines(contents).unwrap();
        assert_eq!(envelopes.len(), 2);
        assert_eq!(envelopes[0].kind, "announcement");
        assert_eq!(envelopes[1].kind, "connection_request");
    }

    #[test]
    fn test_parse_error_names_the_line() {
        let contents = "{\"type\": \"announcement\"}\nnot json\n";
        let err = parse_push_lines(contents).unwrap_err();
        match err {
            CirclError::Parse(msg) => assert!(msg.starts_with("push line 2")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_type_is_an_error() {
        assert!(parse_push_lines(r#"{"title": "untyped"}"#).is_err());
    }

    #[test]
    fn test_load_push_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"type": "message", "message_id": 1}}"#).unwrap();

        let envelopes = load_push_file(file.path()).unwrap();
        assert_eq!(envelopes.len(), 1);
        assert!(envelopes[0].decode().is_some());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_push_file(&dir.path().join("missing.jsonl")).unwrap_err();
        assert!(matches!(err, CirclError::Io(_)));
    }
}
