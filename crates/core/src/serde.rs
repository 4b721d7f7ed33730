//! Serde helper functions for request deserialization.
//!
//! Admin forms submit optional fields as empty strings; these helpers
//! normalize them to `None` so the storage layer never sees `Some("")`.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::deserialize_optional_string")]
        comment: Option<String>,
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let p: Payload = serde_json::from_str(r#"{"comment": ""}"#).unwrap();
        assert_eq!(p.comment, None);
    }

    #[test]
    fn test_whitespace_only_becomes_none() {
        let p: Payload = serde_json::from_str(r#"{"comment": "   "}"#).unwrap();
        assert_eq!(p.comment, None);
    }

    #[test]
    fn test_missing_field_becomes_none() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.comment, None);
    }

    #[test]
    fn test_value_is_kept() {
        let p: Payload = serde_json::from_str(r#"{"comment": "ring the bell"}"#).unwrap();
        assert_eq!(p.comment, Some("ring the bell".to_string()));
    }
}
