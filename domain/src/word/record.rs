//! Word records returned by a word-lookup service

use serde::{Deserialize, Serialize};

/// Part-of-speech tag marking an adjective
pub const ADJECTIVE_TAG: &str = "adj";

/// A candidate word with its part-of-speech tags
///
/// Both fields are optional on the wire. A missing `word` is a contract
/// violation by the service and is rejected during filtering; missing `tags`
/// simply means the word is not classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            word: Some(word.into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// True when the record carries exactly one tag and it is [`ADJECTIVE_TAG`]
    ///
    /// Words with several tags are excluded; their part of speech cannot be
    /// confirmed as adjective.
    pub fn is_pure_adjective(&self) -> bool {
        matches!(self.tags.as_slice(), [tag] if tag == ADJECTIVE_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: WordRecord =
            serde_json::from_str(r#"{"word":"brave","score":1234,"tags":["adj"]}"#).unwrap();
        assert_eq!(record, WordRecord::new("brave", &["adj"]));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let record: WordRecord = serde_json::from_str(r#"{"score":5}"#).unwrap();
        assert!(record.word.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_pure_adjective() {
        assert!(WordRecord::new("happy", &["adj"]).is_pure_adjective());
        assert!(!WordRecord::new("run", &["v"]).is_pure_adjective());
        assert!(!WordRecord::new("x", &[]).is_pure_adjective());
        assert!(!WordRecord::new("y", &["adj", "n"]).is_pure_adjective());
    }
}
