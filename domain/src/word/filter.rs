//! Adjective filtering

use super::record::WordRecord;
use crate::core::error::DomainError;

/// Keep only the words tagged solely as adjectives, in input order
///
/// Fails on the first record without a usable `word`.
pub fn filter_adjectives(
    records: impl IntoIterator<Item = WordRecord>,
) -> Result<Vec<String>, DomainError> {
    let mut adjectives = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let is_adjective = record.is_pure_adjective();
        let word = match record.word {
            Some(word) if !word.is_empty() => word,
            _ => {
                return Err(DomainError::MissingWord {
                    index,
                    tags: record.tags,
                });
            }
        };

        if is_adjective {
            adjectives.push(word);
        }
    }

    Ok(adjectives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_adjective_tag_rule() {
        let records = vec![
            WordRecord::new("happy", &["adj"]),
            WordRecord::new("run", &["v"]),
            WordRecord::new("x", &[]),
            WordRecord::new("y", &["adj", "n"]),
        ];
        assert_eq!(filter_adjectives(records).unwrap(), vec!["happy"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let records = vec![
            WordRecord::new("bold", &["adj"]),
            WordRecord::new("brave", &["adj"]),
            WordRecord::new("busy", &["adj"]),
        ];
        assert_eq!(
            filter_adjectives(records).unwrap(),
            vec!["bold", "brave", "busy"]
        );
    }

    #[test]
    fn test_missing_word_is_fatal() {
        let records = vec![
            WordRecord::new("happy", &["adj"]),
            WordRecord {
                word: None,
                tags: vec!["n".to_string()],
            },
        ];
        assert_eq!(
            filter_adjectives(records),
            Err(DomainError::MissingWord {
                index: 1,
                tags: vec!["n".to_string()],
            })
        );
    }

    #[test]
    fn test_empty_word_counts_as_missing() {
        let records = vec![WordRecord::new("", &["adj"])];
        assert!(matches!(
            filter_adjectives(records),
            Err(DomainError::MissingWord { index: 0, .. })
        ));
    }

    #[test]
    fn test_no_records_yields_empty_list() {
        assert!(filter_adjectives(Vec::new()).unwrap().is_empty());
    }
}
