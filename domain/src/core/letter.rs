//! Letter value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single ASCII letter, the seed of every alliteration (Value Object)
///
/// Input is case-insensitive; the letter is stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

impl Letter {
    /// Parse a command-line token into a letter
    ///
    /// Exactly one ASCII alphabetic character is accepted; anything else
    /// (empty input, several characters, digits, symbols, non-ASCII) fails.
    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_lowercase())),
            _ => Err(DomainError::InvalidLetter(token.to_string())),
        }
    }

    /// The lowercase form
    pub fn as_char(&self) -> char {
        self.0
    }

    /// The uppercase form, used for catalog keys and word-service queries
    pub fn to_uppercase(&self) -> char {
        self.0.to_ascii_uppercase()
    }

    /// Zero-based position in the alphabet (`a` = 0, `z` = 25)
    pub fn index(&self) -> usize {
        (self.0 as u8 - b'a') as usize
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'a'..=b'z').map(|b| Letter(b as char))
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Letter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Letter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        assert_eq!(Letter::parse("B").unwrap().as_char(), 'b');
        assert_eq!(Letter::parse("b").unwrap().as_char(), 'b');
    }

    #[test]
    fn test_every_ascii_letter_is_valid() {
        for c in ('a'..='z').chain('A'..='Z') {
            let letter = Letter::parse(&c.to_string()).unwrap();
            assert_eq!(letter.as_char(), c.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_rejects_non_letters() {
        for token in ["", "ab", "BB", "7", "-", "*", " ", " b", "é", "ß"] {
            assert_eq!(
                Letter::parse(token),
                Err(DomainError::InvalidLetter(token.to_string())),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_uppercase_and_index() {
        let letter: Letter = "q".parse().unwrap();
        assert_eq!(letter.to_uppercase(), 'Q');
        assert_eq!(letter.index(), 16);
        assert_eq!(letter.to_string(), "q");
    }

    #[test]
    fn test_all_yields_alphabet() {
        let letters: String = Letter::all().map(|l| l.as_char()).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_serde_roundtrip_rejects_garbage() {
        let json = serde_json::to_string(&Letter::parse("Z").unwrap()).unwrap();
        assert_eq!(json, "\"z\"");
        assert!(serde_json::from_str::<Letter>("\"zz\"").is_err());
    }
}
