//! Four-digit codes with pairwise distinct digits.
//!
//! Both the target and every accepted guess are a `Code`. The only ways to
//! build one check the invariant, so holding a `Code` means holding exactly
//! [`DIGIT_COUNT`] unique decimal digits.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::config::DIGIT_COUNT;
use crate::error::{GameError, Result};

/// Exactly four unique decimal digits, most-significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code([u8; DIGIT_COUNT]);

impl Code {
    /// Parse player input.
    ///
    /// Accepts iff the text is exactly four ASCII digits with no repeats.
    /// Nothing is trimmed or padded.
    ///
    /// ```
    /// use bulls_hits::core::Code;
    ///
    /// assert!(Code::parse("0123").is_ok());
    /// assert!(Code::parse("1123").is_err());
    /// assert!(Code::parse(" 123").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != DIGIT_COUNT || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(GameError::InvalidGuess(text.to_string()));
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            *slot = byte - b'0';
        }

        if !all_unique(&digits) {
            return Err(GameError::InvalidGuess(text.to_string()));
        }
        Ok(Self(digits))
    }

    /// Build a code from a number, zero-padded to four digits.
    ///
    /// Returns `None` if the number has more than four digits or repeats one.
    #[must_use]
    pub fn from_number(number: u16) -> Option<Self> {
        if number > 9999 {
            return None;
        }

        let mut digits = [0u8; DIGIT_COUNT];
        let mut rest = number;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        all_unique(&digits).then_some(Self(digits))
    }

    /// The digits, most-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// The numeric value.
    #[must_use]
    pub fn as_number(&self) -> u16 {
        self.0.iter().fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// Whether `digit` occurs anywhere in this code.
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

fn all_unique(digits: &[u8]) -> bool {
    let mut seen = FxHashSet::default();
    digits.iter().all(|d| seen.insert(*d))
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Code {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = Code::parse("8423").unwrap();
        assert_eq!(code.digits(), &[8, 4, 2, 3]);
        assert_eq!(code.as_number(), 8423);
        assert_eq!(code.to_string(), "8423");
    }

    #[test]
    fn test_parse_leading_zero() {
        let code = Code::parse("0987").unwrap();
        assert_eq!(code.as_number(), 987);
        assert_eq!(code.to_string(), "0987");
    }

    #[test]
    fn test_parse_rejects() {
        for text in ["", "123", "12345", "12a3", "1123", "0000", "-123", "12 3", "１２３４"] {
            let err = Code::parse(text).unwrap_err();
            assert!(matches!(err, GameError::InvalidGuess(ref t) if t == text));
        }
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Code::from_number(1234).unwrap().to_string(), "1234");
        assert_eq!(Code::from_number(987).unwrap().to_string(), "0987");
        assert!(Code::from_number(1123).is_none());
        assert!(Code::from_number(1000).is_none());
        assert!(Code::from_number(10234).is_none());
    }

    #[test]
    fn test_contains() {
        let code = Code::parse("8423").unwrap();
        assert!(code.contains(4));
        assert!(!code.contains(7));
    }

    #[test]
    fn test_from_str() {
        let code: Code = "5071".parse().unwrap();
        assert_eq!(code.digits(), &[5, 0, 7, 1]);
        assert!("55".parse::<Code>().is_err());
    }

    #[test]
    fn test_serde() {
        let code = Code::parse("0429").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"0429\"");

        let back: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<Code>("\"1123\"").is_err());
    }
}
