//! Local guess validation.
//!
//! # Design
//! `Guess` is a newtype over the already-validated string; the only way to
//! construct one is `FromStr`, so anything holding a `Guess` can submit it
//! without re-checking digit rules. Validation is all-or-nothing: the first
//! violation fails the whole input.

use std::fmt;
use std::str::FromStr;

/// Number of digits in the secret code and in every guess.
pub const CODE_LENGTH: usize = 4;

/// A validated 4-digit guess, each digit in `1`-`6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an input string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    /// Input was not exactly `CODE_LENGTH` characters.
    Length(usize),
    /// Input contained a character outside `1`-`6`.
    Digit(char),
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGuess::Length(n) => {
                write!(f, "expected {CODE_LENGTH} digits, got {n} characters")
            }
            InvalidGuess::Digit(c) => write!(f, "{c:?} is not a digit between 1 and 6"),
        }
    }
}

impl std::error::Error for InvalidGuess {}

impl FromStr for Guess {
    type Err = InvalidGuess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CODE_LENGTH {
            return Err(InvalidGuess::Length(len));
        }
        for c in s.chars() {
            if !('1'..='6').contains(&c) {
                return Err(InvalidGuess::Digit(c));
            }
        }
        Ok(Self(s.to_string()))
    }
}
