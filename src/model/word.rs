//! Validated word type

use super::Symbol;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A sequence of alphabet symbols that has already passed validation
///
/// Parsing checks the whole input before anything is returned, so a `Word`
/// can be handed to the tree without further checks. The empty word is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<Symbol>);

impl Word {
    /// Parse a string, rejecting the first character outside `a`..`z`
    ///
    /// `position` in the error is the character offset, not the byte offset.
    pub fn parse(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::try_from(c)
                    .map_err(|symbol| Error::InvalidAlphabetSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>>>()
            .map(Word)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
