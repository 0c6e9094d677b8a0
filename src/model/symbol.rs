//! Single alphabet symbol in the range `a`..`z`

use std::fmt;

/// Number of symbols in the supported alphabet
pub const ALPHABET_SIZE: usize = 26;

/// One lowercase ASCII letter, stored as its offset from `a`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Build a symbol from its alphabet index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Symbol(index as u8))
        } else {
            None
        }
    }

    /// Alphabet index, suitable for indexing a child array
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    /// Fails with the rejected character; uppercase is not accepted
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Symbol(c as u8 - b'a'))
        } else {
            Err(c)
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_char())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
