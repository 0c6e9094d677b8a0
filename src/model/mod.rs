//! Alphabet types for wordtrie

mod symbol;
mod word;

pub use symbol::{Symbol, ALPHABET_SIZE};
pub use word::Word;
