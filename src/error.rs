//! Error types for wordtrie

use thiserror::Error;

/// Result type alias for wordtrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wordtrie operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid alphabet symbol {symbol:?} at position {position}")]
    InvalidAlphabetSymbol { symbol: char, position: usize },

    #[error("Unknown operation code: {0}")]
    UnknownOperation(i64),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
