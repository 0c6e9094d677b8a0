//! Query operations

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A batch operation, identified on the wire by its numeric code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `1 word`: insert, produces no output
    Insert,
    /// `2 word`: exact-match lookup
    Search,
    /// `3 prefix`: prefix-existence query
    StartsWith,
}

impl Operation {
    /// Map a numeric code to its operation; anything but 1..=3 is unknown
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Operation::Insert),
            2 => Ok(Operation::Search),
            3 => Ok(Operation::StartsWith),
            other => Err(Error::UnknownOperation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Insert => "insert",
            Operation::Search => "search",
            Operation::StartsWith => "starts_with",
        };
        f.write_str(name)
    }
}

/// One `(operation, string)` pair as read from input, before normalization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub op: Operation,
    pub text: String,
}

impl Query {
    pub fn new(op: Operation, text: impl Into<String>) -> Self {
        Query {
            op,
            text: text.into(),
        }
    }
}
