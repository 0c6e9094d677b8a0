//! # wordtrie
//!
//! An in-memory prefix tree over lowercase words.
//!
//! The tree supports insertion, exact-match lookup and prefix-existence
//! queries. Each node fans out over the 26 letters `a`..`z` and exclusively
//! owns its children, so the structure only grows and never shares nodes.
//!
//! ## Core Concepts
//!
//! - **Symbols**: one letter of the `a`..`z` alphabet, validated up front
//! - **Words**: validated symbol sequences, possibly empty
//! - **PrefixTree**: the trie itself; every instance is independent
//! - **Query driver**: batch processing of `(op, string)` pairs from a reader
//!
//! ## Example
//!
//! ```
//! use wordtrie::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("apple")?;
//! tree.insert("app")?;
//!
//! assert!(tree.search("app")?);
//! assert!(!tree.search("appl")?);
//! assert!(tree.starts_with("appl")?);
//! # Ok::<(), wordtrie::Error>(())
//! ```

pub mod model;
pub mod query;
pub mod trie;

mod error;

pub use error::{Error, Result};
pub use model::{Symbol, Word, ALPHABET_SIZE};
pub use query::{
    DriverConfig, Operation, OutputFormat, Query, QueryDriver, QueryReader, RunSummary,
};
pub use trie::{PrefixTree, SharedPrefixTree, TrieStats};
