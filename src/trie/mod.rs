//! Prefix tree over the lowercase alphabet
//!
//! This implements a plain (uncompressed) trie where:
//! - Every node has one optional child per symbol `a`..`z`
//! - A node exists iff its path is a prefix of some inserted word
//! - Terminal flags mark the exact ends of inserted words

mod node;
mod shared;
mod tree;

pub use shared::SharedPrefixTree;
pub use tree::{PrefixTree, TrieStats};
