//! Thread-shareable handle to a prefix tree

use super::{PrefixTree, TrieStats};
use crate::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A prefix tree behind a single lock
///
/// Every operation holds the lock for its whole walk, so inserts and queries
/// are fully serialized. Clones share the same tree.
#[derive(Clone, Debug, Default)]
pub struct SharedPrefixTree {
    inner: Arc<Mutex<PrefixTree>>,
}

impl SharedPrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, word: &str) -> Result<()> {
        self.inner.lock().insert(word)
    }

    pub fn search(&self, word: &str) -> Result<bool> {
        self.inner.lock().search(word)
    }

    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        self.inner.lock().starts_with(prefix)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> TrieStats {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the underlying tree
    pub fn with_tree<R>(&self, f: impl FnOnce(&mut PrefixTree) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<PrefixTree> for SharedPrefixTree {
    fn from(tree: PrefixTree) -> Self {
        SharedPrefixTree {
            inner: Arc::new(Mutex::new(tree)),
        }
    }
}
