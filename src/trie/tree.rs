//! Prefix tree implementation

use super::node::TrieNode;
use crate::model::Word;
use crate::Result;
use serde::Serialize;

/// Size counters for a prefix tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Distinct words inserted
    pub words: usize,
    /// Allocated nodes, including the root
    pub nodes: usize,
}

/// An in-memory prefix tree over lowercase words
///
/// The tree owns its root for its whole lifetime and only grows: nodes are
/// created lazily on insert and never pruned. String-taking methods validate
/// the full input before touching the tree, so a rejected call leaves it
/// unchanged.
#[derive(Debug)]
pub struct PrefixTree {
    root: TrieNode,
    word_count: usize,
    node_count: usize,
}

impl PrefixTree {
    /// Create a new empty tree (a single non-terminal root)
    pub fn new() -> Self {
        PrefixTree {
            root: TrieNode::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Build a tree from a sequence of words
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = PrefixTree::new();
        for word in words {
            tree.insert(word.as_ref())?;
        }
        Ok(tree)
    }

    /// Insert a word
    ///
    /// Inserting the empty string marks the root terminal. Inserting the same
    /// word twice has no further effect.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let word = Word::parse(word)?;
        self.insert_word(&word);
        Ok(())
    }

    /// Insert a validated word, returning true if it was not already present
    pub fn insert_word(&mut self, word: &Word) -> bool {
        let mut node = &mut self.root;
        for (depth, &symbol) in word.symbols().iter().enumerate() {
            let (child, created) = node.child_or_insert(symbol);
            if created {
                self.node_count += 1;
                tracing::trace!(depth, symbol = %symbol, "allocated trie node");
            }
            node = child;
        }

        let added = !node.set_terminal();
        if added {
            self.word_count += 1;
        }
        added
    }

    /// Check whether exactly this word was inserted
    pub fn search(&self, word: &str) -> Result<bool> {
        Ok(self.search_word(&Word::parse(word)?))
    }

    pub fn search_word(&self, word: &Word) -> bool {
        self.find(word).is_some_and(TrieNode::is_terminal)
    }

    /// Check whether any inserted word begins with `prefix`
    ///
    /// The empty prefix is always true, even on an empty tree.
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        Ok(self.starts_with_word(&Word::parse(prefix)?))
    }

    pub fn starts_with_word(&self, prefix: &Word) -> bool {
        self.find(prefix).is_some()
    }

    /// List all stored words beginning with `prefix`, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let prefix = Word::parse(prefix)?;
        let mut results = Vec::new();
        if let Some(node) = self.find(&prefix) {
            collect_words(node, prefix.to_string(), &mut results);
        }
        Ok(results)
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of allocated nodes, including the root
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            words: self.word_count,
            nodes: self.node_count,
        }
    }

    // === Internal helpers ===

    /// Follow the exact symbol path, stopping at the first missing edge
    fn find(&self, word: &Word) -> Option<&TrieNode> {
        word.symbols()
            .iter()
            .try_fold(&self.root, |node, &symbol| node.child(symbol))
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        PrefixTree::new()
    }
}

/// Depth-first walk pushing every terminal path below `node`, in symbol order
///
/// Uses an explicit stack; each entry carries the length of its parent's path
/// so the shared buffer can be rewound instead of cloned per node.
fn collect_words(node: &TrieNode, prefix: String, results: &mut Vec<String>) {
    let mut current = prefix;
    if node.is_terminal() {
        results.push(current.clone());
    }

    let base = current.len();
    let mut stack: Vec<_> = node
        .children()
        .rev()
        .map(|(symbol, child)| (child, symbol, base))
        .collect();

    while let Some((node, symbol, parent_len)) = stack.pop() {
        current.truncate(parent_len);
        current.push(symbol.as_char());
        if node.is_terminal() {
            results.push(current.clone());
        }
        let len = current.len();
        stack.extend(node.children().rev().map(|(symbol, child)| (child, symbol, len)));
    }
}
