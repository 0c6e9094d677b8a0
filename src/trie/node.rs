//! Trie node type

use crate::model::{Symbol, ALPHABET_SIZE};
use std::fmt;

/// A node in the prefix tree
///
/// Children are indexed directly by symbol, giving a fixed fan-out of 26.
/// Each child is owned by exactly one parent; there are no back-pointers.
/// Dropping and formatting never recurse, so path length is bounded only by
/// memory.
#[derive(Default)]
pub(crate) struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    /// True iff an inserted word ends exactly here
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children[symbol.index()].as_deref()
    }

    /// Get the child for `symbol`, creating an empty one if absent
    ///
    /// The flag is true when a node was allocated.
    pub fn child_or_insert(&mut self, symbol: Symbol) -> (&mut TrieNode, bool) {
        let slot = &mut self.children[symbol.index()];
        let created = slot.is_none();
        (&mut **slot.get_or_insert_with(Box::default), created)
    }

    /// Present children in symbol order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| Some((Symbol::from_index(index)?, child.as_deref()?)))
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark this node as the end of a word, returning the previous flag
    pub fn set_terminal(&mut self) -> bool {
        std::mem::replace(&mut self.terminal, true)
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: String = self.children().map(|(symbol, _)| symbol.as_char()).collect();
        f.debug_struct("TrieNode")
            .field("edges", &edges)
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}
