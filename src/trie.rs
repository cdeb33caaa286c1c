//! Prefix dictionary backing the solver's early-termination pruning.
//!
//! Words are stored in a [trie](https://en.wikipedia.org/wiki/Trie): each
//! node owns its children outright (tree-shaped, no cycles, no parent
//! links — the search never walks upward). A single [`Trie::query`] tells
//! the solver both whether a candidate is a prefix of any stored word and
//! whether it is itself a complete word; the first flag is what makes
//! exhaustive grid traversal tractable, since any path whose letters are
//! not a known prefix can be abandoned immediately.

use std::collections::HashMap;

/// One character position in the trie. Owns the subtree beneath it.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

/// Result of a [`Trie::query`].
///
/// The two flags are independent: a candidate can be a prefix of longer
/// words without being a word itself ("CATALO"), a word with no longer
/// extensions ("CATALOGS"), or both ("CAT"). `exact_word` implies
/// `known_prefix`; a failed walk leaves both false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixHit {
    /// The candidate matches the start of at least one stored word.
    pub known_prefix: bool,
    /// The candidate is itself a complete stored word.
    pub exact_word: bool,
}

impl PrefixHit {
    const MISS: Self = Self {
        known_prefix: false,
        exact_word: false,
    };
}

/// A prefix tree over a filtered word list. Built once per solve session,
/// read-only during the search.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words inserted (duplicates counted once).
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Add a word, character by character, creating nodes where the path
    /// does not yet exist and flagging the final node as a complete word.
    ///
    /// Inserting the empty string is a no-op: the root is never flagged,
    /// so `query("")` always reports a prefix hit but never an exact word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// Walk the tree along `candidate`'s characters.
    ///
    /// Returns a miss (both flags false) as soon as any character has no
    /// child — the caller can prune that whole search branch. If the walk
    /// consumes the full candidate, `known_prefix` is true and
    /// `exact_word` reflects the terminal node's flag.
    #[must_use]
    pub fn query(&self, candidate: &str) -> PrefixHit {
        let mut node = &self.root;
        for ch in candidate.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return PrefixHit::MISS,
            }
        }
        PrefixHit {
            known_prefix: true,
            exact_word: node.is_word,
        }
    }
}
