//! Prefix tree over lowercase ASCII words.
//!
//! Each node stores its children in a small array that grows in fixed tiers
//! rather than by doubling, since a node can never have more than 26
//! children:
//!
//! ```text
//! 8 -> 16 -> 26
//! ```
//!
//! A node that is neither a word boundary nor has children is garbage;
//! [`Trie::delete`] prunes such nodes on the way back up. The root is never
//! pruned.

use crate::growth::Buffer;
use crate::{Error, Result};

/// Children reserved for a fresh node.
pub const INITIAL_CHILDREN: usize = 8;

/// Second capacity tier.
pub const MID_CHILDREN: usize = 16;

/// Final capacity tier, one slot per letter.
pub const MAX_CHILDREN: usize = 26;

/// Returns the next child capacity tier after `current`.
#[inline]
const fn next_tier(current: usize) -> usize {
    if current < MID_CHILDREN {
        MID_CHILDREN
    } else {
        MAX_CHILDREN
    }
}

fn validate(word: &str) -> Result<()> {
    match word.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(bad) => Err(Error::InvalidCharacter(bad)),
        None => Ok(()),
    }
}

/// One prefix character.
///
/// Nodes are read-only outside the trie; word marks change only through
/// [`Trie::insert`] and [`Trie::delete`], so every reachable non-root node
/// is a word boundary or has children.
#[derive(Debug, Clone)]
pub struct TrieNode {
    letter: Option<char>,
    is_word: bool,
    children: Buffer<TrieNode>,
}

impl TrieNode {
    fn new(letter: Option<char>) -> Result<Self> {
        Ok(Self {
            letter,
            is_word: false,
            children: Buffer::with_capacity(INITIAL_CHILDREN)?,
        })
    }

    /// The letter on the edge into this node. `None` for the root.
    #[inline]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns `true` if a word ends at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Current capacity tier of the child array.
    #[inline]
    pub fn child_capacity(&self) -> usize {
        self.children.capacity()
    }

    /// Children in the order they were first created.
    #[inline]
    pub fn children(&self) -> &[TrieNode] {
        self.children.as_slice()
    }

    /// The child reached by `letter`.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.iter().find(|c| c.letter == Some(letter))
    }

    fn position(&self, letter: char) -> Option<usize> {
        self.children.iter().position(|c| c.letter == Some(letter))
    }

    #[inline]
    fn is_garbage(&self) -> bool {
        !self.is_word && self.children.is_empty()
    }

    /// Adds `child`, moving to the next tier when the array becomes full.
    fn attach(&mut self, child: TrieNode) -> Result<()> {
        let capacity = self.children.capacity();
        if self.children.len() + 1 >= capacity && capacity < MAX_CHILDREN {
            self.children.grow_to(next_tier(capacity))?;
        }
        self.children.push(child);
        Ok(())
    }

    /// Builds the detached chain for `suffix`, whose last node is marked.
    fn branch(suffix: &str) -> Result<Self> {
        let mut letters = suffix.chars().rev();
        let mut node = TrieNode::new(letters.next())?;
        node.is_word = true;
        for letter in letters {
            let mut parent = TrieNode::new(Some(letter))?;
            parent.children.push(node);
            node = parent;
        }
        Ok(node)
    }

    fn collect_words(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.is_word {
            out.push(prefix.clone());
        }
        for child in self.children.iter() {
            if let Some(letter) = child.letter {
                prefix.push(letter);
                child.collect_words(prefix, out);
                prefix.pop();
            }
        }
    }
}

/// A trie of words over `a..=z`.
///
/// # Example
///
/// ```
/// use strata_collections::Trie;
///
/// let mut trie = Trie::new().unwrap();
/// trie.insert("car").unwrap();
/// trie.insert("cart").unwrap();
///
/// assert!(trie.search("car"));
/// assert!(!trie.search("ca"));
///
/// trie.delete("car").unwrap();
/// assert!(!trie.search("car"));
/// assert!(trie.search("cart"));
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the root's child array cannot be
    /// reserved.
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: TrieNode::new(None)?,
        })
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The node reached by `prefix`, if every letter of it is present.
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }


    /// Inserts `word`, creating nodes for any missing suffix. The empty word
    /// marks the root.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] for a letter outside `a..=z`, or
    /// [`Error::AllocationFailure`]. The trie is unchanged on error.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        validate(word)?;

        let mut node = &mut self.root;
        let mut rest = word;
        while let Some(letter) = rest.chars().next() {
            match node.position(letter) {
                Some(i) => {
                    node = &mut node.children.as_mut_slice()[i];
                    rest = &rest[1..];
                }
                None => break,
            }
        }

        if rest.is_empty() {
            node.is_word = true;
            return Ok(());
        }
        node.attach(TrieNode::branch(rest)?)
    }

    /// Returns `true` if `word` was inserted and not since deleted.
    ///
    /// A word with letters outside `a..=z` is never present.
    pub fn search(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// Removes `word` and prunes nodes left with no purpose.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] for a letter outside `a..=z`, or
    /// [`Error::NotFound`] if `word` is not in the trie. The trie is
    /// unchanged on error.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        validate(word)?;
        if !self.search(word) {
            return Err(Error::NotFound);
        }
        unmark(&mut self.root, word);
        Ok(())
    }

    /// Every stored word, depth first in child-creation order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.collect_words(&mut String::new(), &mut out);
        out
    }
}

/// Clears the mark at the end of `word`; returns `true` if `node` should be
/// removed by its parent.
fn unmark(node: &mut TrieNode, word: &str) -> bool {
    match word.chars().next() {
        None => node.is_word = false,
        Some(letter) => {
            if let Some(i) = node.position(letter) {
                if unmark(&mut node.children.as_mut_slice()[i], &word[1..]) {
                    node.children.remove(i);
                }
            }
        }
    }
    node.is_garbage()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trie() {
        let trie = Trie::new().unwrap();
        assert!(!trie.search("a"));
        assert!(!trie.search(""));
        assert_eq!(trie.root().child_count(), 0);
        assert_eq!(trie.root().child_capacity(), INITIAL_CHILDREN);
        assert_eq!(trie.root().letter(), None);
    }

    #[test]
    fn insert_and_search() {
        let mut trie = Trie::new().unwrap();
        trie.insert("hello").unwrap();
        trie.insert("help").unwrap();
        assert!(trie.search("hello"));
        assert!(trie.search("help"));
        assert!(!trie.search("hel"));
        assert!(!trie.search("helpful"));
        // shared prefix "hel"
        assert_eq!(trie.node("hel").unwrap().child_count(), 2);
    }

    #[test]
    fn empty_word_marks_root() {
        let mut trie = Trie::new().unwrap();
        trie.insert("").unwrap();
        assert!(trie.search(""));
        assert!(trie.root().is_word());
        trie.delete("").unwrap();
        assert!(!trie.search(""));
    }

    #[test]
    fn invalid_characters_rejected() {
        let mut trie = Trie::new().unwrap();
        assert_eq!(trie.insert("abC"), Err(Error::InvalidCharacter('C')));
        assert_eq!(trie.insert("a b"), Err(Error::InvalidCharacter(' ')));
        assert_eq!(trie.root().child_count(), 0);
        assert!(!trie.search("ABC"));
    }

    #[test]
    fn children_grow_in_tiers() {
        let mut trie = Trie::new().unwrap();
        let letters: Vec<char> = ('a'..='z').collect();
        for (i, letter) in letters.iter().enumerate() {
            trie.insert(&letter.to_string()).unwrap();
            let expected = match i + 1 {
                n if n < 8 => 8,
                n if n < 16 => 16,
                _ => 26,
            };
            assert_eq!(trie.root().child_capacity(), expected, "after {} children", i + 1);
        }
        assert_eq!(trie.root().child_count(), 26);
        assert!(letters.iter().all(|l| trie.search(&l.to_string())));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut trie = Trie::new().unwrap();
        trie.insert("car").unwrap();
        assert_eq!(trie.delete("ca"), Err(Error::NotFound));
        assert_eq!(trie.delete("cars"), Err(Error::NotFound));
        assert!(trie.search("car"));
    }

    #[test]
    fn delete_prefix_keeps_longer_word() {
        let mut trie = Trie::new().unwrap();
        trie.insert("car").unwrap();
        trie.insert("cart").unwrap();
        trie.delete("car").unwrap();
        assert!(!trie.search("car"));
        assert!(trie.search("cart"));
        assert!(trie.node("cart").is_some());
    }

    #[test]
    fn delete_longer_word_prunes_tail_only() {
        let mut trie = Trie::new().unwrap();
        trie.insert("car").unwrap();
        trie.insert("cart").unwrap();
        trie.delete("cart").unwrap();
        assert!(trie.search("car"));
        assert!(trie.node("cart").is_none());
        assert_eq!(trie.node("car").unwrap().child_count(), 0);
    }

    #[test]
    fn delete_prunes_to_root() {
        let mut trie = Trie::new().unwrap();
        trie.insert("dog").unwrap();
        trie.delete("dog").unwrap();
        assert_eq!(trie.root().child_count(), 0);
        assert!(trie.words().is_empty());
    }

    #[test]
    fn prune_shifts_later_children_left() {
        let mut trie = Trie::new().unwrap();
        for w in ["a", "b", "c"] {
            trie.insert(w).unwrap();
        }
        trie.delete("a").unwrap();
        let letters: Vec<_> = trie.root().children().iter().map(TrieNode::letter).collect();
        assert_eq!(letters, vec![Some('b'), Some('c')]);
    }

    fn assert_no_garbage(node: &TrieNode) {
        for child in node.children() {
            assert!(!child.is_garbage(), "garbage node {:?}", child.letter());
            assert_no_garbage(child);
        }
    }

    #[test]
    fn no_garbage_after_inserts_and_deletes() {
        let mut trie = Trie::new().unwrap();
        for w in ["tea", "ten", "to", "inn", "in", "i"] {
            trie.insert(w).unwrap();
        }
        assert_no_garbage(trie.root());

        for w in ["tea", "in", "i", "inn"] {
            trie.delete(w).unwrap();
            assert_no_garbage(trie.root());
        }
        assert_eq!(trie.words(), vec!["ten", "to"]);
        assert!(trie.node("i").is_none());
        assert_eq!(trie.node("te").unwrap().child_count(), 1);
    }

    #[test]
    fn words_lists_everything() {
        let mut trie = Trie::new().unwrap();
        for w in ["to", "tea", "ted", "in", "inn"] {
            trie.insert(w).unwrap();
        }
        assert_eq!(trie.words(), vec!["to", "tea", "ted", "in", "inn"]);
    }
}
