//! Prefix tree over emoticon literals.
//!
//! Every literal is stored with one leading space, so the root has a single
//! child (`' '`) and the scanner can treat "start of input", "after a space"
//! and "after a newline" alike: all of them continue from that space node,
//! the *entry point*.
//!
//! ```text
//! (root)
//! └─┬ ' '
//!   ├─┬ ':'
//!   │ ├── ')'   #happy " :)"
//!   │ └─┬ '-'
//!   │   └── ')' #happy " :-)"
//!   └─┬ '('
//!     └─┬ ':'   #happy " (:"
//!       ...
//! ```
//!
//! ## Invariants
//!
//! - Nodes live in one arena vector; `NodeId` is an index into it and the root
//!   is always `0`. Nothing is ever removed.
//! - Siblings never share a `char`; children keep insertion order.
//! - `terminal` is set exactly on nodes ending a full literal. Re-inserting the
//!   same literal overwrites the terminal (last insertion wins).

use crate::dictionary::Dictionary;

/// Index into the trie arena.
pub type NodeId = usize;

pub const ROOT: NodeId = 0;

/// The literal and identifier carried by a node that ends a complete symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// Full space-prefixed literal, e.g. `" :-)"`.
    pub value: String,
    /// Canonical emoticon identifier, e.g. `"happy"`.
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct TrieNode {
    /// `None` only for the root.
    pub ch: Option<char>,
    pub children: Vec<NodeId>,
    pub terminal: Option<Terminal>,
}

impl TrieNode {
    fn new(ch: Option<char>) -> Self {
        Self { ch, children: Vec::new(), terminal: None }
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// An empty trie holding only the root.
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new(None)] }
    }

    /// Build the trie for `dictionary`.
    ///
    /// For each identifier `id` this inserts `"(id)"`, then every symbol and
    /// its mirror (as computed by `mirror_fn`; empty mirrors are skipped).
    pub fn build<F>(dictionary: &Dictionary, mirror_fn: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let mut trie = Self::new();
        for (id, def) in dictionary {
            trie.insert(&format!("({id})"), id);
            for symbol in def.symbols() {
                trie.insert(symbol, id);
                trie.insert(&mirror_fn(symbol), id);
            }
        }
        log::debug!("built emoticon trie: {} identifiers, {} nodes", dictionary.len(), trie.len());
        trie
    }

    /// Insert `literal` (without its leading space) as a path ending in `id`.
    ///
    /// Empty literals are ignored.
    pub fn insert(&mut self, literal: &str, id: &str) {
        if literal.is_empty() {
            return;
        }
        log::trace!("adding {literal:?} -> {id}");

        let value = format!(" {literal}");
        let mut current = ROOT;
        for ch in value.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => self.push_child(current, ch),
            };
        }
        self.nodes[current].terminal = Some(Terminal { value, id: id.to_string() });
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TrieNode::new(Some(ch)));
        self.nodes[parent].children.push(id);
        id
    }

    /// Child of `node` labelled `ch`, if any. Linear scan: branching is tiny.
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node].children.iter().copied().find(|&c| self.nodes[c].ch == Some(ch))
    }

    /// The root's space child, where every candidate match starts.
    ///
    /// `None` only for a trie with nothing inserted.
    pub fn entry(&self) -> Option<NodeId> {
        self.nodes[ROOT].children.first().copied()
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Exact lookup of `literal` (without leading space).
    pub fn lookup(&self, literal: &str) -> Option<&Terminal> {
        let mut current = ROOT;
        for ch in std::iter::once(' ').chain(literal.chars()) {
            current = self.child(current, ch)?;
        }
        self.nodes[current].terminal.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, EmoticonDef};
    use crate::engine::mirror::mirror;

    fn dict(entries: &[(&str, &[&str])]) -> Dictionary {
        entries.iter().map(|(id, emos)| (id.to_string(), EmoticonDef::new(emos.iter().copied()))).collect()
    }

    #[test]
    fn empty_trie_has_no_entry() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.entry(), None);
        assert!(trie.lookup(":)").is_none());
    }

    #[test]
    fn insert_shares_prefixes() {
        let mut trie = Trie::new();
        trie.insert(":)", "happy");
        trie.insert(":(", "sad");

        // root, ' ', ':', ')', '('
        assert_eq!(trie.len(), 5);
        assert_eq!(trie.node(ROOT).children.len(), 1);
        let entry = trie.entry().unwrap();
        assert_eq!(trie.node(entry).ch, Some(' '));
        let colon = trie.child(entry, ':').unwrap();
        assert_eq!(trie.node(colon).children.len(), 2);
        assert!(trie.node(colon).terminal.is_none());

        let happy = trie.lookup(":)").unwrap();
        assert_eq!(happy.value, " :)");
        assert_eq!(happy.id, "happy");
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut trie = Trie::new();
        for (lit, id) in [(":)", "a"), (":(", "b"), (":]", "c")] {
            trie.insert(lit, id);
        }
        let colon = trie.child(trie.entry().unwrap(), ':').unwrap();
        let chars: Vec<Option<char>> = trie.node(colon).children.iter().map(|&c| trie.node(c).ch).collect();
        assert_eq!(chars, [Some(')'), Some('('), Some(']')]);
    }

    #[test]
    fn reinserting_overwrites_without_new_nodes() {
        let mut trie = Trie::new();
        trie.insert("o_o", "first");
        let before = trie.len();
        trie.insert("o_o", "second");
        assert_eq!(trie.len(), before);
        assert_eq!(trie.lookup("o_o").unwrap().id, "second");
    }

    #[test]
    fn empty_literal_is_ignored() {
        let mut trie = Trie::new();
        trie.insert("", "nothing");
        assert!(trie.is_empty());
    }

    #[test]
    fn build_inserts_names_symbols_and_mirrors() {
        let d = dict(&[("happy", &[":)"]), ("LOL", &[":D"]), ("zzz", &[])]);
        let trie = Trie::build(&d, mirror);

        assert_eq!(trie.lookup("(happy)").unwrap().id, "happy");
        assert_eq!(trie.lookup(":)").unwrap().id, "happy");
        assert_eq!(trie.lookup("(:").unwrap().id, "happy");
        assert_eq!(trie.lookup(":D").unwrap().id, "LOL");
        assert!(trie.lookup("D:").is_none());
        assert_eq!(trie.lookup("(zzz)").unwrap().id, "zzz");

        // Prefixes are not terminals.
        assert!(trie.lookup(":").is_none());
        assert!(trie.lookup("(happy").is_none());
    }
}
