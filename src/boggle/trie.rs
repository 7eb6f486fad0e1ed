use super::util::{letter_offset, offset_letter};
use super::ALPHABET_SIZE;

/// Value held by the root node, which represents no letter at all
const ROOT_VALUE: u8 = u8::MAX;

/// Index of a node inside the trie arena. Ids are stable for the lifetime of
/// the trie, so they can key per-solve bookkeeping kept outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Prefix tree node
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Letter offset this node represents
    value: u8,
    /// Only used to rebuild words, never to walk the tree
    parent: Option<NodeId>,
    next: [Option<NodeId>; ALPHABET_SIZE],
    terminal: bool,
    has_children: bool,
}

impl TrieNode {
    fn new(value: u8, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            next: [None; ALPHABET_SIZE],
            terminal: false,
            has_children: false,
        }
    }

    /// Letter offset of the edge leading into this node (`None` for the root)
    pub fn value(&self) -> Option<u8> {
        if self.value == ROOT_VALUE {
            None
        } else {
            Some(self.value)
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_word(&self) -> bool {
        self.terminal
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }
}

/// Dictionary index. Nodes live in a flat arena and refer to each other by
/// [`NodeId`]; the tree is never modified once built, so one trie can be shared
/// between any number of solvers.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(ROOT_VALUE, None)],
            words: 0,
        }
    }

    /// Builds the index from already cleaned lowercase words. No filtering
    /// happens here, see [`super::dictionary::build_trie`] for that.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            let word = w.as_ref();
            if !trie.add_word(word) {
                log::warn!("Skipping \"{}\": not a lowercase a-z word", word);
            }
        }
        trie
    }

    /// Adds a word to the trie. Returns false (and leaves the trie untouched)
    /// when the word is empty or holds anything but `a`..=`z`.
    pub fn add_word(&mut self, word: &str) -> bool {
        let offsets = match word.chars().map(letter_offset).collect::<Option<Vec<_>>>() {
            Some(o) if !o.is_empty() => o,
            _ => return false,
        };

        let mut curr = NodeId::ROOT;
        for letter in offsets {
            curr = match self.child(curr, letter) {
                Some(next) => next,
                None => self.push_child(curr, letter),
            };
        }

        let node = &mut self.nodes[curr.index()];
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        true
    }

    fn push_child(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(letter, Some(parent)));
        let parent = &mut self.nodes[parent.index()];
        parent.next[letter as usize] = Some(id);
        parent.has_children = true;
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    pub fn child(&self, id: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[id.index()].next.get(letter as usize).copied().flatten()
    }

    pub fn is_word(&self, id: NodeId) -> bool {
        self.nodes[id.index()].terminal
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id.index()].has_children
    }

    /// Rebuilds the word spelled by the path from the root to `id`
    pub fn word_at(&self, id: NodeId) -> String {
        let mut letters = Vec::new();
        let mut curr = Some(id);
        while let Some(node) = curr.map(|i| self.node(i)) {
            if let Some(v) = node.value() {
                letters.push(offset_letter(v));
            }
            curr = node.parent;
        }
        letters.iter().rev().collect()
    }

    /// Follows `word` from the root
    pub fn find(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(NodeId::ROOT, |n, c| self.child(n, letter_offset(c)?))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |n| self.is_word(n))
    }

    /// Depth first walk over every node, calling `action` for the nodes
    /// accepted by `predicate`. Visiting order is unspecified.
    pub fn traverse<P, A>(&self, mut predicate: P, mut action: A)
    where
        P: FnMut(NodeId, &TrieNode) -> bool,
        A: FnMut(NodeId, &TrieNode),
    {
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if predicate(id, node) {
                action(id, node);
            }
            if node.has_children {
                stack.extend(node.next.iter().flatten());
            }
        }
    }

    /// Every word stored in the trie, in no particular order
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        self.traverse(|_, n| n.is_word(), |id, _| words.push(self.word_at(id)));
        words
    }

    /// Number of distinct words stored
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<&'static str> {
        vec!["cat", "cats", "dog", "mouse", "moose", "laptop"]
    }

    #[test]
    fn test_trie_round_trip() {
        let trie = Trie::build(vocab());
        assert_eq!(trie.word_count(), 6);
        for w in vocab() {
            let node = trie.find(w).expect("inserted word is reachable");
            assert!(trie.is_word(node));
            assert_eq!(trie.word_at(node), w);
        }
    }

    #[test]
    fn test_prefixes_are_not_words() {
        let trie = Trie::build(vocab());
        let node = trie.find("mo").unwrap();
        assert!(!trie.is_word(node));
        assert!(trie.has_children(node));
        assert!(!trie.contains("ca"));
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(!trie.contains("catsup"));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let trie = Trie::build(vocab());
        let node = trie.find("cats").unwrap();
        assert!(!trie.has_children(node));
        assert!(trie.child(node, 0).is_none());
    }

    #[test]
    fn test_shared_prefix_nodes() {
        let trie = Trie::build(["cat", "cats"]);
        // root + c + a + t + s
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let trie = Trie::build(["dog", "dog", "dog"]);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_invalid_words_are_skipped() {
        let trie = Trie::build(["ok", "Nope", "it's", ""]);
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::build(Vec::<String>::new());
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.has_children(trie.root()));
        assert!(trie.words().is_empty());
        assert_eq!(trie.node(trie.root()).value(), None);
    }

    #[test]
    fn test_traverse_collects_all_words() {
        let trie = Trie::build(vocab());
        let mut words = trie.words();
        words.sort();
        let mut expected = vocab();
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_parent_links() {
        let trie = Trie::build(["ab"]);
        let b = trie.find("ab").unwrap();
        let a = trie.node(b).parent().unwrap();
        assert_eq!(trie.node(a).value(), Some(0));
        assert_eq!(trie.node(a).parent(), Some(trie.root()));
    }
}
