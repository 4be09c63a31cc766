use std::collections::HashMap;
use std::path::Path;

/// Node in the path trie used by the copy report.
pub struct TrieNode {
    pub children: HashMap<String, TrieNode>,
    pub byte_count: Option<usize>,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            byte_count: None,
        }
    }

    /// Total bytes in this subtree.
    pub fn total_bytes(&self) -> usize {
        self.byte_count.unwrap_or(0)
            + self
                .children
                .values()
                .map(|child| child.total_bytes())
                .sum::<usize>()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        TrieNode::new()
    }
}

/// Trie of copied file paths, one node per path component.
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    pub fn insert(&mut self, path: &Path, byte_count: usize) {
        let mut current_node = &mut self.root;
        for component in path.iter() {
            let component_str = component.to_string_lossy().into_owned();
            current_node = current_node
                .children
                .entry(component_str)
                .or_insert_with(TrieNode::new);
        }
        current_node.byte_count = Some(byte_count);
    }

    pub fn get_root(&self) -> &TrieNode {
        &self.root
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}
