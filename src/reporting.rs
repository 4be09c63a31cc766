use crate::trie::{Trie, TrieNode};
use crate::walker::FileEntry;
use tracing::info;

/// Prints a tree of the copied files with per-file and total sizes.
pub fn print_stats(entries: &[FileEntry]) {
    let mut trie = Trie::new();
    let mut total_bytes = 0;

    for entry in entries {
        let byte_count = entry.content.len();
        trie.insert(&entry.path, byte_count);
        total_bytes += byte_count;
    }

    info!(
        "Copied {} files ({})",
        entries.len(),
        human_size(total_bytes)
    );
    print_tree(trie.get_root(), "");
}

fn print_tree(node: &TrieNode, prefix: &str) {
    let mut children: Vec<_> = node.children.iter().collect();
    children.sort_by(|a, b| a.0.cmp(b.0));

    for (i, (name, child)) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        let connector = if is_last_child { "┗━━" } else { "┣━━" };
        let new_prefix = format!("{}{}   ", prefix, if is_last_child { " " } else { "┃" });

        if let Some(byte_count) = child.byte_count {
            info!("{}{} {} ({})", prefix, connector, name, human_size(byte_count));
        } else {
            info!(
                "{}{} {}/ ({})",
                prefix,
                connector,
                name,
                human_size(child.total_bytes())
            );
            print_tree(child, &new_prefix);
        }
    }
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
