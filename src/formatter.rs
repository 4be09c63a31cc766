use crate::walker::FileEntry;

/// One result line: a header naming the source path, then the content.
pub fn format_entry(entry: &FileEntry) -> String {
    format!("// File: {}\n{}\n", entry.path.display(), entry.content)
}

/// Joins formatted entries with a blank-line separator, in discovery order.
/// An empty input yields the empty string; callers treat whitespace-only
/// output as "no matching content".
pub fn aggregate(entries: &[FileEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}
