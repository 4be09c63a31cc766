use crate::config::SearchPath;
use crate::patterns::{ExcludeRules, FilePatterns};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace, warn};

/// One matched file: its absolute path and full text content.
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}

/// Breadth-first walk over the configured search roots.
///
/// Excluded directories are pruned without being descended, excluded files
/// are omitted. Every filesystem error along the way is logged and skipped;
/// the walk itself never fails. Nonexistent roots contribute nothing, and
/// overlapping roots are not deduplicated.
pub async fn collect_files(
    root: &Path,
    extensions: &[String],
    search_path: &SearchPath,
    exclude: &[String],
) -> Vec<FileEntry> {
    let patterns = FilePatterns::new(extensions);
    let excludes = ExcludeRules::new(exclude);

    let mut queue: VecDeque<PathBuf> = search_path
        .roots()
        .iter()
        .map(|r| {
            let path = Path::new(r);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            }
        })
        .collect();

    let mut entries = Vec::new();

    while let Some(dir) = queue.pop_front() {
        if !fs::try_exists(&dir).await.unwrap_or(false) {
            debug!("Search path {} does not exist, skipping", dir.display());
            continue;
        }
        if excludes.is_excluded(&dir) {
            trace!("Excluded directory: {}", dir.display());
            continue;
        }

        let mut children = match fs::read_dir(&dir).await {
            Ok(children) => children,
            Err(e) => {
                warn!("Failed to list directory {}: {}", dir.display(), e);
                continue;
            }
        };

        loop {
            let child = match children.next_entry().await {
                Ok(Some(child)) => child,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", dir.display(), e);
                    break;
                }
            };
            let child_path = child.path();

            if excludes.is_excluded(&child_path) {
                trace!("Excluded: {}", child_path.display());
                continue;
            }

            let file_type = match child.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!("Failed to stat {}: {}", child_path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                queue.push_back(child_path);
            } else if file_type.is_file() {
                let name = child.file_name().to_string_lossy().into_owned();
                if patterns.matches(&name) {
                    match fs::read_to_string(&child_path).await {
                        Ok(content) => {
                            trace!("Collected: {}", child_path.display());
                            entries.push(FileEntry {
                                path: child_path,
                                content,
                            });
                        }
                        Err(e) => warn!("Failed to read {}: {}", child_path.display(), e),
                    }
                }
            }
        }
    }

    debug!("Collected {} files", entries.len());
    entries
}
