//! Staging folder scanning

use std::path::Path;

use modtree::tree::{Entry, FileEntry, FileTree};
use modtree::utils::path::normalize_path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Scan a staging folder into a virtual tree.
///
/// Entries are inserted in file-name order so rebuilt trees enumerate
/// deterministically. Files carry their size and absolute source path,
/// which later diffing keys on. Unreadable entries are skipped.
pub fn load_tree(dir: &Path) -> Result<FileTree> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut tree = FileTree::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let rel = normalize_path(&relative.to_string_lossy());
        if rel.is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            tree.mkdirs(&rel)?;
        } else if entry.file_type().is_file() {
            let size = entry.metadata().map_or(0, |meta| meta.len());
            let (parent, name) = match rel.rsplit_once('/') {
                Some((parent, name)) => (parent, name),
                None => ("", rel.as_str()),
            };
            tree.mkdirs(parent)?;
            tree.insert(
                parent,
                Entry::File(
                    FileEntry::new(name)
                        .with_size(size)
                        .with_source(entry.path().to_path_buf()),
                ),
            )?;
        }
    }

    tracing::debug!(
        "loaded {} files from {}",
        tree.file_paths().len(),
        dir.display()
    );
    Ok(tree)
}
