//! Change sets: the disk operations a virtual fix implies

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use modtree::tree::{Entry, FileEntry, FileTree};
use serde::Serialize;

use crate::error::{Error, Result};

/// A single file relocation, in paths relative to the staging root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileMove {
    /// Current location
    pub from: String,
    /// Location after the fix
    pub to: String,
}

/// The disk operations that turn a staging folder into a fixed tree's
/// layout.
///
/// Built by diffing the tree a folder was loaded as against the tree a
/// checker fixed it into. Applying is move-then-delete-then-prune; a
/// change set built from unrelated trees is meaningless.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    /// Relocations, in the original tree's enumeration order
    pub moves: Vec<FileMove>,
    /// Relative paths of files the fix dropped
    pub deletes: Vec<String>,
    /// Directories absent after the fix, deepest first
    pub prune_dirs: Vec<String>,
}

impl ChangeSet {
    /// Diff two trees loaded from the same staging folder.
    ///
    /// Files are matched by their recorded source path; a file whose tree
    /// path changed becomes a move, a file missing from `fixed` becomes a
    /// deletion. Files without provenance are ignored. Directories present
    /// in `original` but not in `fixed` are queued for pruning.
    #[must_use]
    pub fn between(original: &FileTree, fixed: &FileTree) -> Self {
        let fixed_by_source: HashMap<&Path, String> = fixed
            .entries()
            .into_iter()
            .filter_map(|(path, entry)| {
                entry
                    .as_file()
                    .and_then(FileEntry::source)
                    .map(|source| (source, path))
            })
            .collect();

        let mut changes = Self::default();
        for (path, entry) in original.entries() {
            match entry {
                Entry::File(file) => {
                    let Some(source) = file.source() else {
                        continue;
                    };
                    match fixed_by_source.get(source) {
                        Some(new_path) if *new_path != path => {
                            changes.moves.push(FileMove {
                                from: path,
                                to: new_path.clone(),
                            });
                        }
                        Some(_) => {}
                        None => changes.deletes.push(path),
                    }
                }
                Entry::Directory(_) => {
                    if fixed.dir(&path).is_none() {
                        changes.prune_dirs.push(path);
                    }
                }
            }
        }
        // Prune children before their parents.
        changes.prune_dirs.reverse();
        changes
    }

    /// Whether applying would touch the disk at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.deletes.is_empty() && self.prune_dirs.is_empty()
    }

    /// Apply the change set to the staging folder it was built from.
    ///
    /// Relocations run first, creating destination folders as needed; a
    /// move onto an existing path aborts before anything is overwritten.
    /// Deletions follow, then directories the fix emptied are removed.
    /// An abort leaves earlier operations in place.
    pub fn apply(&self, root: &Path) -> Result<ApplyOutcome> {
        let mut outcome = ApplyOutcome::default();

        for mv in &self.moves {
            let from = root.join(&mv.from);
            let to = root.join(&mv.to);
            if to.exists() {
                return Err(Error::DestinationExists { path: to });
            }
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::rename(&from, &to)?;
            outcome.moved += 1;
        }

        for path in &self.deletes {
            fs::remove_file(root.join(path))?;
            outcome.deleted += 1;
        }

        // remove_dir refuses non-empty directories, which is exactly the
        // guard wanted here.
        for path in &self.prune_dirs {
            if fs::remove_dir(root.join(path)).is_ok() {
                outcome.pruned_dirs += 1;
            }
        }

        tracing::info!(
            "applied change set: {} moved, {} deleted, {} folders pruned",
            outcome.moved,
            outcome.deleted,
            outcome.pruned_dirs
        );
        Ok(outcome)
    }
}

/// Counts of what [`ChangeSet::apply`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplyOutcome {
    /// Files relocated
    pub moved: usize,
    /// Files deleted
    pub deleted: usize,
    /// Emptied directories removed
    pub pruned_dirs: usize,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn file(name: &str, source: &str) -> Entry {
        Entry::File(FileEntry::new(name).with_source(PathBuf::from(source)))
    }

    #[test]
    fn test_between_reports_moves_and_deletes() {
        let mut original = FileTree::new();
        original.mkdirs("Weird").unwrap();
        original
            .insert("Weird", file("Mod.pak", "/staging/Weird/Mod.pak"))
            .unwrap();
        original
            .insert("Weird", file("icon.png", "/staging/Weird/icon.png"))
            .unwrap();

        let mut fixed = original.clone();
        fixed.detach("Weird/icon.png").unwrap();
        fixed
            .move_entry("Weird/Mod.pak", "Weird/SB/Content/Paks/~mods/")
            .unwrap();

        let changes = ChangeSet::between(&original, &fixed);
        assert_eq!(
            changes.moves,
            vec![FileMove {
                from: "Weird/Mod.pak".to_string(),
                to: "Weird/SB/Content/Paks/~mods/Mod.pak".to_string(),
            }]
        );
        assert_eq!(changes.deletes, vec!["Weird/icon.png"]);
        assert!(changes.prune_dirs.is_empty());
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_between_of_identical_trees_is_empty() {
        let mut original = FileTree::new();
        original
            .insert("", file("Mod.pak", "/staging/Mod.pak"))
            .unwrap();

        let changes = ChangeSet::between(&original, &original.clone());
        assert!(changes.is_empty());
    }

    #[test]
    fn test_between_prunes_abandoned_directories_deepest_first() {
        let mut original = FileTree::new();
        original.mkdirs("Content/Paks").unwrap();
        original
            .insert("Content/Paks", file("x.pak", "/staging/Content/Paks/x.pak"))
            .unwrap();

        let mut fixed = original.clone();
        fixed.move_entry("Content", "SB").unwrap();

        let changes = ChangeSet::between(&original, &fixed);
        assert_eq!(
            changes.moves,
            vec![FileMove {
                from: "Content/Paks/x.pak".to_string(),
                to: "SB/Content/Paks/x.pak".to_string(),
            }]
        );
        assert_eq!(changes.prune_dirs, vec!["Content/Paks", "Content"]);
    }

    #[test]
    fn test_apply_moves_deletes_and_prunes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Content/Paks")).unwrap();
        std::fs::write(dir.path().join("Content/Paks/x.pak"), b"pak").unwrap();
        std::fs::write(dir.path().join("icon.png"), b"png").unwrap();

        let original = crate::staging::load_tree(dir.path()).unwrap();
        let mut fixed = original.clone();
        fixed.detach("icon.png").unwrap();
        fixed.move_entry("Content", "SB").unwrap();

        let changes = ChangeSet::between(&original, &fixed);
        let outcome = changes.apply(dir.path()).unwrap();

        assert_eq!(outcome.moved, 1);
        assert_eq!(outcome.deleted, 1);
        assert_eq!(outcome.pruned_dirs, 2);
        assert!(dir.path().join("SB/Content/Paks/x.pak").is_file());
        assert!(!dir.path().join("Content").exists());
        assert!(!dir.path().join("icon.png").exists());
    }

    #[test]
    fn test_apply_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.pak"), b"a").unwrap();
        std::fs::write(dir.path().join("b.pak"), b"b").unwrap();

        let changes = ChangeSet {
            moves: vec![FileMove {
                from: "a.pak".to_string(),
                to: "b.pak".to_string(),
            }],
            ..ChangeSet::default()
        };

        let err = changes.apply(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DestinationExists { .. }));
        assert_eq!(std::fs::read(dir.path().join("b.pak")).unwrap(), b"b");
    }
}
