//! The virtual file tree and its path-addressed operations

use crate::error::{Error, Result};
use crate::utils::path::{components, join_path, normalize_path};

use super::entry::{DirectoryEntry, Entry, FileEntry};

/// An in-memory directory tree addressed by slash-separated paths.
///
/// The root is an unnamed directory; the empty path addresses it. Lookups
/// fold case, children keep insertion order, and moves follow a merge
/// policy: directory onto directory merges recursively, any other collision
/// replaces the existing entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTree {
    root: DirectoryEntry,
}

impl FileTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: DirectoryEntry::new(""),
        }
    }

    /// Build a tree from a list of paths.
    ///
    /// A trailing slash marks a directory; anything else is a file whose
    /// parent directories are created as needed.
    ///
    /// ```
    /// use modtree::tree::FileTree;
    ///
    /// let tree = FileTree::from_paths(["SB/Content/Paks/~mods/Mod.pak", "docs/"])?;
    /// assert!(tree.contains("sb/content/paks/~mods/mod.pak"));
    /// assert!(tree.dir("docs").is_some());
    /// # Ok::<(), modtree::Error>(())
    /// ```
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            let raw = path.as_ref();
            let is_dir = raw.ends_with('/') || raw.ends_with('\\');
            let norm = normalize_path(raw);
            if norm.is_empty() {
                continue;
            }
            if is_dir {
                tree.mkdirs(&norm)?;
            } else if let Some((parent, name)) = norm.rsplit_once('/') {
                tree.mkdirs(parent)?;
                tree.insert(parent, Entry::File(FileEntry::new(name)))?;
            } else {
                tree.insert("", Entry::File(FileEntry::new(norm.as_str())))?;
            }
        }
        Ok(tree)
    }

    /// The root directory.
    pub fn root(&self) -> &DirectoryEntry {
        &self.root
    }

    /// Look up an entry by path. The root itself is not an entry.
    pub fn entry(&self, path: &str) -> Option<&Entry> {
        let norm = normalize_path(path);
        let mut comps = components(&norm);
        let first = comps.next()?;
        let mut current = self.root.child(first)?;
        for comp in comps {
            current = current.as_dir()?.child(comp)?;
        }
        Some(current)
    }

    /// Whether an entry exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.entry(path).is_some()
    }

    /// Look up a directory by path; the empty path yields the root.
    pub fn dir(&self, path: &str) -> Option<&DirectoryEntry> {
        let norm = normalize_path(path);
        if norm.is_empty() {
            return Some(&self.root);
        }
        self.entry(&norm).and_then(Entry::as_dir)
    }

    /// Create the directory chain for `path`, leaving existing entries alone.
    pub fn mkdirs(&mut self, path: &str) -> Result<()> {
        let mut dir = &mut self.root;
        let mut walked = String::new();
        for comp in components(path) {
            walked = join_path(&walked, comp);
            let idx = match dir.child_position(comp) {
                Some(i) => i,
                None => {
                    dir.push_child(Entry::Directory(DirectoryEntry::new(comp)));
                    dir.children().len() - 1
                }
            };
            dir = match dir.child_at_mut(idx) {
                Entry::Directory(d) => d,
                Entry::File(_) => return Err(Error::NotADirectory { path: walked }),
            };
        }
        Ok(())
    }

    /// Insert an entry under an existing parent directory, merging on
    /// name collision.
    pub fn insert(&mut self, parent: &str, entry: Entry) -> Result<()> {
        validate_name(entry.name())?;
        let norm = normalize_path(parent);
        let dir = self.dir_at_mut(&norm)?;
        merge_child(dir, entry);
        Ok(())
    }

    /// Remove and return the entry at `path`.
    pub fn detach(&mut self, path: &str) -> Result<Entry> {
        let norm = normalize_path(path);
        let mut comps: Vec<&str> = components(&norm).collect();
        let Some(name) = comps.pop() else {
            return Err(Error::DetachRoot);
        };
        let parent_path = comps.join("/");
        let parent = self.dir_at_mut(&parent_path)?;
        let idx = parent
            .child_position(name)
            .ok_or_else(|| Error::EntryNotFound { path: norm.clone() })?;
        Ok(parent.remove_child(idx))
    }

    /// Move the entry at `src` into the directory `dest_dir`, creating the
    /// destination chain as needed, and return the entry's new path.
    ///
    /// The move is a single operation from the caller's point of view:
    /// detach, destination creation, and merge-insert happen in one call.
    /// Moving an entry into its current parent is a no-op.
    pub fn move_entry(&mut self, src: &str, dest_dir: &str) -> Result<String> {
        let src_norm = normalize_path(src);
        let dest_norm = normalize_path(dest_dir);
        if src_norm.is_empty() {
            return Err(Error::DetachRoot);
        }
        let src_entry = self
            .entry(&src_norm)
            .ok_or_else(|| Error::EntryNotFound {
                path: src_norm.clone(),
            })?;
        let name = src_entry.name().to_string();

        // A directory must never end up underneath itself.
        if src_entry.is_dir() {
            let src_lower = src_norm.to_lowercase();
            let dest_lower = dest_norm.to_lowercase();
            if dest_lower == src_lower || dest_lower.starts_with(&format!("{src_lower}/")) {
                return Err(Error::IntoOwnSubtree {
                    from: src_norm,
                    to: dest_norm,
                });
            }
        }

        let src_parent = match src_norm.rsplit_once('/') {
            Some((parent, _)) => parent,
            None => "",
        };
        if src_parent.eq_ignore_ascii_case(&dest_norm) {
            return Ok(src_norm);
        }

        self.mkdirs(&dest_norm)?;
        let entry = self.detach(&src_norm)?;
        let dest = self.dir_at_mut(&dest_norm)?;
        merge_child(dest, entry);

        let new_path = join_path(&dest_norm, &name);
        tracing::debug!("moved {src_norm} -> {new_path}");
        Ok(new_path)
    }

    /// All entries with their paths, depth-first in child order.
    pub fn entries(&self) -> Vec<(String, &Entry)> {
        let mut out = Vec::new();
        collect_entries(&self.root, "", &mut out);
        out
    }

    /// The paths of all file entries, depth-first in child order.
    pub fn file_paths(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(_, e)| e.is_file())
            .map(|(p, _)| p)
            .collect()
    }

    fn dir_at_mut(&mut self, path: &str) -> Result<&mut DirectoryEntry> {
        let mut dir = &mut self.root;
        let mut walked = String::new();
        for comp in components(path) {
            walked = join_path(&walked, comp);
            let idx = match dir.child_position(comp) {
                Some(i) => i,
                None => return Err(Error::EntryNotFound { path: walked }),
            };
            dir = match dir.child_at_mut(idx) {
                Entry::Directory(d) => d,
                Entry::File(_) => return Err(Error::NotADirectory { path: walked }),
            };
        }
        Ok(dir)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn merge_child(dir: &mut DirectoryEntry, entry: Entry) {
    let Some(idx) = dir.child_position(entry.name()) else {
        dir.push_child(entry);
        return;
    };
    let existing = dir.remove_child(idx);
    let merged = match (existing, entry) {
        (Entry::Directory(mut into), Entry::Directory(from)) => {
            for child in from.into_children() {
                merge_child(&mut into, child);
            }
            Entry::Directory(into)
        }
        (_, incoming) => incoming,
    };
    dir.insert_child(idx, merged);
}

fn collect_entries<'a>(dir: &'a DirectoryEntry, prefix: &str, out: &mut Vec<(String, &'a Entry)>) {
    for child in dir.children() {
        let path = join_path(prefix, child.name());
        if let Entry::Directory(d) = child {
            out.push((path.clone(), child));
            collect_entries(d, &path, out);
        } else {
            out.push((path, child));
        }
    }
}
