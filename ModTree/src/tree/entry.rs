//! Tree entry types

use std::path::{Path, PathBuf};

/// A file node in a virtual tree.
///
/// Files built by a disk scan carry their byte size and the absolute path
/// they came from; synthetic files (tests, in-memory hosts) carry neither.
/// Checkers never read the provenance fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    size: u64,
    source: Option<PathBuf>,
}

impl FileEntry {
    /// Create a file entry with no provenance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            source: None,
        }
    }

    /// Set the file size in bytes.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the on-disk path this entry was loaded from.
    #[must_use]
    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    /// The entry name (no path separators).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file size in bytes (zero for synthetic entries).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The on-disk path this entry was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// A directory node owning its children in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: String,
    children: Vec<Entry>,
}

impl DirectoryEntry {
    /// Create an empty directory entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The entry name (empty only for a tree root).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The children in insertion order.
    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    /// Look up a direct child by case-insensitive name.
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Whether the directory has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn child_position(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub(crate) fn child_at_mut(&mut self, index: usize) -> &mut Entry {
        &mut self.children[index]
    }

    pub(crate) fn push_child(&mut self, entry: Entry) {
        self.children.push(entry);
    }

    pub(crate) fn remove_child(&mut self, index: usize) -> Entry {
        self.children.remove(index)
    }

    pub(crate) fn insert_child(&mut self, index: usize, entry: Entry) {
        self.children.insert(index, entry);
    }

    pub(crate) fn into_children(self) -> Vec<Entry> {
        self.children
    }
}

/// An entry in a virtual file tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A file leaf.
    File(FileEntry),
    /// A directory with owned children.
    Directory(DirectoryEntry),
}

impl Entry {
    /// The entry name.
    pub fn name(&self) -> &str {
        match self {
            Entry::File(f) => f.name(),
            Entry::Directory(d) => d.name(),
        }
    }

    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    /// Whether this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    /// Borrow as a directory, if it is one.
    pub fn as_dir(&self) -> Option<&DirectoryEntry> {
        match self {
            Entry::Directory(d) => Some(d),
            Entry::File(_) => None,
        }
    }

    /// Borrow as a file, if it is one.
    pub fn as_file(&self) -> Option<&FileEntry> {
        match self {
            Entry::File(f) => Some(f),
            Entry::Directory(_) => None,
        }
    }
}
