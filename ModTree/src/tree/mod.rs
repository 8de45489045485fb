//! Virtual file trees
//!
//! An in-memory model of a mod archive's directory layout. Trees are built
//! from path lists or from a real directory scan, inspected by checkers, and
//! rewritten in place before any disk change happens.
//!
//! Paths are slash-separated and relative to the tree root; name lookups are
//! case-insensitive. Every entry is exclusively owned by its parent
//! directory, so all mutation goes through [`FileTree`] by path.

pub mod entry;
pub mod file_tree;

pub use entry::{DirectoryEntry, Entry, FileEntry};
pub use file_tree::FileTree;
