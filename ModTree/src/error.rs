//! Error types for `ModTree`

use thiserror::Error;

/// The error type for `ModTree` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Tree Lookup Errors ====================
    /// No entry exists at the given tree path.
    #[error("entry not found: {path}")]
    EntryNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// A path component that must be a directory is a file.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path of the file entry in the way.
        path: String,
    },

    // ==================== Tree Mutation Errors ====================
    /// The tree root cannot be detached or moved.
    #[error("the tree root cannot be detached")]
    DetachRoot,

    /// A directory cannot be moved into its own subtree.
    #[error("cannot move '{from}' into its own subtree '{to}'")]
    IntoOwnSubtree {
        /// The directory being moved.
        from: String,
        /// The offending destination.
        to: String,
    },

    /// An entry name is empty or contains a path separator.
    #[error("invalid entry name: {name:?}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// A specialized Result type for `ModTree` operations.
pub type Result<T> = std::result::Result<T, Error>;
