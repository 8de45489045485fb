//! Error types for `StellarPak`

use std::path::PathBuf;
use thiserror::Error;

/// Errors from staging folder operations and game definitions
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Tree Errors ====================
    /// The underlying virtual tree operation failed
    #[error("tree error: {0}")]
    Tree(#[from] modtree::Error),

    // ==================== Staging Errors ====================
    /// The staging path does not point at a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// A planned relocation would overwrite an existing file
    #[error("destination already exists: {path}")]
    DestinationExists {
        /// Path that is already occupied on disk
        path: PathBuf,
    },

    // ==================== Game Definition Errors ====================
    /// No built-in game matches the requested short name
    #[error("unknown game: {short_name}")]
    UnknownGame {
        /// Short name that failed to resolve
        short_name: String,
    },

    /// A game definition parsed but fails its semantic checks
    #[error("invalid game definition: {message}")]
    InvalidGameDefinition {
        /// What is wrong with the definition
        message: String,
    },

    /// Game definition TOML failed to parse
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for `StellarPak` operations
pub type Result<T> = std::result::Result<T, Error>;
