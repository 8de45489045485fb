//! # ModTree
//!
//! A pure-Rust engine for modeling and repairing game mod folder layouts.
//!
//! ## What It Does
//!
//! - **Virtual file trees** - Model a mod archive's layout in memory, move
//!   and detach entries, merge directories
//! - **Glob patterns** - Case-insensitive name rules with `*` and `?`
//! - **Layout checking** - Classify a tree as valid, fixable, or invalid and
//!   rewrite fixable trees in place
//!
//! ## Quick Start
//!
//! ```
//! use modtree::prelude::*;
//!
//! let patterns = GlobPatterns {
//!     moves: [("**.pak".to_string(), "SB/Content/Paks/~mods/".to_string())]
//!         .into_iter()
//!         .collect(),
//!     delete: vec!["icon.png".to_string()],
//!     valid: vec!["SB".to_string()],
//! };
//! let checker = GlobPatternChecker::new(patterns);
//!
//! let mut tree = FileTree::from_paths(["Loose.pak", "icon.png"])?;
//! assert_eq!(checker.check(&tree), Verdict::Fixable);
//!
//! checker.fix(&mut tree)?;
//! assert!(tree.contains("SB/Content/Paks/~mods/Loose.pak"));
//! assert!(!tree.contains("icon.png"));
//! # Ok::<(), modtree::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use modtree::prelude::*;
//!
//! // Now you have access to:
//! // - FileTree, Entry, FileEntry, DirectoryEntry
//! // - Verdict, GlobPatterns, GlobPatternChecker, ModDataChecker
//! // - Error, Result, and more
//! ```

pub mod check;
pub mod error;
pub mod tree;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    // Tree types
    pub use crate::tree::{DirectoryEntry, Entry, FileEntry, FileTree};

    // Checking
    pub use crate::check::{GlobPatternChecker, GlobPatterns, ModDataChecker, Verdict, glob_match};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
