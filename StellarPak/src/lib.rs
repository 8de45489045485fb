//! # StellarPak
//!
//! Mod layout checking and repair for Stellar Blade.
//!
//! The game loads loose mods from `SB/Content/Paks/~mods/`, but archives in
//! the wild put their pak files almost anywhere. StellarPak classifies a mod
//! folder's layout as valid, fixable, or invalid, and rewrites fixable
//! layouts into the canonical shape.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use stellarpak::games::stellar_blade;
//! use stellarpak::staging::{ChangeSet, load_tree};
//! use modtree::check::{ModDataChecker, Verdict};
//!
//! let folder = Path::new("path/to/extracted/mod");
//! let checker = stellar_blade().checker();
//!
//! let original = load_tree(folder)?;
//! if checker.check(&original) == Verdict::Fixable {
//!     let mut fixed = original.clone();
//!     checker.fix(&mut fixed)?;
//!     ChangeSet::between(&original, &fixed).apply(folder)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

// Re-export modtree
pub use modtree;

pub mod error;
pub mod games;
pub mod staging;

// Feature-gated modules
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::games::{
        GameDefinition, UnrealModDataChecker, find_game, stellar_blade, supported_games,
        ue_glob_patterns,
    };
    pub use crate::staging::{ApplyOutcome, ChangeSet, FileMove, load_tree};
    pub use modtree::check::{GlobPatternChecker, GlobPatterns, ModDataChecker, Verdict};
    pub use modtree::tree::{DirectoryEntry, Entry, FileEntry, FileTree};
}

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
