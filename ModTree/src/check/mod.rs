//! Mod data checking
//!
//! A checker looks at a mod's file tree and answers one question: can this
//! layout be installed as-is, repaired mechanically, or neither. The generic
//! [`GlobPatternChecker`] drives that answer from configured name patterns;
//! game-specific checkers wrap it with their own structural rules.

pub mod checker;
pub mod patterns;
pub mod verdict;

pub use checker::{GlobPatternChecker, ModDataChecker};
pub use patterns::{GlobPatterns, glob_match};
pub use verdict::Verdict;
