//! Staging folders: scanning mod folders from disk and writing fixes back
//!
//! Checkers work on virtual trees and never touch the filesystem. This
//! module bridges the two: [`load_tree`] scans a folder into a tree, and a
//! [`ChangeSet`] diffs the checker's result against what was loaded so the
//! fix can be previewed or applied as plain renames and deletions.

pub mod changes;
pub mod loader;

pub use changes::{ApplyOutcome, ChangeSet, FileMove};
pub use loader::load_tree;
