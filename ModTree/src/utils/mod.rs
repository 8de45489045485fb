//! Shared utilities

pub mod path;

pub use path::{components, join_path, normalize_path};
