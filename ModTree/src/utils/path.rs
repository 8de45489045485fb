//! Virtual path utilities
//!
//! Tree paths are slash-separated and relative to the tree root. The empty
//! string addresses the root itself.

/// Normalize path separators to forward slashes and strip surrounding slashes
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_string()
}

/// Split a path into its non-empty components
///
/// Accepts both forward and back slashes so paths coming from Windows hosts
/// work unchanged.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|c| !c.is_empty())
}

/// Join a parent path and a child name
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
