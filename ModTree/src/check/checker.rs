//! The checker trait and the generic glob-pattern implementation

use crate::error::Result;
use crate::tree::FileTree;

use super::patterns::GlobPatterns;
use super::verdict::Verdict;

/// Decides whether a mod's file tree is installable and repairs it when the
/// deviation is mechanical.
///
/// `check` never mutates; `fix` rewrites the tree in place and is only
/// meaningful after a [`Verdict::Fixable`].
pub trait ModDataChecker {
    /// Classify the tree's top-level layout.
    fn check(&self, tree: &FileTree) -> Verdict;

    /// Rewrite the tree toward its expected layout.
    fn fix(&self, tree: &mut FileTree) -> Result<()>;
}

/// A checker driven entirely by name patterns.
///
/// Classification scans top-level entries only: a valid name keeps the tree
/// valid, a delete or move match makes it fixable, anything else makes it
/// invalid on the spot. An empty tree is invalid.
#[derive(Clone, Debug)]
pub struct GlobPatternChecker {
    patterns: GlobPatterns,
}

impl GlobPatternChecker {
    /// Create a checker from its pattern configuration.
    pub fn new(patterns: GlobPatterns) -> Self {
        Self { patterns }
    }

    /// The configured patterns.
    pub fn patterns(&self) -> &GlobPatterns {
        &self.patterns
    }
}

impl ModDataChecker for GlobPatternChecker {
    fn check(&self, tree: &FileTree) -> Verdict {
        let mut status = Verdict::Invalid;
        for entry in tree.root().children() {
            let name = entry.name();
            if self.patterns.matches_valid(name) {
                if status != Verdict::Fixable {
                    status = Verdict::Valid;
                }
            } else if self.patterns.matches_delete(name)
                || self.patterns.move_target(name).is_some()
            {
                status = Verdict::Fixable;
            } else {
                return Verdict::Invalid;
            }
        }
        status
    }

    fn fix(&self, tree: &mut FileTree) -> Result<()> {
        // Top-level pass over a name snapshot; entries matching a valid
        // pattern are never rearranged.
        let top_level: Vec<String> = tree
            .root()
            .children()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        for name in top_level {
            if self.patterns.matches_valid(&name) {
                continue;
            }
            if self.patterns.matches_delete(&name) {
                tracing::debug!("dropping {name}");
                tree.detach(&name)?;
            } else if let Some(target) = self.patterns.move_target(&name) {
                tree.move_entry(&name, target)?;
            }
        }

        // Throwaway files are removed at any depth, not just the top level.
        for path in tree.file_paths() {
            let name = path.rsplit('/').next().unwrap_or(path.as_str());
            if self.patterns.matches_delete(name) {
                tracing::debug!("dropping {path}");
                tree.detach(&path)?;
            }
        }
        Ok(())
    }
}
