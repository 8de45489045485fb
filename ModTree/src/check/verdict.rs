//! Layout verdicts

use std::fmt;

use serde::Serialize;

/// The outcome of checking a mod's file tree.
///
/// Verdicts order by strength: `Invalid < Fixable < Valid`. Fixable means
/// the layout deviates from the expected form but can be rewritten without
/// user intervention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The layout is unusable and cannot be repaired mechanically.
    Invalid,
    /// The layout deviates from the expected form but a rewrite fixes it.
    Fixable,
    /// The layout can be installed as-is.
    Valid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Invalid => "INVALID",
            Verdict::Fixable => "FIXABLE",
            Verdict::Valid => "VALID",
        };
        write!(f, "{s}")
    }
}
