//! Glob pattern configuration for mod data checking

use indexmap::IndexMap;

/// The rule sets driving a [`GlobPatternChecker`](super::GlobPatternChecker).
///
/// Patterns match entry names, not paths, and fold case. The move table
/// keeps insertion order; the first matching pattern decides an entry's
/// destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobPatterns {
    /// Pattern to destination directory, first match wins.
    pub moves: IndexMap<String, String>,
    /// Names of throwaway entries (installer art, screenshots).
    pub delete: Vec<String>,
    /// Top-level names accepted without inspection.
    pub valid: Vec<String>,
}

impl GlobPatterns {
    /// The destination directory for the first move pattern matching `name`.
    pub fn move_target(&self, name: &str) -> Option<&str> {
        self.moves
            .iter()
            .find(|(pattern, _)| glob_match(pattern, name))
            .map(|(_, target)| target.as_str())
    }

    /// Whether `name` matches a delete pattern.
    pub fn matches_delete(&self, name: &str) -> bool {
        self.delete.iter().any(|p| glob_match(p, name))
    }

    /// Whether `name` matches a valid pattern.
    pub fn matches_valid(&self, name: &str) -> bool {
        self.valid.iter().any(|p| glob_match(p, name))
    }
}

/// Simple glob pattern matching (supports * and ?)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();
    glob_match_recursive(&pattern_chars, &text_chars, 0, 0)
}

fn glob_match_recursive(pattern: &[char], text: &[char], pi: usize, ti: usize) -> bool {
    if pi == pattern.len() && ti == text.len() {
        return true;
    }
    if pi == pattern.len() {
        return false;
    }

    match pattern[pi] {
        '*' => {
            for i in ti..=text.len() {
                if glob_match_recursive(pattern, text, pi + 1, i) {
                    return true;
                }
            }
            false
        }
        '?' => {
            if ti < text.len() {
                glob_match_recursive(pattern, text, pi + 1, ti + 1)
            } else {
                false
            }
        }
        c => {
            if ti < text.len() && text[ti].eq_ignore_ascii_case(&c) {
                glob_match_recursive(pattern, text, pi + 1, ti + 1)
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match_folds_case() {
        assert!(glob_match("content", "Content"));
        assert!(glob_match("~MODS", "~mods"));
        assert!(!glob_match("paks", "pak"));
    }

    #[test]
    fn test_glob_match_wildcards() {
        assert!(glob_match("**.pak", "MyMod.pak"));
        assert!(glob_match("**.pak", "MyMod.PAK"));
        assert!(glob_match("*.ucas", "pakchunk99-Mods_P.ucas"));
        assert!(!glob_match("**.pak", "MyMod.ucas"));
        assert!(glob_match("script?.lua", "script1.lua"));
        assert!(!glob_match("script?.lua", "script12.lua"));
    }

    #[test]
    fn test_move_target_uses_first_match() {
        let patterns = GlobPatterns {
            moves: [
                ("~mods".to_string(), "SB/Content/Paks/".to_string()),
                ("**.pak".to_string(), "SB/Content/Paks/~mods/".to_string()),
            ]
            .into_iter()
            .collect(),
            delete: vec!["icon.png".to_string()],
            valid: vec!["SB".to_string()],
        };

        assert_eq!(patterns.move_target("~Mods"), Some("SB/Content/Paks/"));
        assert_eq!(
            patterns.move_target("loose.pak"),
            Some("SB/Content/Paks/~mods/")
        );
        assert_eq!(patterns.move_target("readme.txt"), None);
        assert!(patterns.matches_delete("Icon.PNG"));
        assert!(patterns.matches_valid("sb"));
    }
}
