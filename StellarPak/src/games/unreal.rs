//! Unreal Engine pak placement rules
//!
//! UE titles load loose mods from `<GameDir>/Content/Paks/~mods/`, but
//! archives in the wild bury their paks under arbitrary folder names.
//! [`UnrealModDataChecker`] layers two structural rules on top of the
//! generic glob checker: a tree whose paks merely sit under a wrongly
//! named folder is fixable rather than invalid, and fixing relocates
//! those paks into the folder's own canonical subtree.

use modtree::Result;
use modtree::check::{GlobPatternChecker, GlobPatterns, ModDataChecker, Verdict};
use modtree::tree::{DirectoryEntry, FileTree};
use modtree::utils::path::join_path;

/// Directory names the game's pak loader already scans. Their contents
/// are in the right place and are never relocated.
const CANONICAL_PAK_DIRS: [&str; 2] = ["~mods", "logicmods"];

/// Glob rules mapping common archive shapes onto the canonical layout
/// for a game rooted at `dir_name`.
///
/// Partial layouts are re-rooted at the level they got right (a bare
/// `Content` folder slides under `dir_name`, a bare `Paks` folder under
/// `dir_name/Content`, and so on), while loose pak, ucas and utoc files
/// drop straight into the `~mods` folder.
#[must_use]
pub fn ue_glob_patterns(dir_name: &str) -> GlobPatterns {
    let mods_dir = format!("{dir_name}/Content/Paks/~mods/");
    GlobPatterns {
        moves: [
            ("content".to_string(), format!("{dir_name}/")),
            ("paks".to_string(), format!("{dir_name}/Content/")),
            ("~mods".to_string(), format!("{dir_name}/Content/Paks/")),
            ("root".to_string(), mods_dir.clone()),
            ("**.pak".to_string(), mods_dir.clone()),
            ("**.ucas".to_string(), mods_dir.clone()),
            ("**.utoc".to_string(), mods_dir),
        ]
        .into_iter()
        .collect(),
        delete: vec![
            "icon.png".to_string(),
            "screenshot.png".to_string(),
            "screenshot.jpg".to_string(),
        ],
        valid: vec![dir_name.to_string(), "root".to_string()],
    }
}

/// Pak placement checker for an Unreal Engine game.
///
/// Wraps a [`GlobPatternChecker`] built from [`ue_glob_patterns`] and adds
/// the misplaced-pak-folder rule on top of its verdicts.
#[derive(Clone, Debug)]
pub struct UnrealModDataChecker {
    dir_name: String,
    inner: GlobPatternChecker,
}

impl UnrealModDataChecker {
    /// Create a checker for a game whose top-level directory is `dir_name`
    /// (`SB` for Stellar Blade). The name must be non-empty.
    #[must_use]
    pub fn new(dir_name: &str) -> Self {
        Self {
            dir_name: dir_name.to_string(),
            inner: GlobPatternChecker::new(ue_glob_patterns(dir_name)),
        }
    }

    /// The game directory name the canonical layout is rooted at.
    #[must_use]
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// Whether `dir` directly contains at least one pak file.
    fn has_pak_file(dir: &DirectoryEntry) -> bool {
        dir.children()
            .iter()
            .any(|entry| entry.is_file() && entry.name().to_ascii_lowercase().ends_with(".pak"))
    }

    /// Whether `name` is a pak directory the game already scans.
    fn is_canonical_pak_dir(name: &str) -> bool {
        CANONICAL_PAK_DIRS
            .iter()
            .any(|canonical| name.eq_ignore_ascii_case(canonical))
    }

    /// Whether the tree holds pak files under a folder the game will not
    /// scan.
    ///
    /// Only the first directory child at each level is inspected: if it
    /// directly contains paks, its name settles the question; otherwise
    /// the search descends into it and never looks at later siblings.
    #[must_use]
    pub fn needs_pak_fix(&self, dir: &DirectoryEntry) -> bool {
        for entry in dir.children() {
            if let Some(child) = entry.as_dir() {
                if Self::has_pak_file(child) {
                    return !Self::is_canonical_pak_dir(child.name());
                }
                return self.needs_pak_fix(child);
            }
        }
        false
    }

    /// Move the direct files of every misplaced pak folder under `dir_path`
    /// into that folder's own `<dir_name>/Content/Paks/~mods/` subtree.
    ///
    /// Unlike the detection pass, every directory child is visited. A
    /// folder with direct paks keeps its place in the tree and its
    /// subdirectories; only its files move. Canonically named pak folders
    /// are left alone and never descended into.
    fn relocate_stray_paks(&self, tree: &mut FileTree, dir_path: &str) -> Result<()> {
        let subdirs: Vec<String> = tree
            .dir(dir_path)
            .map(|dir| {
                dir.children()
                    .iter()
                    .filter_map(|entry| entry.as_dir().map(|sub| sub.name().to_string()))
                    .collect()
            })
            .unwrap_or_default();

        for name in subdirs {
            let child_path = join_path(dir_path, &name);
            let Some(child) = tree.dir(&child_path) else {
                continue;
            };
            if Self::has_pak_file(child) {
                if Self::is_canonical_pak_dir(&name) {
                    continue;
                }
                let dest = format!("{child_path}/{}/Content/Paks/~mods/", self.dir_name);
                let files: Vec<String> = child
                    .children()
                    .iter()
                    .filter(|entry| entry.is_file())
                    .map(|entry| entry.name().to_string())
                    .collect();
                tracing::debug!("relocating {} files from {child_path}", files.len());
                for file in files {
                    tree.move_entry(&join_path(&child_path, &file), &dest)?;
                }
            } else {
                self.relocate_stray_paks(tree, &child_path)?;
            }
        }
        Ok(())
    }
}

impl ModDataChecker for UnrealModDataChecker {
    /// Classify with the glob rules first; a tree they call invalid is
    /// upgraded to fixable when its paks sit under a wrongly named folder.
    fn check(&self, tree: &FileTree) -> Verdict {
        let verdict = self.inner.check(tree);
        if verdict == Verdict::Invalid && self.needs_pak_fix(tree.root()) {
            return Verdict::Fixable;
        }
        verdict
    }

    fn fix(&self, tree: &mut FileTree) -> Result<()> {
        self.inner.fix(tree)?;
        if self.needs_pak_fix(tree.root()) {
            self.relocate_stray_paks(tree, "")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn checker() -> UnrealModDataChecker {
        UnrealModDataChecker::new("SB")
    }

    #[test]
    fn test_pattern_table_targets() {
        let patterns = ue_glob_patterns("SB");
        assert_eq!(patterns.move_target("Content"), Some("SB/"));
        assert_eq!(patterns.move_target("Paks"), Some("SB/Content/"));
        assert_eq!(patterns.move_target("~Mods"), Some("SB/Content/Paks/"));
        assert_eq!(patterns.move_target("CoolMod.PAK"), Some("SB/Content/Paks/~mods/"));
        assert_eq!(patterns.move_target("chunk0.ucas"), Some("SB/Content/Paks/~mods/"));
        assert_eq!(patterns.move_target("chunk0.utoc"), Some("SB/Content/Paks/~mods/"));
        assert!(patterns.matches_valid("sb"));
        assert!(patterns.matches_valid("root"));
        assert!(patterns.matches_delete("icon.png"));
        assert!(!patterns.matches_delete("readme.txt"));
    }

    #[test]
    fn test_canonical_tree_is_valid_and_fix_is_a_no_op() {
        let mut tree = FileTree::from_paths(["SB/Content/Paks/~mods/Already.pak"]).unwrap();
        let checker = checker();

        assert_eq!(checker.check(&tree), Verdict::Valid);
        assert!(!checker.needs_pak_fix(tree.root()));

        let before = tree.clone();
        checker.fix(&mut tree).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_misplaced_pak_is_fixable_and_relocated() {
        let mut tree = FileTree::from_paths(["Mods/WeirdFolder/ExtraPak.pak"]).unwrap();
        let checker = checker();

        assert_eq!(checker.check(&tree), Verdict::Fixable);
        checker.fix(&mut tree).unwrap();
        assert!(tree.contains("Mods/WeirdFolder/SB/Content/Paks/~mods/ExtraPak.pak"));
        assert!(!tree.contains("Mods/WeirdFolder/ExtraPak.pak"));
    }

    #[test]
    fn test_nested_canonical_pak_dir_is_not_fixable() {
        let mut tree = FileTree::from_paths(["Stuff/~mods/Mod.pak"]).unwrap();
        let checker = checker();

        assert!(!checker.needs_pak_fix(tree.root()));
        assert_eq!(checker.check(&tree), Verdict::Invalid);

        let before = tree.clone();
        checker.fix(&mut tree).unwrap();
        assert_eq!(tree, before);

        let logic = FileTree::from_paths(["Stuff/LogicMods/Mod.pak"]).unwrap();
        assert!(!checker.needs_pak_fix(logic.root()));
        assert_eq!(checker.check(&logic), Verdict::Invalid);
    }

    #[test]
    fn test_detection_only_follows_the_first_directory() {
        // The search returns out of the first directory child it finds,
        // so a stray pak behind a later sibling goes unnoticed.
        let mut tree = FileTree::from_paths(["First/readme.txt", "Second/Stray.pak"]).unwrap();
        let checker = checker();

        assert!(!checker.needs_pak_fix(tree.root()));
        assert_eq!(checker.check(&tree), Verdict::Invalid);

        checker.fix(&mut tree).unwrap();
        assert!(tree.contains("Second/Stray.pak"));
    }

    #[test]
    fn test_fix_relocates_every_sibling_once_triggered() {
        let mut tree = FileTree::from_paths(["Alpha/one.pak", "Beta/two.pak"]).unwrap();
        let checker = checker();

        assert_eq!(checker.check(&tree), Verdict::Fixable);
        checker.fix(&mut tree).unwrap();
        assert!(tree.contains("Alpha/SB/Content/Paks/~mods/one.pak"));
        assert!(tree.contains("Beta/SB/Content/Paks/~mods/two.pak"));
    }

    #[test]
    fn test_fix_skips_canonical_folders_while_fixing_siblings() {
        let mut tree =
            FileTree::from_paths(["Parent/Alpha/one.pak", "Parent/~mods/keep.pak"]).unwrap();
        let checker = checker();

        assert_eq!(checker.check(&tree), Verdict::Fixable);
        checker.fix(&mut tree).unwrap();
        assert!(tree.contains("Parent/Alpha/SB/Content/Paks/~mods/one.pak"));
        assert!(tree.contains("Parent/~mods/keep.pak"));
        assert!(!tree.contains("Parent/~mods/SB/Content/Paks/~mods/keep.pak"));

        let mut logic =
            FileTree::from_paths(["Parent/Alpha/one.pak", "Parent/LogicMods/keep.pak"]).unwrap();
        checker.fix(&mut logic).unwrap();
        assert!(logic.contains("Parent/Alpha/SB/Content/Paks/~mods/one.pak"));
        assert!(logic.contains("Parent/LogicMods/keep.pak"));
    }

    #[test]
    fn test_pak_detection_folds_case() {
        let mut tree = FileTree::from_paths(["Mods/LOUD.PAK"]).unwrap();
        let checker = checker();

        assert!(checker.needs_pak_fix(tree.root()));
        checker.fix(&mut tree).unwrap();
        assert!(tree.contains("Mods/SB/Content/Paks/~mods/LOUD.PAK"));
    }

    #[test]
    fn test_fix_moves_sibling_files_and_keeps_the_emptied_folder() {
        let mut tree = FileTree::from_paths([
            "WeirdFolder/Mod.pak",
            "WeirdFolder/notes.txt",
            "WeirdFolder/Extras/",
        ])
        .unwrap();
        let checker = checker();

        assert_eq!(checker.check(&tree), Verdict::Fixable);
        checker.fix(&mut tree).unwrap();

        assert!(tree.contains("WeirdFolder/SB/Content/Paks/~mods/Mod.pak"));
        assert!(tree.contains("WeirdFolder/SB/Content/Paks/~mods/notes.txt"));
        assert!(tree.dir("WeirdFolder/Extras").is_some());
        assert!(tree.dir("WeirdFolder").is_some());
    }

    #[test]
    fn test_fix_is_idempotent() {
        let mut tree = FileTree::from_paths(["Mods/WeirdFolder/ExtraPak.pak"]).unwrap();
        let checker = checker();

        checker.fix(&mut tree).unwrap();
        let after_first = tree.clone();
        checker.fix(&mut tree).unwrap();
        assert_eq!(tree, after_first);
    }

    #[test]
    fn test_cosmetic_files_are_dropped_at_any_depth() {
        let mut tree = FileTree::from_paths([
            "screenshot.jpg",
            "Mods/WeirdFolder/ExtraPak.pak",
            "Mods/WeirdFolder/icon.png",
        ])
        .unwrap();
        let checker = checker();

        checker.fix(&mut tree).unwrap();
        assert!(!tree.contains("screenshot.jpg"));
        assert!(!tree.contains("Mods/WeirdFolder/icon.png"));
        assert!(!tree.contains("Mods/WeirdFolder/SB/Content/Paks/~mods/icon.png"));
        assert!(tree.contains("Mods/WeirdFolder/SB/Content/Paks/~mods/ExtraPak.pak"));
    }
}
