//! CLI command for checking a mod folder layout

use std::path::Path;

use console::style;
use modtree::check::{ModDataChecker, Verdict};
use serde::Serialize;

use crate::staging::load_tree;

use super::resolve_checker;

#[derive(Serialize)]
struct CheckReport {
    path: String,
    game_dir: String,
    files: usize,
    verdict: Verdict,
}

/// Check a mod folder and exit with a verdict-specific status code:
/// 0 for valid, 2 for fixable, 1 for invalid.
pub fn execute(
    path: &Path,
    game: &str,
    game_file: Option<&Path>,
    dir_name: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let checker = resolve_checker(game, game_file, dir_name)?;
    let tree = load_tree(path)?;
    let verdict = checker.check(&tree);

    if json {
        let report = CheckReport {
            path: path.display().to_string(),
            game_dir: checker.dir_name().to_string(),
            files: tree.file_paths().len(),
            verdict,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Checked {} files against {}/Content/Paks/~mods/",
            tree.file_paths().len(),
            checker.dir_name()
        );
        let styled = match verdict {
            Verdict::Valid => style("VALID").green().bold(),
            Verdict::Fixable => style("FIXABLE").yellow().bold(),
            Verdict::Invalid => style("INVALID").red().bold(),
        };
        println!("\nLayout: {styled}");
        if verdict == Verdict::Fixable {
            println!("Run `stellarpak fix` to repair it.");
        }
    }

    match verdict {
        Verdict::Valid => Ok(()),
        Verdict::Fixable => std::process::exit(2),
        Verdict::Invalid => std::process::exit(1),
    }
}
