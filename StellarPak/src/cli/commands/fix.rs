//! CLI command for repairing a mod folder layout

use std::path::Path;

use console::style;
use modtree::check::ModDataChecker;

use crate::staging::{ChangeSet, load_tree};

use super::resolve_checker;

/// Fix a mod folder in place, or preview the changes with `dry_run`.
pub fn execute(
    path: &Path,
    game: &str,
    game_file: Option<&Path>,
    dir_name: Option<&str>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let checker = resolve_checker(game, game_file, dir_name)?;
    let original = load_tree(path)?;
    let mut fixed = original.clone();
    checker.fix(&mut fixed)?;

    let changes = ChangeSet::between(&original, &fixed);
    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else if changes.is_empty() {
        println!("Nothing to change.");
    } else {
        for mv in &changes.moves {
            println!("  {} -> {}", mv.from, mv.to);
        }
        for dropped in &changes.deletes {
            println!("  {} {}", style("delete").red(), dropped);
        }
    }

    if dry_run || changes.is_empty() {
        return Ok(());
    }

    let outcome = changes.apply(path)?;
    if !json {
        println!(
            "\n{} moved {}, deleted {}, pruned {} empty folders",
            style("Fixed:").green().bold(),
            outcome.moved,
            outcome.deleted,
            outcome.pruned_dirs
        );
    }
    Ok(())
}
