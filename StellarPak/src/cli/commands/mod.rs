use std::path::{Path, PathBuf};

use clap::Subcommand;

pub mod check;
pub mod fix;
pub mod games;

use crate::error::{Error, Result};
use crate::games::{GameDefinition, UnrealModDataChecker, find_game};

#[derive(Subcommand)]
pub enum Commands {
    /// Check a mod folder's layout
    Check {
        /// Mod folder (extracted archive contents)
        path: PathBuf,

        /// Built-in game to check against
        #[arg(short, long, default_value = "stellarblade")]
        game: String,

        /// Game definition TOML file (overrides --game)
        #[arg(long, conflicts_with = "game")]
        game_file: Option<PathBuf>,

        /// Game directory name override, e.g. "SB" (overrides both)
        #[arg(long)]
        dir_name: Option<String>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Repair a mod folder's layout in place
    Fix {
        /// Mod folder (extracted archive contents)
        path: PathBuf,

        /// Built-in game to fix for
        #[arg(short, long, default_value = "stellarblade")]
        game: String,

        /// Game definition TOML file (overrides --game)
        #[arg(long, conflicts_with = "game")]
        game_file: Option<PathBuf>,

        /// Game directory name override, e.g. "SB" (overrides both)
        #[arg(long)]
        dir_name: Option<String>,

        /// Show the planned changes without touching the disk
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the change set as JSON
        #[arg(long)]
        json: bool,
    },

    /// List built-in game definitions
    Games,
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Check {
                path,
                game,
                game_file,
                dir_name,
                json,
            } => check::execute(path, game, game_file.as_deref(), dir_name.as_deref(), *json),
            Commands::Fix {
                path,
                game,
                game_file,
                dir_name,
                dry_run,
                json,
            } => fix::execute(
                path,
                game,
                game_file.as_deref(),
                dir_name.as_deref(),
                *dry_run,
                *json,
            ),
            Commands::Games => games::list(),
        }
    }
}

/// Resolve the checker from the game selection flags.
///
/// Precedence: `--dir-name`, then `--game-file`, then `--game`.
fn resolve_checker(
    game: &str,
    game_file: Option<&Path>,
    dir_name: Option<&str>,
) -> Result<UnrealModDataChecker> {
    if let Some(name) = dir_name {
        return Ok(UnrealModDataChecker::new(name));
    }
    if let Some(path) = game_file {
        return Ok(GameDefinition::from_toml_file(path)?.checker());
    }
    let definition = find_game(game).ok_or_else(|| Error::UnknownGame {
        short_name: game.to_string(),
    })?;
    Ok(definition.checker())
}
