//! CLI command for listing built-in game definitions

use console::style;

use crate::games::supported_games;

/// Print every built-in game and where its mods belong.
pub fn list() -> anyhow::Result<()> {
    for game in supported_games() {
        println!("{} ({})", style(&game.name).bold(), game.short_name);
        println!("  steam id:  {}", game.steam_id);
        println!("  nexus:     {}", game.nexus_name);
        println!("  binary:    {}", game.binary);
        println!(
            "  saves:     {}/*.{}",
            game.saves_directory, game.save_extension
        );
        println!("  mods:      {}/Content/Paks/~mods/", game.mod_dir_name);
    }
    Ok(())
}
