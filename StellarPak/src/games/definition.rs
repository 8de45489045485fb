//! Game metadata and the built-in game registry

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::unreal::UnrealModDataChecker;

/// Metadata for a supported game.
///
/// `mod_dir_name` parameterizes the canonical pak layout; the remaining
/// fields identify the installation the way mod managers expect to find
/// it (store id, shipping binary, save location).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    /// Display name
    pub name: String,
    /// Short identifier used for lookups and CLI flags
    pub short_name: String,
    /// Game name on Nexus Mods
    pub nexus_name: String,
    /// Steam app id
    pub steam_id: u32,
    /// Shipping binary, relative to the game root
    pub binary: String,
    /// Save game directory; host placeholders like `%DOCUMENTS%` allowed
    pub saves_directory: String,
    /// Save game file extension, without the dot
    pub save_extension: String,
    /// Top-level directory name the canonical mod layout is rooted at
    pub mod_dir_name: String,
}

impl GameDefinition {
    /// The pak placement checker configured for this game.
    #[must_use]
    pub fn checker(&self) -> UnrealModDataChecker {
        UnrealModDataChecker::new(&self.mod_dir_name)
    }

    /// Load a definition from a TOML file.
    ///
    /// The file must fill in every field; an empty `mod_dir_name` is
    /// rejected because it would produce rootless layouts.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let definition: Self = toml::from_str(&raw)?;
        if definition.mod_dir_name.is_empty() {
            return Err(Error::InvalidGameDefinition {
                message: format!("{}: mod_dir_name must not be empty", path.display()),
            });
        }
        Ok(definition)
    }
}

/// The built-in Stellar Blade definition.
#[must_use]
pub fn stellar_blade() -> GameDefinition {
    GameDefinition {
        name: "Stellar Blade".to_string(),
        short_name: "stellarblade".to_string(),
        nexus_name: "stellarblade".to_string(),
        steam_id: 3_489_700,
        binary: "SB/Binaries/Win64/SB-Win64-Shipping.exe".to_string(),
        saves_directory: "%DOCUMENTS%/StellarBlade".to_string(),
        save_extension: "sav".to_string(),
        mod_dir_name: "SB".to_string(),
    }
}

/// Every built-in game definition.
#[must_use]
pub fn supported_games() -> Vec<GameDefinition> {
    vec![stellar_blade()]
}

/// Look up a built-in game by short name, ignoring case.
#[must_use]
pub fn find_game(short_name: &str) -> Option<GameDefinition> {
    supported_games()
        .into_iter()
        .find(|game| game.short_name.eq_ignore_ascii_case(short_name))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_find_game_folds_case() {
        let game = find_game("StellarBlade").unwrap();
        assert_eq!(game.name, "Stellar Blade");
        assert_eq!(game.mod_dir_name, "SB");
        assert!(find_game("bloodborne").is_none());
    }

    #[test]
    fn test_checker_uses_the_mod_dir_name() {
        let checker = stellar_blade().checker();
        assert_eq!(checker.dir_name(), "SB");
    }

    #[test]
    fn test_from_toml_file_loads_a_custom_game() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Custom UE Game"
short_name = "customue"
nexus_name = "customue"
steam_id = 12345
binary = "CU/Binaries/Win64/CU-Shipping.exe"
saves_directory = "%DOCUMENTS%/CustomUE"
save_extension = "sav"
mod_dir_name = "CU"
"#
        )
        .unwrap();

        let game = GameDefinition::from_toml_file(file.path()).unwrap();
        assert_eq!(game.short_name, "customue");
        assert_eq!(game.steam_id, 12345);
        assert_eq!(game.checker().dir_name(), "CU");
    }

    #[test]
    fn test_from_toml_file_rejects_empty_mod_dir_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "Broken"
short_name = "broken"
nexus_name = "broken"
steam_id = 1
binary = "B/B.exe"
saves_directory = "%DOCUMENTS%/Broken"
save_extension = "sav"
mod_dir_name = ""
"#
        )
        .unwrap();

        let err = GameDefinition::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidGameDefinition { .. }));
    }

    #[test]
    fn test_from_toml_file_rejects_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"Half a game\"").unwrap();

        let err = GameDefinition::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
