//! Game-specific layout rules and metadata
//!
//! [`unreal`] holds the placement rules shared by Unreal Engine titles;
//! [`definition`] carries the per-game metadata that parameterizes them
//! and the registry of built-in games.

pub mod definition;
pub mod unreal;

pub use definition::{GameDefinition, find_game, stellar_blade, supported_games};
pub use unreal::{UnrealModDataChecker, ue_glob_patterns};
