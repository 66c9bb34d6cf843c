//! Mod lifecycle manager for Deadlock.
//!
//! `services` holds the blocking core: archive extraction, addon placement,
//! the `installed_mods.json` record and the `gameinfo.gi` patch.
//! `commands` wraps it in async calls for a front end.

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::config::{AppSettings, ConfigService, GameLayout};
pub use services::mods::{install_mod, remove_mod, InstallReport, OverwriteConfirmation, RemovalReport};
pub use types::{CommandError, ModError, ModResult};
