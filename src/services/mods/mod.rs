pub mod conflict;
pub mod installer;
pub mod metadata;
pub mod query;
pub mod remover;

pub use installer::{install_mod, GameInfoStatus, InstallReport, OverwriteConfirmation};
pub use metadata::{ModIndex, ModMetadataStore};
pub use query::{find_stale_records, is_mod_installed, list_installed_mods, InstalledMod, StaleRecord};
pub use remover::{remove_mod, RemovalReport};
