pub mod library_folders;
pub mod locator;

pub use locator::{find_install_root, InstallDiscovery, SteamRegistry, SystemSteamRegistry};
