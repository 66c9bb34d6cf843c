use crate::services::config::ConfigService;
use crate::services::game::{InstallDiscovery, SteamRegistry};
use crate::types::{CommandError, CommandResult};
use std::path::PathBuf;

/// Find the game through Steam and remember it when found.
///
/// A saved root that still exists wins over discovery.
pub async fn detect_install_root(
    config: &ConfigService,
    registry: &(dyn SteamRegistry + Sync),
) -> CommandResult<InstallDiscovery> {
    let discovery = config.resolve_install_root(registry);

    if let InstallDiscovery::Found(path) = &discovery {
        let mut settings = config.get_settings();
        if settings.install_root.as_ref() != Some(path) {
            settings.install_root = Some(path.clone());
            config.save_settings(settings).map_err(CommandError::Internal)?;
        }
    }

    Ok(discovery)
}

/// Manually select the game folder.
pub async fn set_install_root(config: &ConfigService, path: PathBuf) -> CommandResult<PathBuf> {
    if !path.is_dir() {
        return Err(CommandError::InvalidInput(format!(
            "Path does not exist or is not a folder: {}",
            path.display()
        )));
    }

    let game_dir = config.get_settings().layout.game_dir(&path);
    if !game_dir.is_dir() {
        log::warn!(
            "Selected folder has no {}; installs will create it",
            game_dir.display()
        );
    }

    let mut settings = config.get_settings();
    settings.install_root = Some(path.clone());
    config.save_settings(settings).map_err(CommandError::Internal)?;

    log::info!("Install root set to {}", path.display());
    Ok(path)
}
