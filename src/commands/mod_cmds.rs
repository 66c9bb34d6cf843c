//! Front-end entry points for installing and removing mods.
//!
//! Each state-changing call takes the operation lock and runs the blocking
//! service on tokio's blocking pool, so a UI thread is never stalled by a
//! large extraction.

use crate::services::config::{ConfigService, GameLayout};
use crate::services::core::operation_lock::OperationLock;
use crate::services::mods::{self, InstalledMod, OverwriteConfirmation, StaleRecord};
use crate::types::{CommandError, CommandResult};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Overwrite confirmation that can be moved onto the blocking pool.
pub type SharedConfirmation = Arc<dyn OverwriteConfirmation + Send + Sync>;

#[derive(Debug, Clone, Serialize)]
pub struct InstallSummary {
    pub success: bool,
    pub message: String,
    pub mod_name: String,
    pub installed_files: Vec<String>,
    /// Set when files were placed but gameinfo could not be patched.
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveSummary {
    pub success: bool,
    pub message: String,
    pub mod_name: String,
    pub deleted_files: Vec<String>,
    pub missing_files: Vec<String>,
}

fn install_target(config: &ConfigService) -> CommandResult<(PathBuf, GameLayout)> {
    let settings = config.get_settings();
    let root = settings.install_root.ok_or_else(|| {
        CommandError::InvalidInput("Select your Deadlock install folder first.".to_string())
    })?;
    Ok((root, settings.layout))
}

pub async fn install_mod(
    op_lock: &OperationLock,
    config: &ConfigService,
    archive_path: PathBuf,
    confirm: Option<SharedConfirmation>,
) -> CommandResult<InstallSummary> {
    let _lock = op_lock.acquire().await?;
    let (root, layout) = install_target(config)?;

    let report = tokio::task::spawn_blocking(move || {
        let confirm = confirm
            .as_deref()
            .map(|c| c as &dyn OverwriteConfirmation);
        mods::install_mod(&archive_path, &root, &layout, confirm)
    })
    .await??;

    let warning = report.warning();
    let message = match &warning {
        Some(w) => format!("Mod installed, but gameinfo was not updated: {w}"),
        None => "Mod installed successfully!".to_string(),
    };

    Ok(InstallSummary {
        success: true,
        message,
        mod_name: report.mod_name,
        installed_files: report.installed_files,
        warning,
    })
}

pub async fn remove_mod(
    op_lock: &OperationLock,
    config: &ConfigService,
    mod_name: String,
) -> CommandResult<RemoveSummary> {
    let _lock = op_lock.acquire().await?;
    let (root, layout) = install_target(config)?;

    let report =
        tokio::task::spawn_blocking(move || mods::remove_mod(&mod_name, &root, &layout)).await??;

    Ok(RemoveSummary {
        success: true,
        message: format!("Mod '{}' removed successfully.", report.mod_name),
        mod_name: report.mod_name,
        deleted_files: report.deleted_files,
        missing_files: report.missing_files,
    })
}

pub async fn list_mods(config: &ConfigService) -> CommandResult<Vec<InstalledMod>> {
    let (root, layout) = install_target(config)?;
    Ok(mods::list_installed_mods(&root, &layout)?)
}

pub async fn check_duplicate_mod(config: &ConfigService, mod_name: String) -> CommandResult<bool> {
    let (root, layout) = install_target(config)?;
    Ok(mods::is_mod_installed(&mod_name, &root, &layout))
}

pub async fn list_stale_mods(config: &ConfigService) -> CommandResult<Vec<StaleRecord>> {
    let (root, layout) = install_target(config)?;
    Ok(mods::find_stale_records(&root, &layout)?)
}
