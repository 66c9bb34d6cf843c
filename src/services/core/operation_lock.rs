//! Single-writer guard for install and remove calls.
//!
//! Both calls read-modify-write `installed_mods.json` and extract into the
//! addons folder, so at most one may run per process. A caller that finds the
//! guard taken is turned away with `CommandError::Busy` instead of queueing.

use crate::types::{CommandError, CommandResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// How long a second caller waits before giving up.
pub const BUSY_WAIT: Duration = Duration::from_millis(50);

/// Held for the whole of an install or remove call.
pub type OperationGuard = OwnedMutexGuard<()>;

#[derive(Clone, Default)]
pub struct OperationLock {
    inner: Arc<Mutex<()>>,
}

impl OperationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the guard, or fail with `Busy` if another call keeps it past
    /// [`BUSY_WAIT`]. The guard is released on drop.
    pub async fn acquire(&self) -> CommandResult<OperationGuard> {
        let pending = Arc::clone(&self.inner).lock_owned();
        match tokio::time::timeout(BUSY_WAIT, pending).await {
            Ok(guard) => Ok(guard),
            Err(_) => {
                log::debug!("Operation lock busy; rejecting caller");
                Err(CommandError::Busy)
            }
        }
    }

    /// Whether a call currently holds the guard.
    pub fn is_busy(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}

#[cfg(test)]
#[path = "tests/operation_lock_tests.rs"]
mod tests;
