use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single install, remove or patch call.
///
/// The display strings are shown to the user as-is by front ends.
#[derive(Debug, Error)]
pub enum ModError {
    #[error("Unsupported archive format: {}. Please use .zip, .rar, or .7z.", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Invalid or corrupt archive {}: {reason}", .path.display())]
    CorruptArchive { path: PathBuf, reason: String },
    #[error("No .{0} file found in the archive.")]
    NoPayloadFound(String),
    #[error("Too many conflicting files named '{0}'. Rename manually.")]
    TooManyConflicts(String),
    #[error("Mod '{0}' is already installed and was not overwritten.")]
    OverwriteDeclined(String),
    #[error("Mod metadata at {} is corrupt: {source}", .path.display())]
    CorruptMetadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} not found. Please update manually.", .0.display())]
    ConfigMissing(PathBuf),
    #[error("No mod metadata found. Cannot remove mod.")]
    MetadataMissing,
    #[error("Mod '{0}' not found in metadata.")]
    ModNotFound(String),
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ModError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ModError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Stable machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ModError::UnsupportedFormat(_) => "UnsupportedFormat",
            ModError::CorruptArchive { .. } => "CorruptArchive",
            ModError::NoPayloadFound(_) => "NoPayloadFound",
            ModError::TooManyConflicts(_) => "TooManyConflicts",
            ModError::OverwriteDeclined(_) => "OverwriteDeclined",
            ModError::CorruptMetadata { .. } => "CorruptMetadata",
            ModError::ConfigMissing(_) => "ConfigMissing",
            ModError::MetadataMissing => "MetadataMissing",
            ModError::ModNotFound(_) => "ModNotFound",
            ModError::Io { .. } => "IOError",
        }
    }
}

pub type ModResult<T> = Result<T, ModError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Mod(#[from] ModError),
    #[error("Operation in progress. Please wait.")]
    Busy,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for CommandError {
    fn from(error: tokio::task::JoinError) -> Self {
        CommandError::Internal(error.to_string())
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
