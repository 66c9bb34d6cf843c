use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

fn temp_path_for(file_path: &Path) -> io::Result<PathBuf> {
    let file_name = file_path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid file path: {}", file_path.display()),
        )
    })?;
    Ok(file_path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

/// Replace `file_path` with `contents` so readers never see a half-written file.
///
/// Writes a sibling `.tmp` file first and renames it over the target. Windows
/// refuses to rename onto an existing file in some setups, so on failure the
/// target is removed and the rename retried.
pub fn atomic_write(file_path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(file_path)?;
    fs::write(&temp_path, contents)?;

    match fs::rename(&temp_path, file_path) {
        Ok(()) => Ok(()),
        Err(first) => {
            log::warn!(
                "rename onto {} failed ({first}), retrying after removing target",
                file_path.display()
            );
            if file_path.exists() {
                if let Err(e) = fs::remove_file(file_path) {
                    let _ = fs::remove_file(&temp_path);
                    return Err(e);
                }
            }
            fs::rename(&temp_path, file_path).inspect_err(|_| {
                let _ = fs::remove_file(&temp_path);
            })
        }
    }
}

/// Delete a file, treating "already gone" as success.
///
/// Returns `Ok(true)` when a file was removed and `Ok(false)` when there was
/// nothing to remove.
pub fn remove_file_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Join a recorded addon file name onto `base`, refusing names that would
/// escape it. Both `/` and `\` count as separators.
pub fn join_entry(base: &Path, entry_name: &str) -> Option<PathBuf> {
    let normalized = entry_name.replace('\\', "/");
    let mut joined = base.to_path_buf();
    let mut pushed = 0usize;

    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => {
                joined.push(part);
                pushed += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (pushed > 0).then_some(joined)
}

/// Last path component of an archive entry name, for either separator style.
pub fn entry_file_name(entry_name: &str) -> &str {
    entry_name
        .rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(entry_name)
}

#[cfg(test)]
#[path = "tests/file_utils_tests.rs"]
mod tests;
