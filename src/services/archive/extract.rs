use super::types::{ArchiveFormat, ExtractedEntry};
use crate::types::{ModError, ModResult};
use std::fs;
use std::io;
use std::path::{Component, Path};

/// Extract every entry of `archive_path` into `dest_dir`.
///
/// Each entry keeps its name exactly as stored in the archive, subfolder
/// prefixes included, in archive order, next to the path the decoder wrote.
/// Directory entries are listed too.
pub fn extract(archive_path: &Path, dest_dir: &Path) -> ModResult<Vec<ExtractedEntry>> {
    let format = ArchiveFormat::from_path(archive_path)
        .ok_or_else(|| ModError::UnsupportedFormat(archive_path.to_path_buf()))?;

    let file = fs::File::open(archive_path).map_err(|e| ModError::io(archive_path, e))?;
    fs::create_dir_all(dest_dir).map_err(|e| ModError::io(dest_dir, e))?;

    let entries = match format {
        ArchiveFormat::Zip => extract_zip(file, archive_path, dest_dir)?,
        ArchiveFormat::SevenZ => extract_7z(file, archive_path, dest_dir)?,
        ArchiveFormat::Rar => {
            // The rar decoder opens the file by path itself.
            drop(file);
            extract_rar(archive_path, dest_dir)?
        }
    };

    log::info!(
        "Extracted {} entries from {} ({})",
        entries.len(),
        archive_path.display(),
        format.extension()
    );
    Ok(entries)
}

fn corrupt(archive_path: &Path, reason: impl ToString) -> ModError {
    ModError::CorruptArchive {
        path: archive_path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn stays_inside(entry_name: &str) -> bool {
    Path::new(entry_name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn extract_zip(
    file: fs::File,
    archive_path: &Path,
    dest_dir: &Path,
) -> ModResult<Vec<ExtractedEntry>> {
    let mut archive = zip::ZipArchive::new(file).map_err(|e| corrupt(archive_path, e))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| corrupt(archive_path, format!("entry {i}: {e}")))?;

        let Some(relative) = entry.enclosed_name() else {
            log::warn!("Skipping unsafe ZIP entry path: {}", entry.name());
            continue;
        };
        let output_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| ModError::io(&output_path, e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ModError::io(parent, e))?;
            }
            let mut outfile =
                fs::File::create(&output_path).map_err(|e| ModError::io(&output_path, e))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
                    corrupt(archive_path, format!("{}: {e}", entry.name()))
                }
                _ => ModError::io(&output_path, e),
            })?;
        }

        entries.push(ExtractedEntry {
            name: entry.name().to_string(),
            path: output_path,
        });
    }
    Ok(entries)
}

fn extract_7z(
    file: fs::File,
    archive_path: &Path,
    dest_dir: &Path,
) -> ModResult<Vec<ExtractedEntry>> {
    let mut entries = Vec::new();
    sevenz_rust::decompress_with_extract_fn(file, dest_dir, |entry, reader, dest| {
        if !stays_inside(entry.name()) {
            log::warn!("Skipping unsafe 7z entry path: {}", entry.name());
            io::copy(reader, &mut io::sink()).map_err(sevenz_rust::Error::io)?;
            return Ok(true);
        }
        entries.push(ExtractedEntry {
            name: entry.name().to_string(),
            path: dest.clone(),
        });
        sevenz_rust::default_entry_extract_fn(entry, reader, dest)
    })
    .map_err(|e| corrupt(archive_path, e))?;

    Ok(entries)
}

fn extract_rar(archive_path: &Path, dest_dir: &Path) -> ModResult<Vec<ExtractedEntry>> {
    let path_str = archive_path.to_str().ok_or_else(|| {
        ModError::io(
            archive_path,
            io::Error::new(io::ErrorKind::InvalidInput, "RAR path contains invalid UTF-8"),
        )
    })?;
    let dest_str = dest_dir.to_str().ok_or_else(|| {
        ModError::io(
            dest_dir,
            io::Error::new(io::ErrorKind::InvalidInput, "Dest path contains invalid UTF-8"),
        )
    })?;

    let archive = rar::Archive::extract_all(path_str, dest_str, "")
        .map_err(|e| corrupt(archive_path, format!("{e:?}")))?;

    Ok(archive
        .files
        .into_iter()
        .map(|f| {
            let path = dest_dir.join(&f.name);
            ExtractedEntry { name: f.name, path }
        })
        .collect())
}
