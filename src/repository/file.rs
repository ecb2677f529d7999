//! Versioned JSON documents with atomic replacement

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Current on-disk format version for both stores
pub(crate) const FORMAT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn format_error(path: &Path) -> impl FnOnce(serde_json::Error) -> StorageError + '_ {
    move |source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a document; `Ok(None)` if the file does not exist yet
pub(crate) fn read_document<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, StorageError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path)(e)),
    };

    let probe: VersionProbe = serde_json::from_slice(&bytes).map_err(format_error(path))?;
    if probe.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: probe.version,
            expected: FORMAT_VERSION,
        });
    }

    tracing::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
    serde_json::from_slice(&bytes).map(Some).map_err(format_error(path))
}

/// Write a document to a sibling temp file, then rename it over `path`.
/// Readers only ever see the previous or the new complete document.
pub(crate) fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), StorageError> {
    let dir: PathBuf = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(io_error(&dir))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_error(&dir))?;
    serde_json::to_writer_pretty(&mut tmp, document).map_err(format_error(path))?;
    tmp.write_all(b"\n").map_err(io_error(path))?;
    tmp.as_file().sync_all().map_err(io_error(path))?;
    tmp.persist(path).map_err(|e| io_error(path)(e.error))?;

    tracing::debug!("Saved {}", path.display());
    Ok(())
}
