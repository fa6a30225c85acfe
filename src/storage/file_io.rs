//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::MessError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, MessError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| MessError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| MessError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MessError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MessError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MessError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| MessError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MessError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MessError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MessError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Move an unreadable file out of the way so the next save cannot clobber it
///
/// The file goes to `<path>.corrupt`, or to a timestamped name when an earlier
/// quarantined copy is already there. Returns the new location.
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<PathBuf, MessError> {
    let path = path.as_ref();
    let target = quarantine_target(path);

    fs::rename(path, &target).map_err(|e| {
        MessError::Storage(format!("Failed to move {} aside: {}", path.display(), e))
    })?;

    Ok(target)
}

fn quarantine_target(path: &Path) -> PathBuf {
    let with_suffix = |suffix: &str| {
        let mut name = path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    };

    let plain = with_suffix(".corrupt");
    if !plain.exists() {
        return plain;
    }

    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    let stamped = with_suffix(&format!(".corrupt-{}", stamp));
    if !stamped.exists() {
        return stamped;
    }

    (1..)
        .map(|n| with_suffix(&format!(".corrupt-{}-{}", stamp, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(stamped)
}

/// Check if a JSON file exists and is valid
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    if let Ok(file) = File::open(path) {
        let reader = BufReader::new(file);
        serde_json::from_reader::<_, serde_json::Value>(reader).is_ok()
    } else {
        false
    }
}
