use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Fails with `AlreadyExists` when `target_dir` is present on disk.
pub fn ensure_absent<P: AsRef<Path>>(target_dir: P) -> Result<PathBuf> {
    let target_dir = target_dir.as_ref();
    if target_dir.exists() {
        return Err(Error::AlreadyExists { path: target_dir.display().to_string() });
    }
    Ok(target_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path).map_err(Error::IoError)
}
