//! Filesystem scaffolder that writes template bundles without overwriting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::services::scaffold_assets::TemplateFile;

/// Write a template bundle into `dest_dir`, returning the written paths.
///
/// Every destination is checked before anything is written; a single
/// conflict aborts the whole bundle with nothing on disk.
pub fn write_bundle(dest_dir: &Path, files: &[TemplateFile]) -> Result<Vec<PathBuf>, AppError> {
    for file in files {
        let target = dest_dir.join(file.name);
        if target.exists() {
            return Err(AppError::DestinationConflict(target));
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = dest_dir.join(file.name);
        fs::write(&target, file.content)?;
        written.push(target);
    }

    Ok(written)
}
