use std::fs;
use std::path::Path;

use crate::config::LibrarySettings;
use crate::error::{Result, SyncError};

use super::sanitize::sanitize_filename;
use super::scan::list_audio_files;

/// What happened to one file during the rename pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Already sanitized.
    Unchanged(String),
    Renamed { from: String, to: String },
    /// The sanitized name was taken; the file keeps its original name.
    Skipped { from: String, target: String },
}

/// Rename every audio file in `dir` to its sanitized name.
///
/// The existence check and the rename are separate steps, so another
/// process creating the target in between is not detected.
pub fn rename_all(dir: &Path, settings: &LibrarySettings) -> Result<Vec<RenameOutcome>> {
    let mut outcomes = Vec::new();

    for entry in list_audio_files(dir, settings) {
        let old_name = entry.file_name;
        let new_name = sanitize_filename(&old_name);

        if old_name == new_name {
            log::debug!("[Rename] OK: {old_name}");
            outcomes.push(RenameOutcome::Unchanged(old_name));
            continue;
        }

        let new_path = dir.join(&new_name);
        if new_path.exists() {
            log::warn!("[Rename] Skipping {old_name} - {new_name} already exists");
            outcomes.push(RenameOutcome::Skipped {
                from: old_name,
                target: new_name,
            });
            continue;
        }

        fs::rename(&entry.path, &new_path).map_err(|e| SyncError::io(&entry.path, e))?;
        log::info!("[Rename] {old_name} -> {new_name}");
        outcomes.push(RenameOutcome::Renamed {
            from: old_name,
            to: new_name,
        });
    }

    Ok(outcomes)
}
