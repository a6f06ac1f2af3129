use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::AudioEntry;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, sorted by filename.
///
/// Subdirectories are not descended into. Entries whose names are not valid
/// UTF-8 are skipped.
pub fn list_audio_files(dir: &Path, settings: &LibrarySettings) -> Vec<AudioEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !entry.file_type().is_file()
            || (!settings.include_hidden && is_hidden(path))
            || !is_audio_file(path, settings)
        {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            log::warn!("[Scan] Skipping non UTF-8 filename {}", path.display());
            continue;
        };

        entries.push(AudioEntry {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
        });
    }

    entries
}
