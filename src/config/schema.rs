use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/music-repo-sync/config.toml` or
/// `~/.config/music-repo-sync/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSIC_SYNC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// Relative paths are resolved against the repository root.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub manifest: ManifestSettings,
    pub publish: PublishSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the audio files.
    pub dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether to rename files to their sanitized names before scanning.
    pub rename: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("music"),
            extensions: vec!["mp3".into()],
            include_hidden: false,
            rename: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Where the manifest is written.
    pub path: PathBuf,
    /// Value of the manifest's `version` field.
    pub version: String,
    /// Duration recorded when a file's length cannot be read (seconds).
    pub fallback_duration_secs: u64,
    /// Upper bound on tags per track, category included.
    pub max_tags: usize,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("music.json"),
            version: "1.0.0".to_string(),
            fallback_duration_secs: 180,
            max_tags: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PublishSettings {
    /// Commit and push after writing the manifest.
    pub enabled: bool,
    /// Branch pushed to, and used in track URLs.
    pub branch: String,
    /// Path of the music directory inside the remote repository.
    pub remote_dir: String,
    /// `key=value` file with `repo-name` and `github-token`.
    pub credentials_file: PathBuf,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            branch: "main".to_string(),
            remote_dir: "music".to_string(),
            credentials_file: PathBuf::from("music-repo-info.env"),
        }
    }
}
