//! Error type shared by every stage of the sync pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The `key=value` credentials file does not exist.
    #[error(
        "credentials file {} not found; create it with:\n  repo-name=<your-github-repo-url>\n  github-token=<your-github-token>",
        .0.display()
    )]
    CredentialsFileMissing(PathBuf),

    /// A required key is absent or empty in the credentials file.
    #[error("missing `{key}` in {}", .path.display())]
    CredentialMissing { key: &'static str, path: PathBuf },

    #[error("music directory {} not found", .0.display())]
    MusicDirMissing(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A git step failed; `output` has the auth token redacted.
    #[error("git {step} failed: {output}")]
    Git { step: &'static str, output: String },
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
