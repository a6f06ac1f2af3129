use std::{fs, path::Path};

use crate::error::{Result, SyncError};

pub const REPO_URL_KEY: &str = "repo-name";
pub const TOKEN_KEY: &str = "github-token";

/// Remote location and auth token read from the `key=value` credentials file.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub repo_url: String,
    pub token: Option<String>,
}

impl Credentials {
    /// Read credentials from `path`. The token is only required when
    /// `require_token` is set (i.e. a push will happen).
    pub fn load(path: &Path, require_token: bool) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::CredentialsFileMissing(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        Self::parse(&text, path, require_token)
    }

    pub(super) fn parse(text: &str, path: &Path, require_token: bool) -> Result<Self> {
        let pairs = parse_key_values(text);
        let lookup = |key: &str| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        let missing = |key: &'static str| SyncError::CredentialMissing {
            key,
            path: path.to_path_buf(),
        };

        let repo_url = lookup(REPO_URL_KEY).ok_or_else(|| missing(REPO_URL_KEY))?;
        let token = lookup(TOKEN_KEY);
        if require_token && token.is_none() {
            return Err(missing(TOKEN_KEY));
        }

        Ok(Self { repo_url, token })
    }
}

/// Parse `key=value` lines. Blank lines, `#` comments and lines without `=`
/// are ignored; only the first `=` splits.
pub fn parse_key_values(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}
