use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Result, SyncError};
use crate::library::AudioEntry;
use crate::metadata::{categorize, duration_or_fallback, extract_metadata, generate_tags};

use super::model::{Manifest, TrackRecord};

const GITHUB_HOST: &str = "https://github.com/";
const RAW_HOST: &str = "https://raw.githubusercontent.com/";

/// Everything a track record needs beyond the file itself.
#[derive(Debug, Clone)]
pub struct TrackContext {
    /// Raw-content base URL, ending in `/`.
    pub base_url: String,
    pub branch: String,
    pub remote_dir: String,
    pub fallback_duration_secs: u64,
    pub max_tags: usize,
}

/// Turn a repository web URL into its raw-content base, `/`-terminated.
pub fn raw_base_url(repo_url: &str) -> String {
    let trimmed = repo_url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let mut base = match trimmed.strip_prefix(GITHUB_HOST) {
        Some(rest) => format!("{RAW_HOST}{rest}"),
        None => trimmed.to_string(),
    };
    base.push('/');
    base
}

/// `{base}{branch}/{remote_dir}/{filename}` with the filename percent-encoded.
pub fn track_url(base_url: &str, branch: &str, remote_dir: &str, file_name: &str) -> String {
    let remote_dir = remote_dir.trim_matches('/');
    let file = urlencoding::encode(file_name);
    if remote_dir.is_empty() {
        format!("{base_url}{branch}/{file}")
    } else {
        format!("{base_url}{branch}/{remote_dir}/{file}")
    }
}

pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn build_track(entry: &AudioEntry, ctx: &TrackContext) -> TrackRecord {
    let id = entry.stem().to_string();
    let (title, artist) = extract_metadata(&id);
    let duration = duration_or_fallback(&entry.path, ctx.fallback_duration_secs);
    let category = categorize(&entry.file_name, &title);
    let tags = generate_tags(&entry.file_name, &title, &artist, category, ctx.max_tags);
    let url = track_url(&ctx.base_url, &ctx.branch, &ctx.remote_dir, &entry.file_name);

    TrackRecord {
        id,
        title,
        artist,
        duration,
        url,
        category,
        tags,
    }
}

/// Build a fresh manifest from `entries`, in the order given.
pub fn build_manifest(
    entries: &[AudioEntry],
    ctx: &TrackContext,
    version: &str,
    now: DateTime<Utc>,
) -> Manifest {
    let music = entries
        .iter()
        .map(|entry| {
            let track = build_track(entry, ctx);
            log::info!(
                "[Manifest] Added: {} by {} ({})",
                track.title,
                track.artist,
                track.category
            );
            track
        })
        .collect();

    Manifest {
        version: version.to_string(),
        last_updated: timestamp(now),
        music,
    }
}

/// Overwrite `path` with the pretty-printed manifest.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json).map_err(|e| SyncError::io(path, e))
}
