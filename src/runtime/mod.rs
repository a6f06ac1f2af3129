use std::path::{Path, PathBuf};

use chrono::{Local, Utc};

use crate::cli::Cli;
use crate::config::{Credentials, Settings};
use crate::error::{Result, SyncError};
use crate::library::{RenameOutcome, list_audio_files, rename_all};
use crate::manifest::{TrackContext, build_manifest, raw_base_url, write_manifest};
use crate::publish::{GitRunner, PublishOutcome, SystemGit, commit_message, publish};

mod settings;

/// Per-invocation switches that sit on top of [`Settings`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub rename: bool,
    pub push: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub track_count: usize,
    pub manifest_path: PathBuf,
    /// `None` when publishing was disabled.
    pub publish: Option<PublishOutcome>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let settings = settings::load_settings(cli.config.as_deref());

    if cli.print_config {
        let text = toml::to_string_pretty(&settings)
            .map_err(|e| SyncError::InvalidSettings(e.to_string()))?;
        print!("{text}");
        return Ok(());
    }

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(|e| SyncError::io(".", e))?,
    };
    let options = RunOptions {
        root,
        rename: settings.library.rename && !cli.no_rename,
        push: settings.publish.enabled && !cli.no_push,
    };

    let summary = sync(&settings, &options, &SystemGit)?;
    match summary.publish {
        Some(_) => log::info!(
            "[Main] Music repository updated successfully: {} tracks",
            summary.track_count
        ),
        None => log::info!(
            "[Main] Wrote {} ({} tracks); push skipped",
            summary.manifest_path.display(),
            summary.track_count
        ),
    }
    Ok(())
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Run the whole pipeline: rename, rebuild the manifest, publish.
///
/// Preconditions (credentials, music directory) are checked before any file
/// is touched. A publish failure leaves the written manifest in place.
pub fn sync(settings: &Settings, options: &RunOptions, git: &dyn GitRunner) -> Result<RunSummary> {
    let root = options.root.as_path();
    let credentials = Credentials::load(
        &resolve(root, &settings.publish.credentials_file),
        options.push,
    )?;

    let music_dir = resolve(root, &settings.library.dir);
    if !music_dir.is_dir() {
        return Err(SyncError::MusicDirMissing(music_dir));
    }

    if options.rename {
        log::info!("[Rename] Renaming music files in {}", music_dir.display());
        let outcomes = rename_all(&music_dir, &settings.library)?;
        let renamed = outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count();
        let skipped = outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Skipped { .. }))
            .count();
        log::info!("[Rename] {renamed} renamed, {skipped} skipped");
    }

    log::info!("[Scan] Scanning {}", music_dir.display());
    let entries = list_audio_files(&music_dir, &settings.library);

    let ctx = TrackContext {
        base_url: raw_base_url(&credentials.repo_url),
        branch: settings.publish.branch.clone(),
        remote_dir: settings.publish.remote_dir.clone(),
        fallback_duration_secs: settings.manifest.fallback_duration_secs,
        max_tags: settings.manifest.max_tags,
    };
    let manifest = build_manifest(&entries, &ctx, &settings.manifest.version, Utc::now());

    let manifest_path = resolve(root, &settings.manifest.path);
    write_manifest(&manifest_path, &manifest)?;
    let track_count = manifest.music.len();
    log::info!(
        "[Manifest] Updated {} with {track_count} tracks",
        manifest_path.display()
    );

    let published = if options.push {
        let message = commit_message(track_count, Local::now());
        match publish(git, root, &credentials, &settings.publish.branch, &message) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log::warn!(
                    "[Publish] {} updated but push failed. Please push manually.",
                    manifest_path.display()
                );
                return Err(e);
            }
        }
    } else {
        None
    };

    Ok(RunSummary {
        track_count,
        manifest_path,
        publish: published,
    })
}

#[cfg(test)]
mod tests;
