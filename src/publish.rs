//! Commit the regenerated repository and push it.

mod git;

use std::path::Path;

use chrono::{DateTime, Local};

use crate::config::Credentials;
use crate::error::{Result, SyncError};

pub use git::{GitOutput, GitRunner, SystemGit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed,
    NothingToCommit,
}

pub fn commit_message(track_count: usize, now: DateTime<Local>) -> String {
    format!(
        "Update music repository - {track_count} tracks ({})",
        now.format("%Y-%m-%d %H:%M")
    )
}

/// Embed `token` in an `https://` remote URL.
pub fn authenticated_url(repo_url: &str, token: &str) -> String {
    match repo_url.strip_prefix("https://") {
        Some(rest) => format!("https://{token}@{rest}"),
        None => repo_url.to_string(),
    }
}

fn redact(text: &str, token: &str) -> String {
    if token.is_empty() {
        text.to_string()
    } else {
        text.replace(token, "***")
    }
}

fn run_step(
    git: &dyn GitRunner,
    repo_dir: &Path,
    token: &str,
    step: &'static str,
    args: &[&str],
) -> Result<GitOutput> {
    log::debug!("[Publish] git {step}");
    git.run(repo_dir, args).map_err(|e| SyncError::Git {
        step,
        output: redact(&e.to_string(), token),
    })
}

fn failure(step: &'static str, output: &GitOutput, token: &str) -> SyncError {
    SyncError::Git {
        step,
        output: redact(&output.combined(), token),
    }
}

/// Stage everything, commit with `message` and push `branch`.
///
/// A commit that finds nothing to commit counts as success and skips the
/// push. Every other failure is returned as [`SyncError::Git`].
pub fn publish(
    git: &dyn GitRunner,
    repo_dir: &Path,
    credentials: &Credentials,
    branch: &str,
    message: &str,
) -> Result<PublishOutcome> {
    let token = credentials.token.as_deref().unwrap_or_default();

    let add = run_step(git, repo_dir, token, "add", &["add", "."])?;
    if !add.success {
        return Err(failure("add", &add, token));
    }

    let commit = run_step(git, repo_dir, token, "commit", &["commit", "-m", message])?;
    if commit.combined().contains("nothing to commit") {
        log::info!("[Publish] No changes to commit");
        return Ok(PublishOutcome::NothingToCommit);
    }
    if !commit.success {
        return Err(failure("commit", &commit, token));
    }

    let remote = authenticated_url(&credentials.repo_url, token);
    let push = run_step(git, repo_dir, token, "push", &["push", remote.as_str(), branch])?;
    if !push.success {
        return Err(failure("push", &push, token));
    }

    log::info!("[Publish] Pushed to {} ({branch})", credentials.repo_url);
    Ok(PublishOutcome::Pushed)
}
