use super::*;
use crate::manifest::Manifest;
use crate::publish::GitOutput;
use std::cell::RefCell;
use std::fs;
use tempfile::{TempDir, tempdir};

/// Answers every git call with the same output.
struct ScriptedGit {
    reply: GitOutput,
    calls: RefCell<Vec<String>>,
}

impl ScriptedGit {
    fn new(success: bool, stdout: &str) -> Self {
        Self {
            reply: GitOutput {
                success,
                stdout: stdout.into(),
                stderr: String::new(),
            },
            calls: RefCell::default(),
        }
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, _repo_dir: &Path, args: &[&str]) -> std::io::Result<GitOutput> {
        self.calls.borrow_mut().push(args.join(" "));
        Ok(self.reply.clone())
    }
}

fn repo_with(files: &[&str], credentials: Option<&str>) -> TempDir {
    let root = tempdir().unwrap();
    let music = root.path().join("music");
    fs::create_dir(&music).unwrap();
    for name in files {
        fs::write(music.join(name), b"not really audio").unwrap();
    }
    if let Some(text) = credentials {
        fs::write(root.path().join("music-repo-info.env"), text).unwrap();
    }
    root
}

const CREDS: &str = "repo-name=https://github.com/me/music-repo\ngithub-token=tok\n";

fn options(root: &TempDir, push: bool) -> RunOptions {
    RunOptions {
        root: root.path().to_path_buf(),
        rename: true,
        push,
    }
}

fn read_manifest(root: &TempDir) -> Manifest {
    let text = fs::read_to_string(root.path().join("music.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn missing_credentials_abort_before_touching_files() {
    let root = repo_with(&["My Song.mp3"], None);
    let git = ScriptedGit::new(true, "");

    let err = sync(&Settings::default(), &options(&root, true), &git).unwrap_err();
    assert!(matches!(err, SyncError::CredentialsFileMissing(_)));
    assert!(root.path().join("music/My Song.mp3").exists());
    assert!(!root.path().join("music.json").exists());
    assert!(git.calls.borrow().is_empty());
}

#[test]
fn missing_token_is_fatal_only_when_pushing() {
    let root = repo_with(&[], Some("repo-name=https://github.com/me/music-repo\n"));
    let git = ScriptedGit::new(true, "");

    let err = sync(&Settings::default(), &options(&root, true), &git).unwrap_err();
    assert!(matches!(err, SyncError::CredentialMissing { key: "github-token", .. }));

    let summary = sync(&Settings::default(), &options(&root, false), &git).unwrap();
    assert_eq!(summary.publish, None);
}

#[test]
fn missing_music_dir_is_fatal() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("music-repo-info.env"), CREDS).unwrap();
    let git = ScriptedGit::new(true, "");

    let err = sync(&Settings::default(), &options(&root, false), &git).unwrap_err();
    assert!(matches!(err, SyncError::MusicDirMissing(p) if p == root.path().join("music")));
}

#[test]
fn empty_music_dir_writes_empty_manifest() {
    let root = repo_with(&[], Some(CREDS));
    let git = ScriptedGit::new(true, "");

    let summary = sync(&Settings::default(), &options(&root, false), &git).unwrap();
    assert_eq!(summary.track_count, 0);
    let manifest = read_manifest(&root);
    assert!(manifest.music.is_empty());
    assert_eq!(manifest.version, "1.0.0");
}

#[test]
fn sync_renames_then_lists_sanitized_tracks() {
    let root = repo_with(
        &["Naruto - Sadness and Sorrow.mp3", "calm_rain.mp3", "notes.txt"],
        Some(CREDS),
    );
    let git = ScriptedGit::new(true, "");

    let summary = sync(&Settings::default(), &options(&root, false), &git).unwrap();
    assert_eq!(summary.track_count, 2);
    assert!(root.path().join("music/naruto_sadness_and_sorrow.mp3").exists());

    let manifest = read_manifest(&root);
    let ids: Vec<&str> = manifest.music.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["calm_rain", "naruto_sadness_and_sorrow"]);

    let naruto = &manifest.music[1];
    assert_eq!(naruto.category.as_str(), "anime");
    assert_eq!(naruto.duration, 180);
    assert_eq!(
        naruto.url,
        "https://raw.githubusercontent.com/me/music-repo/main/music/naruto_sadness_and_sorrow.mp3"
    );
    assert!(git.calls.borrow().is_empty());
}

#[test]
fn rerunning_over_unchanged_directory_gives_same_music() {
    let root = repo_with(&["Lofi Focus Beats.mp3", "epic_battle.mp3"], Some(CREDS));
    let git = ScriptedGit::new(true, "");

    sync(&Settings::default(), &options(&root, false), &git).unwrap();
    let first = read_manifest(&root);
    sync(&Settings::default(), &options(&root, false), &git).unwrap();
    let second = read_manifest(&root);

    assert_eq!(first.music, second.music);
}

#[test]
fn rename_can_be_disabled() {
    let root = repo_with(&["Song Title | Artist Name.mp3"], Some(CREDS));
    let git = ScriptedGit::new(true, "");
    let opts = RunOptions {
        rename: false,
        ..options(&root, false)
    };

    sync(&Settings::default(), &opts, &git).unwrap();
    let manifest = read_manifest(&root);
    assert_eq!(manifest.music[0].title, "Song Title");
    assert_eq!(manifest.music[0].artist, "Artist Name");
    assert!(root.path().join("music/Song Title | Artist Name.mp3").exists());
}

#[test]
fn publish_runs_git_with_commit_summary() {
    let root = repo_with(&["a.mp3"], Some(CREDS));
    let git = ScriptedGit::new(true, "");

    let summary = sync(&Settings::default(), &options(&root, true), &git).unwrap();
    assert_eq!(summary.publish, Some(PublishOutcome::Pushed));

    let calls = git.calls.borrow();
    assert_eq!(calls[0], "add .");
    assert!(calls[1].starts_with("commit -m Update music repository - 1 tracks ("));
    assert_eq!(calls[2], "push https://tok@github.com/me/music-repo main");
}

/// Succeeds everywhere except `commit`, which reports a clean tree.
struct CleanTreeGit;

impl GitRunner for CleanTreeGit {
    fn run(&self, _repo_dir: &Path, args: &[&str]) -> std::io::Result<GitOutput> {
        let commit = args.first() == Some(&"commit");
        Ok(GitOutput {
            success: !commit,
            stdout: if commit {
                "nothing to commit, working tree clean".into()
            } else {
                String::new()
            },
            stderr: String::new(),
        })
    }
}

#[test]
fn nothing_to_commit_counts_as_success() {
    let root = repo_with(&["a.mp3"], Some(CREDS));

    let summary = sync(&Settings::default(), &options(&root, true), &CleanTreeGit).unwrap();
    assert_eq!(summary.publish, Some(PublishOutcome::NothingToCommit));
}

#[test]
fn publish_failure_keeps_written_manifest() {
    let root = repo_with(&["a.mp3"], Some(CREDS));
    let git = ScriptedGit::new(false, "");

    let err = sync(&Settings::default(), &options(&root, true), &git).unwrap_err();
    assert!(matches!(err, SyncError::Git { .. }));
    assert_eq!(read_manifest(&root).music.len(), 1);
}
