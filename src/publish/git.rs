use std::path::Path;
use std::process::Command;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// stdout and stderr joined, for matching and error reports.
    pub fn combined(&self) -> String {
        match (self.stdout.trim(), self.stderr.trim()) {
            (out, "") => out.to_string(),
            ("", err) => err.to_string(),
            (out, err) => format!("{out}\n{err}"),
        }
    }
}

/// Runs git subcommands in a working directory.
pub trait GitRunner {
    fn run(&self, repo_dir: &Path, args: &[&str]) -> std::io::Result<GitOutput>;
}

/// Shells out to the `git` binary on `PATH`.
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, repo_dir: &Path, args: &[&str]) -> std::io::Result<GitOutput> {
        let output = Command::new("git").args(args).current_dir(repo_dir).output()?;
        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
