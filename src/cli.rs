use std::path::PathBuf;

use clap::Parser;

/// Rename audio files, regenerate the music manifest and push the repository.
#[derive(Parser, Debug, Default)]
#[command(name = "music-repo-sync", version, about, long_about = None)]
pub struct Cli {
    /// Repository root holding the music directory and credentials file
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Settings file; overrides MUSIC_SYNC_CONFIG_PATH and the XDG default
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the manifest but skip commit and push
    #[arg(long)]
    pub no_push: bool,

    /// Keep filenames as they are
    #[arg(long)]
    pub no_rename: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
