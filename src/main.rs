use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod library;
mod manifest;
mod metadata;
mod publish;
mod runtime;

fn main() -> ExitCode {
    // RUST_LOG=debug for per-file detail.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    log::info!(
        "[Main] Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match runtime::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[Main] {e}");
            ExitCode::FAILURE
        }
    }
}
