pub use tikgrab_core::fs_paths;
pub use tikgrab_core::models;

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod providers;
pub mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "warn,tikgrab_lib=debug,tikgrab_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses arguments, runs one command to completion and returns the exit code.
pub fn run() -> std::process::ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    match runtime.block_on(cli::execute(cli)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("{}", e.user_message());
            std::process::ExitCode::FAILURE
        }
    }
}
