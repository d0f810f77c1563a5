//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `kimsufi_watch` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit code translation
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use kimsufi_watch::config::{Command, Opt, EXIT_ERROR};
use kimsufi_watch::initialization::init_logger_with;
use kimsufi_watch::output::IgnoreBrokenPipe;
use kimsufi_watch::{exit_code, run_check, run_list, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, then from next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = IgnoreBrokenPipe::new(io::stdout());
    let verdict = match opt.command {
        Command::List(args) => run_list(&config, &args.into(), &mut stdout)
            .await
            .map(|report| report.nothing_available),
        Command::Check(args) => run_check(&config, &args.into(), &mut stdout)
            .await
            .map(|report| report.nothing_available),
    };

    match verdict {
        Ok(nothing_available) => process::exit(exit_code(nothing_available)),
        Err(e) => {
            eprintln!("kimsufi_watch error: {:#}", e);
            process::exit(EXIT_ERROR);
        }
    }
}
