use std::io;

use anyhow::Context;
use clap::Parser;
use gram_config::log::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests {
    mod command_tests;
    mod profile_tests;
}

use self::cli::{Cli, Command};
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        config.log.format = format.into();
    }
    init_tracing(&config.log);

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    if let Command::InitConfig { force } = cli.command {
        let (path, written) = profile::init_user_config(force)?;
        if written {
            println!("wrote {}", path.display());
        } else {
            println!("{} already exists, use --force to replace it", path.display());
        }
        return Ok(());
    }

    let state = AppState::new(config, cli.store_dir.as_deref());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    commands::handle_command(&state, cli.command, stdin.lock(), &mut stdout)
        .context("command failed")
}

/// Logs go to stderr so stdout carries only results
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match log.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
