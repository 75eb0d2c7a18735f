//! tcwatch CLI - file-watch-triggered type checking
//!
//! Usage: tcwatch <COMMAND>
//!
//! Commands:
//!   watch   Watch the project and type-check on every change
//!   check   Type-check once and exit
//!   config  Show the effective configuration

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

/// Exit status for errors raised before or instead of a check run
const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    match run(cli, ui) {
        Ok(code) => code,
        Err(err) => {
            if ui.json {
                let event = tcwatch::domain::ports::RunEvent::Error {
                    message: format!("{:#}", err),
                };
                println!("{}", event.to_json("tcwatch"));
            } else {
                eprint!(
                    "{}",
                    ui::views::error::render_error(&err, ui.color, ui.unicode)
                );
            }
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn run(cli: Cli, ui: UiContext) -> Result<ExitCode> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Watch { dirs, run } => commands::watch::cmd_watch(dirs, run, config_path, ui),
        Commands::Check { paths, run } => commands::check::cmd_check(paths, run, config_path, ui),
        Commands::Config => commands::config::cmd_config(config_path, ui),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("tcwatch={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
