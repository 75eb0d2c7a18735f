use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tcwatch::config::{ExtraArgs, NotificationMode, RunOptions};

/// tcwatch - run the Sorbet type checker whenever Ruby files change
#[derive(Parser, Debug)]
#[command(name = "tcwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI and editors
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output for tcwatch itself
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Read configuration from this file instead of the usual locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the project and type-check on every change
    Watch {
        /// Directories to watch (default: [watch] paths, or ".")
        #[arg(short, long = "dir", value_name = "PATH")]
        dirs: Vec<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Type-check once and exit (0 = pass, 1 = fail, 2 = configuration error)
    Check {
        /// Paths to check (default: the whole project)
        paths: Vec<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Show the effective configuration
    Config,
}

/// Flags overriding `[run]` settings
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Checker binary (default: srb)
    #[arg(long, value_name = "BIN")]
    pub cmd: Option<String>,

    /// Pass --no-config to the checker
    #[arg(long)]
    pub no_config: bool,

    /// Value for the checker's --color flag
    #[arg(long, value_name = "MODE", conflicts_with = "no_colorize")]
    pub colorize: Option<String>,

    /// Do not pass --color to the checker
    #[arg(long)]
    pub no_colorize: bool,

    /// Extra checker arguments, split like a shell command line
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub cli: Option<String>,

    /// When to send desktop notifications: always, on_failure, never
    #[arg(long, value_name = "MODE")]
    pub notification: Option<NotificationMode>,

    /// Do not print checker output
    #[arg(long)]
    pub hide_output: bool,

    /// Skip the full-project check when watching starts
    #[arg(long)]
    pub no_all_on_start: bool,

    /// Open this file after each run when it exists
    #[arg(long, value_name = "FILE")]
    pub open: Option<PathBuf>,
}

impl RunArgs {
    /// Layer these flags over options from files and env
    pub fn apply(&self, mut options: RunOptions) -> RunOptions {
        if let Some(cmd) = &self.cmd {
            options = options.with_command(cmd.clone());
        }
        if self.no_config {
            options = options.with_use_config_file(false);
        }
        if let Some(mode) = &self.colorize {
            options = options.with_colorize(Some(mode.clone()));
        }
        if self.no_colorize {
            options = options.with_colorize(None);
        }
        if let Some(line) = &self.cli {
            options = options.with_extra_args(ExtraArgs::Line(line.clone()));
        }
        if let Some(mode) = self.notification {
            options = options.with_notification(mode);
        }
        if self.hide_output {
            options = options.with_hide_output(true);
        }
        if self.no_all_on_start {
            options = options.with_all_on_start(false);
        }
        if let Some(path) = &self.open {
            options = options.with_open_results_file(Some(path.clone()));
        }
        options
    }
}
