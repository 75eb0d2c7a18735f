//! Checker argv construction
//!
//! `<command> tc [--no-config] [--color <mode>] --dir <.|sorbet> [extra...] [paths...]`

use crate::config::RunOptions;
use crate::domain::value_objects::{CommandVector, PathSet};
use crate::error::TcResult;

/// Subcommand passed to the checker
pub const SUBCOMMAND: &str = "tc";
/// Flag emitted when the project's own checker config must be skipped
pub const NO_CONFIG_FLAG: &str = "--no-config";
/// Flag preceding the color mode
pub const COLOR_FLAG: &str = "--color";
/// Flag preceding the directory the checker scopes to
pub const DIR_FLAG: &str = "--dir";
/// `--dir` value for full-project runs
pub const FULL_PROJECT_DIR: &str = ".";
/// `--dir` value for incremental runs: the checker's config directory
pub const INCREMENTAL_DIR: &str = "sorbet";

/// Build the argv for one run.
///
/// Full-project runs never carry path arguments, whatever `paths` holds.
/// Fails only when `extra_args` cannot be tokenized.
pub fn build_command(
    options: &RunOptions,
    paths: &PathSet,
    full_project: bool,
) -> TcResult<CommandVector> {
    let extra = options.extra_args.tokens()?;

    let mut args = Vec::with_capacity(6 + extra.len() + paths.len());
    args.push(SUBCOMMAND.to_string());

    if !options.use_config_file {
        args.push(NO_CONFIG_FLAG.to_string());
    }
    if let Some(mode) = &options.colorize {
        args.push(COLOR_FLAG.to_string());
        args.push(mode.clone());
    }

    args.push(DIR_FLAG.to_string());
    if full_project {
        args.push(FULL_PROJECT_DIR.to_string());
    } else {
        args.push(INCREMENTAL_DIR.to_string());
    }

    args.extend(extra);

    if !full_project {
        args.extend(paths.to_args());
    }

    Ok(CommandVector::new(options.program(), args))
}
