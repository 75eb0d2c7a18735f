//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::{ConfigWarning, ExtraArgs, NotificationMode};
use crate::error::{TcError, TcResult};
use crate::infrastructure::fs::user_config_dir;

use super::types::Config;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".tcwatch.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> TcResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TcError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file to use and load it.
///
/// An explicit path must exist. Otherwise the first of
/// `<project_root>/.tcwatch.toml` and `<user config dir>/config.toml` that
/// exists is loaded, falling back to defaults. Parse errors are returned,
/// never swallowed.
pub fn load_layered(
    project_root: &Path,
    explicit: Option<&Path>,
) -> TcResult<(Config, Vec<ConfigWarning>)> {
    match config_source(project_root, explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)
        }
        None => {
            debug!("no config file found, using defaults");
            Ok((Config::default(), Vec::new()))
        }
    }
}

/// The file `load_layered` reads, if any
pub fn config_source(project_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    candidate_files(project_root)
        .into_iter()
        .find(|candidate| candidate.is_file())
}

fn candidate_files(project_root: &Path) -> Vec<PathBuf> {
    let mut files = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = user_config_dir() {
        files.push(dir.join("config.toml"));
    }
    files
}

/// Apply environment variable overrides (TCWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TCWATCH_COMMAND
    if let Some(command) = get_env("TCWATCH_COMMAND").filter(|v| !v.trim().is_empty()) {
        config.run.command = Some(command);
    }

    // TCWATCH_NOTIFICATION
    if let Some(mode) = get_env("TCWATCH_NOTIFICATION") {
        match mode.parse::<NotificationMode>() {
            Ok(mode) => config.run.notification = mode,
            Err(e) => warn!("ignoring TCWATCH_NOTIFICATION: {}", e),
        }
    }

    // TCWATCH_HIDE_OUTPUT
    if let Some(val) = get_env("TCWATCH_HIDE_OUTPUT") {
        config.run.hide_output = val.to_lowercase() != "false" && val != "0";
    }

    // TCWATCH_EXTRA_ARGS (shell-word string)
    if let Some(args) = get_env("TCWATCH_EXTRA_ARGS") {
        config.run.extra_args = ExtraArgs::Line(args);
    }

    // TCWATCH_COLORIZE ("false" or empty drops --color)
    if let Some(val) = get_env("TCWATCH_COLORIZE") {
        config.run.colorize = match val.trim() {
            "" | "false" | "0" => None,
            mode => Some(mode.to_string()),
        };
    }

    config
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|i| i + 1)
}

/// Keys tcwatch reads, for typo suggestions
const KNOWN_KEYS: &[&str] = &[
    "run",
    "command",
    "use_config_file",
    "colorize",
    "extra_args",
    "notification",
    "hide_output",
    "all_on_start",
    "open_results_file",
    "watch",
    "paths",
    "extensions",
    "ignore",
    "respect_gitignore",
    "debounce_ms",
];

/// Closest known key within edit distance 2
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, single-row table
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}
