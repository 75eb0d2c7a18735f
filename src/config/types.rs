//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, ExtraArgs, NotificationMode};
use crate::error::TcResult;

use super::loader;

/// Checker binary used when `command` is unset
pub const DEFAULT_COMMAND: &str = "srb";

/// Color mode passed to the checker by default
pub const DEFAULT_COLORIZE: &str = "always";

/// Options for one check run
///
/// Resolved once (file, env, CLI) and never mutated while runs happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Checker binary; `srb` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// When false, `--no-config` is passed to the checker
    #[serde(default = "default_true")]
    pub use_config_file: bool,

    /// Value for `--color`; `None` omits the flag
    #[serde(default = "default_colorize", with = "colorize_serde")]
    pub colorize: Option<String>,

    /// Extra checker arguments, string or array
    #[serde(default, skip_serializing_if = "ExtraArgs::is_none")]
    pub extra_args: ExtraArgs,

    #[serde(default)]
    pub notification: NotificationMode,

    /// Do not echo the checker output to the terminal
    #[serde(default)]
    pub hide_output: bool,

    /// Check the whole project when the watcher starts
    #[serde(default = "default_true")]
    pub all_on_start: bool,

    /// File to open after each run, if it exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_results_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            command: None,
            use_config_file: true,
            colorize: default_colorize(),
            extra_args: ExtraArgs::None,
            notification: NotificationMode::default(),
            hide_output: false,
            all_on_start: true,
            open_results_file: None,
        }
    }
}

impl RunOptions {
    /// The checker binary to execute
    pub fn program(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_use_config_file(mut self, use_config_file: bool) -> Self {
        self.use_config_file = use_config_file;
        self
    }

    pub fn with_colorize(mut self, colorize: Option<String>) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_extra_args(mut self, extra_args: ExtraArgs) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn with_notification(mut self, notification: NotificationMode) -> Self {
        self.notification = notification;
        self
    }

    pub fn with_hide_output(mut self, hide_output: bool) -> Self {
        self.hide_output = hide_output;
        self
    }

    pub fn with_all_on_start(mut self, all_on_start: bool) -> Self {
        self.all_on_start = all_on_start;
        self
    }

    pub fn with_open_results_file(mut self, path: Option<PathBuf>) -> Self {
        self.open_results_file = path;
        self
    }
}

/// Watch host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Roots to watch recursively
    #[serde(default = "default_watch_paths")]
    pub paths: Vec<PathBuf>,

    /// File extensions that trigger a run (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never reported
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Honour `.gitignore` files under the watched roots
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Quiet period before a batch is flushed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            paths: default_watch_paths(),
            extensions: default_extensions(),
            ignore: default_ignore(),
            respect_gitignore: true,
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub run: RunOptions,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load from an explicit file, the project file, the user file, or defaults
    pub fn load_layered(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> TcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, explicit)
    }

    /// Path of the file `load_layered` would read
    pub fn source(project_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
        loader::config_source(project_root, explicit)
    }

    /// Apply environment variable overrides (TCWATCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

fn default_true() -> bool {
    true
}

fn default_colorize() -> Option<String> {
    Some(DEFAULT_COLORIZE.to_string())
}

fn default_watch_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_extensions() -> Vec<String> {
    ["rb", "rbi", "rake", "ru"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignore() -> Vec<String> {
    [".git", ".bundle", "tmp", "log", "node_modules", "vendor", "coverage"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_debounce_ms() -> u64 {
    100
}

/// `colorize` is a mode string, or `false` to drop `--color`.
/// `true` means the default mode.
mod colorize_serde {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(mode) => serializer.serialize_str(mode),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorizeVisitor;

        impl Visitor<'_> for ColorizeVisitor {
            type Value = Option<String>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color mode string or a boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(v.to_string()))
                }
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(v.then(|| super::DEFAULT_COLORIZE.to_string()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }
        }

        deserializer.deserialize_any(ColorizeVisitor)
    }
}
