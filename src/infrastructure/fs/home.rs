//! Home and config directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` and `dirs::config_dir()` use system APIs
//! rather than environment variables, so `HOME` overrides in tests have no
//! effect there. `TCWATCH_CONFIG_HOME` takes precedence everywhere.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const TCWATCH_CONFIG_HOME_VAR: &str = "TCWATCH_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// Resolution order:
/// 1. `TCWATCH_CONFIG_HOME`
/// 2. `$XDG_CONFIG_HOME/tcwatch`
/// 3. `dirs::config_dir()/tcwatch`
pub fn user_config_dir() -> Option<PathBuf> {
    user_config_dir_impl(|k| std::env::var(k).ok(), dirs::config_dir)
}

fn user_config_dir_impl(
    get_env: impl Fn(&str) -> Option<String>,
    system: impl Fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = get_env(TCWATCH_CONFIG_HOME_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = get_env("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("tcwatch"));
    }
    system().map(|d| d.join("tcwatch"))
}
