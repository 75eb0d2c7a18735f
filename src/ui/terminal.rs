//! What the attached terminal can display

use is_terminal::IsTerminal;

/// Variables whose presence marks a CI runner
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
];

/// Locale variables in precedence order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdout is a terminal
    pub is_tty: bool,
    /// stdin is a terminal, so Enter presses can be read
    pub stdin_is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    probe(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stdin().is_terminal(),
    )
}

fn probe(
    var: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    stdin_is_tty: bool,
) -> TerminalCapabilities {
    let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    TerminalCapabilities {
        is_tty,
        stdin_is_tty,
        supports_color: is_tty && !dumb && var("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_allows_unicode(&var),
        is_ci: CI_VARS.iter().any(|k| var(k).is_some()),
    }
}

/// The first locale variable that is set decides; `C`/`POSIX` mean ASCII.
fn locale_allows_unicode(var: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_VARS
        .iter()
        .find_map(|k| var(k).filter(|v| !v.is_empty()))
        .map(|locale| !matches!(locale.to_ascii_lowercase().as_str(), "c" | "posix"))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn probe_with(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<&str, &str> = env.iter().copied().collect();
        probe(|k| map.get(k).map(|v| v.to_string()), is_tty, false)
    }

    #[test]
    fn no_color_wins_over_tty() {
        let caps = probe_with(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn piped_output_has_no_color() {
        assert!(!probe_with(&[("TERM", "xterm-256color")], false).supports_color);
    }

    #[test]
    fn ci_runner_detected() {
        assert!(probe_with(&[("GITHUB_ACTIONS", "true")], true).is_ci);
        assert!(!probe_with(&[], true).is_ci);
    }

    #[test]
    fn dumb_terminal_is_plain_ascii() {
        let caps = probe_with(&[("TERM", "dumb")], true);
        assert!(!caps.supports_color);
        assert!(!caps.supports_unicode);
    }

    #[test]
    fn c_locale_is_ascii() {
        assert!(!probe_with(&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")], true).supports_unicode);
        assert!(probe_with(&[("LANG", "en_US.UTF-8")], true).supports_unicode);
        assert!(probe_with(&[], true).supports_unicode);
    }
}
