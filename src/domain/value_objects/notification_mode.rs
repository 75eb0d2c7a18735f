//! Notification Mode Value Object
//!
//! Decides whether a finished run produces a desktop notification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TcError;

/// When to send a desktop notification after a run
///
/// - `Always`: every run, flagged as success or failure
/// - `OnFailure`: failed runs only (default)
/// - `Never`: no notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMode {
    Always,
    #[default]
    #[serde(alias = "failed", alias = "on-failure")]
    OnFailure,
    Never,
}

impl NotificationMode {
    pub const VARIANTS: &'static [&'static str] = &["always", "on_failure", "never"];

    /// Whether a run with the given outcome should notify.
    pub fn should_notify(self, succeeded: bool) -> bool {
        match self {
            NotificationMode::Always => true,
            NotificationMode::OnFailure => !succeeded,
            NotificationMode::Never => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationMode::Always => "always",
            NotificationMode::OnFailure => "on_failure",
            NotificationMode::Never => "never",
        }
    }
}

impl fmt::Display for NotificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationMode {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "true" => Ok(NotificationMode::Always),
            "on_failure" | "on-failure" | "failed" => Ok(NotificationMode::OnFailure),
            "never" | "false" => Ok(NotificationMode::Never),
            other => Err(TcError::InvalidOption {
                key: "notification".to_string(),
                value: other.to_string(),
                expected: Self::VARIANTS.join(", "),
            }),
        }
    }
}
