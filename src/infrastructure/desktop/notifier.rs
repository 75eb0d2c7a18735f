//! Desktop notifications via `notify-send` (Linux/BSD) or `osascript` (macOS)

use std::borrow::Cow;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{Notifier, NotifyImage};

/// Longest message body handed to a backend.
///
/// The body travels as one argv element, which Linux caps at 128 KiB.
const MAX_MESSAGE_BYTES: usize = 16 * 1024;

const ELIDED_MARKER: &str = "...\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    NotifySend,
    Osascript,
}

/// Notifier backed by a platform command, or a no-op when none is available
#[derive(Debug, Clone, Copy)]
pub struct DesktopNotifier {
    backend: Option<Backend>,
}

impl DesktopNotifier {
    /// Pick the backend for this platform, if its tool is installed
    pub fn detect() -> Self {
        let backend = if cfg!(target_os = "macos") {
            Some(Backend::Osascript)
        } else if cfg!(unix) && Self::check_available("notify-send") {
            Some(Backend::NotifySend)
        } else {
            None
        };
        debug!(?backend, "notification backend");
        Self { backend }
    }

    /// Notifier that never delivers anything
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn command(backend: Backend, message: &str, title: &str, image: NotifyImage) -> Command {
        let message = bounded_message(message, MAX_MESSAGE_BYTES);
        match backend {
            Backend::NotifySend => {
                let icon = match image {
                    NotifyImage::Success => "dialog-information",
                    NotifyImage::Failed => "dialog-error",
                };
                let mut cmd = Command::new("notify-send");
                cmd.arg("--app-name=tcwatch")
                    .arg(format!("--icon={}", icon))
                    .arg(title)
                    .arg(message.as_ref());
                cmd
            }
            Backend::Osascript => {
                let script = format!(
                    "display notification \"{}\" with title \"{}\" subtitle \"{}\"",
                    applescript_escape(&message),
                    applescript_escape(title),
                    image.as_str()
                );
                let mut cmd = Command::new("osascript");
                cmd.arg("-e").arg(script);
                cmd
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str, title: &str, image: NotifyImage) {
        let Some(backend) = self.backend else {
            return;
        };

        let result = Self::command(backend, message, title, image)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        if let Err(e) = result {
            debug!(error = %e, "notification not delivered");
        }
    }
}

/// Keep the tail of an oversized message, where the checker prints its
/// summary, starting on a line boundary when one is close enough.
fn bounded_message(message: &str, max: usize) -> Cow<'_, str> {
    if message.len() <= max {
        return Cow::Borrowed(message);
    }

    let mut start = message.len() - (max - ELIDED_MARKER.len());
    while !message.is_char_boundary(start) {
        start += 1;
    }
    let tail = &message[start..];
    let tail = match tail.find('\n') {
        Some(i) if i + 1 < tail.len() => &tail[i + 1..],
        _ => tail,
    };
    Cow::Owned(format!("{}{}", ELIDED_MARKER, tail))
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
