//! Line rendering shared by `watch` and `check`

use tcwatch::domain::ports::RunEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render one event; `prefix` (e.g. a timestamp) starts every status line.
pub fn render_run_event(
    prefix: Option<&str>,
    event: &RunEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = |i: Icon| i.colored(supports_color, supports_unicode);
    let lead = match prefix {
        Some(p) => format!("{} ", ColoredText::dim(format!("[{}]", p)).render(supports_color)),
        None => String::new(),
    };

    match event {
        RunEvent::WatchStarted { watching } => {
            format!("{}{} Watching: {}\n", lead, icon(Icon::Watch), watching.join(", "))
        }
        RunEvent::PathsChanged { paths } => {
            format!("{}{} Changed: {}\n", lead, icon(Icon::Arrow), paths.join(", "))
        }
        RunEvent::CheckStarted {
            full_project: true, ..
        } => format!("{}{} Typechecking project\n", lead, icon(Icon::Progress)),
        RunEvent::CheckStarted { paths, .. } => format!(
            "{}{} Typechecking: {}\n",
            lead,
            icon(Icon::Progress),
            paths.join(" ")
        ),
        RunEvent::CheckFinished {
            passed,
            exit_code,
            output,
        } => {
            let mut out = String::new();
            if let Some(text) = output {
                let text = text.trim_end();
                if !text.is_empty() {
                    out.push_str(text);
                    out.push('\n');
                }
            }
            let status = if *passed {
                format!(
                    "{} {}",
                    icon(Icon::Success),
                    ColoredText::success("Typecheck passed").render(supports_color)
                )
            } else {
                let detail = match exit_code {
                    Some(code) => format!("exit code {}", code),
                    None => "no exit code".to_string(),
                };
                format!(
                    "{} {} ({})",
                    icon(Icon::Error),
                    ColoredText::error("Typecheck failed").render(supports_color),
                    detail
                )
            };
            out.push_str(&format!("{}{}\n", lead, status));
            out
        }
        RunEvent::Error { message } => {
            format!("{}{} Error: {}\n", lead, icon(Icon::Error), message)
        }
        RunEvent::Shutdown => format!("\n{}{} Watch stopped.\n", lead, icon(Icon::Watch)),
    }
}

/// Whether an event belongs on stderr
pub fn is_error(event: &RunEvent) -> bool {
    matches!(event, RunEvent::Error { .. })
}
