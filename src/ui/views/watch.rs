use tcwatch::domain::ports::RunEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::run::render_run_event;

pub fn render_watch_header(
    command: &str,
    watching: &[String],
    interactive: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "tcwatch watch");
    header.add("Command", command);
    header.add("Paths", watching.join(", "));
    if interactive {
        header.add("Hint", "Press Enter to check everything, Ctrl+C to stop");
    } else {
        header.add("Hint", "Press Ctrl+C to stop");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &RunEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    render_run_event(Some(timestamp), event, supports_color, supports_unicode)
}

/// Wall-clock time for event prefixes
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
