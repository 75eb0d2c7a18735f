use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    command: &str,
    target: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "tcwatch check");
    header.add("Command", command);
    header.add("Target", target);
    header.render(supports_color, supports_unicode)
}

/// Printed when every requested path was dropped before running
pub fn render_nothing_to_check(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Nothing to check: none of the given paths exist\n",
        Icon::Skipped.colored(supports_color, supports_unicode)
    )
}
