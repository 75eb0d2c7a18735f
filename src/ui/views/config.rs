use std::path::Path;

use tcwatch::config::{Config, ConfigWarning};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::render_config_warnings;
use crate::ui::primitives::icon::Icon;

pub fn render_config(
    source: Option<&Path>,
    config: &Config,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Config, "tcwatch config");
    header.add(
        "Source",
        source
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    );
    header.add("Command", config.run.program());

    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');
    out.push_str(&config.to_toml());
    if !warnings.is_empty() {
        out.push('\n');
        out.push_str(&render_config_warnings(
            warnings,
            supports_color,
            supports_unicode,
        ));
    }
    out
}
