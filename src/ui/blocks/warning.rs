use tcwatch::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Unknown-key warnings from a configuration file
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(warning.key.as_str()).render(supports_color),
            warning.location()
        ));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(format!("Did you mean '{}'?", suggestion)).render(supports_color)
            ));
        }
    }
    out
}
