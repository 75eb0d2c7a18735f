use tcwatch::TcError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Error line plus its cause chain
pub fn render_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("Error: {}", err)).render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }
    if let Some(hint) = hint_for(err) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<TcError>()? {
        TcError::InvalidExtraArgs { .. } => {
            Some("extra_args must be a string or an array of strings with balanced quotes")
        }
        TcError::InvalidConfig { .. } => Some("Run 'tcwatch config' to see the effective settings"),
        _ => None,
    }
}
