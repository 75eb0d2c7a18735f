use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::views::config::render_config;

use super::common::load_config;

pub fn cmd_config(config_path: Option<&Path>, ui: UiContext) -> Result<ExitCode> {
    let loaded = load_config(config_path)?;

    if ui.json {
        let warnings: Vec<_> = loaded
            .warnings
            .iter()
            .map(|w| {
                serde_json::json!({
                    "key": w.key,
                    "file": w.file.display().to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "config",
            "command": "config",
            "source": loaded.source.as_ref().map(|p| p.display().to_string()),
            "run": loaded.config.run,
            "watch": loaded.config.watch,
            "warnings": warnings,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!(
            "{}",
            render_config(
                loaded.source.as_deref(),
                &loaded.config,
                &loaded.warnings,
                ui.color,
                ui.unicode
            )
        );
    }

    Ok(ExitCode::SUCCESS)
}
