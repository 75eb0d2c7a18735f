use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use tcwatch::application::{Plugin, TriggerOutcome};
use tcwatch::domain::ports::RunEvent;

use crate::cli::RunArgs;
use crate::ui::context::UiContext;
use crate::ui::views::check::{render_check_header, render_nothing_to_check};
use crate::ui::views::run::render_run_event;

use super::common::{build_plugin, emit, load_config, report_config_warnings};

pub fn cmd_check(
    paths: &[PathBuf],
    run: &RunArgs,
    config_path: Option<&Path>,
    ui: UiContext,
) -> Result<ExitCode> {
    let loaded = load_config(config_path)?;
    report_config_warnings(&ui, &loaded.warnings);

    let options = run.apply(loaded.config.run);
    let full_project = paths.is_empty();

    if !ui.json {
        let target = if full_project {
            "project".to_string()
        } else {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        print!(
            "{}",
            render_check_header(options.program(), &target, ui.color, ui.unicode)
        );
    }

    let sink = move |event: RunEvent| {
        emit(
            &ui,
            "check",
            || render_run_event(None, &event, ui.color, ui.unicode),
            &event,
        )
    };
    let plugin = build_plugin(options, &loaded.project_root, Arc::new(sink));

    let outcome = if full_project {
        plugin.on_run_all()?
    } else {
        plugin.on_paths_changed(paths)?
    };

    Ok(match outcome {
        TriggerOutcome::Passed => ExitCode::SUCCESS,
        TriggerOutcome::Failed => ExitCode::from(1),
        TriggerOutcome::Skipped => {
            if !ui.json {
                print!("{}", render_nothing_to_check(ui.color, ui.unicode));
            }
            ExitCode::SUCCESS
        }
    })
}
