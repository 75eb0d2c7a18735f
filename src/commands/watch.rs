use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tcwatch::application::check::SUBCOMMAND;
use tcwatch::application::{WatchOptions, WatchUseCase};
use tcwatch::domain::ports::{RunEvent, RunEventSink};

use crate::cli::RunArgs;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header, timestamp};

use super::common::{build_plugin, emit, load_config, report_config_warnings};

pub fn cmd_watch(
    dirs: &[PathBuf],
    run: &RunArgs,
    config_path: Option<&Path>,
    ui: UiContext,
) -> Result<ExitCode> {
    let loaded = load_config(config_path)?;
    report_config_warnings(&ui, &loaded.warnings);

    let options = run.apply(loaded.config.run);
    let watch_options = WatchOptions::from_config(loaded.project_root.clone(), &loaded.config.watch)
        .with_roots(dirs.to_vec())
        .with_interactive(ui.interactive());

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("cannot install the Ctrl+C handler")?;

    let sink: Arc<dyn RunEventSink> = Arc::new(move |event: RunEvent| {
        emit(
            &ui,
            "watch",
            || render_watch_event(&timestamp(), &event, ui.color, ui.unicode),
            &event,
        )
    });

    if !ui.json {
        let command = format!("{} {}", options.program(), SUBCOMMAND);
        let watching: Vec<String> = watch_options
            .roots
            .iter()
            .map(|r| r.display().to_string())
            .collect();
        print!(
            "{}",
            render_watch_header(
                &command,
                &watching,
                watch_options.interactive,
                ui.color,
                ui.unicode
            )
        );
    }

    let plugin = build_plugin(options, &loaded.project_root, sink.clone());
    let use_case = WatchUseCase::new(watch_options);
    use_case.start(&plugin, running, move |event| sink.on_event(event))?;

    Ok(ExitCode::SUCCESS)
}
