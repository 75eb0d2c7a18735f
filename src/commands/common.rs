use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tcwatch::application::TypecheckPlugin;
use tcwatch::config::{Config, ConfigWarning, NotificationMode, RunOptions};
use tcwatch::domain::ports::{RunEvent, RunEventSink};
use tcwatch::infrastructure::{DesktopNotifier, LocalProbe, LocalProcessRunner, SystemOpener};
use tcwatch::{CheckRunner, PathReducer};
use tracing::warn;

use crate::ui::blocks::warning::render_config_warnings;
use crate::ui::context::UiContext;

pub type CliPlugin = TypecheckPlugin<LocalProbe, LocalProcessRunner, DesktopNotifier, SystemOpener>;

/// Configuration resolved for one command invocation
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    pub source: Option<PathBuf>,
    pub project_root: PathBuf,
}

/// Load file configuration for the working directory and apply env overrides
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let project_root =
        std::env::current_dir().context("cannot determine the working directory")?;
    let source = Config::source(&project_root, explicit);
    let (config, warnings) = Config::load_layered(&project_root, explicit)?;

    Ok(LoadedConfig {
        config: config.with_env_overrides(),
        warnings,
        source,
        project_root,
    })
}

pub fn report_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }
    if ui.json {
        for w in warnings {
            warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
    } else {
        eprint!("{}", render_config_warnings(warnings, ui.color, ui.unicode));
    }
}

/// Wire real adapters into a plugin
pub fn build_plugin(
    options: RunOptions,
    project_root: &Path,
    events: Arc<dyn RunEventSink>,
) -> CliPlugin {
    let notifier = match options.notification {
        NotificationMode::Never => DesktopNotifier::disabled(),
        _ => DesktopNotifier::detect(),
    };
    let runner = CheckRunner::new(
        options,
        LocalProcessRunner::new().with_working_dir(project_root),
        notifier,
        SystemOpener,
    );

    TypecheckPlugin::new(
        PathReducer::new(LocalProbe::with_cwd(project_root)),
        runner,
        project_root.to_path_buf(),
    )
    .with_event_sink(events)
}

/// Print an event as NDJSON or as a rendered line
pub fn emit(ui: &UiContext, command: &str, rendered: impl FnOnce() -> String, event: &RunEvent) {
    if ui.json {
        println!("{}", event.to_json(command));
        return;
    }
    let text = rendered();
    if crate::ui::views::run::is_error(event) {
        eprint!("{text}");
    } else {
        print!("{text}");
    }
}
