//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_opener;
pub mod notifier;
pub mod path_probe;
pub mod process_runner;
pub mod run_events;

pub use file_opener::{FileOpener, NullOpener};
pub use notifier::{Notifier, NotifyImage, NullNotifier};
pub use path_probe::PathProbe;
pub use process_runner::{ExitState, ProcessOutput, ProcessRunner};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
