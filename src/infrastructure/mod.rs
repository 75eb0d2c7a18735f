//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - PathProbe over the local disk, config directory lookup
//! - `process/` - ProcessRunner with merged output capture
//! - `desktop/` - Notifier and FileOpener adapters

pub mod desktop;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use desktop::{DesktopNotifier, SystemOpener};
pub use fs::LocalProbe;
pub use process::LocalProcessRunner;
