//! Desktop integration
//!
//! Notification and file-opening adapters that shell out to the platform's
//! own tools and quietly degrade when those tools are missing.

mod notifier;
mod opener;

pub use notifier::DesktopNotifier;
pub use opener::SystemOpener;
