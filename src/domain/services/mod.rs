//! Domain Services
//!
//! Stateless logic over domain values; all I/O goes through ports.

pub mod path_reducer;

pub use path_reducer::{absolutize, PathReducer};
