//! Property tests for tcwatch.
//!
//! Properties use randomized input generation to protect invariants of
//! path reduction and argv construction.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/path_reducer.rs"]
mod path_reducer;

#[path = "properties/command.rs"]
mod command;
