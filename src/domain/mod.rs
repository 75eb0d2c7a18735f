//! Domain Layer
//!
//! Core of tcwatch: path reduction and the values the check pipeline passes
//! around.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (PathSet, CommandVector, NotificationMode)
//! - `services/` - Domain services (PathReducer)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file system and process access goes through ports
//! 2. **Ports & Adapters** - infrastructure implements the traits in `ports/`

pub mod ports;
pub mod services;
pub mod value_objects;
