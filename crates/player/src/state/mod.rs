//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate platform adapters.
//! These are concrete implementations, so they live here rather than in
//! the ports layer.

mod platform;

pub use platform::Platform;
