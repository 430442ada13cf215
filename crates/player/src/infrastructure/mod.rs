//! Infrastructure adapters for the host platform.

pub mod platform;
