//! Player port definitions.

pub mod outbound;
