//! Command implementations.

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
