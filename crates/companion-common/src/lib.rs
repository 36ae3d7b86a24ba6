//! Common utilities for the companion's tool binaries.
//!
//! This crate provides shared functionality for every tool adapter:
//! - JSON tool call parsing from stdin
//! - JSON output to stdout
//! - Logging setup

pub mod input;
pub mod logging;
pub mod output;

pub use input::ToolCall;
pub use logging::init_logging;
pub use output::ToolOutput;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::input::ToolCall;
    pub use crate::logging::init_logging;
    pub use crate::output::ToolOutput;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
