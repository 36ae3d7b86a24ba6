//! Session start: emit the digest of the previous check-in.
//!
//! The host folds `additionalContext` into the opening instructions of the
//! new conversation.

use companion_common::prelude::*;
use tracing::debug;
use wellness_store::{Companion, WellnessConfig};

fn main() -> Result<()> {
    init_logging();

    let config = WellnessConfig::from_env();
    debug!(path = %config.log_path, "building session context");

    let context = Companion::from_config(&config).build_initial_context();
    ToolOutput::context(context).write_stdout()?;

    Ok(())
}
