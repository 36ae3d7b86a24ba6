//! Tool output generation for stdout.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Document written back to the voice session host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    /// Text the model relays after a successful tool call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Failure description the model turns into an apology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Set when the call failed
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,

    /// Context to fold into the session's opening instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl ToolOutput {
    /// Output for a successful tool call.
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            ..Self::default()
        }
    }

    /// Output for a failed tool call.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            is_error: true,
            ..Self::default()
        }
    }

    /// Output carrying session context.
    pub fn context(context: impl Into<String>) -> Self {
        Self {
            additional_context: Some(context.into()),
            ..Self::default()
        }
    }

    /// Write the output to `writer` as one JSON line.
    pub fn write_to(&self, mut writer: impl Write) -> anyhow::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Write the output to stdout.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        self.write_to(io::stdout().lock())
    }
}
