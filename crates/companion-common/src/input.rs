//! Tool call parsing from stdin.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// A tool invocation forwarded by the voice session host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool the model called (e.g., "save_checkin")
    #[serde(default)]
    pub tool_name: String,

    /// Arguments exactly as the model produced them
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Host-side identifier of the call
    #[serde(default)]
    pub call_id: Option<String>,

    /// Session ID
    #[serde(default)]
    pub session_id: Option<String>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    /// Read and parse a tool call from stdin.
    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(io::stdin())
    }

    /// Read and parse a tool call from `reader`.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("Failed to read tool call")?;
        serde_json::from_str(&input).context("Failed to parse tool call")
    }

    /// True when the call names `tool`, or names no tool at all.
    pub fn is_tool(&self, tool: &str) -> bool {
        self.tool_name.is_empty() || self.tool_name == tool
    }

    /// Deserialize the tool arguments.
    pub fn arguments<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.tool_input.clone())
            .with_context(|| format!("Invalid arguments for {}", self.display_name()))
    }

    fn display_name(&self) -> &str {
        if self.tool_name.is_empty() {
            "tool call"
        } else {
            &self.tool_name
        }
    }
}
