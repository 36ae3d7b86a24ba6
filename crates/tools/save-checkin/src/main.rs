//! `save_checkin` tool: persist a confirmed check-in.
//!
//! Reads the tool call from stdin and answers with a result or error
//! document. A failed save is reported to the host, never as a crash.

use companion_common::prelude::*;
use tracing::error;
use wellness_store::{Companion, NewCheckIn, TOOL_NAME, WellnessConfig};

fn main() -> Result<()> {
    init_logging();

    let call = ToolCall::from_stdin()?;
    let output = handle(&call, &WellnessConfig::from_env());
    output.write_stdout()?;

    Ok(())
}

fn handle(call: &ToolCall, config: &WellnessConfig) -> ToolOutput {
    if !call.is_tool(TOOL_NAME) {
        return ToolOutput::failure(format!("Unsupported tool: {}", call.tool_name));
    }

    let entry: NewCheckIn = match call.arguments() {
        Ok(entry) => entry,
        Err(e) => return ToolOutput::failure(format!("{e:#}")),
    };

    match Companion::from_config(config).record_check_in(entry) {
        Ok(confirmation) => ToolOutput::success(confirmation),
        Err(e) => {
            error!(error = %e, "check-in not saved");
            ToolOutput::failure(format!("Check-in was not saved: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(json: &str) -> ToolCall {
        ToolCall::from_reader(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_rejects_other_tools() {
        let config = WellnessConfig::new("/nonexistent/log.json");
        let output = handle(&call(r#"{"tool_name": "end_call", "tool_input": {}}"#), &config);
        assert!(output.is_error);
        assert!(output.error.unwrap().contains("end_call"));
    }

    #[test]
    fn test_missing_arguments() {
        let config = WellnessConfig::new("/nonexistent/log.json");
        let output = handle(
            &call(r#"{"tool_name": "save_checkin", "tool_input": {"mood": "good"}}"#),
            &config,
        );
        assert!(output.is_error);
        assert!(output.error.unwrap().contains("energy"));
    }
}
