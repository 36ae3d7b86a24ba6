//! Tool surface for the voice session host.
//!
//! The host calls [`Companion::build_initial_context`] once before a session
//! starts and dispatches the model's `save_checkin` tool call to
//! [`Companion::record_check_in`] at the end of the conversation.

use crate::config::WellnessConfig;
use crate::digest::describe;
use crate::error::CheckInError;
use crate::schema::{CheckInRecord, NewCheckIn, MAX_OBJECTIVES, MIN_OBJECTIVES};
use crate::storage::CheckInStore;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Name under which the check-in tool is registered with the model.
pub const TOOL_NAME: &str = "save_checkin";

#[derive(Debug, Clone)]
pub struct Companion {
    store: CheckInStore,
    strict_validation: bool,
}

impl Companion {
    pub fn new(store: CheckInStore) -> Self {
        Self {
            store,
            strict_validation: false,
        }
    }

    pub fn from_config(config: &WellnessConfig) -> Self {
        Self::new(CheckInStore::new(config.log_path.clone()))
            .with_strict_validation(config.strict_validation)
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn store(&self) -> &CheckInStore {
        &self.store
    }

    /// Digest of the previous check-in for the session's opening instructions.
    pub fn build_initial_context(&self) -> String {
        describe(&self.store.load())
    }

    /// Save a confirmed check-in and return the confirmation to relay.
    ///
    /// Entries outside the check-in guidance are stored as-is unless strict
    /// validation is on, in which case nothing is written.
    pub fn record_check_in(&self, entry: NewCheckIn) -> Result<String, CheckInError> {
        info!(
            mood = %entry.mood,
            energy = %entry.energy,
            objectives = ?entry.objectives,
            "saving check-in"
        );

        if let Err(e) = entry.validate() {
            if self.strict_validation {
                warn!(error = %e, "rejected check-in");
                return Err(e.into());
            }
            debug!(error = %e, "storing check-in outside guidance");
        }

        let record = self.store.append(entry)?;
        Ok(confirmation(&record))
    }
}

/// Confirmation relayed to the user after a successful save.
pub fn confirmation(record: &CheckInRecord) -> String {
    format!(
        "Check-in saved successfully! I've recorded your mood ({}), energy ({}), \
         and your {} objectives for today. Have a great day, and I look forward \
         to checking in with you again!",
        record.mood,
        record.energy,
        record.objectives.len()
    )
}

/// Declaration of the `save_checkin` tool for the model's tool list.
pub fn tool_definition() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "Save the daily check-in once mood, energy and objectives have been recapped and confirmed by the user.",
        "parameters": {
            "type": "object",
            "properties": {
                "mood": {
                    "type": "string",
                    "description": "Self-reported mood, e.g. \"good\", \"tired\", \"stressed\""
                },
                "energy": {
                    "type": "string",
                    "description": "Energy level, e.g. \"high\", \"medium\", \"low\""
                },
                "objectives": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": MIN_OBJECTIVES,
                    "maxItems": MAX_OBJECTIVES,
                    "description": "Goals the user wants to accomplish today"
                },
                "summary": {
                    "type": "string",
                    "description": "Optional brief summary of the check-in"
                }
            },
            "required": ["mood", "energy", "objectives"]
        }
    })
}
