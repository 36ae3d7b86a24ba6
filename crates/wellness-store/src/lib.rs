//! Check-in memory for the wellness voice companion.
//!
//! Provides:
//! - Check-in schema
//! - Append-only JSON log storage with corruption recovery
//! - Digest of the latest check-in for session priming
//! - The `save_checkin` tool surface

pub mod companion;
pub mod config;
pub mod digest;
pub mod error;
pub mod schema;
pub mod storage;

pub use companion::{Companion, TOOL_NAME, tool_definition};
pub use config::WellnessConfig;
pub use digest::{FIRST_CHECK_IN, describe};
pub use error::{CheckInError, MalformedLogError, PersistenceError, ValidationError};
pub use schema::{CheckInLog, CheckInRecord, NewCheckIn};
pub use storage::{CheckInStore, LoadOutcome};
