//! Storage configuration.

use camino::Utf8PathBuf;

/// Overrides the log location.
pub const LOG_PATH_ENV: &str = "WELLNESS_LOG_PATH";

/// Turns on strict validation of check-in entries.
pub const STRICT_VALIDATION_ENV: &str = "WELLNESS_STRICT_VALIDATION";

const APP_DIR: &str = "wellness-companion";
const LOG_FILE_NAME: &str = "wellness_log.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellnessConfig {
    /// Path to the JSON check-in log
    pub log_path: Utf8PathBuf,
    /// Reject entries outside the check-in guidance instead of storing them as-is
    pub strict_validation: bool,
}

impl WellnessConfig {
    pub fn new(log_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            strict_validation: false,
        }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from `lookup`.
    ///
    /// Priority for the log path:
    /// 1. `WELLNESS_LOG_PATH` (if set and non-empty)
    /// 2. `<local data dir>/wellness-companion/wellness_log.json`
    /// 3. `./wellness_log.json`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup(LOG_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(Utf8PathBuf::from)
            .unwrap_or_else(Self::default_log_path);
        let strict_validation = lookup(STRICT_VALIDATION_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            log_path,
            strict_validation,
        }
    }

    /// Default log location under the platform's local data directory.
    pub fn default_log_path() -> Utf8PathBuf {
        dirs::data_local_dir()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
            .map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
            .unwrap_or_else(|| Utf8PathBuf::from(LOG_FILE_NAME))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
