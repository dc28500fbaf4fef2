//! Environment-driven runtime configuration.

use std::path::PathBuf;
use todo_core::{default_log_level, is_blank};

pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from a key lookup; blank values fall back to defaults.
    ///
    /// Level and directory are checked later by `init_logging`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|value| !is_blank(value));

        Self {
            log_level: present(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: present(LOG_DIR_ENV)
                .map(|value| PathBuf::from(value.trim()))
                .unwrap_or_else(default_log_dir),
        }
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("todo-cli").join("logs")
}
