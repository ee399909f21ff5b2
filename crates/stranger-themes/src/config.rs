//! Application configuration loaded from TOML.
//!
//! ```toml
//! initial_theme = "dark"
//! failure_policy = "degrade"
//! max_turns = 32
//! log_filter = "stranger_themes=debug"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stranger_themes_core::{EventLoop, FailurePolicy, Theme, DEFAULT_MAX_TURNS};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the demo application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme every surface starts with.
    pub initial_theme: Theme,
    /// Overrides [`FailurePolicy::for_build`] when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_policy: Option<FailurePolicy>,
    /// Turn limit for [`EventLoop::run_until_idle`].
    pub max_turns: usize,
    /// `tracing_subscriber::EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::Light,
            failure_policy: None,
            max_turns: DEFAULT_MAX_TURNS,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The configured policy, or the build default.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy.unwrap_or_default()
    }

    /// An event loop with the configured turn limit.
    pub fn event_loop(&self) -> EventLoop {
        EventLoop::with_max_turns(self.max_turns)
    }
}
