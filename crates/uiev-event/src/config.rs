//! Declarative registry configuration.
//!
//! Lets a toolkit describe an event in TOML instead of code:
//!
//! ```toml
//! global = false
//! diagnostics = "panic"
//! ```
//!
//! Omitted fields fall back to the current [`EventOptions`] layout, a
//! sender-scoped event, and the logging sink.

use crate::{Diagnostics, EventOptions, PanicDiagnostics, TracingDiagnostics};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;
use uiev_types::ErrorCode;

/// Built-in [`Diagnostics`] sinks selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsPolicy {
    /// [`TracingDiagnostics`].
    #[default]
    Log,
    /// [`PanicDiagnostics`].
    Panic,
}

impl DiagnosticsPolicy {
    /// Instantiates the sink this policy names.
    #[must_use]
    pub fn build(self) -> Rc<dyn Diagnostics> {
        match self {
            Self::Log => Rc::new(TracingDiagnostics),
            Self::Panic => Rc::new(PanicDiagnostics),
        }
    }
}

/// Full configuration of one event registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Construction options.
    #[serde(flatten)]
    pub options: EventOptions,

    /// Where contract violations go.
    #[serde(default)]
    pub diagnostics: DiagnosticsPolicy,
}

/// Errors from loading a [`RegistryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid TOML for this schema.
    #[error("failed to parse registry config: {0}")]
    ParseToml(#[from] toml::de::Error),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::ParseToml(_) => "CONFIG_PARSE_TOML",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

impl RegistryConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed input or unknown
    /// enum values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(input)?;
        tracing::debug!(?config, "loaded registry config");
        Ok(config)
    }
}
