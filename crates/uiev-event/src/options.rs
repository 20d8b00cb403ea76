//! Event construction options.

use crate::EventError;
use serde::{Deserialize, Serialize};

/// Whether an event is scoped to senders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    /// Registered and fired without a sender; every handler matches.
    Global,
    /// Registered and fired with a sender; delivery filters by sender.
    SenderScoped,
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::SenderScoped => f.write_str("sender-scoped"),
        }
    }
}

/// Fixed configuration of one [`Event`](crate::Event).
///
/// `version` tags the layout of this struct. Options deserialized from
/// an older or newer layout carry a different tag and are rejected at
/// construction instead of being silently misread.
///
/// # Example TOML
///
/// ```toml
/// version = 1
/// global = false
/// ```
///
/// ```
/// use uiev_event::{EventMode, EventOptions};
///
/// assert_eq!(EventOptions::global().mode(), EventMode::Global);
/// assert_eq!(EventOptions::default().mode(), EventMode::SenderScoped);
/// assert_eq!(EventOptions::default().version, EventOptions::VERSION);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOptions {
    /// Layout tag. Must equal [`EventOptions::VERSION`].
    #[serde(default = "current_version")]
    pub version: u32,

    /// `true` for sender-less events.
    #[serde(default)]
    pub global: bool,
}

fn current_version() -> u32 {
    EventOptions::VERSION
}

impl EventOptions {
    /// Layout version understood by this build.
    pub const VERSION: u32 = 1;

    /// Options for a sender-less event.
    #[must_use]
    pub fn global() -> Self {
        Self {
            version: Self::VERSION,
            global: true,
        }
    }

    /// Options for an event whose handlers are scoped to senders.
    #[must_use]
    pub fn sender_scoped() -> Self {
        Self {
            version: Self::VERSION,
            global: false,
        }
    }

    /// Returns the mode these options describe.
    #[must_use]
    pub fn mode(&self) -> EventMode {
        if self.global {
            EventMode::Global
        } else {
            EventMode::SenderScoped
        }
    }

    pub(crate) fn check_version(&self) -> Result<(), EventError> {
        if self.version == Self::VERSION {
            Ok(())
        } else {
            Err(EventError::OptionsVersionMismatch {
                expected: Self::VERSION,
                found: self.version,
            })
        }
    }
}

impl Default for EventOptions {
    fn default() -> Self {
        Self::sender_scoped()
    }
}
