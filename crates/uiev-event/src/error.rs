//! Contract violations raised by the event registry.
//!
//! Every variant describes a caller bug, never a data-dependent
//! failure. The registry reports each one to its
//! [`Diagnostics`](crate::Diagnostics) sink before returning it, and no
//! operation changes state on an error path.
//!
//! | Variant | Code |
//! |---------|------|
//! | [`OptionsVersionMismatch`](EventError::OptionsVersionMismatch) | `EVENT_OPTIONS_VERSION` |
//! | [`ChangedDuringFire`](EventError::ChangedDuringFire) | `EVENT_CHANGED_DURING_FIRE` |
//! | [`RecursiveFire`](EventError::RecursiveFire) | `EVENT_RECURSIVE_FIRE` |
//! | [`BadSender`](EventError::BadSender) | `EVENT_BAD_SENDER` |
//! | [`HandlerNotFound`](EventError::HandlerNotFound) | `EVENT_HANDLER_NOT_FOUND` |
//! | [`IdSpaceExhausted`](EventError::IdSpaceExhausted) | `EVENT_ID_SPACE_EXHAUSTED` |

use crate::EventMode;
use thiserror::Error;
use uiev_types::{ErrorCode, HandlerId};

/// Programmer error detected by an [`Event`](crate::Event).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The options were built for a different registry layout.
    #[error("EventOptions version mismatch: expected {expected}, found {found}")]
    OptionsVersionMismatch {
        /// Version this build understands.
        expected: u32,
        /// Version carried by the caller's options.
        found: u32,
    },

    /// A structural change was attempted while the event was firing.
    #[error("{operation}: cannot change an event while it is firing")]
    ChangedDuringFire {
        /// Operation that was rejected.
        operation: &'static str,
    },

    /// `fire` was called from inside a handler of the same event.
    #[error("fire: event is already firing (recursive fire)")]
    RecursiveFire,

    /// The sender shape does not match the event's mode.
    #[error("{operation}: {mode} event requires {}", expected_sender(.mode))]
    BadSender {
        /// Operation that was rejected.
        operation: &'static str,
        /// Mode of the event the call was made on.
        mode: EventMode,
    },

    /// No handler with this id is registered.
    #[error("{operation}: {id} not found")]
    HandlerNotFound {
        /// The id that was looked up.
        id: HandlerId,
        /// Operation that was rejected.
        operation: &'static str,
    },

    /// Every positive `u32` is already in use.
    #[error("add_handler: handler id space exhausted")]
    IdSpaceExhausted,
}

fn expected_sender(mode: &EventMode) -> &'static str {
    match mode {
        EventMode::Global => "no sender",
        EventMode::SenderScoped => "a sender",
    }
}

impl ErrorCode for EventError {
    fn code(&self) -> &'static str {
        match self {
            Self::OptionsVersionMismatch { .. } => "EVENT_OPTIONS_VERSION",
            Self::ChangedDuringFire { .. } => "EVENT_CHANGED_DURING_FIRE",
            Self::RecursiveFire => "EVENT_RECURSIVE_FIRE",
            Self::BadSender { .. } => "EVENT_BAD_SENDER",
            Self::HandlerNotFound { .. } => "EVENT_HANDLER_NOT_FOUND",
            Self::IdSpaceExhausted => "EVENT_ID_SPACE_EXHAUSTED",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
