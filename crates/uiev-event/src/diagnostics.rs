//! Reporting channel for contract violations.
//!
//! An [`Event`](crate::Event) never decides how loudly a misuse should
//! surface. It hands every [`EventError`] to its [`Diagnostics`] sink and
//! then returns the error to the caller.

use crate::EventError;
use uiev_types::ErrorCode;

/// Sink for programmer errors detected by an event.
///
/// Implementations may log, panic, or record. `report` is called exactly
/// once per rejected operation, before the operation returns.
pub trait Diagnostics {
    /// Reports a contract violation.
    fn report(&self, violation: &EventError);
}

/// Logs each violation at `ERROR` level through `tracing`.
///
/// This is the sink used by [`Event::new`](crate::Event::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, violation: &EventError) {
        tracing::error!(code = violation.code(), "programmer error: {violation}");
    }
}

/// Panics on the first violation.
///
/// Gives the fail-fast behaviour of a toolkit that aborts on misuse.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicDiagnostics;

impl Diagnostics for PanicDiagnostics {
    fn report(&self, violation: &EventError) {
        panic!("programmer error [{}]: {violation}", violation.code());
    }
}
