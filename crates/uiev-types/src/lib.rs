//! Core types for uiev.
//!
//! This crate holds the vocabulary shared by every uiev layer:
//!
//! - [`HandlerId`]: positive identifier of a registered handler
//! - [`SenderId`]: opaque identity of an event emitter
//! - [`ErrorCode`]: machine-readable error classification
//!
//! It has no knowledge of the registry itself; see `uiev-event`.

mod error;
mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{HandlerId, SenderId};
