//! Event registry for uiev widgets.
//!
//! A widget exposes one [`Event`] per kind of notification ("clicked",
//! "value changed", ...). Application code registers handler callbacks on
//! it, and the widget fires it when the notification happens.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  uiev-types : HandlerId, SenderId, ErrorCode                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  uiev-event : Event, EventOptions, Diagnostics  ◄── HERE    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Core Concepts
//!
//! ## Global and sender-scoped events
//!
//! A **global** event has no sender: handlers are registered and the
//! event is fired with `None`. A **sender-scoped** event requires a
//! sender on both sides, and a fire reaches only handlers registered for
//! that sender. One scoped event can therefore serve every button while
//! each handler only hears its own button.
//!
//! ## Handler ids
//!
//! [`Event::add_handler`] returns a [`HandlerId`]. The first id of an
//! empty event is 1; ids freed by [`Event::delete_handler`] are reused
//! before new ones are minted. Dispatch follows ascending id order.
//!
//! ## Blocking
//!
//! [`Event::set_handler_blocked`] mutes a handler without unregistering
//! it.
//!
//! ## Contract violations
//!
//! Misuse (wrong sender shape, unknown id, mutating or re-firing an
//! event from inside its own handlers, options from a different layout)
//! is a caller bug. The event reports it to its [`Diagnostics`] sink,
//! returns an [`EventError`], and changes nothing.
//!
//! | Sink | Behaviour |
//! |------|-----------|
//! | [`TracingDiagnostics`] | `tracing::error!` (default) |
//! | [`PanicDiagnostics`] | panic |
//! | [`testing::RecordingDiagnostics`] | record for assertions |
//!
//! # Concurrency
//!
//! Events are single-threaded (`!Send`, `!Sync`) and dispatch is
//! synchronous on the calling thread. Firing one event from a handler of
//! another is allowed.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use uiev_event::{Event, EventOptions, SenderId};
//!
//! // "value changed" carries the new value; each handler gets a label.
//! let changed: Event<i32, &str> = Event::new(&EventOptions::sender_scoped())?;
//! let slider = SenderId::new();
//! let spinbox = SenderId::new();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! for (sender, label) in [(slider, "slider"), (spinbox, "spinbox")] {
//!     let seen = Rc::clone(&seen);
//!     changed.add_handler(
//!         move |_, value, label| seen.borrow_mut().push((*label, *value)),
//!         Some(sender),
//!         label,
//!     )?;
//! }
//!
//! changed.fire(Some(&slider), &40)?;
//! assert_eq!(*seen.borrow(), vec![("slider", 40)]);
//! # Ok::<(), uiev_event::EventError>(())
//! ```

mod config;
mod diagnostics;
mod error;
mod options;
mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::{ConfigError, DiagnosticsPolicy, RegistryConfig};
pub use diagnostics::{Diagnostics, PanicDiagnostics, TracingDiagnostics};
pub use error::EventError;
pub use options::{EventMode, EventOptions};
pub use registry::{Event, GROW_CHUNK};

pub use uiev_types::{HandlerId, SenderId};
