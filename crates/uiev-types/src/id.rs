//! Identifier types.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use uuid::Uuid;

/// Identifier of a handler registered on an event.
///
/// Handler ids are positive and unique among the handlers currently
/// registered on one event. Zero is not representable, so "no handler"
/// is always expressed as `None` or an error rather than a sentinel.
///
/// Ids freed by removal are handed out again, so an id only identifies
/// a registration for as long as that registration is alive.
///
/// # Example
///
/// ```
/// use uiev_types::HandlerId;
///
/// let first = HandlerId::FIRST;
/// assert_eq!(first.get(), 1);
/// assert_eq!(first.next().map(HandlerId::get), Some(2));
/// assert!(HandlerId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandlerId(NonZeroU32);

impl HandlerId {
    /// The id given to the first handler of an empty event.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Wraps a raw id, returning `None` for zero.
    #[must_use]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Returns the raw positive value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following id, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handler:{}", self.0)
    }
}

/// Opaque identity of an object that emits events.
///
/// Sender-scoped events deliver a fire only to handlers registered with
/// an equal sender, so one event can serve many emitters (for example one
/// "clicked" event shared by every button).
///
/// ```
/// use uiev_types::SenderId;
///
/// let ok_button = SenderId::new();
/// let cancel_button = SenderId::new();
/// assert_ne!(ok_button, cancel_button);
/// let same = ok_button;
/// assert_eq!(ok_button, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderId(pub Uuid);

impl SenderId {
    /// Creates a fresh identity backed by a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SenderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sender:{}", self.0)
    }
}
