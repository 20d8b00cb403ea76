//! Event registry: handler storage, id allocation and dispatch.
//!
//! Handlers live in a vector kept sorted by [`HandlerId`], so lookups are
//! binary searches and dispatch order is ascending id order. Ids freed by
//! removal go to a spare pool and are reused before new ids are minted.
//!
//! # Reentrancy
//!
//! Every operation takes `&self`, so a handler may hold an
//! `Rc<Event<..>>` and call back into the event it is running under.
//! While a fire is in progress the event rejects `add_handler`,
//! `delete_handler`, `set_handler_blocked` and a nested `fire` with an
//! [`EventError`]. Read-only queries stay available.

use crate::{Diagnostics, EventError, EventMode, EventOptions, RegistryConfig, TracingDiagnostics};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};
use uiev_types::{HandlerId, SenderId};

/// Number of slots added whenever handler or spare-id storage is full.
pub const GROW_CHUNK: usize = 32;

type Callback<A, D, S> = Box<dyn Fn(Option<&S>, &A, &D)>;

/// A registered handler.
struct Handler<A, D, S> {
    id: HandlerId,
    callback: Callback<A, D, S>,
    /// `None` iff the event is global.
    sender: Option<S>,
    data: D,
    blocked: bool,
}

struct Slots<A, D, S> {
    /// Sorted ascending by id, ids unique.
    handlers: Vec<Handler<A, D, S>>,
    spare_ids: Vec<HandlerId>,
}

impl<A, D, S> Slots<A, D, S> {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            spare_ids: Vec::new(),
        }
    }

    /// Takes the id for the next registration.
    ///
    /// Spare ids are reused most-recently-freed first. With no spare ids
    /// every minted id is live, so `last + 1` is the lowest unused
    /// positive id. Returns `None`, leaving state untouched, on overflow.
    fn take_next_id(&mut self) -> Option<HandlerId> {
        if let Some(id) = self.spare_ids.pop() {
            return Some(id);
        }
        match self.handlers.last() {
            Some(last) => last.id.next(),
            None => Some(HandlerId::FIRST),
        }
    }

    fn find(&self, id: HandlerId) -> Option<usize> {
        self.handlers.binary_search_by_key(&id, |h| h.id).ok()
    }
}

fn reserve_chunk<T>(storage: &mut Vec<T>) {
    if storage.len() == storage.capacity() {
        storage.reserve_exact(GROW_CHUNK);
    }
}

/// Clears the firing flag when dropped, including on unwind.
struct FiringGuard<'a>(&'a Cell<bool>);

impl<'a> FiringGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for FiringGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// One kind of event exposed by a widget, with its registered handlers.
///
/// - `A`: argument passed to every handler on fire
/// - `D`: per-handler user data, handed back to that handler's callback
/// - `S`: sender identity, compared with `==`
///
/// A global event is registered and fired with `None` as the sender. A
/// sender-scoped event requires `Some(sender)` everywhere and delivers a
/// fire only to handlers registered with an equal sender.
///
/// The type is neither `Send` nor `Sync`; it belongs to one thread.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use uiev_event::{Event, EventOptions, SenderId};
///
/// let clicked: Event<()> = Event::new(&EventOptions::sender_scoped())?;
/// let button = SenderId::new();
/// let clicks = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&clicks);
/// let id = clicked.add_handler(move |_, _, _| counter.set(counter.get() + 1), Some(button), ())?;
///
/// clicked.fire(Some(&button), &())?;
/// clicked.fire(Some(&SenderId::new()), &())?;
/// assert_eq!(clicks.get(), 1);
///
/// clicked.delete_handler(id)?;
/// assert!(clicked.is_empty());
/// # Ok::<(), uiev_event::EventError>(())
/// ```
pub struct Event<A, D = (), S = SenderId> {
    options: EventOptions,
    slots: RefCell<Slots<A, D, S>>,
    firing: Cell<bool>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl<A, D, S: PartialEq> Event<A, D, S> {
    /// Creates an empty event that logs violations through `tracing`.
    ///
    /// # Errors
    ///
    /// [`EventError::OptionsVersionMismatch`] if `options.version` is not
    /// [`EventOptions::VERSION`].
    pub fn new(options: &EventOptions) -> Result<Self, EventError> {
        Self::with_diagnostics(options, Rc::new(TracingDiagnostics))
    }

    /// Creates an empty event reporting violations to `diagnostics`.
    ///
    /// # Errors
    ///
    /// See [`Event::new`].
    pub fn with_diagnostics(
        options: &EventOptions,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Result<Self, EventError> {
        if let Err(err) = options.check_version() {
            diagnostics.report(&err);
            return Err(err);
        }
        debug!(mode = %options.mode(), "event created");
        Ok(Self {
            options: *options,
            slots: RefCell::new(Slots::new()),
            firing: Cell::new(false),
            diagnostics,
        })
    }

    /// Creates an empty event from a loaded [`RegistryConfig`].
    ///
    /// # Errors
    ///
    /// See [`Event::new`].
    pub fn from_config(config: &RegistryConfig) -> Result<Self, EventError> {
        Self::with_diagnostics(&config.options, config.diagnostics.build())
    }

    /// Registers a handler and returns its id.
    ///
    /// `sender` must be `None` for a global event and `Some` otherwise.
    /// `data` is stored with the handler and passed to `callback` on
    /// every delivery.
    ///
    /// # Errors
    ///
    /// - [`EventError::ChangedDuringFire`] if called while firing
    /// - [`EventError::BadSender`] if `sender` does not match the mode
    /// - [`EventError::IdSpaceExhausted`] if no id is left
    pub fn add_handler<F>(
        &self,
        callback: F,
        sender: Option<S>,
        data: D,
    ) -> Result<HandlerId, EventError>
    where
        F: Fn(Option<&S>, &A, &D) + 'static,
    {
        const OP: &str = "add_handler";
        self.check_not_firing(OP)?;
        self.check_sender(sender.is_some(), OP)?;

        let mut slots = self.slots.borrow_mut();
        let Some(id) = slots.take_next_id() else {
            drop(slots);
            return Err(self.violation(EventError::IdSpaceExhausted));
        };

        reserve_chunk(&mut slots.handlers);
        let pos = slots.handlers.partition_point(|h| h.id < id);
        slots.handlers.insert(
            pos,
            Handler {
                id,
                callback: Box::new(callback),
                sender,
                data,
                blocked: false,
            },
        );
        debug!(%id, count = slots.handlers.len(), "handler added");
        Ok(id)
    }

    /// Removes a handler. Its id becomes available for reuse.
    ///
    /// # Errors
    ///
    /// - [`EventError::ChangedDuringFire`] if called while firing
    /// - [`EventError::HandlerNotFound`] if `id` is not registered
    pub fn delete_handler(&self, id: HandlerId) -> Result<(), EventError> {
        const OP: &str = "delete_handler";
        self.check_not_firing(OP)?;
        let index = self.find_index(id, OP)?;

        let mut slots = self.slots.borrow_mut();
        slots.handlers.remove(index);
        reserve_chunk(&mut slots.spare_ids);
        slots.spare_ids.push(id);
        debug!(%id, count = slots.handlers.len(), "handler deleted");
        Ok(())
    }

    /// Delivers `args` to every unblocked handler whose sender equals
    /// `sender`, in ascending id order, on the calling thread.
    ///
    /// Returns the number of callbacks invoked. A sender with no handlers
    /// is not an error.
    ///
    /// # Errors
    ///
    /// - [`EventError::RecursiveFire`] if this event is already firing
    /// - [`EventError::BadSender`] if `sender` does not match the mode
    pub fn fire(&self, sender: Option<&S>, args: &A) -> Result<usize, EventError> {
        if self.firing.get() {
            return Err(self.violation(EventError::RecursiveFire));
        }
        self.check_sender(sender.is_some(), "fire")?;

        let _guard = FiringGuard::enter(&self.firing);
        let slots = self.slots.borrow();
        let bound = slots.handlers.len();
        let mut delivered = 0;
        for handler in &slots.handlers[..bound] {
            if handler.blocked || handler.sender.as_ref() != sender {
                continue;
            }
            (handler.callback)(sender, args, &handler.data);
            delivered += 1;
        }
        trace!(delivered, registered = bound, "event fired");
        Ok(delivered)
    }

    /// Returns whether a handler is blocked. Allowed while firing.
    ///
    /// # Errors
    ///
    /// [`EventError::HandlerNotFound`] if `id` is not registered.
    pub fn is_handler_blocked(&self, id: HandlerId) -> Result<bool, EventError> {
        let index = self.find_index(id, "is_handler_blocked")?;
        Ok(self.slots.borrow().handlers[index].blocked)
    }

    /// Blocks or unblocks a handler. A blocked handler keeps its id and
    /// position but is skipped by [`fire`](Self::fire).
    ///
    /// # Errors
    ///
    /// - [`EventError::ChangedDuringFire`] if called while firing
    /// - [`EventError::HandlerNotFound`] if `id` is not registered
    pub fn set_handler_blocked(&self, id: HandlerId, blocked: bool) -> Result<(), EventError> {
        const OP: &str = "set_handler_blocked";
        self.check_not_firing(OP)?;
        let index = self.find_index(id, OP)?;

        self.slots.borrow_mut().handlers[index].blocked = blocked;
        debug!(%id, blocked, "handler block state changed");
        Ok(())
    }

    /// Returns `true` for a sender-less event.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.options.global
    }

    /// Returns the mode this event was created with.
    #[must_use]
    pub fn mode(&self) -> EventMode {
        self.options.mode()
    }

    /// Returns the options this event was created with.
    #[must_use]
    pub fn options(&self) -> &EventOptions {
        &self.options
    }

    /// Returns the number of registered handlers, blocked ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` is registered. Never reports a violation.
    #[must_use]
    pub fn contains(&self, id: HandlerId) -> bool {
        self.slots.borrow().find(id).is_some()
    }

    /// Returns the registered ids in ascending (dispatch) order.
    #[must_use]
    pub fn handler_ids(&self) -> Vec<HandlerId> {
        self.slots.borrow().handlers.iter().map(|h| h.id).collect()
    }

    /// Returns the number of freed ids waiting to be reused.
    #[must_use]
    pub fn spare_ids(&self) -> usize {
        self.slots.borrow().spare_ids.len()
    }

    /// Returns `true` while a [`fire`](Self::fire) is in progress.
    #[must_use]
    pub fn is_firing(&self) -> bool {
        self.firing.get()
    }

    fn find_index(&self, id: HandlerId, operation: &'static str) -> Result<usize, EventError> {
        let found = self.slots.borrow().find(id);
        found.ok_or_else(|| self.violation(EventError::HandlerNotFound { id, operation }))
    }

    fn check_not_firing(&self, operation: &'static str) -> Result<(), EventError> {
        if self.firing.get() {
            return Err(self.violation(EventError::ChangedDuringFire { operation }));
        }
        Ok(())
    }

    fn check_sender(&self, has_sender: bool, operation: &'static str) -> Result<(), EventError> {
        if has_sender == self.options.global {
            return Err(self.violation(EventError::BadSender {
                operation,
                mode: self.mode(),
            }));
        }
        Ok(())
    }

    fn violation(&self, err: EventError) -> EventError {
        self.diagnostics.report(&err);
        err
    }
}

impl<A, D, S> fmt::Debug for Event<A, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.try_borrow();
        f.debug_struct("Event")
            .field("mode", &self.options.mode())
            .field("handlers", &slots.as_ref().map(|s| s.handlers.len()).ok())
            .field("spare_ids", &slots.as_ref().map(|s| s.spare_ids.len()).ok())
            .field("firing", &self.firing.get())
            .finish()
    }
}
