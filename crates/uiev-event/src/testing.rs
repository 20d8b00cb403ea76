//! Test utilities for code that owns or fires events.

use crate::{Diagnostics, EventError};
use std::cell::RefCell;
use std::rc::Rc;
use uiev_types::ErrorCode;

/// A [`Diagnostics`] sink that records every violation.
///
/// Hand an `Rc` clone to [`Event::with_diagnostics`](crate::Event::with_diagnostics)
/// and keep the other to inspect what was reported.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: RefCell<Vec<EventError>>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every violation reported so far, oldest first.
    pub fn reports(&self) -> Vec<EventError> {
        self.reports.borrow().clone()
    }

    /// Returns the error codes of every violation, oldest first.
    pub fn codes(&self) -> Vec<&'static str> {
        self.reports.borrow().iter().map(ErrorCode::code).collect()
    }

    /// Returns the most recent violation.
    pub fn last(&self) -> Option<EventError> {
        self.reports.borrow().last().cloned()
    }

    /// Returns the number of violations reported.
    pub fn count(&self) -> usize {
        self.reports.borrow().len()
    }

    /// Forgets all recorded violations.
    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, violation: &EventError) {
        self.reports.borrow_mut().push(violation.clone());
    }
}

/// Shared, clonable log that handler closures append to.
///
/// Clones share the same storage, so a test keeps one handle and moves
/// the others into callbacks.
#[derive(Debug)]
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Appends an entry.
    pub fn record(&self, entry: T) {
        self.entries.borrow_mut().push(entry);
    }

    /// Removes and returns all entries.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> CallLog<T> {
    /// Returns a copy of all entries.
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
