//! Input debouncing
//!
//! A value only settles after the input has been quiet for the quiescence
//! window. Every new value re-arms the deadline and replaces whatever was
//! pending, so at most one value is ever waiting to be evaluated.
//!
//! Time is passed in rather than read, which keeps the event loop in charge
//! of the clock and makes the behaviour testable without sleeping.

use std::time::{Duration, Instant};

/// Default quiescence window for search input
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
    settled: T,
}

impl<T: Clone + Default> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            settled: T::default(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a new raw value and re-arm the deadline
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Settle the pending value if its deadline has passed.
    ///
    /// Returns the newly settled value exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((value, deadline)) if now >= deadline => {
                self.settled = value.clone();
                Some(value)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// When the pending value is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without settling it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancel and forget the settled value too
    pub fn reset(&mut self) {
        self.pending = None;
        self.settled = T::default();
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }
}

impl<T: Clone + Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}
