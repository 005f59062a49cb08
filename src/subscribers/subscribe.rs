//! # Subscriber trait.
//!
//! Provides [`Subscribe`], the seam between a [`Publisher`](crate::Publisher)
//! and whatever reacts to its notifications.
//!
//! ## Rules
//! - `next` is called synchronously from inside `Publisher::notify`, on the
//!   caller's thread, once per registered subject the event was published on.
//! - `error` and `complete` are **never** called by the publisher; they are
//!   signals for the subscriber's own logic or an external collaborator.
//! - Identity is the address of the subscriber value, not its name. Two
//!   subscribers with the same name are distinct.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use newsvisor::{EventData, ObserverError, Publisher, Subject, Subscribe};
//!
//! struct Counter(AtomicUsize);
//!
//! impl Subscribe<u32> for Counter {
//!     fn name(&self) -> &str { "counter" }
//!     fn next(&self, _event: &EventData<u32>) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!     fn error(&self, _err: &ObserverError) {}
//!     fn complete(&self, _subject: Subject) {}
//! }
//!
//! let publisher: Publisher<u32> = Publisher::new();
//! let counter = Arc::new(Counter(AtomicUsize::new(0)));
//! publisher.subscribe(Subject::Sports, counter.clone());
//! publisher.notify(Subject::Sports, &EventData::new("tick", 1));
//! assert_eq!(counter.0.load(Ordering::Relaxed), 1);
//! ```

use crate::error::ObserverError;
use crate::events::{EventData, Subject};

/// Receiver of notifications for one or more subjects.
///
/// ### Implementation requirements
/// - Do not block; `notify` waits for every `next` to return.
/// - Calling back into the publisher (`subscribe` / `unsubscribe` / `notify`)
///   from `next` is allowed. A `notify` that reaches this same subscriber again
///   runs `next` re-entrantly on the same thread; implementations guard their
///   own state accordingly ([`Subscriber`](crate::Subscriber) skips such calls).
pub trait Subscribe<T>: Send + Sync {
    /// Returns the subscriber name used in logs.
    ///
    /// Names need not be unique.
    fn name(&self) -> &str;

    /// Handles one published event.
    fn next(&self, event: &EventData<T>);

    /// Handles a failure reported by a caller.
    fn error(&self, err: &ObserverError);

    /// Signals that the stream for `subject` is finished for this subscriber.
    fn complete(&self, subject: Subject);
}

/// Returns `true` if both references point at the same subscriber value.
///
/// Compares data addresses only; vtable pointers are ignored.
#[inline]
pub(crate) fn same_subscriber<T>(a: &dyn Subscribe<T>, b: &dyn Subscribe<T>) -> bool {
    std::ptr::addr_eq(a, b)
}
