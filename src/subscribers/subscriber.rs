//! # Callback-backed subscriber (`Subscriber`)
//!
//! [`Subscriber`] bundles a name, private mutable state and three callbacks
//! (`next`, `error`, `complete`). Every callback receives a [`Scope`]: an explicit
//! handle to the owning subscriber plus `&mut` access to its state. This is what
//! lets `on_next` call `scope.complete(..)`, and `on_complete` call
//! `scope.unsubscribe_from_publisher(..)`, without any implicit self-binding.
//!
//! ## Lifecycle
//! ```text
//! build() ──► subscribe(subject) ──► next() ... next() ──► complete(subject)
//!                   ▲                                          │
//!                   └──────── may subscribe again ◄── unsubscribe(subject)
//! ```
//!
//! ## Locking and re-entry
//! State lives behind a `Mutex`, held for the whole callback. A callback that
//! calls `complete` / `error` through its `Scope` reuses the held state.
//!
//! A signal that reaches the subscriber again on the thread already running one
//! of its callbacks (e.g. `on_next` notifies another subject this subscriber is
//! also registered on) is skipped and logged at warn level. Signals from other
//! threads wait for the running callback to finish.
//! ```text
//! relay.next(sports) ── holds state
//!     └─► notify(politics) ─► relay.next(politics) ─► skipped (warn)
//!                          └► other subscribers      ─► delivered
//! ```
//!
//! ## Example
//! ```rust
//! use newsvisor::{EventData, Publisher, Subject, Subscriber};
//!
//! let publisher = std::sync::Arc::new(Publisher::<u32>::new());
//! let weak = std::sync::Arc::downgrade(&publisher);
//!
//! let counter = Subscriber::builder("counter", 0u32)
//!     .on_next(|scope, ev: &EventData<u32>| {
//!         *scope.state_mut() += ev.payload;
//!         if *scope.state() >= 2 {
//!             scope.complete(Subject::Sports);
//!         }
//!     })
//!     .on_complete(move |scope, subject| {
//!         if let Some(publisher) = weak.upgrade() {
//!             scope.unsubscribe_from_publisher(&publisher, subject);
//!         }
//!     })
//!     .build();
//!
//! publisher.subscribe(Subject::Sports, counter.clone());
//! publisher.notify(Subject::Sports, &EventData::new("x", 1));
//! publisher.notify(Subject::Sports, &EventData::new("x", 1));
//! publisher.notify(Subject::Sports, &EventData::new("x", 1));
//!
//! assert_eq!(*counter.state(), 2);
//! assert!(!publisher.is_subscribed(Subject::Sports, &*counter));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread::{self, ThreadId};

use crate::core::Publisher;
use crate::error::ObserverError;
use crate::events::{EventData, Subject};
use crate::subscribers::Subscribe;

type NextFn<S, T> = Box<dyn Fn(&mut Scope<'_, S, T>, &EventData<T>) + Send + Sync>;
type ErrorFn<S, T> = Box<dyn Fn(&mut Scope<'_, S, T>, &ObserverError) + Send + Sync>;
type CompleteFn<S, T> = Box<dyn Fn(&mut Scope<'_, S, T>, Subject) + Send + Sync>;

/// Subscriber whose behaviour is supplied as closures.
///
/// Build with [`Subscriber::builder`]. Share via the returned `Arc`; the
/// publisher keeps clones of it, never the state itself.
pub struct Subscriber<S, T> {
    name: Cow<'static, str>,
    state: Mutex<S>,
    /// Thread currently running a callback, if any.
    running: Mutex<Option<ThreadId>>,
    on_next: NextFn<S, T>,
    on_error: ErrorFn<S, T>,
    on_complete: CompleteFn<S, T>,
}

impl<S, T> Subscriber<S, T> {
    /// Starts building a subscriber named `name` with `initial_state`.
    ///
    /// Unset callbacks default to: `next` no-op, `error` logs at error level,
    /// `complete` no-op.
    pub fn builder(
        name: impl Into<Cow<'static, str>>,
        initial_state: S,
    ) -> SubscriberBuilder<S, T> {
        SubscriberBuilder {
            name: name.into(),
            state: initial_state,
            on_next: None,
            on_error: None,
            on_complete: None,
        }
    }

    /// Locks and returns the subscriber state.
    ///
    /// Do not hold the guard across a `notify` that reaches this subscriber;
    /// delivery from the same thread would block on it.
    pub fn state(&self) -> MutexGuard<'_, S> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with a fresh [`Scope`] over the locked state.
    ///
    /// Skips `f` (returning `None`) when this thread is already inside one of
    /// the subscriber's callbacks.
    fn with_scope<R>(
        &self,
        signal: &'static str,
        f: impl FnOnce(&mut Scope<'_, S, T>) -> R,
    ) -> Option<R> {
        let mut guard = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) if self.is_running_here() => {
                tracing::warn!(
                    subscriber = %self.name,
                    signal,
                    "re-entrant delivery skipped"
                );
                return None;
            }
            Err(TryLockError::WouldBlock) => self.state(),
        };

        let _running = Running::enter(&self.running);
        let mut scope = Scope {
            subscriber: self,
            state: &mut *guard,
        };
        Some(f(&mut scope))
    }

    fn is_running_here(&self) -> bool {
        let running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        *running == Some(thread::current().id())
    }
}

impl<S: Send, T> Subscriber<S, T> {
    /// Removes this subscriber from `subject` on `publisher`.
    ///
    /// Shorthand for `publisher.unsubscribe(subject, self)`; returns whether the
    /// registry changed.
    pub fn unsubscribe_from_publisher(&self, publisher: &Publisher<T>, subject: Subject) -> bool {
        publisher.unsubscribe(subject, self)
    }
}

impl<S: Send, T> Subscribe<T> for Subscriber<S, T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next(&self, event: &EventData<T>) {
        self.with_scope("next", |scope| (self.on_next)(scope, event));
    }

    fn error(&self, err: &ObserverError) {
        self.with_scope("error", |scope| (self.on_error)(scope, err));
    }

    fn complete(&self, subject: Subject) {
        self.with_scope("complete", |scope| (self.on_complete)(scope, subject));
    }
}

/// Marks the current thread as running a callback until dropped.
struct Running<'a>(&'a Mutex<Option<ThreadId>>);

impl<'a> Running<'a> {
    fn enter(slot: &'a Mutex<Option<ThreadId>>) -> Self {
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(thread::current().id());
        Self(slot)
    }
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Subscriber<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Subscriber");
        d.field("name", &self.name);
        match self.state.try_lock() {
            Ok(state) => d.field("state", &*state),
            Err(_) => d.field("state", &"<locked>"),
        };
        d.finish_non_exhaustive()
    }
}

/// Handle passed to every [`Subscriber`] callback.
///
/// Gives the callback its owning subscriber's name, mutable state and the
/// `complete` / `error` / `unsubscribe_from_publisher` operations.
pub struct Scope<'a, S, T> {
    subscriber: &'a Subscriber<S, T>,
    state: &'a mut S,
}

impl<'a, S, T> Scope<'a, S, T> {
    /// Name of the owning subscriber.
    #[inline]
    pub fn name(&self) -> &str {
        &self.subscriber.name
    }

    #[inline]
    pub fn state(&self) -> &S {
        &*self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut *self.state
    }

    /// Runs the subscriber's `complete` callback for `subject` with this scope.
    pub fn complete(&mut self, subject: Subject) {
        let subscriber = self.subscriber;
        (subscriber.on_complete)(self, subject);
    }

    /// Runs the subscriber's `error` callback with this scope.
    pub fn error(&mut self, err: &ObserverError) {
        let subscriber = self.subscriber;
        (subscriber.on_error)(self, err);
    }
}

impl<'a, S: Send, T> Scope<'a, S, T> {
    /// Removes the owning subscriber from `subject` on `publisher`.
    pub fn unsubscribe_from_publisher(&self, publisher: &Publisher<T>, subject: Subject) -> bool {
        self.subscriber.unsubscribe_from_publisher(publisher, subject)
    }
}

/// Builder for [`Subscriber`]; see [`Subscriber::builder`].
pub struct SubscriberBuilder<S, T> {
    name: Cow<'static, str>,
    state: S,
    on_next: Option<NextFn<S, T>>,
    on_error: Option<ErrorFn<S, T>>,
    on_complete: Option<CompleteFn<S, T>>,
}

impl<S, T> SubscriberBuilder<S, T> {
    /// Sets the per-event callback.
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Scope<'_, S, T>, &EventData<T>) + Send + Sync + 'static,
    {
        self.on_next = Some(Box::new(f));
        self
    }

    /// Sets the failure callback.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Scope<'_, S, T>, &ObserverError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Scope<'_, S, T>, Subject) + Send + Sync + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Finishes the subscriber and returns it as a shared handle.
    pub fn build(self) -> Arc<Subscriber<S, T>>
    where
        S: 'static,
        T: 'static,
    {
        let on_next: NextFn<S, T> = match self.on_next {
            Some(f) => f,
            None => Box::new(ignore_next::<S, T>),
        };
        let on_error: ErrorFn<S, T> = match self.on_error {
            Some(f) => f,
            None => Box::new(log_error::<S, T>),
        };
        let on_complete: CompleteFn<S, T> = match self.on_complete {
            Some(f) => f,
            None => Box::new(ignore_complete::<S, T>),
        };

        Arc::new(Subscriber {
            name: self.name,
            state: Mutex::new(self.state),
            running: Mutex::new(None),
            on_next,
            on_error,
            on_complete,
        })
    }
}

fn ignore_next<S, T>(_: &mut Scope<'_, S, T>, _: &EventData<T>) {}

fn ignore_complete<S, T>(_: &mut Scope<'_, S, T>, _: Subject) {}

fn log_error<S, T>(scope: &mut Scope<'_, S, T>, err: &ObserverError) {
    tracing::error!(
        subscriber = scope.name(),
        label = err.as_label(),
        "subscriber error: {err}"
    );
}
