//! # Publisher - per-subject registry and synchronous fan-out.
//!
//! [`Publisher`] keeps, for each [`Subject`], an ordered sequence of shared
//! subscriber handles and delivers events to them on the caller's thread.
//!
//! ## Architecture
//! ```text
//! subscribe(subject, sub) ──► RwLock<Registry> ──► append (dedup by address)
//! unsubscribe(subject, sub) ─► RwLock<Registry> ──► remove one occurrence
//!
//! notify(subject, &event)
//!     ├─► read lock ─► clone sequence (snapshot) ─► release lock
//!     └─► for sub in snapshot: sub.next(&event)   (insertion order)
//! ```
//!
//! ## Rules
//! - **Soft errors**: duplicate subscribe / unknown unsubscribe are logged and
//!   leave the registry untouched; `subscribe` / `unsubscribe` return `false`.
//! - **Snapshot delivery**: a pass iterates the sequence as it was when `notify`
//!   started. A subscriber removed mid-pass (e.g. by its own `complete`) still
//!   finishes the current pass if it had not been reached yet; one added
//!   mid-pass is first reached by the next `notify`.
//! - **No lock across callbacks**: subscribers may re-enter the publisher. A
//!   [`Subscriber`](crate::Subscriber) reached again from inside its own
//!   callback skips that delivery instead of blocking.
//! - `notify` on a subject nobody subscribed to is a silent no-op.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::registry::Registry;
use crate::error::SubscriptionError;
use crate::events::{EventData, Subject};
use crate::subscribers::Subscribe;

/// Fan-out dispatcher for named subjects.
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
pub struct Publisher<T> {
    registry: RwLock<Registry<T>>,
}

impl<T> Publisher<T> {
    /// Creates a publisher with no subjects.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
        }
    }

    /// Registers `subscriber` for `subject`.
    ///
    /// Returns `false` (and logs at error level) if it was already registered.
    pub fn subscribe(&self, subject: Subject, subscriber: Arc<dyn Subscribe<T>>) -> bool {
        match self.try_subscribe(subject, subscriber) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    subject = %subject,
                    label = err.as_label(),
                    "{}: {err}",
                    err.as_message()
                );
                false
            }
        }
    }

    /// Registers `subscriber` for `subject`, handing back the soft error instead of logging it.
    pub fn try_subscribe(
        &self,
        subject: Subject,
        subscriber: Arc<dyn Subscribe<T>>,
    ) -> Result<(), SubscriptionError> {
        let name = subscriber.name().to_string();
        self.write().insert(subject, subscriber)?;
        tracing::debug!(subject = %subject, subscriber = %name, "subscribed");
        Ok(())
    }

    /// Removes one registration of `subscriber` from `subject`.
    ///
    /// Returns `false` (and logs at warn level) if the subscriber was not
    /// registered there. Other subjects are never touched.
    pub fn unsubscribe(&self, subject: Subject, subscriber: &dyn Subscribe<T>) -> bool {
        match self.try_unsubscribe(subject, subscriber) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    subject = %subject,
                    label = err.as_label(),
                    "{}: {err}",
                    err.as_message()
                );
                false
            }
        }
    }

    /// Removes one registration of `subscriber` from `subject`, handing back the soft error.
    pub fn try_unsubscribe(
        &self,
        subject: Subject,
        subscriber: &dyn Subscribe<T>,
    ) -> Result<(), SubscriptionError> {
        // Drop the removed handle after the lock is released.
        let removed = self.write().remove(subject, subscriber)?;
        tracing::info!(
            subject = %subject,
            subscriber = removed.name(),
            "unsubscribing: {} from {subject}",
            removed.name()
        );
        Ok(())
    }

    /// Delivers `event` to every subscriber of `subject`, in subscription order.
    ///
    /// Runs synchronously; returns after the last `next` returns.
    pub fn notify(&self, subject: Subject, event: &EventData<T>) {
        let Some(snapshot) = self.read().snapshot(subject) else {
            return;
        };

        tracing::debug!(
            subject = %subject,
            kind = event.kind(),
            subscribers = snapshot.len(),
            "notify"
        );
        for subscriber in &snapshot {
            subscriber.next(event);
        }
    }

    /// Number of subscribers currently registered for `subject`.
    pub fn subscriber_count(&self, subject: Subject) -> usize {
        self.read().len(subject)
    }

    /// Returns `true` if `subscriber` is currently registered for `subject`.
    pub fn is_subscribed(&self, subject: Subject, subscriber: &dyn Subscribe<T>) -> bool {
        self.read().contains(subject, subscriber)
    }

    /// Subjects that have ever been subscribed to (their sequence may be empty now).
    pub fn subjects(&self) -> Vec<Subject> {
        self.read().subjects()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<T>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<T>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Weak, mpsc};
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::subscribers::Subscriber;

    type Journal = Arc<Mutex<Vec<String>>>;

    /// Subscriber that appends `"<name>:<payload>"` to a shared journal.
    fn journaling(name: &'static str, journal: &Journal) -> Arc<Subscriber<u32, u32>> {
        let journal = Arc::clone(journal);
        Subscriber::builder(name, 0u32)
            .on_next(move |scope, ev: &EventData<u32>| {
                *scope.state_mut() += 1;
                let line = format!("{}:{}", scope.name(), ev.payload);
                journal.lock().unwrap().push(line);
            })
            .build()
    }

    fn event(n: u32) -> EventData<u32> {
        EventData::new("n", n)
    }

    #[derive(Debug, Default)]
    struct CounterState {
        count: u32,
        limit: u32,
    }

    fn counter(publisher: &Arc<Publisher<u32>>, limit: u32) -> Arc<Subscriber<CounterState, u32>> {
        let weak: Weak<Publisher<u32>> = Arc::downgrade(publisher);
        Subscriber::builder("counter", CounterState { count: 0, limit })
            .on_next(|scope, _ev: &EventData<u32>| {
                scope.state_mut().count += 1;
                if scope.state().count >= scope.state().limit {
                    scope.complete(Subject::Sports);
                }
            })
            .on_complete(move |scope, subject| {
                if let Some(publisher) = weak.upgrade() {
                    scope.unsubscribe_from_publisher(&publisher, subject);
                }
            })
            .build()
    }

    #[test]
    fn test_notify_without_subscribers_is_noop() {
        let publisher: Publisher<u32> = Publisher::new();
        publisher.notify(Subject::Sports, &event(1));
        assert!(publisher.subjects().is_empty());
        assert_eq!(publisher.subscriber_count(Subject::Sports), 0);
    }

    #[test]
    fn test_duplicate_subscribe_leaves_length_unchanged() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);

        assert!(publisher.subscribe(Subject::Sports, a.clone()));
        assert!(!publisher.subscribe(Subject::Sports, a.clone()));
        assert_eq!(publisher.subscriber_count(Subject::Sports), 1);

        let err = publisher.try_subscribe(Subject::Sports, a.clone()).unwrap_err();
        assert_eq!(
            err,
            SubscriptionError::DuplicateSubscription {
                subject: Subject::Sports,
                subscriber: "a".into(),
            }
        );

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(*a.state(), 1);
    }

    #[test]
    fn test_delivery_follows_insertion_order() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);
        let b = journaling("b", &journal);

        publisher.subscribe(Subject::Sports, a.clone());
        publisher.subscribe(Subject::Sports, b.clone());
        publisher.notify(Subject::Sports, &event(7));

        assert_eq!(*journal.lock().unwrap(), vec!["a:7", "b:7"]);
    }

    #[test]
    fn test_unsubscribe_non_member_touches_nothing() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);
        let b = journaling("b", &journal);
        publisher.subscribe(Subject::Sports, a.clone());
        publisher.subscribe(Subject::Politics, a.clone());

        assert!(!publisher.unsubscribe(Subject::Sports, &*b));
        assert!(!publisher.unsubscribe(Subject::Politics, &*b));

        let err = publisher.try_unsubscribe(Subject::Politics, &*b).unwrap_err();
        assert_eq!(err.as_label(), "unknown_subscriber");
        assert!(publisher.is_subscribed(Subject::Sports, &*a));
        assert!(publisher.is_subscribed(Subject::Politics, &*a));
        assert_eq!(publisher.subscriber_count(Subject::Sports), 1);
        assert_eq!(publisher.subscriber_count(Subject::Politics), 1);
    }

    #[test]
    fn test_unsubscribe_from_unknown_subject() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);

        assert!(!publisher.unsubscribe(Subject::Politics, &*a));
        assert!(publisher.subjects().is_empty());
    }

    #[test]
    fn test_unsubscribed_does_not_receive() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);
        let b = journaling("b", &journal);
        publisher.subscribe(Subject::Sports, a.clone());
        publisher.subscribe(Subject::Sports, b.clone());

        assert!(publisher.unsubscribe(Subject::Sports, &*a));
        publisher.notify(Subject::Sports, &event(3));

        assert_eq!(*journal.lock().unwrap(), vec!["b:3"]);
        assert_eq!(*a.state(), 0);
    }

    #[test]
    fn test_counter_completes_at_limit() {
        let publisher = Arc::new(Publisher::<u32>::new());
        let c = counter(&publisher, 2);
        publisher.subscribe(Subject::Sports, c.clone());

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(c.state().count, 1);
        assert!(publisher.is_subscribed(Subject::Sports, &*c));

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(c.state().count, 2);
        assert!(!publisher.is_subscribed(Subject::Sports, &*c));

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(c.state().count, 2);
    }

    #[test]
    fn test_subjects_are_isolated() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let fan = journaling("fan", &journal);
        let analyst = journaling("analyst", &journal);
        publisher.subscribe(Subject::Sports, fan.clone());
        publisher.subscribe(Subject::Politics, analyst.clone());

        publisher.notify(Subject::Politics, &event(5));

        assert_eq!(*journal.lock().unwrap(), vec!["analyst:5"]);
        assert_eq!(*fan.state(), 0);
    }

    #[test]
    fn test_self_unsubscribe_mid_pass_keeps_snapshot() {
        // First subscriber completes on its first event; the second must still
        // be reached in the same pass, and the first must not be reached again.
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::<u32>::new());
        let first = counter(&publisher, 1);
        let second = journaling("second", &journal);
        publisher.subscribe(Subject::Sports, first.clone());
        publisher.subscribe(Subject::Sports, second.clone());

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(first.state().count, 1);
        assert_eq!(*second.state(), 1);
        assert_eq!(publisher.subscriber_count(Subject::Sports), 1);

        publisher.notify(Subject::Sports, &event(2));
        assert_eq!(first.state().count, 1);
        assert_eq!(*journal.lock().unwrap(), vec!["second:1", "second:2"]);
    }

    #[test]
    fn test_removal_of_later_subscriber_mid_pass_still_delivers() {
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::<u32>::new());
        let victim = journaling("victim", &journal);

        let weak = Arc::downgrade(&publisher);
        let target = victim.clone();
        let remover = Subscriber::builder("remover", ())
            .on_next(move |_scope, _ev: &EventData<u32>| {
                if let Some(publisher) = weak.upgrade() {
                    publisher.unsubscribe(Subject::Sports, &*target);
                }
            })
            .build();

        publisher.subscribe(Subject::Sports, remover.clone());
        publisher.subscribe(Subject::Sports, victim.clone());

        publisher.notify(Subject::Sports, &event(1));
        assert_eq!(*journal.lock().unwrap(), vec!["victim:1"]);

        publisher.notify(Subject::Sports, &event(2));
        assert_eq!(*journal.lock().unwrap(), vec!["victim:1"]);
    }

    #[test]
    fn test_subscribe_mid_pass_waits_for_next_pass() {
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::<u32>::new());
        let late = journaling("late", &journal);

        let weak = Arc::downgrade(&publisher);
        let joiner_target = late.clone();
        let joiner = Subscriber::builder("joiner", ())
            .on_next(move |_scope, _ev: &EventData<u32>| {
                if let Some(publisher) = weak.upgrade() {
                    publisher.subscribe(Subject::Sports, joiner_target.clone());
                }
            })
            .build();
        publisher.subscribe(Subject::Sports, joiner.clone());

        publisher.notify(Subject::Sports, &event(1));
        assert!(journal.lock().unwrap().is_empty());

        publisher.notify(Subject::Sports, &event(2));
        assert_eq!(*journal.lock().unwrap(), vec!["late:2"]);
    }

    #[test]
    fn test_reentrant_notify_does_not_deadlock() {
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::<u32>::new());
        let reader = journaling("reader", &journal);

        let weak = Arc::downgrade(&publisher);
        let relay = Subscriber::builder("relay", Vec::<u32>::new())
            .on_next(move |scope, ev: &EventData<u32>| {
                scope.state_mut().push(ev.payload);
                if let Some(publisher) = weak.upgrade() {
                    publisher.notify(Subject::Politics, &event(ev.payload + 100));
                }
            })
            .build();
        publisher.subscribe(Subject::Sports, relay.clone());
        publisher.subscribe(Subject::Politics, relay.clone());
        publisher.subscribe(Subject::Politics, reader.clone());

        let (done_tx, done_rx) = mpsc::channel();
        let worker = {
            let publisher = Arc::clone(&publisher);
            thread::spawn(move || {
                publisher.notify(Subject::Sports, &event(1));
                done_tx.send(()).unwrap();
            })
        };
        done_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("notify returned");
        worker.join().unwrap();

        assert_eq!(*relay.state(), vec![1]);
        assert_eq!(*journal.lock().unwrap(), vec!["reader:101"]);

        // A direct politics pass reaches the relay; its nested pass skips it again.
        publisher.notify(Subject::Politics, &event(2));
        assert_eq!(*relay.state(), vec![1, 2]);
        assert_eq!(
            *journal.lock().unwrap(),
            vec!["reader:101", "reader:102", "reader:2"]
        );
    }

    #[test]
    fn test_resubscribe_after_unsubscribe() {
        let journal = Journal::default();
        let publisher: Publisher<u32> = Publisher::new();
        let a = journaling("a", &journal);

        publisher.subscribe(Subject::Sports, a.clone());
        publisher.unsubscribe(Subject::Sports, &*a);
        assert!(publisher.subscribe(Subject::Sports, a.clone()));

        publisher.notify(Subject::Sports, &event(9));
        assert_eq!(*journal.lock().unwrap(), vec!["a:9"]);
    }
}
