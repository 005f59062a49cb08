//! # Subject registry - ordered subscriber sequences per subject.
//!
//! Plain data structure behind the [`Publisher`](super::Publisher) lock.
//! It never logs; the publisher decides how to report its results.
//!
//! ## Rules
//! - Sequences are created lazily on the first insert for a subject.
//! - Removing the last subscriber leaves an empty sequence in place.
//! - A subscriber (by address) appears at most once per sequence.
//! - Order within a sequence is insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SubscriptionError;
use crate::events::Subject;
use crate::subscribers::{Subscribe, same_subscriber};

/// Shared handle to a registered subscriber.
pub(crate) type SubscriberRef<T> = Arc<dyn Subscribe<T>>;

pub(crate) struct Registry<T> {
    subjects: HashMap<Subject, Vec<SubscriberRef<T>>>,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            subjects: HashMap::new(),
        }
    }

    /// Appends `subscriber` to `subject`, creating the sequence if needed.
    ///
    /// The sequence is created even when the insert is rejected.
    pub(crate) fn insert(
        &mut self,
        subject: Subject,
        subscriber: SubscriberRef<T>,
    ) -> Result<(), SubscriptionError> {
        let seq = self.subjects.entry(subject).or_default();
        if seq.iter().any(|s| same_subscriber(s.as_ref(), subscriber.as_ref())) {
            return Err(SubscriptionError::DuplicateSubscription {
                subject,
                subscriber: subscriber.name().to_string(),
            });
        }
        seq.push(subscriber);
        Ok(())
    }

    /// Removes one occurrence of `subscriber` from `subject` and returns it.
    pub(crate) fn remove(
        &mut self,
        subject: Subject,
        subscriber: &dyn Subscribe<T>,
    ) -> Result<SubscriberRef<T>, SubscriptionError> {
        let index = self.subjects.get(&subject).and_then(|seq| {
            seq.iter().position(|s| same_subscriber(s.as_ref(), subscriber))
        });

        match (index, self.subjects.get_mut(&subject)) {
            (Some(i), Some(seq)) => Ok(seq.remove(i)),
            _ => Err(SubscriptionError::UnknownSubscriber {
                subject,
                subscriber: subscriber.name().to_string(),
            }),
        }
    }

    /// Clones the current sequence for `subject`, if one exists.
    pub(crate) fn snapshot(&self, subject: Subject) -> Option<Vec<SubscriberRef<T>>> {
        self.subjects.get(&subject).cloned()
    }

    pub(crate) fn len(&self, subject: Subject) -> usize {
        self.subjects.get(&subject).map_or(0, Vec::len)
    }

    pub(crate) fn contains(&self, subject: Subject, subscriber: &dyn Subscribe<T>) -> bool {
        self.subjects
            .get(&subject)
            .is_some_and(|seq| seq.iter().any(|s| same_subscriber(s.as_ref(), subscriber)))
    }

    /// Returns the subjects that have a sequence (possibly empty), sorted.
    pub(crate) fn subjects(&self) -> Vec<Subject> {
        let mut out: Vec<Subject> = self.subjects.keys().copied().collect();
        out.sort();
        out
    }
}
