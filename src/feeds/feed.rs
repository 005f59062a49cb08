//! # Staggered feed of events for one subject.
//!
//! ## Schedule
//! ```text
//! t = 0          interval      2*interval    ...
//!     │              │              │
//!     ▼              ▼              ▼
//!  notify(e0)     notify(e1)     notify(e2)    (all on the calling task)
//! ```
//!
//! Offsets are measured from the first poll of [`Feed::run`], not from the
//! previous notify, so a slow subscriber does not push later items back.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::{self, Instant};

use crate::config::Config;
use crate::core::Publisher;
use crate::events::{EventData, Subject};

/// Ordered events published on one subject, `interval` apart.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    subject: Subject,
    interval: Duration,
    events: Vec<EventData<T>>,
}

impl<T> Feed<T> {
    /// Creates an empty feed.
    pub fn new(subject: Subject, interval: Duration) -> Self {
        Self {
            subject,
            interval,
            events: Vec::new(),
        }
    }

    /// Creates an empty feed using the configured interval for `subject`.
    pub fn for_subject(subject: Subject, cfg: &Config) -> Self {
        Self::new(subject, cfg.interval_for(subject))
    }

    /// Appends `events` in iteration order.
    pub fn with_events(mut self, events: impl IntoIterator<Item = EventData<T>>) -> Self {
        self.events.extend(events);
        self
    }

    /// Appends a single event.
    pub fn push(&mut self, event: EventData<T>) {
        self.events.push(event);
    }

    #[inline]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset from start at which item `index` is published (saturating).
    pub fn offset_of(&self, index: usize) -> Duration {
        let n = u32::try_from(index).unwrap_or(u32::MAX);
        self.interval.saturating_mul(n)
    }

    /// Publishes every event on `publisher`, item *i* at `i * interval` after start.
    ///
    /// Stops early if an offset does not fit the clock.
    pub async fn run(&self, publisher: &Publisher<T>) {
        let start = Instant::now();
        let mut published = 0usize;

        for (i, event) in self.events.iter().enumerate() {
            let Some(at) = start.checked_add(self.offset_of(i)) else {
                tracing::warn!(subject = %self.subject, index = i, "feed offset overflows clock");
                break;
            };
            time::sleep_until(at).await;
            publisher.notify(self.subject, event);
            published += 1;
        }

        tracing::debug!(subject = %self.subject, published, "feed drained");
    }
}

/// Runs all `feeds` concurrently on the current task and waits for every one to drain.
///
/// Items due at the same instant are published in `feeds` order.
pub async fn run_all<T>(feeds: &[Feed<T>], publisher: &Publisher<T>) {
    join_all(feeds.iter().map(|feed| feed.run(publisher))).await;
}
