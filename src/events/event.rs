//! # Values delivered to subscribers.
//!
//! [`EventData`] carries a string label (`kind`), a caller-defined payload and an
//! optional wall-clock timestamp. The publisher only borrows it for the duration
//! of one `notify` pass and never keeps it.
//!
//! ## Example
//! ```rust
//! use newsvisor::EventData;
//!
//! let ev = EventData::new("NewsUpdate", 42u32).stamped();
//!
//! assert_eq!(ev.kind(), "NewsUpdate");
//! assert_eq!(ev.payload, 42);
//! assert!(ev.timestamp.is_some());
//! ```

use std::sync::Arc;
use std::time::SystemTime;

/// Labelled payload pushed through `Publisher::notify`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventData<T> {
    /// Free-form label describing the payload (e.g. `"NewsUpdate"`).
    pub kind: Arc<str>,
    /// Caller-defined data.
    pub payload: T,
    /// Wall-clock time the event was produced, if the producer recorded it.
    pub timestamp: Option<SystemTime>,
}

impl<T> EventData<T> {
    /// Creates an event without a timestamp.
    pub fn new(kind: impl Into<Arc<str>>, payload: T) -> Self {
        Self {
            kind: kind.into(),
            payload,
            timestamp: None,
        }
    }

    /// Attaches an explicit timestamp.
    #[inline]
    pub fn with_timestamp(mut self, at: SystemTime) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Attaches the current wall-clock time.
    #[inline]
    pub fn stamped(self) -> Self {
        self.with_timestamp(SystemTime::now())
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}
