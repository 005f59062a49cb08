//! # Logging subscriber for debugging and demos.
//!
//! [`LogWriter`] reports every signal it receives through `tracing`.
//! Subscribe it next to real subscribers to watch a subject's traffic.
//!
//! ## Output format
//! ```text
//! INFO [next] subscriber=log subject=sports kind=NewsUpdate payload=NewsUpdate { .. }
//! WARN [error] subscriber=log label=observer_delivery err="late"
//! INFO [complete] subscriber=log subject=politics
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use newsvisor::{EventData, LogWriter, Publisher, Subject};
//!
//! let publisher: Publisher<(u8, u8)> = Publisher::new();
//! publisher.subscribe(Subject::Sports, Arc::new(LogWriter::new(Subject::Sports)));
//! publisher.notify(Subject::Sports, &EventData::new("score", (2, 1)));
//! ```

use std::fmt::Debug;

use crate::error::ObserverError;
use crate::events::{EventData, Subject};
use crate::subscribers::Subscribe;

/// Subscriber that logs events instead of acting on them.
///
/// Not intended for production use; implement [`Subscribe`] for real handling.
#[derive(Debug, Clone, Copy)]
pub struct LogWriter {
    subject: Subject,
}

impl LogWriter {
    /// Creates a writer that tags its `next` lines with `subject`.
    pub fn new(subject: Subject) -> Self {
        Self { subject }
    }
}

impl<T: Debug> Subscribe<T> for LogWriter {
    fn name(&self) -> &str {
        "log"
    }

    fn next(&self, event: &EventData<T>) {
        tracing::info!(
            subscriber = "log",
            subject = %self.subject,
            kind = event.kind(),
            payload = ?event.payload,
            "[next]"
        );
    }

    fn error(&self, err: &ObserverError) {
        tracing::warn!(subscriber = "log", label = err.as_label(), err = %err, "[error]");
    }

    fn complete(&self, subject: Subject) {
        tracing::info!(subscriber = "log", subject = %subject, "[complete]");
    }
}
