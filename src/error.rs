//! Error types used by the publisher and its subscribers.
//!
//! This module defines three error types:
//!
//! - [`SubscriptionError`] — soft registry conditions (duplicate subscribe, unknown unsubscribe).
//! - [`ObserverError`] — failures handed to a subscriber's `error` callback.
//! - [`ParseSubjectError`] — a string that names no known [`Subject`].
//!
//! None of them is fatal. The publisher logs [`SubscriptionError`]s and carries on;
//! `try_*` variants hand them back to the caller as values.
//! Both enums provide `as_label` / `as_message` helpers for logging.

use thiserror::Error;

use crate::events::Subject;

/// # Soft conditions reported by the subscriber registry.
///
/// Neither variant mutates the registry. The publisher logs them and returns
/// `false` from `subscribe` / `unsubscribe`.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Subscriber is already registered for this subject.
    #[error("subscriber {subscriber:?} is already subscribed to {subject}")]
    DuplicateSubscription {
        /// Subject the subscribe call targeted.
        subject: Subject,
        /// Name of the offending subscriber.
        subscriber: String,
    },

    /// Subscriber is not registered for this subject (or the subject has no subscribers yet).
    #[error("subscriber {subscriber:?} is not subscribed to {subject}")]
    UnknownSubscriber {
        /// Subject the unsubscribe call targeted.
        subject: Subject,
        /// Name of the subscriber that was not found.
        subscriber: String,
    },
}

impl SubscriptionError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use newsvisor::{Subject, SubscriptionError};
    ///
    /// let err = SubscriptionError::DuplicateSubscription {
    ///     subject: Subject::Sports,
    ///     subscriber: "fan".into(),
    /// };
    /// assert_eq!(err.as_label(), "duplicate_subscription");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriptionError::DuplicateSubscription { .. } => "duplicate_subscription",
            SubscriptionError::UnknownSubscriber { .. } => "unknown_subscriber",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriptionError::DuplicateSubscription { .. } => {
                "attempted to subscribe an already subscribed observer".to_string()
            }
            SubscriptionError::UnknownSubscriber { .. } => {
                "attempted to unsubscribe a non-existent observer".to_string()
            }
        }
    }

    /// Subject the failed call targeted.
    pub fn subject(&self) -> Subject {
        match self {
            SubscriptionError::DuplicateSubscription { subject, .. }
            | SubscriptionError::UnknownSubscriber { subject, .. } => *subject,
        }
    }
}

/// # Failures delivered to a subscriber's `error` callback.
///
/// The publisher never raises these itself. Callers (or a subscriber's own
/// logic) construct one and pass it to `Subscribe::error`.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// Delivery of an event failed; the stream may continue.
    #[error("delivery failed: {error}")]
    Delivery {
        /// The underlying error message.
        error: String,
    },

    /// The source of events broke down and will not produce more.
    #[error("source failed (no further events): {error}")]
    Source {
        /// The underlying error message.
        error: String,
    },
}

impl ObserverError {
    /// Shorthand for [`ObserverError::Delivery`].
    pub fn delivery(error: impl Into<String>) -> Self {
        ObserverError::Delivery {
            error: error.into(),
        }
    }

    /// Shorthand for [`ObserverError::Source`].
    pub fn source(error: impl Into<String>) -> Self {
        ObserverError::Source {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use newsvisor::ObserverError;
    ///
    /// assert_eq!(ObserverError::delivery("boom").as_label(), "observer_delivery");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::Delivery { .. } => "observer_delivery",
            ObserverError::Source { .. } => "observer_source",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ObserverError::Delivery { error } => format!("delivery: {error}"),
            ObserverError::Source { error } => format!("source: {error}"),
        }
    }

    /// Indicates whether more events may still follow this failure.
    ///
    /// Returns `true` for [`ObserverError::Delivery`], `false` otherwise.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ObserverError::Delivery { .. })
    }
}

/// A string that does not name any [`Subject`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown subject {0:?}")]
pub struct ParseSubjectError(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_labels_and_subject() {
        let dup = SubscriptionError::DuplicateSubscription {
            subject: Subject::Sports,
            subscriber: "fan".into(),
        };
        let unknown = SubscriptionError::UnknownSubscriber {
            subject: Subject::Politics,
            subscriber: "analyst".into(),
        };

        assert_eq!(dup.as_label(), "duplicate_subscription");
        assert_eq!(unknown.as_label(), "unknown_subscriber");
        assert_eq!(dup.subject(), Subject::Sports);
        assert_eq!(unknown.subject(), Subject::Politics);
        assert_eq!(
            dup.to_string(),
            "subscriber \"fan\" is already subscribed to sports"
        );
        assert_eq!(
            unknown.to_string(),
            "subscriber \"analyst\" is not subscribed to politics"
        );
    }

    #[test]
    fn test_observer_error_recoverability() {
        assert!(ObserverError::delivery("late").is_recoverable());
        assert!(!ObserverError::source("gone").is_recoverable());
        assert_eq!(ObserverError::source("gone").as_message(), "source: gone");
    }
}
