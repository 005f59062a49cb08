//! # Subscribers: the receiving side of a publisher.
//!
//! This module provides the [`Subscribe`] trait and two implementations of it.
//!
//! ## Architecture
//! ```text
//! Publisher::notify(subject, &event)
//!     │   (snapshot of the subject's sequence, insertion order)
//!     ├──► sub1.next(&event)
//!     ├──► sub2.next(&event)
//!     └──► subN.next(&event)
//! ```
//!
//! ## Subscriber types
//! - [`Subscriber`]: closures plus private state, built from a name and initial state
//! - [`LogWriter`]: passive, logs whatever it receives

mod log;
mod subscribe;
mod subscriber;

pub use log::LogWriter;
pub(crate) use subscribe::same_subscriber;
pub use subscribe::Subscribe;
pub use subscriber::{Scope, Subscriber, SubscriberBuilder};
