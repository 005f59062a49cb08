//! Timed feeds: staggered publishing on top of a [`Publisher`](crate::Publisher).
//!
//! A [`Feed`] is the driver side of the demo: it owns a list of events for one
//! subject and publishes them `interval` apart using `tokio::time`. Under a
//! paused tokio clock (`#[tokio::test(start_paused = true)]`) the schedule runs
//! instantly and deterministically.
//!
//! ## Contents
//! - [`Feed`] one subject, one stagger step, ordered events
//! - [`run_all`] drives several feeds concurrently on the current task

mod feed;

pub use feed::{Feed, run_all};
