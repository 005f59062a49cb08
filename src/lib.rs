//! # newsvisor
//!
//! **Newsvisor** is a small in-process publish/subscribe library for Rust.
//!
//! A [`Publisher`] keeps, per [`Subject`], an ordered list of subscribers and
//! pushes [`EventData`] to them synchronously. Subscribers are either custom
//! [`Subscribe`] implementations or closure-backed [`Subscriber`]s with private
//! state. A timed [`Feed`] driver and a news agency demo show the pieces working
//! together.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐
//!     │ Feed(Sports) │   │Feed(Politics)│   (tokio timers, staggered)
//!     └──────┬───────┘   └──────┬───────┘
//!            ▼ notify            ▼ notify
//! ┌───────────────────────────────────────────────────────┐
//! │  Publisher<T>                                         │
//! │  - RwLock<Registry>: Subject ──► [sub1, sub2, ...]    │
//! │  - notify: snapshot sequence, call next() in order    │
//! └──────┬──────────────────┬─────────────────────────────┘
//!        ▼                  ▼
//!  ┌─────────────┐    ┌─────────────┐
//!  │ Subscriber  │    │  LogWriter  │    (Arc<dyn Subscribe<T>>)
//!  │  + state    │    │             │
//!  └─────┬───────┘    └─────────────┘
//!        │ complete(subject)
//!        └──► publisher.unsubscribe(subject, self)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Subscriber::builder(name, state) ──► build() ──► publisher.subscribe(subject)
//!
//! notify(subject, &event) {
//!   ├─► no sequence for subject ─► return
//!   └─► for sub in snapshot (insertion order):
//!         sub.next(&event)
//!           └─ may call scope.complete(subject) ─► unsubscribe (next pass only)
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                    |
//! |-------------------|----------------------------------------------------------|---------------------------------------|
//! | **Publishing**    | Per-subject registry, ordered synchronous fan-out.       | [`Publisher`], [`Subject`]            |
//! | **Subscriber API**| Custom subscribers or closures with private state.       | [`Subscribe`], [`Subscriber`], [`Scope`] |
//! | **Events**        | Labelled, optionally timestamped payloads.               | [`EventData`]                         |
//! | **Errors**        | Soft registry errors and subscriber failures.            | [`SubscriptionError`], [`ObserverError`] |
//! | **Feeds**         | Staggered publishing on tokio timers.                    | [`Feed`], [`run_all`]                 |
//! | **Configuration** | Demo feed intervals and subscriber limits.               | [`Config`]                            |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use newsvisor::{EventData, Publisher, Subject, Subscriber};
//!
//! let publisher = Arc::new(Publisher::<String>::new());
//!
//! let reader = Subscriber::builder("reader", Vec::<String>::new())
//!     .on_next(|scope, ev: &EventData<String>| scope.state_mut().push(ev.payload.clone()))
//!     .build();
//!
//! publisher.subscribe(Subject::Sports, reader.clone());
//! publisher.notify(Subject::Sports, &EventData::new("headline", "Team wins!".to_string()));
//! publisher.notify(Subject::Politics, &EventData::new("headline", "Ignored".to_string()));
//!
//! assert_eq!(*reader.state(), vec!["Team wins!".to_string()]);
//! ```
mod config;
mod core;
mod error;
mod events;
mod feeds;
mod subscribers;

pub mod news;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::Publisher;
pub use error::{ObserverError, ParseSubjectError, SubscriptionError};
pub use events::{EventData, Subject};
pub use feeds::{Feed, run_all};
pub use subscribers::{LogWriter, Scope, Subscribe, Subscriber, SubscriberBuilder};
