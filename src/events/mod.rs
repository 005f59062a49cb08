//! Event data model: subjects and the values delivered to subscribers.
//!
//! ## Contents
//! - [`Subject`] closed set of topics a publisher fans out on
//! - [`EventData`] labelled payload handed to `Subscribe::next`
//!
//! Which payload type belongs to which subject is a caller convention;
//! a [`Publisher<T>`](crate::Publisher) carries one payload type for all subjects.

mod event;
mod subject;

pub use event::EventData;
pub use subject::Subject;
