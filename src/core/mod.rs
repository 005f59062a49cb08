//! Publisher core: subject registry and fan-out.
//!
//! The only public API from this module is [`Publisher`].
//!
//! Internal modules:
//! - [`publisher`]: subscribe / unsubscribe / notify, logging of soft errors;
//! - [`registry`]: per-subject ordered sequences, deduplicated by address.

mod publisher;
mod registry;

pub use publisher::Publisher;
