//! # News agency: the demo domain.
//!
//! Wires a [`Publisher<NewsUpdate>`](crate::Publisher) to two built-in
//! subscribers and two timed feeds:
//!
//! ```text
//!            ┌───────────── NewsAgency ─────────────┐
//! sports feed ──► notify(Sports)   ──► sports fan          (count += update.count,
//!  (every 2s)                                               completes at limit 10)
//! politics feed ► notify(Politics) ──► political analyst   (articles += 1,
//!  (every 3s)                                               completes at limit 5)
//!            └──────────────────────────────────────┘
//! ```
//!
//! Completion unsubscribes the subscriber from its subject; it stays alive and
//! its state stays readable.

mod agency;
mod subscribers;

pub use agency::{NewsAgency, politics_news, sports_news};
pub use subscribers::{AnalystState, FanState, political_analyst, sports_fan};

/// Event label used for every news item.
pub const NEWS_UPDATE: &str = "NewsUpdate";

/// Payload of a news event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsUpdate {
    pub headline: String,
    pub content: String,
    /// Weight of this update for counting subscribers.
    pub count: u32,
}

impl NewsUpdate {
    pub fn new(headline: impl Into<String>, content: impl Into<String>, count: u32) -> Self {
        Self {
            headline: headline.into(),
            content: content.into(),
            count,
        }
    }
}
