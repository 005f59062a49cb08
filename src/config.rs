//! # Demo driver configuration.
//!
//! Provides [`Config`], the settings used to wire the news agency demo:
//! how far apart each subject's feed items are published, and when the
//! built-in subscribers consider their stream complete.
//!
//! Config is used in two ways:
//! 1. **Feed creation**: `Feed::for_subject(subject, &config)` takes the stagger step
//! 2. **Agency wiring**: `NewsAgency::new(&config)` takes the subscriber limits
//!
//! ## Sentinel values
//! - `*_interval = 0s` → every item of that feed is published back-to-back
//! - `*_limit = 0` → the subscriber completes on its first event

use std::time::Duration;

use crate::events::Subject;

/// Settings for the news agency demo.
///
/// ## Field semantics
/// - `sports_interval` / `politics_interval`: delay between consecutive items
///   of that subject's feed; item *i* is published at `i * interval`
/// - `sports_fan_limit`: total `count` after which the sports fan completes
/// - `political_analyst_limit`: number of articles after which the analyst completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Stagger step for the `Sports` feed.
    pub sports_interval: Duration,

    /// Stagger step for the `Politics` feed.
    pub politics_interval: Duration,

    /// Completion threshold of the sports fan (sum of `NewsUpdate::count`).
    pub sports_fan_limit: u32,

    /// Completion threshold of the political analyst (articles read).
    pub political_analyst_limit: u32,
}

impl Config {
    /// Returns the stagger step for `subject`'s feed.
    #[inline]
    pub fn interval_for(&self, subject: Subject) -> Duration {
        match subject {
            Subject::Sports => self.sports_interval,
            Subject::Politics => self.politics_interval,
        }
    }

    /// Returns `true` if `subject`'s feed publishes everything at once.
    #[inline]
    pub fn is_burst(&self, subject: Subject) -> bool {
        self.interval_for(subject) == Duration::ZERO
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `sports_interval = 2s`
    /// - `politics_interval = 3s`
    /// - `sports_fan_limit = 10`
    /// - `political_analyst_limit = 5`
    fn default() -> Self {
        Self {
            sports_interval: Duration::from_secs(2),
            politics_interval: Duration::from_secs(3),
            sports_fan_limit: 10,
            political_analyst_limit: 5,
        }
    }
}
