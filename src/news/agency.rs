//! # Fully wired news agency.
//!
//! [`NewsAgency::new`] builds the publisher, both subscribers and both feeds
//! from a [`Config`], and subscribes the subscribers. Nothing is global; tests
//! drive [`NewsAgency::run`] under a paused tokio clock.

use std::sync::Arc;

use super::subscribers::{AnalystState, FanState, political_analyst, sports_fan};
use super::{NEWS_UPDATE, NewsUpdate};
use crate::config::Config;
use crate::core::Publisher;
use crate::events::{EventData, Subject};
use crate::feeds::{Feed, run_all};
use crate::subscribers::Subscriber;

/// Publisher, subscribers and feeds of the demo.
pub struct NewsAgency {
    publisher: Arc<Publisher<NewsUpdate>>,
    sports_fan: Arc<Subscriber<FanState, NewsUpdate>>,
    political_analyst: Arc<Subscriber<AnalystState, NewsUpdate>>,
    feeds: Vec<Feed<NewsUpdate>>,
}

impl NewsAgency {
    /// Builds and subscribes everything; nothing is published until [`run`](Self::run).
    pub fn new(cfg: &Config) -> Self {
        let publisher = Arc::new(Publisher::new());
        let fan = sports_fan(&publisher, cfg.sports_fan_limit);
        let analyst = political_analyst(&publisher, cfg.political_analyst_limit);

        publisher.subscribe(Subject::Sports, fan.clone());
        publisher.subscribe(Subject::Politics, analyst.clone());

        let feeds = vec![
            Feed::for_subject(Subject::Sports, cfg).with_events(as_events(sports_news())),
            Feed::for_subject(Subject::Politics, cfg).with_events(as_events(politics_news())),
        ];

        Self {
            publisher,
            sports_fan: fan,
            political_analyst: analyst,
            feeds,
        }
    }

    /// Publishes every feed to completion.
    pub async fn run(&self) {
        run_all(&self.feeds, &self.publisher).await;
    }

    pub fn publisher(&self) -> &Arc<Publisher<NewsUpdate>> {
        &self.publisher
    }

    pub fn sports_fan(&self) -> &Arc<Subscriber<FanState, NewsUpdate>> {
        &self.sports_fan
    }

    pub fn political_analyst(&self) -> &Arc<Subscriber<AnalystState, NewsUpdate>> {
        &self.political_analyst
    }

    pub fn feeds(&self) -> &[Feed<NewsUpdate>] {
        &self.feeds
    }
}

fn as_events(updates: Vec<NewsUpdate>) -> impl Iterator<Item = EventData<NewsUpdate>> {
    updates
        .into_iter()
        .map(|update| EventData::new(NEWS_UPDATE, update).stamped())
}

/// Sample sports headlines, in publishing order.
pub fn sports_news() -> Vec<NewsUpdate> {
    vec![
        NewsUpdate::new("Team wins championship!", "Team X won against Team Y.", 1),
        NewsUpdate::new("Player sets new record!", "Player A sets new scoring record.", 1),
        NewsUpdate::new("Upcoming match scheduled!", "Team A will play against Team B.", 1),
        NewsUpdate::new("Injury update on key player!", "Player B is recovering well.", 1),
    ]
}

/// Sample political headlines, in publishing order.
pub fn politics_news() -> Vec<NewsUpdate> {
    vec![
        NewsUpdate::new("Election results announced!", "Party A wins majority.", 1),
        NewsUpdate::new("New policy introduced!", "Government introduces new law.", 1),
    ]
}
