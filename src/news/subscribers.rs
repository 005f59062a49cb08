//! Built-in news subscribers.
//!
//! Both hold a `Weak` handle to their publisher: the publisher owns the
//! subscribers, so a strong handle would form a cycle.

use std::sync::{Arc, Weak};

use super::NewsUpdate;
use crate::core::Publisher;
use crate::events::{EventData, Subject};
use crate::subscribers::{Scope, Subscriber};

/// State of the sports fan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanState {
    /// Sum of `NewsUpdate::count` received so far.
    pub count: u32,
    pub limit: u32,
}

/// State of the political analyst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalystState {
    /// Articles read so far.
    pub article_count: u32,
    pub limit: u32,
}

/// Sports fan: adds each update's `count`, completes once it reaches `limit`.
pub fn sports_fan(
    publisher: &Arc<Publisher<NewsUpdate>>,
    limit: u32,
) -> Arc<Subscriber<FanState, NewsUpdate>> {
    let publisher = Arc::downgrade(publisher);
    Subscriber::builder("SportsFan", FanState { count: 0, limit })
        .on_next(|scope, ev: &EventData<NewsUpdate>| {
            tracing::info!("[{}] Received: {}", scope.name(), ev.payload.headline);
            let state = scope.state_mut();
            state.count = state.count.saturating_add(ev.payload.count);
            if state.count >= state.limit {
                scope.complete(Subject::Sports);
            }
        })
        .on_error(|scope, err| tracing::error!("[{}] Error: {err}", scope.name()))
        .on_complete(move |scope, subject| leave(scope, &publisher, subject, "sports"))
        .build()
}

/// Political analyst: counts articles, completes once it has read `limit`.
pub fn political_analyst(
    publisher: &Arc<Publisher<NewsUpdate>>,
    limit: u32,
) -> Arc<Subscriber<AnalystState, NewsUpdate>> {
    let publisher = Arc::downgrade(publisher);
    Subscriber::builder(
        "PoliticalAnalyst",
        AnalystState {
            article_count: 0,
            limit,
        },
    )
    .on_next(|scope, ev: &EventData<NewsUpdate>| {
        tracing::info!("[{}] Political update: {}", scope.name(), ev.payload.headline);
        let state = scope.state_mut();
        state.article_count = state.article_count.saturating_add(1);
        if state.article_count >= state.limit {
            scope.complete(Subject::Politics);
        }
    })
    .on_error(|scope, err| tracing::error!("[{}] Error: {err}", scope.name()))
    .on_complete(move |scope, subject| leave(scope, &publisher, subject, "political"))
    .build()
}

/// Shared `on_complete`: unsubscribe from `subject` if the publisher is still alive.
fn leave<S: Send>(
    scope: &mut Scope<'_, S, NewsUpdate>,
    publisher: &Weak<Publisher<NewsUpdate>>,
    subject: Subject,
    desk: &str,
) {
    let Some(publisher) = publisher.upgrade() else {
        return;
    };
    if scope.unsubscribe_from_publisher(&publisher, subject) {
        tracing::info!("[{}] Unsubscribed from {desk} news", scope.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObserverError;
    use crate::news::NEWS_UPDATE;
    use crate::subscribers::Subscribe;

    fn update(count: u32) -> EventData<NewsUpdate> {
        EventData::new(NEWS_UPDATE, NewsUpdate::new("h", "c", count))
    }

    #[test]
    fn test_fan_sums_counts_and_leaves_at_limit() {
        let publisher = Arc::new(Publisher::new());
        let fan = sports_fan(&publisher, 5);
        publisher.subscribe(Subject::Sports, fan.clone());

        publisher.notify(Subject::Sports, &update(2));
        publisher.notify(Subject::Sports, &update(2));
        assert_eq!(fan.state().count, 4);
        assert!(publisher.is_subscribed(Subject::Sports, &*fan));

        publisher.notify(Subject::Sports, &update(2));
        assert_eq!(fan.state().count, 6);
        assert!(!publisher.is_subscribed(Subject::Sports, &*fan));

        publisher.notify(Subject::Sports, &update(2));
        assert_eq!(fan.state().count, 6);
    }

    #[test]
    fn test_analyst_counts_articles_not_weights() {
        let publisher = Arc::new(Publisher::new());
        let analyst = political_analyst(&publisher, 2);
        publisher.subscribe(Subject::Politics, analyst.clone());

        publisher.notify(Subject::Politics, &update(10));
        assert_eq!(analyst.state().article_count, 1);
        publisher.notify(Subject::Politics, &update(10));
        assert_eq!(
            *analyst.state(),
            AnalystState {
                article_count: 2,
                limit: 2
            }
        );
        assert_eq!(publisher.subscriber_count(Subject::Politics), 0);
    }

    #[test]
    fn test_analyst_count_saturates() {
        let publisher = Arc::new(Publisher::new());
        let analyst = political_analyst(&publisher, u32::MAX);
        analyst.state().article_count = u32::MAX;
        publisher.subscribe(Subject::Politics, analyst.clone());

        publisher.notify(Subject::Politics, &update(1));
        assert_eq!(analyst.state().article_count, u32::MAX);
        assert!(!publisher.is_subscribed(Subject::Politics, &*analyst));
    }

    #[test]
    fn test_complete_after_publisher_dropped_is_harmless() {
        let publisher = Arc::new(Publisher::new());
        let fan = sports_fan(&publisher, 1);
        drop(publisher);

        fan.complete(Subject::Sports);
        fan.error(&ObserverError::delivery("wire cut"));
        assert_eq!(fan.state().count, 0);
    }

    #[test]
    fn test_complete_when_not_subscribed_is_soft() {
        let publisher = Arc::new(Publisher::new());
        let analyst = political_analyst(&publisher, 1);

        analyst.complete(Subject::Politics);
        assert!(publisher.subjects().is_empty());
    }
}
