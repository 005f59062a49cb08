//! # Example: news_agency
//!
//! Runs the news agency demo end to end.
//!
//! Shows how to:
//! - Build a [`NewsAgency`] from a [`Config`].
//! - Attach an extra [`LogWriter`] next to the built-in subscribers.
//! - Drive both feeds on real tokio timers.
//!
//! ## Flow
//! ```text
//! NewsAgency::new(cfg)
//!     ├─► subscribe(Sports, SportsFan), subscribe(Politics, PoliticalAnalyst)
//!     └─► run()
//!           ├─► t=0s  notify(Sports) + notify(Politics)
//!           ├─► t=2s  notify(Sports)
//!           ├─► t=3s  notify(Politics)   ─► analyst completes (limit 2 here)
//!           ├─► t=4s  notify(Sports)
//!           └─► t=6s  notify(Sports)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example news_agency
//! ```

use std::sync::Arc;

use newsvisor::news::NewsAgency;
use newsvisor::{Config, LogWriter, ObserverError, Subject, Subscribe};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cfg = Config {
        political_analyst_limit: 2,
        ..Config::default()
    };
    let agency = NewsAgency::new(&cfg);
    agency
        .publisher()
        .subscribe(Subject::Sports, Arc::new(LogWriter::new(Subject::Sports)));

    agency.run().await;

    // Nobody inside the agency raises errors; show the path by hand.
    agency
        .sports_fan()
        .error(&ObserverError::source("wire service closed"));

    println!();
    println!("Final state:");
    println!(" ├─► SportsFan:        {:?}", *agency.sports_fan().state());
    println!(" ├─► PoliticalAnalyst: {:?}", *agency.political_analyst().state());
    println!(
        " └─► Subscribers:      sports={} politics={}",
        agency.publisher().subscriber_count(Subject::Sports),
        agency.publisher().subscriber_count(Subject::Politics)
    );
}
