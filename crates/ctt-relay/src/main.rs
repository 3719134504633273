//! ctt-relay: one-shot bridge from the Chicago Traffic Tracker feed to Pub/Sub
//!
//! Fetches the city congestion dataset, decodes the segment records, and
//! republishes each record as one message on a Pub/Sub topic. Meant to be
//! run periodically by an external scheduler.

mod config;

use std::path::Path;

use clap::Parser;
use tracing::{error, info};

use ctt_relay_lib::{FeedClient, PubsubPublisher, Runner};

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::parse();
    info!(
        feed_url = %config.feed_url,
        project = %config.project_id,
        topic = %config.topic_id,
        "ctt-relay starting"
    );

    let key = load_service_account_key(&config.credentials)?;

    info!("creating Pub/Sub client");
    let publisher = PubsubPublisher::connect(&config.project_id, &config.topic_id, key).await?;

    let feed = FeedClient::new(&config.feed_url);
    let runner = Runner::new(feed, publisher);

    match runner.run().await {
        Ok(summary) => {
            info!(
                fetched = summary.fetched,
                published = summary.published,
                skipped = summary.skipped,
                "relay run complete"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "relay run failed");
            std::process::exit(1);
        }
    }
}

/// Read and parse the service-account key file.
fn load_service_account_key(
    path: &Path,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)
        .map_err(|e| format!("failed to read credentials file {}: {}", path.display(), e))?;
    let key = serde_json::from_slice(&raw)
        .map_err(|e| format!("invalid credentials file {}: {}", path.display(), e))?;
    Ok(key)
}
