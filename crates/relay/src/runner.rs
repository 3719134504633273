//! Run orchestration: fetch, decode, publish.

use std::fmt::Debug;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::RelayError;
use crate::feed::FeedClient;
use crate::publisher::Publisher;
use crate::record::decode_records;

/// Outcome of a completed relay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records decoded from the feed.
    pub fetched: usize,
    /// Messages acknowledged by the broker.
    pub published: usize,
    /// Records dropped because they failed to encode.
    pub skipped: usize,
}

/// Runner drives one relay pass: fetch the feed, decode it, and publish
/// each record in input order, waiting for every acknowledgment.
pub struct Runner<P: Publisher> {
    feed: FeedClient,
    publisher: P,
}

impl<P: Publisher> Runner<P> {
    pub fn new(feed: FeedClient, publisher: P) -> Self {
        Self { feed, publisher }
    }

    /// Execute one full run.
    ///
    /// Fetch and decode failures abort the run before any publish. The first
    /// failed acknowledgment aborts mid-run; records acknowledged before it
    /// stay published, with no rollback.
    pub async fn run(&self) -> Result<RunSummary, RelayError> {
        info!("loading traffic data");
        let body = self.feed.fetch().await?;
        let records = decode_records(&body)?;
        info!(records = records.len(), "decoded feed");

        info!("publishing messages");
        let mut summary = self.publish_all(&records).await?;
        summary.fetched = records.len();
        Ok(summary)
    }

    /// Publish each record in order, one awaited acknowledgment at a time.
    ///
    /// A record that fails to encode is logged and skipped; a failed
    /// acknowledgment stops the whole batch. The `fetched` count of the
    /// returned summary is left at zero and filled in by [`run`](Self::run).
    pub async fn publish_all<S>(&self, records: &[S]) -> Result<RunSummary, RelayError>
    where
        S: Serialize + Debug,
    {
        let mut summary = RunSummary::default();
        for record in records {
            let payload = match serde_json::to_vec(record) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(record = ?record, error = %e, "failed to encode record, skipping");
                    summary.skipped += 1;
                    continue;
                }
            };

            info!(record = ?record, "publishing record");
            let message_id = self.publisher.publish(Bytes::from(payload)).await?;
            info!(message_id = %message_id, "message acknowledged");
            summary.published += 1;
        }
        Ok(summary)
    }
}
