use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("client construction failed: {0}")]
    Connect(String),
    #[error("publish failed: {0}")]
    Publish(String),
}

/// Fatal error classes for a relay run. Per-record encode failures are not
/// represented here: the runner skips those records and keeps going.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FeedError),
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}
