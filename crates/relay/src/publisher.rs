use async_trait::async_trait;
use bytes::Bytes;

use crate::error::PublishError;

/// Publisher trait for message destinations (Pub/Sub, in-memory).
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Submit one message payload and wait for the broker acknowledgment.
    /// Returns the server-assigned message id.
    async fn publish(&self, payload: Bytes) -> Result<String, PublishError>;
}
