//! In-memory publisher for tests and local runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::PublishError;
use crate::publisher::Publisher;

/// Publisher that keeps payloads in memory and assigns sequential ids.
#[derive(Default)]
pub struct InMemoryPublisher {
    messages: Mutex<Vec<Bytes>>,
    sequence: AtomicU64,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads acknowledged so far, in publish order.
    pub fn published(&self) -> Vec<Bytes> {
        self.messages.lock().unwrap().clone()
    }

    /// Count of acknowledged payloads.
    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    async fn publish(&self, payload: Bytes) -> Result<String, PublishError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.messages.lock().unwrap().push(payload);
        Ok(seq.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_records_payload() {
        let publisher = InMemoryPublisher::new();
        publisher.publish(Bytes::from("hello")).await.unwrap();

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], Bytes::from("hello"));
    }

    #[tokio::test]
    async fn test_message_ids_increment() {
        let publisher = InMemoryPublisher::new();
        let first = publisher.publish(Bytes::from("a")).await.unwrap();
        let second = publisher.publish(Bytes::from("b")).await.unwrap();
        assert_eq!(first, "0");
        assert_eq!(second, "1");
        assert_eq!(publisher.message_count(), 2);
    }
}
