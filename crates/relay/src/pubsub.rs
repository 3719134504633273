//! Google Cloud Pub/Sub publisher backend.

use async_trait::async_trait;
use bytes::Bytes;
use google_cloud_auth::credentials::service_account;
use google_cloud_pubsub::client::Publisher as PubsubClient;
use google_cloud_pubsub::model::Message;
use tracing::info;

use crate::error::PublishError;
use crate::publisher::Publisher;

/// Publisher backed by a Google Cloud Pub/Sub topic.
///
/// Each `publish` sends one message and waits for the service to return the
/// server-assigned message id. The client handle is cheap to share across
/// sequential calls; this program never publishes concurrently.
pub struct PubsubPublisher {
    client: PubsubClient,
}

impl PubsubPublisher {
    /// Build a publisher for `projects/{project_id}/topics/{topic_id}`,
    /// authenticated with the given service-account key.
    pub async fn connect(
        project_id: &str,
        topic_id: &str,
        service_account_key: serde_json::Value,
    ) -> Result<Self, PublishError> {
        let credentials = service_account::Builder::new(service_account_key)
            .build()
            .map_err(|e| PublishError::Connect(e.to_string()))?;

        let topic = format!("projects/{project_id}/topics/{topic_id}");
        let client = PubsubClient::builder(topic.clone())
            .with_credentials(credentials)
            .build()
            .await
            .map_err(|e| PublishError::Connect(e.to_string()))?;

        info!(topic = %topic, "Pub/Sub publisher ready");
        Ok(Self { client })
    }
}

#[async_trait]
impl Publisher for PubsubPublisher {
    async fn publish(&self, payload: Bytes) -> Result<String, PublishError> {
        self.client
            .publish(Message::new().set_data(payload))
            .await
            .map_err(|e| PublishError::Publish(e.to_string()))
    }
}
