//! HTTP client for the traffic congestion feed.

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::FeedError;

/// Client for fetching the raw congestion dataset.
///
/// One GET per call with a default-configured client: no timeout override,
/// no retry, no auth headers. The response status is not inspected; an error
/// body is handed to the decoder like any other and fails there on shape.
pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch the full response body from the feed endpoint.
    pub async fn fetch(&self) -> Result<Bytes, FeedError> {
        debug!(url = %self.url, "fetching feed");
        let response = self.client.get(&self.url).send().await?;
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "feed response read");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        let body = br#"[{"segmentid":"1"}]"#;

        Mock::given(method("GET"))
            .and(path("/resource/8v9j-bter.json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_vec(), "application/json"))
            .mount(&server)
            .await;

        let client = FeedClient::new(format!("{}/resource/8v9j-bter.json", server.uri()));
        let fetched = client.fetch().await.unwrap();
        assert_eq!(fetched.as_ref(), body);
    }

    #[tokio::test]
    async fn test_fetch_passes_error_status_body_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_raw(br#"{"error":"upstream down"}"#.to_vec(), "application/json"),
            )
            .mount(&server)
            .await;

        // Status codes are not interpreted; the body comes back as success.
        let client = FeedClient::new(server.uri());
        let fetched = client.fetch().await.unwrap();
        assert_eq!(fetched.as_ref(), br#"{"error":"upstream down"}"#);
    }

    #[tokio::test]
    async fn test_fetch_fails_on_connection_error() {
        // Port 1 is never bound in the test environment.
        let client = FeedClient::new("http://127.0.0.1:1/");
        assert!(client.fetch().await.is_err());
    }
}
