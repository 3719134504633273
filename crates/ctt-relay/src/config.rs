use std::path::PathBuf;

use clap::Parser;

/// Public dataset endpoint for the Chicago Traffic Tracker congestion feed.
pub const DEFAULT_FEED_URL: &str = "https://data.cityofchicago.org/resource/8v9j-bter.json";

/// ctt-relay: traffic congestion feed → Pub/Sub relay
#[derive(Parser, Debug)]
#[command(name = "ctt-relay")]
pub struct Config {
    /// Google Cloud project that owns the destination topic
    #[arg(long, env = "GCLOUD_PROJECT_ID")]
    pub project_id: String,

    /// Pub/Sub topic to publish segment records to
    #[arg(long, env = "PUBSUB_TOPIC_ID")]
    pub topic_id: String,

    /// Path to the service-account key file
    #[arg(long, env = "GCLOUD_CREDENTIALS", default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Dataset endpoint to fetch
    #[arg(long, env = "TRAFFIC_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from([
            "ctt-relay",
            "--project-id",
            "demo-project",
            "--topic-id",
            "traffic",
        ])
        .unwrap();

        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.topic_id, "traffic");
        assert_eq!(config.credentials, PathBuf::from("credentials.json"));
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn test_project_and_topic_required() {
        assert!(Config::try_parse_from(["ctt-relay"]).is_err());
    }
}
