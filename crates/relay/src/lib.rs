//! ctt-relay: Chicago Traffic Tracker relay components
//!
//! This crate provides the pieces of the feed-to-Pub/Sub bridge: the HTTP
//! feed client, the segment record model, the publisher seam with its
//! backends, and the runner that drives one relay pass.

pub mod error;
pub mod feed;
pub mod memory;
pub mod publisher;
pub mod pubsub;
pub mod record;
pub mod runner;

pub use error::{FeedError, PublishError, RelayError};
pub use feed::FeedClient;
pub use memory::InMemoryPublisher;
pub use publisher::Publisher;
pub use pubsub::PubsubPublisher;
pub use record::{decode_records, TrafficSegmentRecord};
pub use runner::{RunSummary, Runner};
