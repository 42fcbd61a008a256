// Public modules
pub mod types;
pub mod error;
pub mod identity;
pub mod metrics;
pub mod collector;

// Re-export commonly used items
pub use types::{EntityGroup, EntityType};
pub use error::CollectError;
pub use identity::{container_id, pod_id, pod_key};
pub use metrics::{entity_state_metric_uid, EntityMetricSink, MetricSink, MetricValue, OWNER, OWNER_TYPE};
pub use collector::GroupCollector;
