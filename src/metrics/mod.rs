// Metric lookup boundary: UID derivation and the sink interface
pub mod sink;
pub mod uid;

// Re-export commonly used items
pub use sink::{EntityMetricSink, MetricSink, MetricValue};
pub use uid::{entity_state_metric_uid, OWNER, OWNER_TYPE};
