use anyhow::{anyhow, Result};
use std::collections::HashMap;

use crate::metrics::uid::entity_state_metric_uid;
use crate::types::EntityType;

/// Value held by one metric entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Str(String),
    Num(f64),
}

impl MetricValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetricValue::Str(s) => Some(s),
            MetricValue::Num(_) => None,
        }
    }
}

/// Read-only lookup into a pre-populated metric store.
///
/// The store itself lives outside this crate; implementations must return an
/// error for unknown identifiers rather than a default value.
pub trait MetricSink {
    fn get_metric(&self, metric_uid: &str) -> Result<MetricValue>;
}

/// In-memory metric sink keyed by entity-state metric UID.
#[derive(Debug, Default)]
pub struct EntityMetricSink {
    metrics: HashMap<String, MetricValue>,
}

impl EntityMetricSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entity_state_metric(
        &mut self,
        entity_type: EntityType,
        entity_key: &str,
        property: &str,
        value: MetricValue,
    ) {
        let uid = entity_state_metric_uid(entity_type, entity_key, property);
        self.metrics.insert(uid, value);
    }
}

impl MetricSink for EntityMetricSink {
    fn get_metric(&self, metric_uid: &str) -> Result<MetricValue> {
        self.metrics
            .get(metric_uid)
            .cloned()
            .ok_or_else(|| anyhow!("no metric entry for {}", metric_uid))
    }
}
