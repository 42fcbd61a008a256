use thiserror::Error;

/// Errors raised while resolving a pod's owner from the metric sink.
///
/// Both variants are recoverable at pod granularity: the collector skips the
/// affected pod and continues the pass. Unowned pods are an expected case, so
/// neither variant distinguishes "no owner" from a store malfunction.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to look up {property} for pod {entity_key}: {source}")]
    Lookup {
        property: &'static str,
        entity_key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("empty {property} for pod {entity_key}")]
    EmptyValue {
        property: &'static str,
        entity_key: String,
    },
}
