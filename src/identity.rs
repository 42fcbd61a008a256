use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;

/// Stable lookup key for a pod, qualified as `namespace/name`.
pub fn pod_key(pod: &Pod) -> String {
    format!("{}/{}", pod.namespace().unwrap_or_default(), pod.name_any())
}

/// Identifier used for group membership. Prefers the pod UID; falls back to
/// the namespace/name key for pods that have not been assigned one.
pub fn pod_id(pod: &Pod) -> String {
    pod.uid().unwrap_or_else(|| pod_key(pod))
}

/// Identifier for the container at `index` within the pod identified by `pod_id`.
pub fn container_id(pod_id: &str, index: usize) -> String {
    format!("{}-{}", pod_id, index)
}
