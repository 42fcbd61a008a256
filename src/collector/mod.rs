use std::collections::HashMap;

use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use tracing::debug;

use crate::error::CollectError;
use crate::identity::{container_id, pod_id, pod_key};
use crate::metrics::{entity_state_metric_uid, MetricSink, OWNER, OWNER_TYPE};
use crate::types::{EntityGroup, EntityType};

/// Collector that resolves controller lineage for a pod batch and folds pods
/// and their containers into owner groups.
pub struct GroupCollector<'a, S: MetricSink + ?Sized> {
    pod_list: &'a [Pod],
    sink: &'a S,
    worker_id: String,
}

impl<'a, S: MetricSink + ?Sized> GroupCollector<'a, S> {
    pub fn new(pod_list: &'a [Pod], sink: &'a S, worker_id: impl Into<String>) -> Self {
        Self {
            pod_list,
            sink,
            worker_id: worker_id.into(),
        }
    }

    /// Derive groups for the batch, in first-seen order.
    ///
    /// Two partitions are built in one pass: a group per owner instance
    /// (keyed `kind/namespace/name`) and a group per owner kind (keyed by the
    /// bare kind). Pods whose owner cannot be resolved are skipped.
    pub fn collect_groups(&self) -> Vec<EntityGroup> {
        let mut group_list: Vec<EntityGroup> = Vec::new();
        let mut groups_by_owner: HashMap<String, usize> = HashMap::new();
        let mut groups_by_owner_kind: HashMap<String, usize> = HashMap::new();

        for pod in self.pod_list {
            let entity_key = pod_key(pod);
            let (owner_kind, owner_name) = match self.resolve_owner(EntityType::Pod, &entity_key) {
                Ok(owner) => owner,
                Err(err) => {
                    debug!(worker = %self.worker_id, "skipping pod: {}", err);
                    continue;
                }
            };

            let pod_id = pod_id(pod);
            let namespace = pod.namespace().unwrap_or_default();
            let group_key = format!("{}/{}/{}", owner_kind, namespace, owner_name);

            // group1 = a group for each owner instance, qualified by namespace
            let g1 = *groups_by_owner.entry(group_key.clone()).or_insert_with(|| {
                group_list.push(EntityGroup::new(
                    owner_kind.as_str(),
                    owner_name.as_str(),
                    group_key.as_str(),
                ));
                group_list.len() - 1
            });

            // group2 = one global group per owner kind
            let g2 = *groups_by_owner_kind
                .entry(owner_kind.clone())
                .or_insert_with(|| {
                    group_list.push(EntityGroup::new(owner_kind.as_str(), "", owner_kind.as_str()));
                    group_list.len() - 1
                });

            // Pods join the per-kind group only. Per-owner pod membership is
            // deliberately skipped: those groups go unused downstream and add
            // measurable overhead on large topologies.
            // TODO: put per-owner pod membership behind a flag for small topologies.
            group_list[g2].add_member(EntityType::Pod, pod_id.as_str());

            let containers = pod
                .spec
                .as_ref()
                .map(|s| s.containers.as_slice())
                .unwrap_or(&[]);
            for (i, container) in containers.iter().enumerate() {
                let container_id = container_id(&pod_id, i);
                group_list[g1].add_member(EntityType::Container, container_id.as_str());
                group_list[g2].add_member(EntityType::Container, container_id.as_str());

                // Containers sharing a name under one owner are resized
                // consistently; bucket them by name on the instance group.
                group_list[g1]
                    .container_groups
                    .entry(container.name.clone())
                    .or_default()
                    .push(container_id);
            }
        }

        group_list
    }

    /// Resolve `(owner kind, owner name)` for one entity via the metric sink.
    /// Both strings are guaranteed non-empty on success.
    fn resolve_owner(
        &self,
        entity_type: EntityType,
        entity_key: &str,
    ) -> Result<(String, String), CollectError> {
        let owner_kind = self.lookup_string(entity_type, entity_key, OWNER_TYPE)?;
        let owner_name = self.lookup_string(entity_type, entity_key, OWNER)?;
        Ok((owner_kind, owner_name))
    }

    fn lookup_string(
        &self,
        entity_type: EntityType,
        entity_key: &str,
        property: &'static str,
    ) -> Result<String, CollectError> {
        let uid = entity_state_metric_uid(entity_type, entity_key, property);
        let value = self
            .sink
            .get_metric(&uid)
            .map_err(|source| CollectError::Lookup {
                property,
                entity_key: entity_key.to_string(),
                source,
            })?;
        match value.as_str() {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(CollectError::EmptyValue {
                property,
                entity_key: entity_key.to_string(),
            }),
        }
    }
}
