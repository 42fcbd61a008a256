use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Kind of entity a group member refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityType {
    Pod,
    Container,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Pod => "Pod",
            EntityType::Container => "Container",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group of workload entities sharing one controller, or one controller kind.
///
/// Instance-scoped groups carry the owner name and a `kind/namespace/name` key;
/// kind-scoped groups carry an empty name and the bare kind as key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityGroup {
    pub kind: String,
    pub name: String,
    pub key: String,
    /// Member ids per entity type. Set semantics: re-adding a member is a no-op.
    pub members: HashMap<EntityType, BTreeSet<String>>,
    /// Container ids bucketed by container name, in insertion order.
    /// Populated only on instance-scoped groups.
    pub container_groups: HashMap<String, Vec<String>>,
}

impl EntityGroup {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            key: key.into(),
            members: HashMap::new(),
            container_groups: HashMap::new(),
        }
    }

    pub fn add_member(&mut self, entity_type: EntityType, member_id: impl Into<String>) {
        self.members
            .entry(entity_type)
            .or_default()
            .insert(member_id.into());
    }

    pub fn member_count(&self, entity_type: EntityType) -> usize {
        self.members.get(&entity_type).map_or(0, |m| m.len())
    }

    /// Whether this group represents one owner instance rather than a whole kind.
    pub fn is_instance_scoped(&self) -> bool {
        !self.name.is_empty()
    }
}
