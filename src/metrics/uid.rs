use crate::types::EntityType;

/// Metric property naming the controller instance that owns an entity.
pub const OWNER: &str = "Owner";

/// Metric property naming the controller kind that owns an entity.
pub const OWNER_TYPE: &str = "OwnerType";

/// Deterministic identifier for an entity-state metric, derived from the
/// entity type, the entity's own key, and the property name.
pub fn entity_state_metric_uid(entity_type: EntityType, entity_key: &str, property: &str) -> String {
    format!("{}-{}-{}", entity_type, entity_key, property)
}
