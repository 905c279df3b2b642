//! Shared fixtures: an `entity_test` family of layouts and the base
//! field definitions its storage tables carry.

use std::collections::BTreeMap;
use vantage_views::prelude::*;

#[must_use]
pub fn entity_test_info() -> EntityInfo {
    EntityInfo::new("entity_test", "Entity test", "entity_test", "id")
}

/// Registry resolving the `user` entity type referenced by `user_id`.
#[must_use]
pub fn user_registry() -> EntityDefinitions {
    let mut registry = EntityDefinitions::new();
    registry.insert(EntityInfo::new("user", "User", "users", "uid"));

    registry
}

/// Field definitions shared by the whole `entity_test` family.
#[must_use]
pub fn base_field_definitions() -> BTreeMap<String, FieldInfo> {
    let mut fields = BTreeMap::new();

    fields.insert(
        "id".to_string(),
        FieldInfo {
            value_type: Some("integer".to_string()),
            description: "The entity id.".to_string(),
            ..FieldInfo::new("ID")
        },
    );
    fields.insert(
        "revision_id".to_string(),
        FieldInfo {
            value_type: Some("integer".to_string()),
            ..FieldInfo::new("Revision ID")
        },
    );
    fields.insert(
        "uuid".to_string(),
        FieldInfo {
            value_type: Some("uuid".to_string()),
            ..FieldInfo::new("UUID")
        },
    );
    fields.insert(
        "type".to_string(),
        FieldInfo {
            value_type: Some("string".to_string()),
            ..FieldInfo::new("Type")
        },
    );
    fields.insert(
        "langcode".to_string(),
        FieldInfo {
            value_type: Some("language".to_string()),
            ..FieldInfo::new("Language")
        },
    );
    fields.insert(
        "default_langcode".to_string(),
        FieldInfo {
            value_type: Some("boolean".to_string()),
            ..FieldInfo::new("Default language")
        },
    );
    fields.insert(
        "name".to_string(),
        FieldInfo {
            value_type: Some("string".to_string()),
            ..FieldInfo::new("Name")
        },
    );
    // Reference fields carry no declared value type of their own; the
    // mapper falls back to entity_reference for them.
    fields.insert(
        "user_id".to_string(),
        FieldInfo {
            target_type: Some("user".to_string()),
            ..FieldInfo::new("User")
        },
    );

    fields
}
