use crate::prelude::*;
use std::collections::BTreeMap;

///
/// EntityLookup
///
/// Read-only access to registered entity type layouts. The handler
/// mapper resolves reference-field targets through this seam.
///

pub trait EntityLookup {
    fn entity_info(&self, entity_type: &str) -> Option<&EntityInfo>;
}

///
/// ColumnSource
///
/// Enumerates the columns physically present on a storage table.
/// Unknown tables yield an empty set, never an error.
///

pub trait ColumnSource {
    fn table_columns(&self, table: &str) -> Vec<String>;
}

///
/// EntityDefinitions
///
/// In-memory registry of entity type layouts and their field
/// definitions, keyed by entity type id.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntityDefinitions {
    entities: BTreeMap<String, EntityInfo>,
    fields: BTreeMap<String, BTreeMap<String, FieldInfo>>,
}

impl EntityDefinitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: EntityInfo) {
        self.entities.insert(info.entity_type.clone(), info);
    }

    pub fn insert_fields(
        &mut self,
        entity_type: impl Into<String>,
        fields: BTreeMap<String, FieldInfo>,
    ) {
        self.fields.insert(entity_type.into(), fields);
    }

    #[must_use]
    pub fn field_definitions(&self, entity_type: &str) -> Option<&BTreeMap<String, FieldInfo>> {
        self.fields.get(entity_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityLookup for EntityDefinitions {
    fn entity_info(&self, entity_type: &str) -> Option<&EntityInfo> {
        self.entities.get(entity_type)
    }
}

///
/// TableColumns
///
/// Map-backed column enumerator for static deployments and tests.
///

#[derive(Clone, Debug, Default)]
pub struct TableColumns {
    columns: BTreeMap<String, Vec<String>>,
}

impl TableColumns {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, table: impl Into<String>, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .insert(table.into(), columns.into_iter().map(Into::into).collect());
    }
}

impl ColumnSource for TableColumns {
    fn table_columns(&self, table: &str) -> Vec<String> {
        self.columns.get(table).cloned().unwrap_or_default()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_entities_resolve_by_type_id() {
        let mut registry = EntityDefinitions::new();
        registry.insert(EntityInfo::new("user", "User", "users", "uid"));

        let info = registry.entity_info("user").unwrap();
        assert_eq!(info.base_table, "users");
        assert_eq!(info.id_key, "uid");
        assert!(registry.entity_info("node").is_none());
    }

    #[test]
    fn field_definitions_are_kept_per_entity_type() {
        let mut registry = EntityDefinitions::new();
        let mut fields = BTreeMap::new();
        fields.insert(
            "id".to_string(),
            FieldInfo {
                value_type: Some("integer".to_string()),
                ..FieldInfo::new("ID")
            },
        );
        registry.insert_fields("user", fields);

        assert!(registry.field_definitions("user").unwrap().contains_key("id"));
        assert!(registry.field_definitions("node").is_none());
    }

    #[test]
    fn unknown_tables_enumerate_no_columns() {
        let mut columns = TableColumns::new();
        columns.insert("users", ["uid", "name"]);

        assert_eq!(columns.table_columns("users"), vec!["uid", "name"]);
        assert!(columns.table_columns("missing").is_empty());
    }
}
