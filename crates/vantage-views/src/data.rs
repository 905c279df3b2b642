use crate::prelude::*;
use std::collections::BTreeMap;

///
/// ViewsSchema
///
/// Normalized query-schema description for one entity type: one entry
/// per storage table, keyed by table name. Built once per entity type
/// and never mutated afterwards.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewsSchema {
    tables: BTreeMap<String, TableSchema>,
}

impl ViewsSchema {
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    #[must_use]
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableSchema)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Entry for `table`, created empty on first access.
    pub(crate) fn entry(&mut self, table: &str) -> &mut TableSchema {
        self.tables.entry(table.to_string()).or_default()
    }

    pub(crate) fn table_mut(&mut self, table: &str) -> Option<&mut TableSchema> {
        self.tables.get_mut(table)
    }
}

///
/// TableSchema
///
/// Per-table record. Only base and revision tables carry the entity
/// type tag and a [`BaseInfo`]; data tables participate through their
/// join edges alone.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseInfo>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub joins: BTreeMap<String, JoinSpec>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldSchema>,
}

impl TableSchema {
    #[must_use]
    pub const fn is_base(&self) -> bool {
        self.base.is_some()
    }

    #[must_use]
    pub fn join_to(&self, table: &str) -> Option<&JoinSpec> {
        self.joins.get(table)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }
}

///
/// BaseInfo
///
/// Marks a table as a query root: the key column queries start from and
/// the title shown for it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BaseInfo {
    pub field: String,
    pub title: String,
}

///
/// JoinSpec
///
/// Equi-join between a table and its join target. Both sides always
/// name the same logical key column, which `on` encodes by construction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JoinSpec {
    pub left_field: String,
    pub field: String,
}

impl JoinSpec {
    #[must_use]
    pub fn on(key: &str) -> Self {
        Self {
            left_field: key.to_string(),
            field: key.to_string(),
        }
    }
}

///
/// FieldSchema
///
/// Handler block for one column. Columns whose declared value type is
/// not recognized keep an empty block: present, titled, but with no
/// handlers assigned.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldSchema {
    pub title: String,

    #[serde(default)]
    pub help: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<HandlerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<HandlerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<HandlerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<HandlerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipSpec>,
}

impl FieldSchema {
    #[must_use]
    pub const fn has_handlers(&self) -> bool {
        self.field.is_some()
            || self.argument.is_some()
            || self.filter.is_some()
            || self.sort.is_some()
    }

    pub(crate) fn assign(&mut self, handlers: HandlerSet) {
        self.field = Some(handlers.field);
        self.argument = Some(handlers.argument);
        self.filter = Some(handlers.filter);
        self.sort = Some(handlers.sort);
    }
}

///
/// RelationshipSpec
///
/// Join path from a reference field to the target entity type's base
/// table, used to traverse between entities in query construction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelationshipSpec {
    pub base_table: String,
    pub base_field: String,
    pub label: String,
    pub handler: HandlerId,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_created_once_and_reused() {
        let mut schema = ViewsSchema::default();
        schema.entry("users").group = Some("User".to_string());
        schema.entry("users").entity_type = Some("user".to_string());

        assert_eq!(schema.len(), 1);
        let table = schema.table("users").unwrap();
        assert_eq!(table.group.as_deref(), Some("User"));
        assert_eq!(table.entity_type.as_deref(), Some("user"));
    }

    #[test]
    fn join_on_names_the_same_key_on_both_sides() {
        let join = JoinSpec::on("revision_id");

        assert_eq!(join.left_field, "revision_id");
        assert_eq!(join.field, "revision_id");
    }

    #[test]
    fn empty_field_block_reports_no_handlers() {
        let mut field = FieldSchema {
            title: "Settings".to_string(),
            ..FieldSchema::default()
        };
        assert!(!field.has_handlers());

        field.assign(HandlerSet::for_kind(ValueKind::Integer));
        assert!(field.has_handlers());
    }

    #[test]
    fn empty_blocks_serialize_without_handler_keys() {
        let field = FieldSchema {
            title: "Settings".to_string(),
            ..FieldSchema::default()
        };
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["title"], "Settings");
        assert!(json.get("field").is_none());
        assert!(json.get("relationship").is_none());
    }
}
