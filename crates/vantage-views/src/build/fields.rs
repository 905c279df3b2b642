use crate::{build::BuildError, prelude::*};
use std::collections::BTreeMap;

///
/// Field Handler Mapping
///
/// Fills the field blocks of a table skeleton: every enumerated column
/// with a matching field definition gets exactly one handler block, and
/// reference-typed fields additionally get a relationship edge to the
/// target entity type's base table.
///

/// Populate field blocks for every table present in the schema.
///
/// Columns without a field definition are skipped; an unresolvable
/// reference target aborts the build.
pub fn map_fields(
    schema: &mut ViewsSchema,
    fields: &BTreeMap<String, FieldInfo>,
    columns: &dyn ColumnSource,
    entities: &dyn EntityLookup,
) -> Result<(), BuildError> {
    let tables: Vec<String> = schema.table_names().map(ToString::to_string).collect();

    for table in tables {
        for column in columns.table_columns(&table) {
            let Some(info) = fields.get(&column) else {
                continue;
            };
            let block = field_schema(&column, info, entities)?;
            if let Some(table) = schema.table_mut(&table) {
                table.fields.insert(column, block);
            }
        }
    }

    Ok(())
}

/// Build the handler block for one column from its field definition.
fn field_schema(
    name: &str,
    info: &FieldInfo,
    entities: &dyn EntityLookup,
) -> Result<FieldSchema, BuildError> {
    let mut block = FieldSchema {
        title: info.label.clone(),
        help: info.description.clone(),
        ..FieldSchema::default()
    };

    // Unrecognized value types stay unqueryable: the block exists with
    // its title and help but no handlers.
    let Some(kind) = info.value_kind() else {
        return Ok(block);
    };
    block.assign(HandlerSet::for_kind(kind));

    if kind.is_reference() {
        block.relationship = Some(relationship(name, info, entities)?);
    }

    Ok(block)
}

/// Resolve the relationship edge a reference field points at.
fn relationship(
    name: &str,
    info: &FieldInfo,
    entities: &dyn EntityLookup,
) -> Result<RelationshipSpec, BuildError> {
    let target = info
        .target_type
        .as_deref()
        .ok_or_else(|| BuildError::MissingTargetType {
            field: name.to_string(),
        })?;
    let target_info = entities
        .entity_info(target)
        .ok_or_else(|| BuildError::UnknownTargetType {
            field: name.to_string(),
            target: target.to_string(),
        })?;

    Ok(RelationshipSpec {
        base_table: target_info.base_table.clone(),
        base_field: target_info.id_key.clone(),
        label: info.label.clone(),
        handler: HandlerId::Standard,
    })
}

///
/// TESTS
///
