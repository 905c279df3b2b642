use crate::prelude::*;

///
/// Table Topology
///
/// Derives the table/join skeleton for an entity type: which storage
/// tables exist, which of them are query roots, and how they join back
/// to their parent. Field blocks are left empty for the handler mapper.
///

/// Derive the table and join skeleton from a storage layout.
///
/// Pure and infallible: absent optional tables are simply omitted.
pub fn topology(info: &EntityInfo, translator: &dyn Translator) -> ViewsSchema {
    let mut schema = ViewsSchema::default();

    let base = schema.entry(&info.base_table);
    base.entity_type = Some(info.entity_type.clone());
    base.group = Some(info.label.clone());
    base.base = Some(BaseInfo {
        field: info.id_key.clone(),
        title: info.label.clone(),
    });

    // Data table rows are per-translation copies of the same entity, so
    // the table joins back to the base by entity id and is not an
    // independent query root.
    if let Some(data_table) = &info.data_table {
        schema
            .entry(data_table)
            .joins
            .insert(info.base_table.clone(), JoinSpec::on(&info.id_key));
    }

    // A revision table declared without a revision key is a configuration
    // gap; both revision tables are then left out.
    if let Some((revision_table, revision_key)) = info.revision() {
        let table = schema.entry(revision_table);
        table.entity_type = Some(info.entity_type.clone());
        table.group = Some(info.label.clone());
        table.base = Some(BaseInfo {
            field: revision_key.to_string(),
            title: translator.translate("{label} revisions", &[("label", &info.label)]),
        });
        // The per-entity id links revisions to the base table, not the
        // revision id.
        table
            .joins
            .insert(info.base_table.clone(), JoinSpec::on(&info.id_key));

        if let Some(revision_data_table) = &info.revision_data_table {
            schema
                .entry(revision_data_table)
                .joins
                .insert(revision_table.to_string(), JoinSpec::on(revision_key));
        }
    }

    schema
}

///
/// TESTS
///
