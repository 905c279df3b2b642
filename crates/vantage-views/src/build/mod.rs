//! Schema assembly in two staged, deterministic passes: table topology
//! first, then per-column handler mapping.

pub mod fields;
pub mod topology;

use crate::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// BuildError
///
/// Broken referential integrity is the only fatal condition: a schema
/// that claims a relationship to an unregistered entity type must not
/// be handed to the query layer. Everything else is handled by omission.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("field '{field}' references entity type '{target}', which is not registered")]
    UnknownTargetType { field: String, target: String },

    #[error("field '{field}' is a reference but declares no target entity type")]
    MissingTargetType { field: String },
}

///
/// SchemaBuilder
///
/// Assembles the query-schema description for one entity type from its
/// storage layout, field definitions, and the injected collaborator
/// seams. All inputs are read-only snapshots; building twice from the
/// same inputs yields structurally equal schemas.
///

pub struct SchemaBuilder<'a> {
    info: &'a EntityInfo,
    fields: &'a BTreeMap<String, FieldInfo>,
    columns: &'a dyn ColumnSource,
    entities: &'a dyn EntityLookup,
    translator: &'a dyn Translator,
}

impl<'a> SchemaBuilder<'a> {
    #[must_use]
    pub fn new(
        info: &'a EntityInfo,
        fields: &'a BTreeMap<String, FieldInfo>,
        columns: &'a dyn ColumnSource,
        entities: &'a dyn EntityLookup,
    ) -> Self {
        Self {
            info,
            fields,
            columns,
            entities,
            translator: &IdentityTranslator,
        }
    }

    #[must_use]
    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = translator;
        self
    }

    /// Build the full schema description.
    pub fn build(&self) -> Result<ViewsSchema, BuildError> {
        let mut schema = topology::topology(self.info, self.translator);
        fields::map_fields(&mut schema, self.fields, self.columns, self.entities)?;

        Ok(schema)
    }
}
