use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// EntityInfo
///
/// Storage layout for one entity type: which physical tables exist and
/// which key columns tie them together. The base table and id key are
/// always present; everything else is optional.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityInfo {
    pub entity_type: String,
    pub label: String,
    pub base_table: String,
    pub id_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_data_table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_key: Option<String>,
}

impl EntityInfo {
    #[must_use]
    pub fn new(
        entity_type: impl Into<String>,
        label: impl Into<String>,
        base_table: impl Into<String>,
        id_key: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            label: label.into(),
            base_table: base_table.into(),
            id_key: id_key.into(),
            data_table: None,
            revision_table: None,
            revision_data_table: None,
            revision_key: None,
        }
    }

    #[must_use]
    pub const fn is_revisionable(&self) -> bool {
        self.revision_table.is_some()
    }

    /// Revision table and key, when both are declared.
    #[must_use]
    pub fn revision(&self) -> Option<(&str, &str)> {
        self.revision_table
            .as_deref()
            .zip(self.revision_key.as_deref())
    }

    /// Check the layout for declarations that cannot take effect.
    ///
    /// The schema builders tolerate these gaps by omission; this surfaces
    /// them to callers that want to fail at registration time instead.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.revision_data_table.is_some() && self.revision_table.is_none() {
            return Err(LayoutError::RevisionDataWithoutRevision {
                entity_type: self.entity_type.clone(),
            });
        }
        if self.revision_table.is_some() && self.revision_key.is_none() {
            return Err(LayoutError::RevisionKeyMissing {
                entity_type: self.entity_type.clone(),
            });
        }

        Ok(())
    }
}

///
/// LayoutError
///

#[derive(Debug, ThisError)]
pub enum LayoutError {
    #[error("entity type '{entity_type}' declares a revision data table without a revision table")]
    RevisionDataWithoutRevision { entity_type: String },

    #[error("entity type '{entity_type}' declares a revision table without a revision key")]
    RevisionKeyMissing { entity_type: String },
}

///
/// TESTS
///
