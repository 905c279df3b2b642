use crate::prelude::*;
use derive_more::Display;

///
/// Cardinality
///

#[derive(Clone, Copy, Default, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

///
/// FieldInfo
///
/// Type definition for one field as supplied by the metadata registry.
/// `value_type` carries the raw declared type name; multi-valued fields
/// declare the per-item type in `item_type` instead.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FieldInfo {
    pub label: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(default)]
    pub cardinality: Cardinality,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

impl FieldInfo {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Raw declared value type, before any fallback is applied.
    #[must_use]
    pub fn declared_value_type(&self) -> Option<&str> {
        let declared = match self.cardinality {
            Cardinality::One => self.value_type.as_deref(),
            Cardinality::Many => self.item_type.as_deref(),
        };

        declared.filter(|ty| !ty.is_empty())
    }

    /// Value kind used for handler dispatch.
    ///
    /// Fields with no usable declared type fall back to
    /// [`ValueKind::EntityReference`]; declared types outside the known
    /// set resolve to `None`.
    #[must_use]
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self.declared_value_type() {
            Some(ty) => ty.parse().ok(),
            None => Some(ValueKind::EntityReference),
        }
    }
}

///
/// TESTS
///
