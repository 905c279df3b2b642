use crate::prelude::*;
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// ValueKind
///
/// Closed set of declared value types the handler mapper knows how to
/// query. Declared types outside this set parse to an error and end up
/// with no handler assignment at all, which keeps the field visible but
/// unqueryable rather than failing the build.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    #[display("boolean")]
    Boolean,

    #[display("entity_reference")]
    EntityReference,

    #[display("integer")]
    Integer,

    #[display("language")]
    Language,

    #[display("string")]
    String,

    #[display("uuid")]
    Uuid,
}

impl ValueKind {
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::EntityReference)
    }
}

impl FromStr for ValueKind {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "entity_reference" => Ok(Self::EntityReference),
            "integer" => Ok(Self::Integer),
            "language" => Ok(Self::Language),
            "string" => Ok(Self::String),
            "uuid" => Ok(Self::Uuid),
            _ => Err(UnknownValueType(s.to_string())),
        }
    }
}

///
/// UnknownValueType
///

#[derive(Debug, ThisError)]
#[error("unknown value type '{0}'")]
pub struct UnknownValueType(pub String);

///
/// TESTS
///
