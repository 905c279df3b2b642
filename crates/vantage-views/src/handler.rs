use crate::prelude::*;
use derive_more::Display;

///
/// HandlerId
///
/// Bare identifier naming a query-capability plugin (rendering,
/// filtering, argument binding, sorting). Resolution to concrete
/// behavior happens in the consuming query layer, not here.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum HandlerId {
    #[display("boolean")]
    Boolean,

    #[display("language")]
    Language,

    #[display("numeric")]
    Numeric,

    #[display("standard")]
    Standard,

    #[display("string")]
    String,
}

///
/// HandlerSet
///
/// Fixed (field, argument, filter, sort) handler assignment for one
/// value kind. The table is closed: every known kind maps to exactly
/// one set, and unknown value types never reach it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HandlerSet {
    pub field: HandlerId,
    pub argument: HandlerId,
    pub filter: HandlerId,
    pub sort: HandlerId,
}

impl HandlerSet {
    const fn new(
        field: HandlerId,
        argument: HandlerId,
        filter: HandlerId,
        sort: HandlerId,
    ) -> Self {
        Self {
            field,
            argument,
            filter,
            sort,
        }
    }

    #[must_use]
    pub const fn for_kind(kind: ValueKind) -> Self {
        use HandlerId::{Boolean, Language, Numeric, Standard, String};

        match kind {
            ValueKind::Integer | ValueKind::EntityReference => {
                Self::new(Numeric, Numeric, Numeric, Standard)
            }
            ValueKind::String | ValueKind::Uuid => Self::new(Standard, String, String, Standard),
            ValueKind::Language => Self::new(Language, Language, Language, Standard),
            ValueKind::Boolean => Self::new(Boolean, Numeric, Boolean, Standard),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use HandlerId::{Boolean, Language, Numeric, Standard, String};

    #[test]
    fn handler_ids_serialize_as_bare_identifiers() {
        assert_eq!(serde_json::to_string(&Numeric).unwrap(), "\"numeric\"");
        assert_eq!(Standard.to_string(), "standard");
    }

    #[test]
    fn integer_maps_to_numeric_handlers() {
        let set = HandlerSet::for_kind(ValueKind::Integer);

        assert_eq!(set, HandlerSet::new(Numeric, Numeric, Numeric, Standard));
    }

    #[test]
    fn string_maps_to_string_handlers() {
        let set = HandlerSet::for_kind(ValueKind::String);

        assert_eq!(set, HandlerSet::new(Standard, String, String, Standard));
    }

    #[test]
    fn uuid_maps_like_string() {
        assert_eq!(
            HandlerSet::for_kind(ValueKind::Uuid),
            HandlerSet::for_kind(ValueKind::String)
        );
    }

    #[test]
    fn language_maps_to_language_handlers() {
        let set = HandlerSet::for_kind(ValueKind::Language);

        assert_eq!(set, HandlerSet::new(Language, Language, Language, Standard));
    }

    #[test]
    fn boolean_filters_as_boolean_but_binds_numeric_arguments() {
        let set = HandlerSet::for_kind(ValueKind::Boolean);

        assert_eq!(set, HandlerSet::new(Boolean, Numeric, Boolean, Standard));
    }

    #[test]
    fn references_map_to_numeric_handlers() {
        assert_eq!(
            HandlerSet::for_kind(ValueKind::EntityReference),
            HandlerSet::for_kind(ValueKind::Integer)
        );
    }

    #[test]
    fn every_kind_sorts_with_the_standard_handler() {
        for kind in [
            ValueKind::Boolean,
            ValueKind::EntityReference,
            ValueKind::Integer,
            ValueKind::Language,
            ValueKind::String,
            ValueKind::Uuid,
        ] {
            assert_eq!(HandlerSet::for_kind(kind).sort, Standard);
        }
    }
}
