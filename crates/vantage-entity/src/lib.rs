pub mod field;
pub mod info;
pub mod registry;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        field::{Cardinality, FieldInfo},
        info::{EntityInfo, LayoutError},
        registry::{ColumnSource, EntityDefinitions, EntityLookup, TableColumns},
        types::ValueKind,
    };
    pub use serde::{Deserialize, Serialize};
}
