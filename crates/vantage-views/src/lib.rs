//! Query-schema descriptions derived from entity storage metadata.
//!
//! Given an entity type's [`EntityInfo`](vantage_entity::info::EntityInfo)
//! and its field definitions, [`build::SchemaBuilder`] produces a
//! [`data::ViewsSchema`]: one record per storage table with join edges
//! between them and per-field handler assignments, ready for a
//! query-builder layer to consume.

pub mod build;
pub mod data;
pub mod handler;
pub mod translate;

use crate::build::BuildError;
use thiserror::Error as ThisError;
use vantage_entity::info::LayoutError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{BuildError, SchemaBuilder},
        data::{BaseInfo, FieldSchema, JoinSpec, RelationshipSpec, TableSchema, ViewsSchema},
        handler::{HandlerId, HandlerSet},
        translate::{IdentityTranslator, Translator},
    };
    pub use vantage_entity::prelude::*;
}
