#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for typebind: resolved class hierarchies.
//!
//! Two layers:
//! - **Deserialization layer** (`Raw*`): 1:1 mapping to the resolver's JSON output
//! - **Analysis layer**: [`TypeDefinition`]s indexed by a [`TypeTable`]
//!
//! All analysis types are plain values. Passes clone what they transform and
//! never mutate the table they read from.

mod member;
mod method_id;
mod raw;
mod table;
mod type_def;
mod type_ref;
pub mod utils;

#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod type_ref_tests;
#[cfg(test)]
mod utils_tests;

pub use member::{Field, Member, Method, MethodKind, Parameter};
pub use method_id::MethodId;
pub use raw::{
    RawField, RawMember, RawMethod, RawModel, RawParam, RawPrimitive, RawTypeDefinition,
    RawTypeKind, RawTypeParam, RawTypeRef, parse_model,
};
pub use table::TypeTable;
pub use type_def::{TypeDefinition, TypeKind};
pub use type_ref::TypeRef;

/// Errors raised while loading a model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed resolver output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
