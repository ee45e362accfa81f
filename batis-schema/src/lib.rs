// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Input model for the batis generator.
//!
//! This crate carries everything the generator consumes: introspected
//! table metadata (the external interface to a schema-introspection
//! collaborator) and the batis.toml manifest that transports it together
//! with generator configuration.

mod error;
mod manifest;
mod table;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ColumnDef, CommentOptions, GenerateToggles, GeneratorConfig, Manifest, TableDef, Target,
    parse_manifest,
};
pub use table::{IntrospectedColumn, IntrospectedTable, OperationKind, TableConfiguration};
