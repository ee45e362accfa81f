//! Shared code generation utilities for the batis generator.
//!
//! This crate provides the language-agnostic pieces used by the
//! language-specific generator crates (`batis-codegen-java`,
//! `batis-codegen-kotlin`):
//!
//! - [`builder`] - Line/indent building blocks
//! - [`comment`] - The comment/annotation hook and its configuration
//! - [`ElementDoc`]/[`Annotation`] - Shared per-element documentation state
//! - [`ImportCollector`] - Sorted, de-duplicated import sets
//! - [`OperationDocs`] - Documentation templates keyed by operation kind
//! - [`DateFormat`] - Pure timestamp formatting
//! - [`GeneratedFile`] - Output file abstraction

pub mod builder;
pub mod comment;
mod element;
mod file;
mod imports;
mod operation;
mod timestamp;

pub use batis_schema::OperationKind;
pub use builder::{CodeBuilder, Indent};
pub use comment::{
    CommentConfig, CommentGenerator, DefaultCommentGenerator, GENERATED_ANNOTATION_IMPORT,
    GENERATOR_NAME, MethodDoc,
};
pub use element::{Annotation, ElementDoc};
pub use file::{GeneratedFile, Overwrite, WriteStatus};
pub use imports::ImportCollector;
pub use operation::OperationDocs;
pub use timestamp::{DateFormat, InvalidDateFormat};

/// Platform line separator used when joining rendered lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line separator used when joining rendered lines.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
