//! The comment/annotation hook.
//!
//! A [`CommentGenerator`] is invoked at fixed injection points while the
//! structural models are being built: once per element, immediately after
//! the element is created and before it is attached to its parent. It
//! appends documentation lines and marker annotations; it never removes
//! or reorders anything, and the renderers never call back into it.

mod config;
mod default;

use batis_schema::{IntrospectedColumn, IntrospectedTable, OperationKind};

pub use config::CommentConfig;
pub use default::{DefaultCommentGenerator, GENERATED_ANNOTATION_IMPORT, GENERATOR_NAME};

use crate::{element::ElementDoc, imports::ImportCollector};

/// What a generated method looks like, for documentation purposes.
///
/// Builders tag methods with their operation kind at construction time;
/// the hook formats documentation from the tag instead of parsing names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub operation: OperationKind,
    pub param_names: Vec<String>,
    /// Short display name of the return type, if the method returns one.
    pub return_type: Option<String>,
}

impl MethodDoc {
    pub fn new(operation: OperationKind) -> Self {
        Self {
            operation,
            param_names: Vec::new(),
            return_type: None,
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.param_names.push(name.into());
        self
    }

    pub fn returns(mut self, short_name: impl Into<String>) -> Self {
        self.return_type = Some(short_name.into());
        self
    }
}

/// Pluggable strategy for decorating generated elements with comments and
/// marker annotations.
///
/// Implementations must be purely additive to the passed element. Under
/// `suppress_all_comments` every decoration is expected to become a no-op
/// except annotation attachment: downstream merge tooling relies on the
/// marker annotation to recognize machine-generated elements, so it is
/// always attached.
pub trait CommentGenerator {
    /// Decorate the top of a generated file, above the package declaration.
    fn add_file_comment(&self, lines: &mut Vec<String>, file_name: &str);

    /// Decorate a class declaration.
    fn add_type_comment(&self, doc: &mut ElementDoc, table: &IntrospectedTable);

    /// Decorate an enum declaration.
    fn add_enum_comment(&self, doc: &mut ElementDoc, table: &IntrospectedTable);

    /// Decorate a field or property mapped from a column.
    fn add_field_comment(
        &self,
        doc: &mut ElementDoc,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    );

    /// Decorate a generated method or function.
    fn add_method_comment(&self, doc: &mut ElementDoc, table: &IntrospectedTable, method: &MethodDoc);

    /// Attach the generated-marker annotation to a type declaration.
    fn add_type_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
    );

    /// Attach the generated-marker annotation to a field or property.
    fn add_field_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    );

    /// Attach the generated-marker annotation to a method or function.
    ///
    /// `column` carries the provenance for accessors generated per column;
    /// methods that span the whole table pass `None`.
    fn add_method_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
        column: Option<&IntrospectedColumn>,
    );
}
