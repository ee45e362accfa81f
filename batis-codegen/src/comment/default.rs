//! Default comment/annotation hook.

use batis_schema::{IntrospectedColumn, IntrospectedTable};
use chrono::{DateTime, Utc};

use super::{CommentConfig, CommentGenerator, MethodDoc};
use crate::{
    element::{Annotation, ElementDoc},
    imports::ImportCollector,
    operation::OperationDocs,
};

/// Identifying name carried by every generated-marker annotation.
pub const GENERATOR_NAME: &str = "batis-codegen";

/// Import required by the generated-marker annotation.
pub const GENERATED_ANNOTATION_IMPORT: &str = "javax.annotation.Generated";

/// The built-in comment/annotation hook.
///
/// The timestamp is captured once at construction, so a single instance
/// can be shared read-only across per-table generation tasks and every
/// artifact of one run carries the same timestamp.
#[derive(Debug, Clone)]
pub struct DefaultCommentGenerator {
    config: CommentConfig,
    timestamp: Option<String>,
}

impl DefaultCommentGenerator {
    /// Create a hook stamping the current instant.
    pub fn new(config: CommentConfig) -> Self {
        Self::at(config, Utc::now())
    }

    /// Create a hook stamping a fixed instant.
    pub fn at(config: CommentConfig, instant: DateTime<Utc>) -> Self {
        let timestamp = (!config.suppress_date).then(|| config.date_format.format(instant));
        Self { config, timestamp }
    }

    pub fn config(&self) -> &CommentConfig {
        &self.config
    }

    /// The formatted timestamp, absent when dates are suppressed.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn push_remark_lines(&self, doc: &mut ElementDoc, remark: Option<&str>) {
        if !self.config.add_remark_comments {
            return;
        }
        if let Some(remark) = remark {
            for line in remark.lines() {
                doc.push_doc_line(format!(" *   {line}"));
            }
        }
    }

    /// The marker annotation, always attached regardless of comment
    /// suppression: downstream merge tooling keys on its presence.
    ///
    /// Under `suppress_all_comments` the argument degrades to the bare
    /// quoted generator name; otherwise it carries `value`, an optional
    /// `date` (dropped when dates are suppressed), and the provenance in
    /// `comments`.
    fn generated_annotation(&self, provenance: &str) -> Annotation {
        let mut argument = String::new();
        if self.config.suppress_all_comments {
            argument.push('"');
            argument.push_str(GENERATOR_NAME);
            argument.push('"');
        } else {
            argument.push_str("value=\"");
            argument.push_str(GENERATOR_NAME);
            argument.push('"');
            if let Some(timestamp) = &self.timestamp {
                argument.push_str(", date=\"");
                argument.push_str(timestamp);
                argument.push('"');
            }
            argument.push_str(", comments=\"");
            argument.push_str(provenance);
            argument.push('"');
        }
        Annotation::with_argument("Generated", argument)
    }
}

impl CommentGenerator for DefaultCommentGenerator {
    fn add_file_comment(&self, lines: &mut Vec<String>, file_name: &str) {
        if !self.config.add_file_header || self.config.suppress_all_comments {
            return;
        }
        lines.push("/*".to_string());
        lines.push(format!(" * {file_name}"));
        lines.push(format!(" * Generated by {GENERATOR_NAME}."));
        if let Some(timestamp) = &self.timestamp {
            lines.push(format!(" * Generated on: {timestamp}"));
        }
        lines.push(" */".to_string());
    }

    fn add_type_comment(&self, doc: &mut ElementDoc, table: &IntrospectedTable) {
        if self.config.suppress_all_comments {
            return;
        }
        doc.push_doc_line("/**");
        doc.push_doc_line(format!(" * Database Table: {}", table.name));
        self.push_remark_lines(doc, table.remark_text());
        if let Some(timestamp) = &self.timestamp {
            doc.push_doc_line(" *");
            doc.push_doc_line(format!(" * @date {timestamp}"));
        }
        doc.push_doc_line(" */");
    }

    fn add_enum_comment(&self, doc: &mut ElementDoc, table: &IntrospectedTable) {
        self.add_type_comment(doc, table);
    }

    fn add_field_comment(
        &self,
        doc: &mut ElementDoc,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) {
        if self.config.suppress_all_comments {
            return;
        }
        doc.push_doc_line("/**");
        doc.push_doc_line(format!(
            " * Database Column: {}.{}",
            table.name, column.actual_column_name
        ));
        self.push_remark_lines(doc, column.remark_text());
        doc.push_doc_line(" */");
    }

    fn add_method_comment(
        &self,
        doc: &mut ElementDoc,
        table: &IntrospectedTable,
        method: &MethodDoc,
    ) {
        if self.config.suppress_all_comments {
            return;
        }
        doc.push_doc_line("/**");
        doc.push_doc_line(format!(" * {}", method.operation.describe(&table.name)));
        if !method.param_names.is_empty() || method.return_type.is_some() {
            doc.push_doc_line(" *");
        }
        for param in &method.param_names {
            doc.push_doc_line(format!(
                " * @param {param} {}",
                method.operation.param_description(param)
            ));
        }
        if let Some(return_type) = &method.return_type {
            doc.push_doc_line(format!(" * @return {return_type}"));
        }
        doc.push_doc_line(" */");
    }

    fn add_type_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
    ) {
        imports.add(GENERATED_ANNOTATION_IMPORT);
        doc.push_annotation(self.generated_annotation(&format!("Source Table: {}", table.name)));
    }

    fn add_field_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) {
        imports.add(GENERATED_ANNOTATION_IMPORT);
        doc.push_annotation(self.generated_annotation(&format!(
            "Source field: {}.{}",
            table.name, column.actual_column_name
        )));
    }

    fn add_method_annotation(
        &self,
        doc: &mut ElementDoc,
        imports: &mut ImportCollector,
        table: &IntrospectedTable,
        column: Option<&IntrospectedColumn>,
    ) {
        imports.add(GENERATED_ANNOTATION_IMPORT);
        let provenance = match column {
            Some(column) => format!("Source field: {}.{}", table.name, column.actual_column_name),
            None => format!("Source Table: {}", table.name),
        };
        doc.push_annotation(self.generated_annotation(&provenance));
    }
}
