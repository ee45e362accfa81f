//! The batis.toml manifest.
//!
//! The manifest stands in for the database: an external introspection step
//! (or a human) records each table's columns here, together with the
//! generator and comment configuration. Parsing validates eagerly so that
//! no error surfaces after generation has started.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::{Error, Result, SourceContext},
    table::{IntrospectedColumn, IntrospectedTable, TableConfiguration},
};

/// Root schema for batis.toml.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Generator settings (targets, output packages).
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Comment/annotation hook options.
    #[serde(default)]
    pub comments: CommentOptions,

    /// Tables to generate, in declaration order.
    #[serde(default)]
    pub tables: IndexMap<String, TableDef>,
}

/// Target language for generated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Java,
    Kotlin,
}

/// `[generator]` settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Languages to emit; defaults to Java only.
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// Package for generated domain classes.
    #[serde(default = "default_model_package")]
    pub model_package: String,

    /// Package for generated mapper interfaces and extension functions.
    #[serde(default = "default_mapper_package")]
    pub mapper_package: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            model_package: default_model_package(),
            mapper_package: default_mapper_package(),
        }
    }
}

fn default_targets() -> Vec<Target> {
    vec![Target::Java]
}

fn default_model_package() -> String {
    "com.example.model".to_string()
}

fn default_mapper_package() -> String {
    "com.example.mapper".to_string()
}

/// `[comments]` options, passed verbatim to the comment/annotation hook.
///
/// The `date_format` pattern is validated when the hook configuration is
/// built, not here; the manifest only carries the raw string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentOptions {
    /// Omit timestamps everywhere, making output reproducible across runs.
    #[serde(default)]
    pub suppress_date: bool,

    /// Omit every documentation line; marker annotations are still attached.
    #[serde(default)]
    pub suppress_all_comments: bool,

    /// Include table/column remarks in documentation lines.
    #[serde(default)]
    pub add_remark_comments: bool,

    /// Custom strftime pattern for timestamps; RFC 3339 when absent.
    #[serde(default)]
    pub date_format: Option<String>,

    /// Emit a provenance header at the top of each generated file.
    #[serde(default)]
    pub add_file_header: bool,
}

/// `[tables.<name>]` definition.
#[derive(Debug, Deserialize)]
pub struct TableDef {
    /// Free-text table remarks.
    #[serde(default)]
    pub remarks: Option<String>,

    /// Columns in declaration order.
    #[serde(default)]
    pub columns: IndexMap<String, ColumnDef>,

    /// Per-operation toggles.
    #[serde(default)]
    pub generate: GenerateToggles,
}

/// `[tables.<name>.columns.<column>]` definition.
#[derive(Debug, Deserialize)]
pub struct ColumnDef {
    /// Fully-qualified Java type of the mapped field.
    #[serde(rename = "type")]
    pub java_type: String,

    /// Mapped field name; lower-camel of the column name when absent.
    #[serde(default)]
    pub field: Option<String>,

    /// Free-text column remarks.
    #[serde(default)]
    pub remarks: Option<String>,

    /// Whether this column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
}

/// `[tables.<name>.generate]` toggles; everything defaults to enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateToggles {
    #[serde(default = "enabled")]
    pub insert: bool,
    #[serde(default = "enabled")]
    pub insert_selective: bool,
    #[serde(default = "enabled")]
    pub select_by_primary_key: bool,
    #[serde(default = "enabled")]
    pub select_all: bool,
    #[serde(default = "enabled")]
    pub update_by_primary_key: bool,
    #[serde(default = "enabled")]
    pub update_by_primary_key_selective: bool,
    #[serde(default = "enabled")]
    pub delete_by_primary_key: bool,
    #[serde(default = "enabled")]
    pub count_all: bool,
}

fn enabled() -> bool {
    true
}

impl Default for GenerateToggles {
    fn default() -> Self {
        Self {
            insert: true,
            insert_selective: true,
            select_by_primary_key: true,
            select_all: true,
            update_by_primary_key: true,
            update_by_primary_key_selective: true,
            delete_by_primary_key: true,
            count_all: true,
        }
    }
}

impl From<&GenerateToggles> for TableConfiguration {
    fn from(t: &GenerateToggles) -> Self {
        Self {
            insert: t.insert,
            insert_selective: t.insert_selective,
            select_by_primary_key: t.select_by_primary_key,
            select_all: t.select_all,
            update_by_primary_key: t.update_by_primary_key,
            update_by_primary_key_selective: t.update_by_primary_key_selective,
            delete_by_primary_key: t.delete_by_primary_key,
            count_all: t.count_all,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "batis.toml")
    }
}

impl Manifest {
    /// Parse a batis.toml file from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Lower the manifest into introspected tables, in declaration order.
    pub fn tables(&self) -> Vec<IntrospectedTable> {
        self.tables
            .iter()
            .map(|(name, def)| {
                let mut table = IntrospectedTable::new(name.clone())
                    .config(TableConfiguration::from(&def.generate));
                table.remarks = def.remarks.clone();
                for (column_name, column) in &def.columns {
                    let mut introspected =
                        IntrospectedColumn::new(column_name.clone(), column.java_type.clone());
                    if let Some(field) = &column.field {
                        introspected = introspected.field_name(field.clone());
                    }
                    introspected.remarks = column.remarks.clone();
                    introspected.primary_key = column.primary_key;
                    table = table.column(introspected);
                }
                table
            })
            .collect()
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.generator.targets.is_empty() {
        return Err(ctx.validation_error("generator.targets must name at least one language"));
    }

    for (name, table) in &manifest.tables {
        if !is_valid_identifier(name) {
            return Err(ctx.invalid_identifier_error(name, "table"));
        }
        if table.columns.is_empty() {
            return Err(ctx.validation_error_for(format!("table '{name}' has no columns"), name));
        }

        let mut seen_fields = Vec::new();
        for (column_name, column) in &table.columns {
            if !is_valid_identifier(column_name) {
                return Err(ctx.invalid_identifier_error(column_name, "column"));
            }
            if column.java_type.trim().is_empty() {
                return Err(ctx.validation_error_for(
                    format!("column '{name}.{column_name}' has an empty type"),
                    column_name,
                ));
            }
            let field = column
                .field
                .clone()
                .unwrap_or_else(|| heck::ToLowerCamelCase::to_lower_camel_case(&**column_name));
            if seen_fields.contains(&field) {
                return Err(ctx.validation_error_for(
                    format!("table '{name}' maps two columns to field '{field}'"),
                    column_name,
                ));
            }
            seen_fields.push(field);
        }
    }
    Ok(())
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = r#"
        [generator]
        targets = ["java", "kotlin"]
        model_package = "com.acme.model"
        mapper_package = "com.acme.mapper"

        [comments]
        add_remark_comments = true

        [tables.customer]
        remarks = "holds customer records"

        [tables.customer.columns.cust_id]
        type = "java.lang.Long"
        primary_key = true

        [tables.customer.columns.cust_name]
        type = "java.lang.String"
        remarks = "display name"
    "#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_str(CUSTOMER).unwrap();
        assert_eq!(manifest.generator.targets, [Target::Java, Target::Kotlin]);
        assert_eq!(manifest.generator.model_package, "com.acme.model");
        assert!(manifest.comments.add_remark_comments);
        assert!(!manifest.comments.suppress_date);
        assert_eq!(manifest.tables.len(), 1);
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [tables.t.columns.id]
            type = "java.lang.Long"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.generator.targets, [Target::Java]);
        assert_eq!(manifest.generator.model_package, "com.example.model");
        assert!(manifest.tables["t"].generate.insert);
    }

    #[test]
    fn test_lowering_preserves_order() {
        let tables = Manifest::from_str(CUSTOMER).unwrap().tables();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.name, "customer");
        assert_eq!(table.remark_text(), Some("holds customer records"));
        let fields: Vec<_> = table.columns.iter().map(|c| c.field_name.as_str()).collect();
        assert_eq!(fields, ["custId", "custName"]);
        assert!(table.columns[0].primary_key);
        assert_eq!(table.columns[1].remark_text(), Some("display name"));
    }

    #[test]
    fn test_generate_toggles() {
        let manifest = Manifest::from_str(
            r#"
            [tables.t.columns.id]
            type = "java.lang.Long"
            primary_key = true

            [tables.t.generate]
            update_by_primary_key = false
            "#,
        )
        .unwrap();
        let table = &manifest.tables()[0];
        assert!(!table.config.update_by_primary_key);
        assert!(table.config.insert);
    }

    #[test]
    fn test_table_without_columns_rejected() {
        let err = Manifest::from_str(
            r#"
            [tables.empty]
            remarks = "nothing here"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("has no columns"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Manifest::from_str(
            r#"
            [tables.t.columns.cust_id]
            type = "java.lang.Long"

            [tables.t.columns.CUST_ID]
            type = "java.lang.Long"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("two columns"));
    }

    #[test]
    fn test_invalid_table_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [tables."3rd-party".columns.id]
            type = "java.lang.Long"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid table name"));
    }

    #[test]
    fn test_empty_targets_rejected() {
        let err = Manifest::from_str(
            r#"
            [generator]
            targets = []
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one language"));
    }
}
