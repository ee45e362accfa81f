//! Data class generation.

use batis_codegen::{CommentGenerator, ImportCollector};
use batis_schema::IntrospectedTable;

use crate::{
    ast::{KotlinDataClass, KotlinFile, KotlinItem, KotlinProperty, KotlinType},
    naming,
    plugin::KotlinPluginChain,
};

/// Builds the domain data class for one table: one nullable, defaulted
/// `var` property per column.
pub struct DataClassGenerator<'a> {
    table: &'a IntrospectedTable,
    model_package: &'a str,
    comments: &'a dyn CommentGenerator,
    plugins: &'a KotlinPluginChain,
}

impl<'a> DataClassGenerator<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        model_package: &'a str,
        comments: &'a dyn CommentGenerator,
        plugins: &'a KotlinPluginChain,
    ) -> Self {
        Self {
            table,
            model_package,
            comments,
            plugins,
        }
    }

    /// Build the file, or nothing when a plugin vetoes the class.
    pub fn generate(&self) -> Option<KotlinFile> {
        let name = naming::data_class_name(&self.table.name);
        let mut imports = ImportCollector::new();
        let mut class = KotlinDataClass::new(&name);

        self.comments.add_type_comment(&mut class.doc, self.table);
        self.comments
            .add_type_annotation(&mut class.doc, &mut imports, self.table);

        for column in &self.table.columns {
            let ty = KotlinType::from_java(&column.java_type);
            imports.extend(ty.import_list());

            let mut property = KotlinProperty::var(&column.field_name)
                .data_type(format!("{}?", ty.short_name_with_type_arguments()))
                .initializer("null");
            self.comments
                .add_field_annotation(&mut property.doc, &mut imports, self.table, column);
            class.properties.push(property);
        }

        if !self.plugins.data_class_generated(&mut class, self.table) {
            tracing::debug!(table = %self.table.name, "data class vetoed by plugin");
            return None;
        }

        let mut file = KotlinFile::new(&name, self.model_package);
        file.imports = imports;
        let file_name = file.file_name();
        self.comments
            .add_file_comment(&mut file.file_comment_lines, &file_name);
        file.items.push(KotlinItem::DataClass(class));
        Some(file)
    }
}

#[cfg(test)]
mod tests {
    use batis_codegen::{CommentConfig, DefaultCommentGenerator};
    use batis_schema::IntrospectedColumn;

    use super::*;

    #[test]
    fn test_data_class_properties_are_nullable_vars() {
        let table = IntrospectedTable::new("customer")
            .column(IntrospectedColumn::new("cust_id", "java.lang.Long").primary_key())
            .column(IntrospectedColumn::new("balance", "java.math.BigDecimal"));
        let hook = DefaultCommentGenerator::new(CommentConfig::default());
        let plugins = KotlinPluginChain::new();

        let file = DataClassGenerator::new(&table, "com.acme.model", &hook, &plugins)
            .generate()
            .unwrap();

        let KotlinItem::DataClass(class) = &file.items[0] else {
            panic!("expected a data class");
        };
        assert_eq!(class.name, "Customer");
        assert_eq!(class.properties[0].data_type.as_deref(), Some("Long?"));
        assert_eq!(class.properties[0].initializer.as_deref(), Some("null"));
        assert!(class.properties[0].mutable);
        assert_eq!(
            class.properties[1].data_type.as_deref(),
            Some("BigDecimal?")
        );
        assert!(file.imports.contains("java.math.BigDecimal"));
        assert!(file.imports.contains("javax.annotation.Generated"));
    }
}
