//! Dynamic-SQL support object generation.

use batis_codegen::{CommentGenerator, ImportCollector};
use batis_schema::IntrospectedTable;

use crate::{
    ast::{KotlinObject, KotlinProperty, KotlinType},
    naming,
    plugin::KotlinPluginChain,
};

/// Builds the support object for one table: a table property plus one
/// column property per column.
pub struct SupportObjectGenerator<'a> {
    table: &'a IntrospectedTable,
    comments: &'a dyn CommentGenerator,
    plugins: &'a KotlinPluginChain,
}

impl<'a> SupportObjectGenerator<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        comments: &'a dyn CommentGenerator,
        plugins: &'a KotlinPluginChain,
    ) -> Self {
        Self {
            table,
            comments,
            plugins,
        }
    }

    /// Build the object and the imports it requires, or nothing when a
    /// plugin vetoes it.
    pub fn generate(&self) -> Option<(KotlinObject, ImportCollector)> {
        let table_property = naming::table_property_name(&self.table.name);
        let mut imports = ImportCollector::new();
        imports.add("org.mybatis.dynamic.sql.SqlTable");

        let mut object = KotlinObject::new(naming::support_object_name(&self.table.name));
        self.comments.add_type_comment(&mut object.doc, self.table);
        self.comments
            .add_type_annotation(&mut object.doc, &mut imports, self.table);

        object.properties.push(
            KotlinProperty::val(&table_property)
                .initializer(format!("SqlTable.of(\"{}\")", self.table.name)),
        );
        for column in &self.table.columns {
            let ty = KotlinType::from_java(&column.java_type);
            imports.extend(ty.import_list());
            object.properties.push(KotlinProperty::val(&column.field_name).initializer(format!(
                "{}.column<{}>(\"{}\")",
                table_property,
                ty.short_name_with_type_arguments(),
                column.actual_column_name
            )));
        }

        if !self.plugins.support_object_generated(&mut object, self.table) {
            tracing::debug!(table = %self.table.name, "support object vetoed by plugin");
            return None;
        }
        Some((object, imports))
    }
}
