//! Domain class generation.

use batis_codegen::{CommentGenerator, ImportCollector};
use batis_schema::IntrospectedTable;

use crate::{
    ast::{CompilationUnit, Field, JavaClass, JavaType, Method, Parameter, TypeDeclaration},
    naming,
    plugin::JavaPluginChain,
};

/// Builds the domain class for one table: a private field plus accessor
/// pair per column, decorated through the comment hook and filtered
/// through the plugin chain.
pub struct ModelClassGenerator<'a> {
    table: &'a IntrospectedTable,
    package: &'a str,
    comments: &'a dyn CommentGenerator,
    plugins: &'a JavaPluginChain,
}

impl<'a> ModelClassGenerator<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        package: &'a str,
        comments: &'a dyn CommentGenerator,
        plugins: &'a JavaPluginChain,
    ) -> Self {
        Self {
            table,
            package,
            comments,
            plugins,
        }
    }

    /// Build the compilation unit, or nothing when a plugin vetoes the
    /// whole class.
    pub fn generate(&self) -> Option<CompilationUnit> {
        let class_name = naming::model_class_name(&self.table.name);
        let mut imports = ImportCollector::new();
        let mut class = JavaClass::new(&class_name);

        self.comments.add_type_comment(&mut class.doc, self.table);
        self.comments
            .add_type_annotation(&mut class.doc, &mut imports, self.table);

        for column in &self.table.columns {
            let ty = JavaType::new(&column.java_type);
            imports.extend(ty.import_list());

            let mut field = Field::new(&column.field_name, ty.clone());
            self.comments
                .add_field_comment(&mut field.doc, self.table, column);
            self.comments
                .add_field_annotation(&mut field.doc, &mut imports, self.table, column);
            if self.plugins.model_field_generated(&mut field, self.table, column) {
                class.fields.push(field);
            }

            let mut getter = Method::new(naming::getter_name(&column.field_name))
                .returns(ty.clone())
                .body_line(format!("return {};", column.field_name));
            self.comments
                .add_method_annotation(&mut getter.doc, &mut imports, self.table, Some(column));
            if self
                .plugins
                .model_getter_generated(&mut getter, self.table, column)
            {
                class.methods.push(getter);
            }

            let mut setter = Method::new(naming::setter_name(&column.field_name))
                .param(Parameter::new(&column.field_name, ty))
                .body_line(format!(
                    "this.{0} = {0};",
                    column.field_name
                ));
            self.comments
                .add_method_annotation(&mut setter.doc, &mut imports, self.table, Some(column));
            if self
                .plugins
                .model_setter_generated(&mut setter, self.table, column)
            {
                class.methods.push(setter);
            }
        }

        if !self.plugins.model_class_generated(&mut class, self.table) {
            tracing::debug!(table = %self.table.name, "model class vetoed by plugin");
            return None;
        }

        let mut unit = CompilationUnit::new(self.package, TypeDeclaration::Class(class));
        unit.imports = imports;
        let file_name = unit.file_name();
        self.comments
            .add_file_comment(&mut unit.file_comment_lines, &file_name);
        Some(unit)
    }
}
