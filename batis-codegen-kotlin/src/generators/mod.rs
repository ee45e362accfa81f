//! Per-table generators and the Kotlin generation facade.

mod data_class;
mod delete;
mod insert;
mod select;
mod support_object;
mod update;

use batis_codegen::{
    CommentGenerator, GeneratedFile, ImportCollector, MethodDoc, OperationKind,
};
use batis_schema::{IntrospectedTable, Manifest};
pub use data_class::DataClassGenerator;
pub use delete::DeleteByPrimaryKeyFunctionGenerator;
pub use insert::{InsertFunctionGenerator, InsertSelectiveFunctionGenerator};
pub use select::{
    CountAllFunctionGenerator, SelectAllFunctionGenerator, SelectByPrimaryKeyFunctionGenerator,
};
pub use support_object::SupportObjectGenerator;
pub use update::{
    UpdateByPrimaryKeyFunctionGenerator, UpdateByPrimaryKeySelectiveFunctionGenerator,
};

use crate::{
    ast::{KotlinArg, KotlinFile, KotlinFunction, KotlinItem, KotlinType},
    fragment::{FragmentGenerator, FunctionParts},
    naming,
    plugin::KotlinPluginChain,
    render::{RenderError, render_file},
};

/// One built function together with the imports its body requires.
///
/// Merging fragments contributes lines and imports at once; the assembler
/// later folds the imports into the file's collector.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionAndImports {
    pub function: KotlinFunction,
    pub imports: ImportCollector,
}

impl FunctionAndImports {
    pub fn with_function(function: KotlinFunction) -> Self {
        Self {
            function,
            imports: ImportCollector::new(),
        }
    }

    /// Merge a fragment: its lines append to the body, its imports join
    /// the function's import set.
    pub fn merge_parts(&mut self, parts: &FunctionParts) {
        self.function
            .code_lines
            .extend(parts.code_lines.iter().cloned());
        self.imports.extend(parts.imports.iter().cloned());
    }
}

/// Primary-key arguments for select/delete functions.
pub struct KeyArgs {
    pub args: Vec<KotlinArg>,
    pub imports: Vec<String>,
}

/// Shared state for the function generators of one table.
pub struct FunctionContext<'a> {
    pub table: &'a IntrospectedTable,
    pub mapper_name: String,
    pub record_type: KotlinType,
    pub fragments: FragmentGenerator<'a>,
    pub comments: &'a dyn CommentGenerator,
}

impl<'a> FunctionContext<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        model_package: &str,
        mapper_package: &'a str,
        comments: &'a dyn CommentGenerator,
    ) -> Self {
        Self {
            table,
            mapper_name: naming::mapper_name(&table.name),
            record_type: KotlinType::new(format!(
                "{}.{}",
                model_package,
                naming::data_class_name(&table.name)
            )),
            fragments: FragmentGenerator::new(table, mapper_package),
            comments,
        }
    }

    pub fn record_short_name(&self) -> String {
        self.record_type.short_name_with_type_arguments()
    }

    /// Arguments named `<field>_` for each key column, so they never
    /// shadow the support object's column properties.
    pub fn key_args(&self) -> KeyArgs {
        let mut args = Vec::new();
        let mut imports = Vec::new();
        for key in self.table.primary_key_columns() {
            let ty = KotlinType::from_java(&key.java_type);
            imports.extend(ty.import_list());
            args.push(
                KotlinArg::new(format!("{}_", key.field_name))
                    .data_type(ty.short_name_with_type_arguments()),
            );
        }
        KeyArgs { args, imports }
    }

    /// Apply the comment hook to a built function.
    pub fn add_function_comment(&self, result: &mut FunctionAndImports, doc: &MethodDoc) {
        self.comments
            .add_method_comment(&mut result.function.doc, self.table, doc);
        self.comments.add_method_annotation(
            &mut result.function.doc,
            &mut result.imports,
            self.table,
            None,
        );
    }
}

/// Assembles the mapper file for one table: support object plus one
/// extension function per enabled operation.
pub struct KotlinMapperGenerator<'a> {
    table: &'a IntrospectedTable,
    model_package: &'a str,
    mapper_package: &'a str,
    comments: &'a dyn CommentGenerator,
    plugins: &'a KotlinPluginChain,
}

impl<'a> KotlinMapperGenerator<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        model_package: &'a str,
        mapper_package: &'a str,
        comments: &'a dyn CommentGenerator,
        plugins: &'a KotlinPluginChain,
    ) -> Self {
        Self {
            table,
            model_package,
            mapper_package,
            comments,
            plugins,
        }
    }

    /// Build the mapper file; absent when no function survives.
    pub fn generate(&self) -> Option<KotlinFile> {
        let ctx = FunctionContext::new(
            self.table,
            self.model_package,
            self.mapper_package,
            self.comments,
        );
        let mut file = KotlinFile::new(&ctx.mapper_name, self.mapper_package);

        if let Some((object, imports)) =
            SupportObjectGenerator::new(self.table, self.comments, self.plugins).generate()
        {
            file.imports.merge(&imports);
            file.items.push(KotlinItem::Object(object));
        }

        let results = [
            (
                OperationKind::Insert,
                InsertFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::InsertSelective,
                InsertSelectiveFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::SelectByPrimaryKey,
                SelectByPrimaryKeyFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::SelectAll,
                SelectAllFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::UpdateByPrimaryKey,
                UpdateByPrimaryKeyFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::UpdateByPrimaryKeySelective,
                UpdateByPrimaryKeySelectiveFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::DeleteByPrimaryKey,
                DeleteByPrimaryKeyFunctionGenerator::new(&ctx).generate(),
            ),
            (
                OperationKind::CountAll,
                CountAllFunctionGenerator::new(&ctx).generate(),
            ),
        ];

        let mut function_count = 0usize;
        for (op, result) in results {
            let Some(mut built) = result else {
                continue;
            };
            if self
                .plugins
                .mapper_function_generated(op, &mut built.function, self.table)
            {
                file.imports.merge(&built.imports);
                file.items.push(KotlinItem::Function(built.function));
                function_count += 1;
            }
        }

        if function_count == 0 {
            tracing::debug!(table = %self.table.name, "no mapper functions generated");
            return None;
        }
        if !self.plugins.mapper_file_generated(&mut file, self.table) {
            tracing::debug!(table = %self.table.name, "mapper file vetoed by plugin");
            return None;
        }

        let file_name = file.file_name();
        self.comments
            .add_file_comment(&mut file.file_comment_lines, &file_name);
        Some(file)
    }
}

/// Generates all Kotlin sources for a manifest: one data class and one
/// mapper file per table.
pub struct KotlinGenerator<'a> {
    tables: Vec<IntrospectedTable>,
    model_package: String,
    mapper_package: String,
    comments: &'a dyn CommentGenerator,
    plugins: &'a KotlinPluginChain,
}

impl<'a> KotlinGenerator<'a> {
    pub fn new(
        manifest: &Manifest,
        comments: &'a dyn CommentGenerator,
        plugins: &'a KotlinPluginChain,
    ) -> Self {
        Self {
            tables: manifest.tables(),
            model_package: manifest.generator.model_package.clone(),
            mapper_package: manifest.generator.mapper_package.clone(),
            comments,
            plugins,
        }
    }

    /// Generate every Kotlin file, rendered and ready to write.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, RenderError> {
        let mut files = Vec::new();
        for table in &self.tables {
            tracing::debug!(table = %table.name, "generating Kotlin sources");

            let data_class = DataClassGenerator::new(
                table,
                &self.model_package,
                self.comments,
                self.plugins,
            )
            .generate();
            if let Some(file) = data_class {
                files.push(render_to_generated_file(&file)?);
            }

            let mapper = KotlinMapperGenerator::new(
                table,
                &self.model_package,
                &self.mapper_package,
                self.comments,
                self.plugins,
            )
            .generate();
            if let Some(file) = mapper {
                files.push(render_to_generated_file(&file)?);
            }
        }
        Ok(files)
    }
}

fn render_to_generated_file(file: &KotlinFile) -> Result<GeneratedFile, RenderError> {
    let content = render_file(file)?;
    let path = naming::source_path(&file.package, &file.file_name());
    Ok(GeneratedFile::new(path, content))
}

#[cfg(test)]
pub(crate) mod tests {
    use batis_codegen::{CommentConfig, DefaultCommentGenerator};
    use batis_schema::IntrospectedColumn;

    use super::*;

    /// Owns the pieces a [`FunctionContext`] borrows.
    pub(crate) struct ContextFixture {
        pub table: IntrospectedTable,
        pub comments: DefaultCommentGenerator,
    }

    impl ContextFixture {
        pub fn context(&self) -> FunctionContext<'_> {
            FunctionContext::new(&self.table, "com.acme.model", "com.acme.mapper", &self.comments)
        }
    }

    pub(crate) fn context_fixture() -> ContextFixture {
        ContextFixture {
            table: IntrospectedTable::new("customer")
                .column(IntrospectedColumn::new("cust_id", "java.lang.Long").primary_key())
                .column(IntrospectedColumn::new("cust_name", "java.lang.String")),
            comments: DefaultCommentGenerator::new(CommentConfig::default()),
        }
    }

    #[test]
    fn test_mapper_file_contains_support_object_and_functions() {
        let fixture = context_fixture();
        let plugins = KotlinPluginChain::new();
        let file = KotlinMapperGenerator::new(
            &fixture.table,
            "com.acme.model",
            "com.acme.mapper",
            &fixture.comments,
            &plugins,
        )
        .generate()
        .unwrap();

        assert_eq!(file.name, "CustomerMapper");
        assert!(matches!(file.items[0], KotlinItem::Object(_)));
        let function_names: Vec<&str> = file
            .items
            .iter()
            .filter_map(|item| match item {
                KotlinItem::Function(f) => Some(f.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            function_names,
            [
                "CustomerMapper.insert",
                "CustomerMapper.insertSelective",
                "CustomerMapper.selectByPrimaryKey",
                "CustomerMapper.selectAll",
                "CustomerMapper.updateByPrimaryKey",
                "CustomerMapper.updateByPrimaryKeySelective",
                "CustomerMapper.deleteByPrimaryKey",
                "CustomerMapper.countAll"
            ]
        );
    }

    #[test]
    fn test_function_veto_drops_function() {
        struct VetoInsert;
        impl crate::plugin::KotlinPlugin for VetoInsert {
            fn name(&self) -> &'static str {
                "veto-insert"
            }
            fn mapper_function_generated(
                &self,
                operation: OperationKind,
                _function: &mut KotlinFunction,
                _table: &IntrospectedTable,
            ) -> bool {
                operation != OperationKind::Insert
            }
        }

        let fixture = context_fixture();
        let plugins = KotlinPluginChain::new().plugin(VetoInsert);
        let file = KotlinMapperGenerator::new(
            &fixture.table,
            "com.acme.model",
            "com.acme.mapper",
            &fixture.comments,
            &plugins,
        )
        .generate()
        .unwrap();

        let has_insert = file.items.iter().any(|item| {
            matches!(item, KotlinItem::Function(f) if f.name == "CustomerMapper.insert")
        });
        assert!(!has_insert);
    }
}
