//! Per-table generators and the Java generation facade.

mod mapper;
mod model;

use batis_codegen::{CommentGenerator, GeneratedFile};
use batis_schema::{IntrospectedTable, Manifest};
pub use mapper::MapperInterfaceGenerator;
pub use model::ModelClassGenerator;

use crate::{
    ast::CompilationUnit,
    naming,
    plugin::JavaPluginChain,
    render::{RenderError, render_unit},
};

/// Generates all Java sources for a manifest: one domain class and one
/// mapper interface per table.
pub struct JavaGenerator<'a> {
    tables: Vec<IntrospectedTable>,
    model_package: String,
    mapper_package: String,
    comments: &'a dyn CommentGenerator,
    plugins: &'a JavaPluginChain,
}

impl<'a> JavaGenerator<'a> {
    pub fn new(
        manifest: &Manifest,
        comments: &'a dyn CommentGenerator,
        plugins: &'a JavaPluginChain,
    ) -> Self {
        Self {
            tables: manifest.tables(),
            model_package: manifest.generator.model_package.clone(),
            mapper_package: manifest.generator.mapper_package.clone(),
            comments,
            plugins,
        }
    }

    /// Generate every Java file, rendered and ready to write.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, RenderError> {
        let mut files = Vec::new();
        for table in &self.tables {
            tracing::debug!(table = %table.name, "generating Java sources");

            let model = ModelClassGenerator::new(
                table,
                &self.model_package,
                self.comments,
                self.plugins,
            )
            .generate();
            if let Some(unit) = model {
                files.push(render_file(&unit)?);
            }

            let mapper = MapperInterfaceGenerator::new(
                table,
                &self.model_package,
                &self.mapper_package,
                self.comments,
                self.plugins,
            )
            .generate();
            if let Some(unit) = mapper {
                files.push(render_file(&unit)?);
            }
        }
        Ok(files)
    }
}

fn render_file(unit: &CompilationUnit) -> Result<GeneratedFile, RenderError> {
    let content = render_unit(unit)?;
    let path = naming::source_path("java", &unit.package, &unit.file_name());
    Ok(GeneratedFile::new(path, content))
}
