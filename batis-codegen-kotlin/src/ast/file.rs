//! The Kotlin source file model.

use batis_codegen::ImportCollector;

use super::{KotlinDataClass, KotlinFunction, KotlinObject};

/// One top-level item in a Kotlin file.
#[derive(Debug, Clone, PartialEq)]
pub enum KotlinItem {
    Function(KotlinFunction),
    DataClass(KotlinDataClass),
    Object(KotlinObject),
}

/// The top-level container for one generated Kotlin source file.
#[derive(Debug, Clone, PartialEq)]
pub struct KotlinFile {
    /// Base file name without the `.kt` extension.
    pub name: String,
    /// Package name; empty renders no package line.
    pub package: String,
    /// Literal comment lines above the package declaration.
    pub file_comment_lines: Vec<String>,
    /// Imports, de-duplicated and sorted on render.
    pub imports: ImportCollector,
    /// Top-level items in declaration order.
    pub items: Vec<KotlinItem>,
}

impl KotlinFile {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            file_comment_lines: Vec::new(),
            imports: ImportCollector::new(),
            items: Vec::new(),
        }
    }

    /// File name this file renders to, e.g. `CustomerMapper.kt`.
    pub fn file_name(&self) -> String {
        format!("{}.kt", self.name)
    }

    pub fn item(mut self, item: KotlinItem) -> Self {
        self.items.push(item);
        self
    }
}
