//! The compilation unit: one generated Java source file.

use batis_codegen::ImportCollector;

use super::TypeDeclaration;

/// The top-level container for one generated source file: package, file
/// comment lines, imports, and a single top-level type declaration.
///
/// Populated incrementally by builders, rendered exactly once, then
/// discarded; nothing mutates a unit after rendering has begun.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Package name; empty for the default package (renders no line).
    pub package: String,
    /// Literal comment lines above the package declaration.
    pub file_comment_lines: Vec<String>,
    /// Regular and static imports, de-duplicated and sorted on render.
    pub imports: ImportCollector,
    /// The single top-level type declaration.
    pub type_decl: TypeDeclaration,
}

impl CompilationUnit {
    pub fn new(package: impl Into<String>, type_decl: TypeDeclaration) -> Self {
        Self {
            package: package.into(),
            file_comment_lines: Vec::new(),
            imports: ImportCollector::new(),
            type_decl,
        }
    }

    /// File name this unit renders to, e.g. `Customer.java`.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.type_decl.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::JavaClass;

    #[test]
    fn test_file_name() {
        let unit = CompilationUnit::new(
            "com.acme.model",
            TypeDeclaration::Class(JavaClass::new("Customer")),
        );
        assert_eq!(unit.file_name(), "Customer.java");
    }
}
