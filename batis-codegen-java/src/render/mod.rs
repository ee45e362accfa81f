//! The Java renderer: a pure transform from a finished compilation unit
//! to file content.
//!
//! Rendering order is fixed: file comment lines, package declaration,
//! static imports (sorted), regular imports (sorted, de-duplicated,
//! filtered), then the type declaration rendered recursively. The model
//! is validated before the first line is emitted so a broken model never
//! produces a partial file.

mod type_decl;

use batis_codegen::CodeBuilder;
use thiserror::Error;

use crate::ast::{CompilationUnit, JavaEnum, Method, TypeDeclaration};

/// Structural-validation errors raised at render entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("type declaration has no name")]
    MissingTypeName,

    #[error("field without a name in type '{type_name}'")]
    MissingFieldName { type_name: String },

    #[error("method without a name in type '{type_name}'")]
    MissingMethodName { type_name: String },

    #[error("parameter without a name in method '{method_name}'")]
    MissingParameterName { method_name: String },
}

/// Render a compilation unit to file content.
///
/// Pure: rendering the same finished model twice yields byte-identical
/// output.
pub fn render_unit(unit: &CompilationUnit) -> Result<String, RenderError> {
    validate_type(&unit.type_decl)?;

    let mut builder = CodeBuilder::java();
    for line in &unit.file_comment_lines {
        builder = builder.line(line);
    }

    if !unit.package.is_empty() {
        builder = builder.line(&format!("package {};", unit.package)).blank();
    }

    let static_imports: Vec<&str> = unit.imports.iter_static().collect();
    if !static_imports.is_empty() {
        for import in static_imports {
            builder = builder.line(&format!("import static {import};"));
        }
        builder = builder.blank();
    }

    let imports = filtered_imports(unit);
    if !imports.is_empty() {
        for import in imports {
            builder = builder.line(&format!("import {import};"));
        }
        builder = builder.blank();
    }

    builder = builder.lines(type_decl::render_type(&unit.type_decl));
    Ok(builder.build())
}

/// Imports that actually render: qualified names outside `java.lang` and
/// outside the unit's own package.
fn filtered_imports(unit: &CompilationUnit) -> Vec<&str> {
    unit.imports
        .iter()
        .filter(|fqn| {
            let Some(pos) = fqn.rfind('.') else {
                return false;
            };
            let package = &fqn[..pos];
            package != "java.lang" && package != unit.package
        })
        .collect()
}

fn validate_type(decl: &TypeDeclaration) -> Result<(), RenderError> {
    if decl.name().trim().is_empty() {
        return Err(RenderError::MissingTypeName);
    }
    match decl {
        TypeDeclaration::Class(class) => {
            validate_fields(decl.name(), class.fields.iter().map(|f| f.name.as_str()))?;
            validate_methods(decl.name(), &class.methods)?;
            for nested in &class.nested {
                validate_type(nested)?;
            }
        }
        TypeDeclaration::Interface(interface) => {
            validate_methods(decl.name(), &interface.methods)?;
            for nested in &interface.nested {
                validate_type(nested)?;
            }
        }
        TypeDeclaration::Enum(enum_) => validate_enum(enum_)?,
    }
    Ok(())
}

fn validate_enum(enum_: &JavaEnum) -> Result<(), RenderError> {
    validate_fields(&enum_.name, enum_.fields.iter().map(|f| f.name.as_str()))?;
    validate_methods(&enum_.name, &enum_.methods)
}

fn validate_fields<'a>(
    type_name: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), RenderError> {
    for name in names {
        if name.trim().is_empty() {
            return Err(RenderError::MissingFieldName {
                type_name: type_name.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_methods(type_name: &str, methods: &[Method]) -> Result<(), RenderError> {
    for method in methods {
        if method.name.trim().is_empty() {
            return Err(RenderError::MissingMethodName {
                type_name: type_name.to_string(),
            });
        }
        for param in &method.params {
            if param.name.trim().is_empty() {
                return Err(RenderError::MissingParameterName {
                    method_name: method.name.clone(),
                });
            }
        }
    }
    Ok(())
}
