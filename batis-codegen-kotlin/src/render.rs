//! The Kotlin renderer.
//!
//! Same contract as the Java renderer: validation at entry, then a pure
//! fixed-order pass (file comments, package, sorted imports, items in
//! declaration order, blank line between items). Function bodies carry no
//! indentation of their own; nesting is derived from brace tracking: a
//! line starting with a closer dedents before emission, a line ending
//! with an opener indents after.

use batis_codegen::{CodeBuilder, ElementDoc};
use thiserror::Error;

use crate::ast::{
    KotlinDataClass, KotlinFile, KotlinFunction, KotlinItem, KotlinObject, KotlinProperty,
};

/// Structural-validation errors raised at render entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("kotlin file has no name")]
    MissingFileName,

    #[error("declaration without a name in file '{file_name}'")]
    MissingItemName { file_name: String },

    #[error("data class '{name}' has no properties")]
    EmptyDataClass { name: String },

    #[error("property without a name in '{type_name}'")]
    MissingPropertyName { type_name: String },
}

/// Render a Kotlin file to content.
///
/// Pure: rendering the same finished model twice yields byte-identical
/// output.
pub fn render_file(file: &KotlinFile) -> Result<String, RenderError> {
    validate(file)?;

    let mut builder = CodeBuilder::kotlin();
    for line in &file.file_comment_lines {
        builder = builder.line(line);
    }

    if !file.package.is_empty() {
        builder = builder.line(&format!("package {}", file.package)).blank();
    }

    let imports = filtered_imports(file);
    if !imports.is_empty() {
        for import in imports {
            builder = builder.line(&format!("import {import}"));
        }
        builder = builder.blank();
    }

    for (i, item) in file.items.iter().enumerate() {
        if i > 0 {
            builder = builder.blank();
        }
        let lines = match item {
            KotlinItem::Function(function) => render_function(function),
            KotlinItem::DataClass(class) => render_data_class(class),
            KotlinItem::Object(object) => render_object(object),
        };
        builder = builder.lines(lines);
    }
    Ok(builder.build())
}

fn filtered_imports(file: &KotlinFile) -> Vec<&str> {
    file.imports
        .iter()
        .filter(|fqn| {
            let Some(pos) = fqn.rfind('.') else {
                return false;
            };
            &fqn[..pos] != file.package
        })
        .collect()
}

fn doc_and_annotations(doc: &ElementDoc) -> Vec<String> {
    let mut lines: Vec<String> = doc.doc_lines().to_vec();
    lines.extend(doc.annotations().iter().map(|a| a.render()));
    lines
}

fn render_function(function: &KotlinFunction) -> Vec<String> {
    let args: Vec<String> = function
        .args
        .iter()
        .map(|arg| match &arg.data_type {
            Some(data_type) => format!("{}: {}", arg.name, data_type),
            None => arg.name.clone(),
        })
        .collect();

    let mut signature = format!("fun {}({})", function.name, args.join(", "));
    if let Some(return_type) = &function.return_type {
        signature.push_str(": ");
        signature.push_str(return_type);
    }

    let mut builder = CodeBuilder::kotlin().lines(doc_and_annotations(&function.doc));
    if function.one_line {
        signature.push_str(" =");
        builder = builder.line(&signature);
        builder = push_tracked_lines(builder.indent(), &function.code_lines).dedent();
    } else {
        signature.push_str(" {");
        builder = builder.line(&signature);
        builder = push_tracked_lines(builder.indent(), &function.code_lines)
            .dedent()
            .line("}");
    }
    builder.into_lines()
}

/// Emit body lines, adjusting the indent level from brace nesting.
fn push_tracked_lines(mut builder: CodeBuilder, lines: &[String]) -> CodeBuilder {
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('}') || trimmed.starts_with(')') {
            builder = builder.dedent();
        }
        builder = builder.line(trimmed);
        if trimmed.ends_with('{') || trimmed.ends_with('(') {
            builder = builder.indent();
        }
    }
    builder
}

fn render_data_class(class: &KotlinDataClass) -> Vec<String> {
    let mut builder = CodeBuilder::kotlin()
        .lines(doc_and_annotations(&class.doc))
        .line(&format!("data class {}(", class.name))
        .indent();

    let last = class.properties.len().saturating_sub(1);
    for (i, property) in class.properties.iter().enumerate() {
        // KDoc is not legal on constructor parameters; only annotations
        // are carried through.
        for annotation in property.doc.annotations() {
            builder = builder.line(&annotation.render());
        }
        let mut line = property_declaration(property);
        if i < last {
            line.push(',');
        }
        builder = builder.line(&line);
    }

    builder.dedent().line(")").into_lines()
}

fn render_object(object: &KotlinObject) -> Vec<String> {
    let mut builder = CodeBuilder::kotlin()
        .lines(doc_and_annotations(&object.doc))
        .line(&format!("object {} {{", object.name))
        .indent();

    for property in &object.properties {
        builder = builder.lines(doc_and_annotations(&property.doc));
        builder = builder.line(&property_declaration(property));
    }

    builder.dedent().line("}").into_lines()
}

fn property_declaration(property: &KotlinProperty) -> String {
    let mut line = String::new();
    line.push_str(if property.mutable { "var " } else { "val " });
    line.push_str(&property.name);
    if let Some(data_type) = &property.data_type {
        line.push_str(": ");
        line.push_str(data_type);
    }
    if let Some(initializer) = &property.initializer {
        line.push_str(" = ");
        line.push_str(initializer);
    }
    line
}

fn validate(file: &KotlinFile) -> Result<(), RenderError> {
    if file.name.trim().is_empty() {
        return Err(RenderError::MissingFileName);
    }
    for item in &file.items {
        match item {
            KotlinItem::Function(function) => {
                if function.name.trim().is_empty() {
                    return Err(RenderError::MissingItemName {
                        file_name: file.name.clone(),
                    });
                }
            }
            KotlinItem::DataClass(class) => {
                if class.name.trim().is_empty() {
                    return Err(RenderError::MissingItemName {
                        file_name: file.name.clone(),
                    });
                }
                if class.properties.is_empty() {
                    return Err(RenderError::EmptyDataClass {
                        name: class.name.clone(),
                    });
                }
                validate_properties(&class.name, &class.properties)?;
            }
            KotlinItem::Object(object) => {
                if object.name.trim().is_empty() {
                    return Err(RenderError::MissingItemName {
                        file_name: file.name.clone(),
                    });
                }
                validate_properties(&object.name, &object.properties)?;
            }
        }
    }
    Ok(())
}

fn validate_properties(
    type_name: &str,
    properties: &[KotlinProperty],
) -> Result<(), RenderError> {
    for property in properties {
        if property.name.trim().is_empty() {
            return Err(RenderError::MissingPropertyName {
                type_name: type_name.to_string(),
            });
        }
    }
    Ok(())
}
