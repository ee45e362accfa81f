//! Shared documentation state for generated elements.
//!
//! Every documented element of the structural models (types, fields,
//! methods, functions, properties) embeds an [`ElementDoc`]: an
//! append-only buffer of literal documentation lines plus attached
//! annotations. The comment/annotation hook writes here; renderers read
//! it back verbatim. Sharing the data instead of a base class keeps the
//! element models plain tagged variants.

/// An annotation attached to a generated element: a name plus an optional
/// literal argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    argument: Option<String>,
}

impl Annotation {
    /// A bare marker annotation, e.g. `@Override`.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    /// An annotation with a literal argument, e.g. `@Generated(value="x")`.
    pub fn with_argument(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Render as a single source line (without indentation).
    pub fn render(&self) -> String {
        match &self.argument {
            Some(argument) => format!("@{}({})", self.name, argument),
            None => format!("@{}", self.name),
        }
    }
}

/// Append-only documentation buffer embedded in every documented element.
///
/// The hook contract is purely additive: lines and annotations can be
/// appended but never removed or reordered, so there are no mutable
/// accessors to the underlying vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementDoc {
    doc_lines: Vec<String>,
    annotations: Vec<Annotation>,
}

impl ElementDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one literal documentation line (including any comment
    /// delimiters, e.g. `/**` or ` * text`).
    pub fn push_doc_line(&mut self, line: impl Into<String>) {
        self.doc_lines.push(line.into());
    }

    /// Append an annotation.
    pub fn push_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn doc_lines(&self) -> &[String] {
        &self.doc_lines
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lines.is_empty() && self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_annotation() {
        assert_eq!(Annotation::marker("Override").render(), "@Override");
    }

    #[test]
    fn test_annotation_with_argument() {
        let a = Annotation::with_argument("Generated", "value=\"batis-codegen\"");
        assert_eq!(a.render(), "@Generated(value=\"batis-codegen\")");
        assert_eq!(a.name(), "Generated");
        assert_eq!(a.argument(), Some("value=\"batis-codegen\""));
    }

    #[test]
    fn test_doc_append_order_is_preserved() {
        let mut doc = ElementDoc::new();
        doc.push_doc_line("/**");
        doc.push_doc_line(" * Database Table: customer");
        doc.push_doc_line(" */");
        doc.push_annotation(Annotation::marker("Generated"));

        assert_eq!(
            doc.doc_lines(),
            ["/**", " * Database Table: customer", " */"]
        );
        assert_eq!(doc.annotations().len(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_empty_doc() {
        assert!(ElementDoc::new().is_empty());
    }
}
