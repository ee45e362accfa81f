//! Fully-qualified Java type references.

/// A Java type reference: a fully-qualified base name plus generic type
/// arguments.
///
/// Knows how to produce its short display name (`List<Customer>`) and the
/// imports it requires. `java.lang` types, primitives, and unqualified
/// names contribute no imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    base: String,
    type_args: Vec<JavaType>,
}

impl JavaType {
    /// Parse a type specification, including generic arguments, e.g.
    /// `java.util.Map<java.lang.String, com.foo.Bar>`.
    pub fn new(spec: impl AsRef<str>) -> Self {
        parse_type(spec.as_ref())
    }

    /// Append a type argument after construction.
    pub fn type_argument(mut self, arg: JavaType) -> Self {
        self.type_args.push(arg);
        self
    }

    /// The fully-qualified base name, without type arguments.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The package part of the base name, if the name is qualified.
    pub fn package(&self) -> Option<&str> {
        self.base.rfind('.').map(|pos| &self.base[..pos])
    }

    /// The short base name, without package or type arguments.
    pub fn base_short_name(&self) -> &str {
        match self.base.rfind('.') {
            Some(pos) => &self.base[pos + 1..],
            None => &self.base,
        }
    }

    /// The short display name including type arguments, e.g.
    /// `Map<String, List<Customer>>`.
    pub fn short_name(&self) -> String {
        if self.type_args.is_empty() {
            return self.base_short_name().to_string();
        }
        let args: Vec<String> = self.type_args.iter().map(JavaType::short_name).collect();
        format!("{}<{}>", self.base_short_name(), args.join(", "))
    }

    /// Every import this type requires, recursively through its type
    /// arguments. De-duplication happens in the import collector.
    pub fn import_list(&self) -> Vec<String> {
        let mut imports = Vec::new();
        if self.requires_import() {
            imports.push(self.base.clone());
        }
        for arg in &self.type_args {
            imports.extend(arg.import_list());
        }
        imports
    }

    fn requires_import(&self) -> bool {
        match self.package() {
            Some(package) => package != "java.lang",
            // Primitives and unqualified names need no import.
            None => false,
        }
    }
}

fn parse_type(spec: &str) -> JavaType {
    let spec = spec.trim();
    let Some(open) = spec.find('<') else {
        return JavaType {
            base: spec.to_string(),
            type_args: Vec::new(),
        };
    };

    let base = spec[..open].trim().to_string();
    let inner = spec[open + 1..].trim_end_matches('>');
    let type_args = split_top_level(inner).into_iter().map(parse_type).collect();
    JavaType { base, type_args }
}

/// Split on commas that are not nested inside angle brackets.
fn split_top_level(spec: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in spec.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&spec[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if !spec[start..].trim().is_empty() {
        parts.push(&spec[start..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_lang_type() {
        let ty = JavaType::new("java.lang.String");
        assert_eq!(ty.short_name(), "String");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_unqualified_type() {
        let ty = JavaType::new("String");
        assert_eq!(ty.short_name(), "String");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_primitive() {
        let ty = JavaType::new("int");
        assert_eq!(ty.short_name(), "int");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_simple_type() {
        let ty = JavaType::new("com.foo.Bar");
        assert_eq!(ty.short_name(), "Bar");
        assert_eq!(ty.import_list(), ["com.foo.Bar"]);
    }

    #[test]
    fn test_generic_type_with_lang_argument() {
        let ty = JavaType::new("java.util.List<java.lang.String>");
        assert_eq!(ty.short_name(), "List<String>");
        assert_eq!(ty.import_list(), ["java.util.List"]);
    }

    #[test]
    fn test_nested_generics() {
        let ty = JavaType::new("java.util.Map<java.lang.String, java.util.List<java.lang.String>>");
        assert_eq!(ty.short_name(), "Map<String, List<String>>");
        assert_eq!(ty.import_list(), ["java.util.Map", "java.util.List"]);
    }

    #[test]
    fn test_generic_argument_requires_import() {
        let ty = JavaType::new("java.util.List<org.foo.Bar.Inner>");
        assert_eq!(ty.short_name(), "List<Inner>");
        assert_eq!(ty.import_list(), ["java.util.List", "org.foo.Bar.Inner"]);
    }

    #[test]
    fn test_nested_type_short_name_is_last_segment() {
        let ty = JavaType::new("org.foo.Bar.Inner");
        assert_eq!(ty.short_name(), "Inner");
        assert_eq!(ty.package(), Some("org.foo.Bar"));
        assert_eq!(ty.import_list(), ["org.foo.Bar.Inner"]);
    }

    #[test]
    fn test_late_type_argument() {
        let ty = JavaType::new("java.util.List").type_argument(JavaType::new("java.math.BigDecimal"));
        assert_eq!(ty.short_name(), "List<BigDecimal>");
        assert_eq!(ty.import_list(), ["java.util.List", "java.math.BigDecimal"]);
    }
}
