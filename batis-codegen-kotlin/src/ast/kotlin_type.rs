//! Fully-qualified Kotlin type references.

/// A Kotlin type reference: a fully-qualified base name plus generic type
/// arguments.
///
/// Types from the `kotlin` standard packages and unqualified names are
/// imported implicitly and contribute nothing to the import list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinType {
    base: String,
    type_args: Vec<KotlinType>,
}

impl KotlinType {
    /// Parse a type specification, including generic arguments, e.g.
    /// `kotlin.collections.Map<kotlin.String, com.foo.Bar>`.
    pub fn new(spec: impl AsRef<str>) -> Self {
        parse_type(spec.as_ref())
    }

    /// Map a fully-qualified Java type to its Kotlin counterpart, e.g.
    /// `java.lang.Integer` → `Int`, `java.util.List<java.lang.String>` →
    /// `List<String>`.
    pub fn from_java(java_spec: &str) -> Self {
        let ty = Self::new(java_spec);
        let base = match ty.base.as_str() {
            "java.lang.Byte" => "kotlin.Byte",
            "java.lang.Short" => "kotlin.Short",
            "java.lang.Integer" => "kotlin.Int",
            "java.lang.Long" => "kotlin.Long",
            "java.lang.Float" => "kotlin.Float",
            "java.lang.Double" => "kotlin.Double",
            "java.lang.Boolean" => "kotlin.Boolean",
            "java.lang.Character" => "kotlin.Char",
            "java.lang.String" => "kotlin.String",
            "java.lang.Object" => "kotlin.Any",
            "java.util.List" => "kotlin.collections.List",
            "java.util.Map" => "kotlin.collections.Map",
            other => other,
        };
        KotlinType {
            base: base.to_string(),
            type_args: ty
                .type_args
                .iter()
                .map(|arg| KotlinType::from_java(&arg.spec()))
                .collect(),
        }
    }

    /// Append a type argument after construction.
    pub fn type_argument(mut self, arg: KotlinType) -> Self {
        self.type_args.push(arg);
        self
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
    /// `Map<String, List<String>>`.
    pub fn short_name_with_type_arguments(&self) -> String {
        if self.type_args.is_empty() {
            return self.base_short_name().to_string();
        }
        let args: Vec<String> = self
            .type_args
            .iter()
            .map(KotlinType::short_name_with_type_arguments)
            .collect();
        format!("{}<{}>", self.base_short_name(), args.join(", "))
    }

    /// Every import this type requires, recursively through its type
    /// arguments.
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
            Some(package) => package != "kotlin" && !package.starts_with("kotlin."),
            None => false,
        }
    }

    /// The fully-qualified spelling including type arguments.
    fn spec(&self) -> String {
        if self.type_args.is_empty() {
            return self.base.clone();
        }
        let args: Vec<String> = self.type_args.iter().map(KotlinType::spec).collect();
        format!("{}<{}>", self.base, args.join(", "))
    }
}

fn parse_type(spec: &str) -> KotlinType {
    let spec = spec.trim();
    let Some(open) = spec.find('<') else {
        return KotlinType {
            base: spec.to_string(),
            type_args: Vec::new(),
        };
    };

    let base = spec[..open].trim().to_string();
    let inner = spec[open + 1..].trim_end_matches('>');
    let type_args = split_top_level(inner).into_iter().map(parse_type).collect();
    KotlinType { base, type_args }
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
    fn test_kotlin_primitive() {
        let ty = KotlinType::new("kotlin.String");
        assert_eq!(ty.short_name_with_type_arguments(), "String");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_unqualified_name() {
        let ty = KotlinType::new("String");
        assert_eq!(ty.short_name_with_type_arguments(), "String");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_simple_type() {
        let ty = KotlinType::new("com.foo.Bar");
        assert_eq!(ty.short_name_with_type_arguments(), "Bar");
        assert_eq!(ty.import_list(), ["com.foo.Bar"]);
    }

    #[test]
    fn test_lower_case_short_name() {
        let ty = KotlinType::new("com.foo.bar");
        assert_eq!(ty.short_name_with_type_arguments(), "bar");
        assert_eq!(ty.import_list(), ["com.foo.bar"]);
    }

    #[test]
    fn test_generic_of_kotlin_types() {
        let ty = KotlinType::new("kotlin.collections.List<kotlin.String>");
        assert_eq!(ty.short_name_with_type_arguments(), "List<String>");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_generic_of_unqualified_types() {
        let ty = KotlinType::new("List<String>");
        assert_eq!(ty.short_name_with_type_arguments(), "List<String>");
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_nested_generics() {
        let ty =
            KotlinType::new("kotlin.collections.Map<kotlin.String, kotlin.collections.List<kotlin.String>>");
        assert_eq!(
            ty.short_name_with_type_arguments(),
            "Map<String, List<String>>"
        );
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_nested_unqualified_generics() {
        let ty = KotlinType::new("List<Map<String, String>>");
        assert_eq!(
            ty.short_name_with_type_arguments(),
            "List<Map<String, String>>"
        );
        assert!(ty.import_list().is_empty());
    }

    #[test]
    fn test_nested_type_short_name_is_last_segment() {
        let ty = KotlinType::new("org.foo.Bar.Inner");
        assert_eq!(ty.short_name_with_type_arguments(), "Inner");
        assert_eq!(ty.import_list(), ["org.foo.Bar.Inner"]);
    }

    #[test]
    fn test_generic_argument_requires_import() {
        let ty = KotlinType::new("java.util.List<org.foo.Bar.Inner>");
        assert_eq!(ty.short_name_with_type_arguments(), "List<Inner>");
        assert_eq!(ty.import_list(), ["java.util.List", "org.foo.Bar.Inner"]);
    }

    #[test]
    fn test_late_type_argument() {
        let ty = KotlinType::new("List").type_argument(KotlinType::new("java.math.BigDecimal"));
        assert_eq!(ty.short_name_with_type_arguments(), "List<BigDecimal>");
        assert_eq!(ty.import_list(), ["java.math.BigDecimal"]);
    }

    #[test]
    fn test_late_nested_type_argument() {
        let inner = KotlinType::new("some.generic.Thing").type_argument(KotlinType::new("java.math.BigDecimal"));
        let ty = KotlinType::new("kotlin.List").type_argument(inner);
        assert_eq!(ty.short_name_with_type_arguments(), "List<Thing<BigDecimal>>");
        assert_eq!(ty.import_list(), ["some.generic.Thing", "java.math.BigDecimal"]);
    }

    #[test]
    fn test_from_java_scalars() {
        assert_eq!(
            KotlinType::from_java("java.lang.Integer").short_name_with_type_arguments(),
            "Int"
        );
        assert_eq!(
            KotlinType::from_java("java.lang.Long").short_name_with_type_arguments(),
            "Long"
        );
        assert!(KotlinType::from_java("java.lang.String").import_list().is_empty());
    }

    #[test]
    fn test_from_java_keeps_other_types() {
        let ty = KotlinType::from_java("java.math.BigDecimal");
        assert_eq!(ty.short_name_with_type_arguments(), "BigDecimal");
        assert_eq!(ty.import_list(), ["java.math.BigDecimal"]);
    }

    #[test]
    fn test_from_java_collection() {
        let ty = KotlinType::from_java("java.util.List<java.lang.String>");
        assert_eq!(ty.short_name_with_type_arguments(), "List<String>");
        assert!(ty.import_list().is_empty());
    }
}
