//! Import collection for generated compilation units.

use std::collections::BTreeSet;

/// Tracks fully-qualified imports and de-duplicates them.
///
/// Imports are kept sorted so rendering is deterministic regardless of the
/// order builders and fragments contributed them.
///
/// # Example
///
/// ```
/// use batis_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.math.BigDecimal");
/// imports.add("java.util.List");
/// imports.add("java.math.BigDecimal");
///
/// let rendered: Vec<&str> = imports.iter().collect();
/// assert_eq!(rendered, ["java.math.BigDecimal", "java.util.List"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    imports: BTreeSet<String>,
    static_imports: BTreeSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully-qualified import.
    pub fn add(&mut self, name: impl Into<String>) {
        self.imports.insert(name.into());
    }

    /// Add several fully-qualified imports.
    pub fn extend(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        for name in names {
            self.add(name);
        }
    }

    /// Add a static import.
    pub fn add_static(&mut self, name: impl Into<String>) {
        self.static_imports.insert(name.into());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.imports.extend(other.imports.iter().cloned());
        self.static_imports
            .extend(other.static_imports.iter().cloned());
    }

    /// Check whether a fully-qualified import is present.
    pub fn contains(&self, name: &str) -> bool {
        self.imports.contains(name)
    }

    /// Iterate over regular imports in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Iterate over static imports in sorted order.
    pub fn iter_static(&self) -> impl Iterator<Item = &str> {
        self.static_imports.iter().map(String::as_str)
    }

    /// Check whether no imports of either kind were collected.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.static_imports.is_empty()
    }

    /// Number of regular imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
