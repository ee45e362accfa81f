//! Kotlin properties, data classes, and objects.

use batis_codegen::ElementDoc;

/// A Kotlin property: a `val`/`var` with optional type and initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct KotlinProperty {
    pub doc: ElementDoc,
    pub mutable: bool,
    pub name: String,
    /// Short display name of the declared type, absent when inferred.
    pub data_type: Option<String>,
    pub initializer: Option<String>,
}

impl KotlinProperty {
    /// An immutable `val` property.
    pub fn val(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            mutable: false,
            name: name.into(),
            data_type: None,
            initializer: None,
        }
    }

    /// A mutable `var` property.
    pub fn var(name: impl Into<String>) -> Self {
        let mut property = Self::val(name);
        property.mutable = true;
        property
    }

    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

/// A Kotlin data class; its properties are the primary constructor
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct KotlinDataClass {
    pub doc: ElementDoc,
    pub name: String,
    pub properties: Vec<KotlinProperty>,
}

impl KotlinDataClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: KotlinProperty) -> Self {
        self.properties.push(property);
        self
    }
}

/// A Kotlin object declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct KotlinObject {
    pub doc: ElementDoc,
    pub name: String,
    pub properties: Vec<KotlinProperty>,
}

impl KotlinObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: KotlinProperty) -> Self {
        self.properties.push(property);
        self
    }
}
