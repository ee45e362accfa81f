//! Java field declarations.

use batis_codegen::ElementDoc;

use super::{JavaType, Visibility};

/// A field in a Java type declaration. Owned exclusively by its enclosing
/// declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub doc: ElementDoc,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub ty: JavaType,
    pub name: String,
    pub initializer: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            doc: ElementDoc::new(),
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            ty,
            name: name.into(),
            initializer: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }
}
