//! Java method declarations.

use batis_codegen::{ElementDoc, OperationKind};

use super::{JavaType, Visibility};

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: JavaType,
    pub name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// A method in a Java type declaration.
///
/// Methods built for a mapper operation carry their [`OperationKind`] tag
/// so documentation and plugins key on it rather than on the name string.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub doc: ElementDoc,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Declaration-only methods render with a trailing `;` and no body.
    pub is_abstract: bool,
    pub return_type: Option<JavaType>,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Vec<String>,
    pub operation: Option<OperationKind>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            return_type: None,
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
            operation: None,
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

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn returns(mut self, ty: JavaType) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Tag this method with the operation it implements.
    pub fn operation(mut self, operation: OperationKind) -> Self {
        self.operation = Some(operation);
        self
    }
}
