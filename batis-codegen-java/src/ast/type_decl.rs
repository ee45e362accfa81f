//! Java type declarations.
//!
//! The original DOM modeled classes, interfaces, and enums as an
//! inheritance hierarchy; here they are a plain tagged variant with the
//! shared documentation state carried by [`ElementDoc`] inside each
//! variant.

use batis_codegen::ElementDoc;

use super::{Field, JavaType, Method};

/// Visibility modifier on a Java declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// The modifier keyword including its trailing space, empty for
    /// package-private.
    pub fn as_prefix(&self) -> &'static str {
        match self {
            Visibility::Public => "public ",
            Visibility::Protected => "protected ",
            Visibility::PackagePrivate => "",
            Visibility::Private => "private ",
        }
    }
}

/// A top-level or nested Java type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDeclaration {
    Class(JavaClass),
    Interface(JavaInterface),
    Enum(JavaEnum),
}

impl TypeDeclaration {
    pub fn name(&self) -> &str {
        match self {
            TypeDeclaration::Class(c) => &c.name,
            TypeDeclaration::Interface(i) => &i.name,
            TypeDeclaration::Enum(e) => &e.name,
        }
    }

    pub fn doc(&self) -> &ElementDoc {
        match self {
            TypeDeclaration::Class(c) => &c.doc,
            TypeDeclaration::Interface(i) => &i.doc,
            TypeDeclaration::Enum(e) => &e.doc,
        }
    }

    pub fn doc_mut(&mut self) -> &mut ElementDoc {
        match self {
            TypeDeclaration::Class(c) => &mut c.doc,
            TypeDeclaration::Interface(i) => &mut i.doc,
            TypeDeclaration::Enum(e) => &mut e.doc,
        }
    }
}

/// A Java class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaClass {
    pub doc: ElementDoc,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_final: bool,
    /// Nested classes may be static.
    pub is_static: bool,
    pub name: String,
    pub extends: Option<JavaType>,
    pub implements: Vec<JavaType>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub nested: Vec<TypeDeclaration>,
}

impl JavaClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            visibility: Visibility::Public,
            is_abstract: false,
            is_final: false,
            is_static: false,
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn extends(mut self, ty: JavaType) -> Self {
        self.extends = Some(ty);
        self
    }

    pub fn implements(mut self, ty: JavaType) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn nested(mut self, decl: TypeDeclaration) -> Self {
        self.nested.push(decl);
        self
    }
}

/// A Java interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaInterface {
    pub doc: ElementDoc,
    pub visibility: Visibility,
    pub name: String,
    pub extends: Vec<JavaType>,
    pub methods: Vec<Method>,
    pub nested: Vec<TypeDeclaration>,
}

impl JavaInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            visibility: Visibility::Public,
            name: name.into(),
            extends: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn extends(mut self, ty: JavaType) -> Self {
        self.extends.push(ty);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn nested(mut self, decl: TypeDeclaration) -> Self {
        self.nested.push(decl);
        self
    }
}

/// A Java enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaEnum {
    pub doc: ElementDoc,
    pub visibility: Visibility,
    pub name: String,
    pub constants: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl JavaEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            visibility: Visibility::Public,
            name: name.into(),
            constants: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constants.push(name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}
