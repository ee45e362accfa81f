//! Rendering of type declarations to ordered lines.
//!
//! Every function here renders relative to its own root; the enclosing
//! renderer re-indents nested blocks one level deeper than the parent.

use batis_codegen::{CodeBuilder, ElementDoc};

use crate::ast::{Field, JavaClass, JavaEnum, JavaInterface, Method, TypeDeclaration};

pub(crate) fn render_type(decl: &TypeDeclaration) -> Vec<String> {
    match decl {
        TypeDeclaration::Class(class) => render_class(class),
        TypeDeclaration::Interface(interface) => render_interface(interface),
        TypeDeclaration::Enum(enum_) => render_enum(enum_),
    }
}

/// Doc lines first, then annotations, both verbatim.
fn doc_and_annotations(doc: &ElementDoc) -> Vec<String> {
    let mut lines: Vec<String> = doc.doc_lines().to_vec();
    lines.extend(doc.annotations().iter().map(|a| a.render()));
    lines
}

/// Append member blocks separated by single blank lines.
fn push_members(mut builder: CodeBuilder, blocks: Vec<Vec<String>>) -> CodeBuilder {
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            builder = builder.blank();
        }
        builder = builder.lines(block);
    }
    builder
}

fn render_class(class: &JavaClass) -> Vec<String> {
    let mut signature = String::new();
    signature.push_str(class.visibility.as_prefix());
    if class.is_static {
        signature.push_str("static ");
    }
    if class.is_abstract {
        signature.push_str("abstract ");
    }
    if class.is_final {
        signature.push_str("final ");
    }
    signature.push_str("class ");
    signature.push_str(&class.name);
    if let Some(extends) = &class.extends {
        signature.push_str(" extends ");
        signature.push_str(&extends.short_name());
    }
    if !class.implements.is_empty() {
        let names: Vec<String> = class.implements.iter().map(|t| t.short_name()).collect();
        signature.push_str(" implements ");
        signature.push_str(&names.join(", "));
    }
    signature.push_str(" {");

    let mut blocks: Vec<Vec<String>> = Vec::new();
    blocks.extend(class.fields.iter().map(render_field));
    blocks.extend(class.methods.iter().map(|m| render_method(m, false)));
    blocks.extend(class.nested.iter().map(render_type));

    let builder = CodeBuilder::java()
        .lines(doc_and_annotations(&class.doc))
        .line(&signature)
        .indent();
    push_members(builder, blocks).dedent().line("}").into_lines()
}

fn render_interface(interface: &JavaInterface) -> Vec<String> {
    let mut signature = String::new();
    signature.push_str(interface.visibility.as_prefix());
    signature.push_str("interface ");
    signature.push_str(&interface.name);
    if !interface.extends.is_empty() {
        let names: Vec<String> = interface.extends.iter().map(|t| t.short_name()).collect();
        signature.push_str(" extends ");
        signature.push_str(&names.join(", "));
    }
    signature.push_str(" {");

    let mut blocks: Vec<Vec<String>> = Vec::new();
    blocks.extend(interface.methods.iter().map(|m| render_method(m, true)));
    blocks.extend(interface.nested.iter().map(render_type));

    let builder = CodeBuilder::java()
        .lines(doc_and_annotations(&interface.doc))
        .line(&signature)
        .indent();
    push_members(builder, blocks).dedent().line("}").into_lines()
}

fn render_enum(enum_: &JavaEnum) -> Vec<String> {
    let signature = format!("{}enum {} {{", enum_.visibility.as_prefix(), enum_.name);
    let has_members = !enum_.fields.is_empty() || !enum_.methods.is_empty();

    let mut builder = CodeBuilder::java()
        .lines(doc_and_annotations(&enum_.doc))
        .line(&signature)
        .indent();

    let last = enum_.constants.len().saturating_sub(1);
    for (i, constant) in enum_.constants.iter().enumerate() {
        if i < last {
            builder = builder.line(&format!("{constant},"));
        } else if has_members {
            builder = builder.line(&format!("{constant};"));
        } else {
            builder = builder.line(constant);
        }
    }

    let mut blocks: Vec<Vec<String>> = Vec::new();
    blocks.extend(enum_.fields.iter().map(render_field));
    blocks.extend(enum_.methods.iter().map(|m| render_method(m, false)));
    if !blocks.is_empty() {
        builder = builder.blank();
        builder = push_members(builder, blocks);
    }
    builder.dedent().line("}").into_lines()
}

fn render_field(field: &Field) -> Vec<String> {
    let mut line = String::new();
    line.push_str(field.visibility.as_prefix());
    if field.is_static {
        line.push_str("static ");
    }
    if field.is_final {
        line.push_str("final ");
    }
    line.push_str(&field.ty.short_name());
    line.push(' ');
    line.push_str(&field.name);
    if let Some(initializer) = &field.initializer {
        line.push_str(" = ");
        line.push_str(initializer);
    }
    line.push(';');

    CodeBuilder::java()
        .lines(doc_and_annotations(&field.doc))
        .line(&line)
        .into_lines()
}

fn render_method(method: &Method, in_interface: bool) -> Vec<String> {
    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty.short_name(), p.name))
        .collect();
    let return_type = method
        .return_type
        .as_ref()
        .map(|t| t.short_name())
        .unwrap_or_else(|| "void".to_string());

    let mut signature = String::new();
    if !in_interface {
        signature.push_str(method.visibility.as_prefix());
        if method.is_abstract {
            signature.push_str("abstract ");
        }
    }
    if method.is_static {
        signature.push_str("static ");
    }
    signature.push_str(&return_type);
    signature.push(' ');
    signature.push_str(&method.name);
    signature.push('(');
    signature.push_str(&params.join(", "));
    signature.push(')');

    let builder = CodeBuilder::java().lines(doc_and_annotations(&method.doc));
    if method.is_abstract {
        signature.push(';');
        return builder.line(&signature).into_lines();
    }

    signature.push_str(" {");
    builder
        .line(&signature)
        .indent()
        .lines(method.body.iter().cloned())
        .dedent()
        .line("}")
        .into_lines()
}

#[cfg(test)]
mod tests {
    use batis_codegen::Annotation;

    use super::*;
    use crate::ast::{JavaType, Parameter, Visibility};

    #[test]
    fn test_render_field_with_doc_and_annotation() {
        let mut field = Field::new("custId", JavaType::new("java.lang.Long"));
        field.doc.push_doc_line("/** key */");
        field.doc.push_annotation(Annotation::marker("Generated"));

        assert_eq!(
            render_field(&field),
            ["/** key */", "@Generated", "private Long custId;"]
        );
    }

    #[test]
    fn test_render_constant_field() {
        let field = Field::new("serialVersionUID", JavaType::new("long"))
            .visibility(Visibility::Private)
            .static_()
            .final_()
            .initializer("1L");
        assert_eq!(
            render_field(&field),
            ["private static final long serialVersionUID = 1L;"]
        );
    }

    #[test]
    fn test_render_getter() {
        let method = Method::new("getCustId")
            .returns(JavaType::new("java.lang.Long"))
            .body_line("return custId;");
        assert_eq!(
            render_method(&method, false),
            ["public Long getCustId() {", "    return custId;", "}"]
        );
    }

    #[test]
    fn test_render_void_setter() {
        let method = Method::new("setCustId")
            .param(Parameter::new("custId", JavaType::new("java.lang.Long")))
            .body_line("this.custId = custId;");
        assert_eq!(
            render_method(&method, false),
            [
                "public void setCustId(Long custId) {",
                "    this.custId = custId;",
                "}"
            ]
        );
    }

    #[test]
    fn test_render_interface_method_drops_visibility() {
        let method = Method::new("insert")
            .abstract_()
            .returns(JavaType::new("int"))
            .param(Parameter::new("record", JavaType::new("com.acme.model.Customer")));
        assert_eq!(render_method(&method, true), ["int insert(Customer record);"]);
    }

    #[test]
    fn test_render_class_with_members_and_blank_separators() {
        let class = JavaClass::new("Customer")
            .field(Field::new("custId", JavaType::new("java.lang.Long")))
            .method(
                Method::new("getCustId")
                    .returns(JavaType::new("java.lang.Long"))
                    .body_line("return custId;"),
            );

        assert_eq!(
            render_type(&TypeDeclaration::Class(class)),
            [
                "public class Customer {",
                "    private Long custId;",
                "",
                "    public Long getCustId() {",
                "        return custId;",
                "    }",
                "}"
            ]
        );
    }

    #[test]
    fn test_render_class_signature_with_extends_and_implements() {
        let class = JavaClass::new("Customer")
            .extends(JavaType::new("com.acme.Base"))
            .implements(JavaType::new("java.io.Serializable"));
        let lines = render_type(&TypeDeclaration::Class(class));
        assert_eq!(
            lines[0],
            "public class Customer extends Base implements Serializable {"
        );
    }

    #[test]
    fn test_render_nested_class_indents_one_level() {
        let nested = JavaClass::new("Criteria").static_();
        let class = JavaClass::new("CustomerExample").nested(TypeDeclaration::Class(nested));

        assert_eq!(
            render_type(&TypeDeclaration::Class(class)),
            [
                "public class CustomerExample {",
                "    public static class Criteria {",
                "    }",
                "}"
            ]
        );
    }

    #[test]
    fn test_render_enum_without_members() {
        let enum_ = JavaEnum::new("Status").constant("ACTIVE").constant("INACTIVE");
        assert_eq!(
            render_type(&TypeDeclaration::Enum(enum_)),
            ["public enum Status {", "    ACTIVE,", "    INACTIVE", "}"]
        );
    }

    #[test]
    fn test_render_enum_with_members() {
        let enum_ = JavaEnum::new("Status")
            .constant("ACTIVE")
            .field(
                Field::new("label", JavaType::new("java.lang.String")).visibility(Visibility::Private),
            );
        assert_eq!(
            render_type(&TypeDeclaration::Enum(enum_)),
            [
                "public enum Status {",
                "    ACTIVE;",
                "",
                "    private String label;",
                "}"
            ]
        );
    }
}
