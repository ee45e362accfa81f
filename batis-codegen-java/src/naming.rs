//! Naming conventions for generated Java sources.

use std::path::PathBuf;

use heck::ToUpperCamelCase;

/// Domain class name for a table, e.g. `cust_order` → `CustOrder`.
pub fn model_class_name(table_name: &str) -> String {
    table_name.to_upper_camel_case()
}

/// Mapper interface name for a table, e.g. `cust_order` → `CustOrderMapper`.
pub fn mapper_interface_name(table_name: &str) -> String {
    format!("{}Mapper", model_class_name(table_name))
}

/// Accessor name for a field, e.g. `custId` → `getCustId`.
pub fn getter_name(field_name: &str) -> String {
    format!("get{}", field_name.to_upper_camel_case())
}

/// Mutator name for a field, e.g. `custId` → `setCustId`.
pub fn setter_name(field_name: &str) -> String {
    format!("set{}", field_name.to_upper_camel_case())
}

/// Source path for a generated type under the Maven-style layout, e.g.
/// `src/main/java/com/acme/model/Customer.java`.
pub fn source_path(source_root: &str, package: &str, file_name: &str) -> PathBuf {
    let mut path = PathBuf::from("src/main").join(source_root);
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.join(file_name)
}
