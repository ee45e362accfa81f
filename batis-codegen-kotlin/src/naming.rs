//! Naming conventions for generated Kotlin sources.

use std::path::PathBuf;

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Data class name for a table, e.g. `cust_order` → `CustOrder`.
pub fn data_class_name(table_name: &str) -> String {
    table_name.to_upper_camel_case()
}

/// Mapper receiver name for a table, e.g. `customer` → `CustomerMapper`.
pub fn mapper_name(table_name: &str) -> String {
    format!("{}Mapper", data_class_name(table_name))
}

/// Dynamic-SQL support object name, e.g. `customer` → `CustomerSupport`.
pub fn support_object_name(table_name: &str) -> String {
    format!("{}Support", data_class_name(table_name))
}

/// Property naming the table inside the support object, e.g. `cust_order`
/// → `custOrder`.
pub fn table_property_name(table_name: &str) -> String {
    table_name.to_lower_camel_case()
}

/// Source path for a generated file under the Maven-style layout, e.g.
/// `src/main/kotlin/com/acme/model/Customer.kt`.
pub fn source_path(package: &str, file_name: &str) -> PathBuf {
    let mut path = PathBuf::from("src/main/kotlin");
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(data_class_name("cust_order"), "CustOrder");
        assert_eq!(mapper_name("customer"), "CustomerMapper");
        assert_eq!(support_object_name("customer"), "CustomerSupport");
        assert_eq!(table_property_name("cust_order"), "custOrder");
    }

    #[test]
    fn test_source_path() {
        assert_eq!(
            source_path("com.acme.model", "Customer.kt"),
            PathBuf::from("src/main/kotlin/com/acme/model/Customer.kt")
        );
    }
}
