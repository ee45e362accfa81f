//! Reusable code fragments for mapper function bodies.
//!
//! A fragment is a named, ordered list of code lines plus the imports
//! those lines require. Function generators merge fragments into a
//! function body, contributing both at once.

use batis_schema::{IntrospectedColumn, IntrospectedTable};

use crate::naming;

/// A reusable chunk of function body lines plus its import requirements.
///
/// Has no lifecycle of its own beyond the function it is merged into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionParts {
    pub code_lines: Vec<String>,
    pub imports: Vec<String>,
}

impl FunctionParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_line(mut self, line: impl Into<String>) -> Self {
        self.code_lines.push(line.into());
        self
    }

    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }
}

const WHERE_HELPER_IMPORT: &str = "org.mybatis.dynamic.sql.util.kotlin.elements.isEqualTo";

/// Builds the shared dynamic-SQL fragments for one table: set clauses,
/// where clauses, and insert column maps.
pub struct FragmentGenerator<'a> {
    table: &'a IntrospectedTable,
    support_object: String,
    support_package: &'a str,
}

impl<'a> FragmentGenerator<'a> {
    pub fn new(table: &'a IntrospectedTable, support_package: &'a str) -> Self {
        Self {
            table,
            support_object: naming::support_object_name(&table.name),
            support_package,
        }
    }

    /// Import path of one member of the table's support object.
    fn support_import(&self, member: &str) -> String {
        format!("{}.{}.{}", self.support_package, self.support_object, member)
    }

    /// Import for the support object's table property.
    pub fn table_import(&self) -> String {
        self.support_import(&naming::table_property_name(&self.table.name))
    }

    /// Property naming the table inside the support object.
    pub fn table_property(&self) -> String {
        naming::table_property_name(&self.table.name)
    }

    /// `set(field).equalTo(record::field)` lines for every non-key column.
    pub fn set_equal_lines(&self) -> FunctionParts {
        self.set_lines("equalTo")
    }

    /// `set(field).equalToWhenPresent(record::field)` lines for every
    /// non-key column.
    pub fn set_equal_when_present_lines(&self) -> FunctionParts {
        self.set_lines("equalToWhenPresent")
    }

    fn set_lines(&self, setter: &str) -> FunctionParts {
        let mut parts = FunctionParts::new();
        for column in self.table.non_primary_key_columns() {
            parts = parts
                .code_line(format!(
                    "set({field}).{setter}(record::{field})",
                    field = column.field_name
                ))
                .import(self.support_import(&column.field_name));
        }
        parts
    }

    /// A where clause addressing the row by the record's key properties,
    /// for update statements.
    pub fn primary_key_where_clause_for_update(&self) -> FunctionParts {
        let keys: Vec<&IntrospectedColumn> = self.table.primary_key_columns().collect();
        self.where_clause(&keys, |column| format!("record.{}!!", column.field_name))
    }

    /// A where clause addressing the row by function arguments named
    /// `<field>_`, for select/delete statements.
    pub fn primary_key_where_clause_for_args(&self) -> FunctionParts {
        let keys: Vec<&IntrospectedColumn> = self.table.primary_key_columns().collect();
        self.where_clause(&keys, |column| format!("{}_", column.field_name))
    }

    fn where_clause(
        &self,
        keys: &[&IntrospectedColumn],
        value: impl Fn(&IntrospectedColumn) -> String,
    ) -> FunctionParts {
        let mut parts = FunctionParts::new().import(WHERE_HELPER_IMPORT.to_string());
        for key in keys {
            parts = parts.import(self.support_import(&key.field_name));
        }
        match keys {
            [] => parts,
            [key] => parts.code_line(format!(
                "where {{ {field} isEqualTo {value} }}",
                field = key.field_name,
                value = value(key)
            )),
            [first, rest @ ..] => {
                parts = parts.code_line("where {").code_line(format!(
                    "{field} isEqualTo {value}",
                    field = first.field_name,
                    value = value(first)
                ));
                for key in rest {
                    parts = parts.code_line(format!(
                        "and {{ {field} isEqualTo {value} }}",
                        field = key.field_name,
                        value = value(key)
                    ));
                }
                parts.code_line("}")
            }
        }
    }

    /// `map(field).toProperty("field")` lines for every column.
    pub fn insert_column_lines(&self) -> FunctionParts {
        let mut parts = FunctionParts::new();
        for column in &self.table.columns {
            parts = parts
                .code_line(format!(
                    "map({field}).toProperty(\"{field}\")",
                    field = column.field_name
                ))
                .import(self.support_import(&column.field_name));
        }
        parts
    }

    /// `map(field).toPropertyWhenPresent("field", record::field)` lines
    /// for every column.
    pub fn insert_selective_column_lines(&self) -> FunctionParts {
        let mut parts = FunctionParts::new();
        for column in &self.table.columns {
            parts = parts
                .code_line(format!(
                    "map({field}).toPropertyWhenPresent(\"{field}\", record::{field})",
                    field = column.field_name
                ))
                .import(self.support_import(&column.field_name));
        }
        parts
    }
}
