//! Introspected table metadata.
//!
//! These types are the input side of the generator: a description of one
//! database table (name, remarks, columns, per-operation toggles) as
//! delivered by an external schema-introspection collaborator. The
//! generator crates consume them read-only.

use heck::ToLowerCamelCase;

/// The closed set of generated operations.
///
/// Every generated mapper member is tagged with its operation kind at
/// construction time, so downstream consumers (documentation, plugins)
/// never have to re-derive intent from a method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insert,
    InsertSelective,
    SelectByPrimaryKey,
    SelectAll,
    UpdateByPrimaryKey,
    UpdateByPrimaryKeySelective,
    DeleteByPrimaryKey,
    CountAll,
}

impl OperationKind {
    /// All operation kinds, in the order members are generated.
    pub const ALL: [OperationKind; 8] = [
        OperationKind::Insert,
        OperationKind::InsertSelective,
        OperationKind::SelectByPrimaryKey,
        OperationKind::SelectAll,
        OperationKind::UpdateByPrimaryKey,
        OperationKind::UpdateByPrimaryKeySelective,
        OperationKind::DeleteByPrimaryKey,
        OperationKind::CountAll,
    ];

    /// The canonical member name for this operation in generated code.
    pub fn method_name(&self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::InsertSelective => "insertSelective",
            OperationKind::SelectByPrimaryKey => "selectByPrimaryKey",
            OperationKind::SelectAll => "selectAll",
            OperationKind::UpdateByPrimaryKey => "updateByPrimaryKey",
            OperationKind::UpdateByPrimaryKeySelective => "updateByPrimaryKeySelective",
            OperationKind::DeleteByPrimaryKey => "deleteByPrimaryKey",
            OperationKind::CountAll => "countAll",
        }
    }

    /// Whether this operation addresses rows through the primary key.
    pub fn requires_primary_key(&self) -> bool {
        matches!(
            self,
            OperationKind::SelectByPrimaryKey
                | OperationKind::UpdateByPrimaryKey
                | OperationKind::UpdateByPrimaryKeySelective
                | OperationKind::DeleteByPrimaryKey
        )
    }

    /// Whether this operation writes non-key columns (updates need
    /// something to put in the set clause).
    pub fn requires_non_key_columns(&self) -> bool {
        matches!(
            self,
            OperationKind::UpdateByPrimaryKey | OperationKind::UpdateByPrimaryKeySelective
        )
    }
}

/// One introspected database column.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectedColumn {
    /// The actual column name in the database (e.g. `cust_id`).
    pub actual_column_name: String,
    /// The mapped field/property name in generated code (e.g. `custId`).
    pub field_name: String,
    /// Fully-qualified Java type of the mapped field (e.g. `java.lang.Long`).
    pub java_type: String,
    /// Free-text column remarks from the database, if any.
    pub remarks: Option<String>,
    /// Whether this column is part of the primary key.
    pub primary_key: bool,
}

impl IntrospectedColumn {
    /// Create a column; the field name defaults to the lower-camel form of
    /// the column name.
    pub fn new(actual_column_name: impl Into<String>, java_type: impl Into<String>) -> Self {
        let actual_column_name = actual_column_name.into();
        let field_name = actual_column_name.to_lower_camel_case();
        Self {
            actual_column_name,
            field_name,
            java_type: java_type.into(),
            remarks: None,
            primary_key: false,
        }
    }

    /// Override the mapped field name.
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// Attach column remarks.
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Mark this column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// The remark text, if present and non-blank.
    pub fn remark_text(&self) -> Option<&str> {
        self.remarks
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Per-table generation toggles.
///
/// Every flag defaults to enabled; tables opt out of individual operations
/// through `[tables.<name>.generate]` in the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfiguration {
    pub insert: bool,
    pub insert_selective: bool,
    pub select_by_primary_key: bool,
    pub select_all: bool,
    pub update_by_primary_key: bool,
    pub update_by_primary_key_selective: bool,
    pub delete_by_primary_key: bool,
    pub count_all: bool,
}

impl Default for TableConfiguration {
    fn default() -> Self {
        Self {
            insert: true,
            insert_selective: true,
            select_by_primary_key: true,
            select_all: true,
            update_by_primary_key: true,
            update_by_primary_key_selective: true,
            delete_by_primary_key: true,
            count_all: true,
        }
    }
}

impl TableConfiguration {
    /// Whether the given operation is enabled for this table.
    pub fn is_enabled(&self, op: OperationKind) -> bool {
        match op {
            OperationKind::Insert => self.insert,
            OperationKind::InsertSelective => self.insert_selective,
            OperationKind::SelectByPrimaryKey => self.select_by_primary_key,
            OperationKind::SelectAll => self.select_all,
            OperationKind::UpdateByPrimaryKey => self.update_by_primary_key,
            OperationKind::UpdateByPrimaryKeySelective => self.update_by_primary_key_selective,
            OperationKind::DeleteByPrimaryKey => self.delete_by_primary_key,
            OperationKind::CountAll => self.count_all,
        }
    }
}

/// One introspected database table.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectedTable {
    /// Qualified table name as known to the database (e.g. `customer`).
    pub name: String,
    /// Free-text table remarks from the database, if any.
    pub remarks: Option<String>,
    /// Columns in database order.
    pub columns: Vec<IntrospectedColumn>,
    /// Generation toggles for this table.
    pub config: TableConfiguration,
}

impl IntrospectedTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remarks: None,
            columns: Vec::new(),
            config: TableConfiguration::default(),
        }
    }

    /// Attach table remarks.
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Append a column.
    pub fn column(mut self, column: IntrospectedColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace the generation toggles.
    pub fn config(mut self, config: TableConfiguration) -> Self {
        self.config = config;
        self
    }

    /// The remark text, if present and non-blank.
    pub fn remark_text(&self) -> Option<&str> {
        self.remarks
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Columns that are part of the primary key, in database order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &IntrospectedColumn> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// Columns that are not part of the primary key, in database order.
    pub fn non_primary_key_columns(&self) -> impl Iterator<Item = &IntrospectedColumn> {
        self.columns.iter().filter(|c| !c.primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.primary_key)
    }

    /// The conditional-generation predicate: whether the given operation
    /// should be generated for this table.
    ///
    /// An operation is generated iff its toggle is enabled and its
    /// structural prerequisites hold. A `false` here is normal control
    /// flow, not an error: builders yield no element at all.
    pub fn should_generate(&self, op: OperationKind) -> bool {
        if !self.config.is_enabled(op) || self.columns.is_empty() {
            return false;
        }
        if op.requires_primary_key() && !self.has_primary_key() {
            return false;
        }
        if op.requires_non_key_columns() && self.non_primary_key_columns().next().is_none() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> IntrospectedTable {
        IntrospectedTable::new("customer")
            .remarks("holds customer records")
            .column(
                IntrospectedColumn::new("cust_id", "java.lang.Long")
                    .primary_key()
                    .remarks("surrogate key"),
            )
            .column(IntrospectedColumn::new("cust_name", "java.lang.String"))
    }

    #[test]
    fn test_field_name_defaults_to_lower_camel() {
        let col = IntrospectedColumn::new("cust_id", "java.lang.Long");
        assert_eq!(col.field_name, "custId");
    }

    #[test]
    fn test_field_name_override() {
        let col = IntrospectedColumn::new("cust_id", "java.lang.Long").field_name("id");
        assert_eq!(col.field_name, "id");
    }

    #[test]
    fn test_remark_text_filters_blank() {
        let col = IntrospectedColumn::new("a", "java.lang.Long").remarks("   ");
        assert_eq!(col.remark_text(), None);

        let col = IntrospectedColumn::new("a", "java.lang.Long").remarks("key");
        assert_eq!(col.remark_text(), Some("key"));
    }

    #[test]
    fn test_key_column_partition() {
        let table = customer();
        let keys: Vec<_> = table
            .primary_key_columns()
            .map(|c| c.field_name.as_str())
            .collect();
        let non_keys: Vec<_> = table
            .non_primary_key_columns()
            .map(|c| c.field_name.as_str())
            .collect();
        assert_eq!(keys, ["custId"]);
        assert_eq!(non_keys, ["custName"]);
    }

    #[test]
    fn test_should_generate_all_for_keyed_table() {
        let table = customer();
        for op in OperationKind::ALL {
            assert!(table.should_generate(op), "{:?}", op);
        }
    }

    #[test]
    fn test_should_generate_respects_toggles() {
        let mut table = customer();
        table.config.update_by_primary_key = false;
        assert!(!table.should_generate(OperationKind::UpdateByPrimaryKey));
        assert!(table.should_generate(OperationKind::UpdateByPrimaryKeySelective));
    }

    #[test]
    fn test_keyless_table_skips_primary_key_operations() {
        let table = IntrospectedTable::new("audit_log")
            .column(IntrospectedColumn::new("message", "java.lang.String"));

        assert!(!table.should_generate(OperationKind::SelectByPrimaryKey));
        assert!(!table.should_generate(OperationKind::DeleteByPrimaryKey));
        assert!(!table.should_generate(OperationKind::UpdateByPrimaryKey));
        assert!(table.should_generate(OperationKind::Insert));
        assert!(table.should_generate(OperationKind::SelectAll));
    }

    #[test]
    fn test_key_only_table_skips_updates() {
        let table = IntrospectedTable::new("link")
            .column(IntrospectedColumn::new("left_id", "java.lang.Long").primary_key())
            .column(IntrospectedColumn::new("right_id", "java.lang.Long").primary_key());

        assert!(!table.should_generate(OperationKind::UpdateByPrimaryKey));
        assert!(table.should_generate(OperationKind::SelectByPrimaryKey));
        assert!(table.should_generate(OperationKind::DeleteByPrimaryKey));
    }

    #[test]
    fn test_empty_table_generates_nothing() {
        let table = IntrospectedTable::new("empty");
        for op in OperationKind::ALL {
            assert!(!table.should_generate(op));
        }
    }
}
