//! Documentation templates keyed by operation kind.
//!
//! The comment hook never derives intent from a method name string; the
//! builders tag every generated member with its [`OperationKind`] and the
//! templates here turn that tag into documentation text.

use batis_schema::OperationKind;

/// Documentation text for a generated operation.
pub trait OperationDocs {
    /// One-sentence description of the operation against the given table.
    fn describe(&self, table_name: &str) -> String;

    /// Description for one parameter of the operation.
    fn param_description(&self, param_name: &str) -> String;
}

impl OperationDocs for OperationKind {
    fn describe(&self, table_name: &str) -> String {
        match self {
            OperationKind::Insert => format!("Insert a new row into {table_name}."),
            OperationKind::InsertSelective => {
                format!("Insert a new row into {table_name}, writing only the non-null fields.")
            }
            OperationKind::SelectByPrimaryKey => {
                format!("Select a single row from {table_name} by primary key.")
            }
            OperationKind::SelectAll => format!("Select every row from {table_name}."),
            OperationKind::UpdateByPrimaryKey => {
                format!("Update a row in {table_name} by primary key.")
            }
            OperationKind::UpdateByPrimaryKeySelective => format!(
                "Update a row in {table_name} by primary key, writing only the non-null fields."
            ),
            OperationKind::DeleteByPrimaryKey => {
                format!("Delete a row from {table_name} by primary key.")
            }
            OperationKind::CountAll => format!("Count the rows in {table_name}."),
        }
    }

    fn param_description(&self, param_name: &str) -> String {
        match self {
            OperationKind::Insert | OperationKind::InsertSelective => "the row to insert".into(),
            OperationKind::UpdateByPrimaryKey | OperationKind::UpdateByPrimaryKeySelective => {
                "the row with updated values; the key fields select the target row".into()
            }
            OperationKind::SelectByPrimaryKey | OperationKind::DeleteByPrimaryKey => {
                "the primary key value".into()
            }
            OperationKind::SelectAll | OperationKind::CountAll => {
                format!("the {param_name}")
            }
        }
    }
}
