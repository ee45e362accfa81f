//! Kotlin function declarations.

use batis_codegen::{ElementDoc, OperationKind};

/// An argument in a Kotlin function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinArg {
    pub name: String,
    /// Short display name of the argument type, absent for untyped lambda
    /// parameters.
    pub data_type: Option<String>,
}

impl KotlinArg {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }

    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }
}

/// A Kotlin function.
///
/// The name may carry an extension receiver (`CustomerMapper.insert`).
/// One-line functions render with an expression body (`=`); others with a
/// block body.
#[derive(Debug, Clone, PartialEq)]
pub struct KotlinFunction {
    pub doc: ElementDoc,
    pub name: String,
    pub args: Vec<KotlinArg>,
    /// Short display name of the explicit return type, if any.
    pub return_type: Option<String>,
    pub one_line: bool,
    pub code_lines: Vec<String>,
    pub operation: Option<OperationKind>,
}

impl KotlinFunction {
    /// A function with a block body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            doc: ElementDoc::new(),
            name: name.into(),
            args: Vec::new(),
            return_type: None,
            one_line: false,
            code_lines: Vec::new(),
            operation: None,
        }
    }

    /// A function with an expression body (`fun f() = ...`).
    pub fn one_line(name: impl Into<String>) -> Self {
        let mut function = Self::new(name);
        function.one_line = true;
        function
    }

    pub fn arg(mut self, arg: KotlinArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn returns(mut self, short_name: impl Into<String>) -> Self {
        self.return_type = Some(short_name.into());
        self
    }

    /// Append one body line. Indentation is derived from brace nesting at
    /// render time.
    pub fn code_line(mut self, line: impl Into<String>) -> Self {
        self.code_lines.push(line.into());
        self
    }

    /// Tag this function with the operation it implements.
    pub fn operation(mut self, operation: OperationKind) -> Self {
        self.operation = Some(operation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_function() {
        let function = KotlinFunction::one_line("CustomerMapper.insert")
            .arg(KotlinArg::new("record").data_type("Customer"))
            .code_line("insertInto(customer) {")
            .code_line("}")
            .operation(OperationKind::Insert);

        assert!(function.one_line);
        assert_eq!(function.args[0].data_type.as_deref(), Some("Customer"));
        assert_eq!(function.operation, Some(OperationKind::Insert));
        assert_eq!(function.code_lines.len(), 2);
    }

    #[test]
    fn test_block_function_defaults() {
        let function = KotlinFunction::new("helper");
        assert!(!function.one_line);
        assert!(function.return_type.is_none());
    }
}
