//! Delete function generator.

use batis_codegen::{MethodDoc, OperationKind};

use super::{FunctionAndImports, FunctionContext};
use crate::ast::KotlinFunction;

pub struct DeleteByPrimaryKeyFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> DeleteByPrimaryKeyFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::DeleteByPrimaryKey;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let mut function =
            KotlinFunction::one_line(format!("{}.deleteByPrimaryKey", self.ctx.mapper_name))
                .operation(op)
                .code_line(format!(
                    "deleteFrom({}) {{",
                    self.ctx.fragments.table_property()
                ));
        let key_args = self.ctx.key_args();
        let mut doc = MethodDoc::new(op);
        for arg in &key_args.args {
            doc = doc.param(&arg.name);
        }
        function.args.extend(key_args.args);

        let mut result = FunctionAndImports::with_function(function);
        result.imports.extend(key_args.imports);
        result
            .imports
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.deleteFrom");
        result.imports.add(self.ctx.fragments.table_import());

        self.ctx.add_function_comment(&mut result, &doc);

        result.merge_parts(&self.ctx.fragments.primary_key_where_clause_for_args());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::context_fixture;
    use super::*;

    #[test]
    fn test_delete_by_primary_key_shape() {
        let fixture = context_fixture();
        let ctx = fixture.context();
        let result = DeleteByPrimaryKeyFunctionGenerator::new(&ctx)
            .generate()
            .unwrap();

        assert_eq!(result.function.name, "CustomerMapper.deleteByPrimaryKey");
        assert_eq!(
            result.function.code_lines,
            [
                "deleteFrom(customer) {",
                "where { custId isEqualTo custId_ }",
                "}"
            ]
        );
    }

    #[test]
    fn test_keyless_table_skips_delete() {
        let mut fixture = context_fixture();
        for column in &mut fixture.table.columns {
            column.primary_key = false;
        }
        let ctx = fixture.context();
        assert!(
            DeleteByPrimaryKeyFunctionGenerator::new(&ctx)
                .generate()
                .is_none()
        );
    }
}
