//! Update function generators.

use batis_codegen::{MethodDoc, OperationKind};

use super::{FunctionAndImports, FunctionContext};
use crate::ast::{KotlinArg, KotlinFunction};

const UPDATE_IMPORT: &str = "org.mybatis.dynamic.sql.util.kotlin.mybatis3.update";

pub struct UpdateByPrimaryKeyFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> UpdateByPrimaryKeyFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::UpdateByPrimaryKey;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function =
            KotlinFunction::one_line(format!("{}.updateByPrimaryKey", self.ctx.mapper_name))
                .arg(KotlinArg::new("record").data_type(self.ctx.record_short_name()))
                .operation(op)
                .code_line("update {");
        let mut result = FunctionAndImports::with_function(function);
        result.imports.extend(self.ctx.record_type.import_list());
        result.imports.add(UPDATE_IMPORT);

        self.ctx
            .add_function_comment(&mut result, &MethodDoc::new(op).param("record"));

        result.merge_parts(&self.ctx.fragments.set_equal_lines());
        result.merge_parts(&self.ctx.fragments.primary_key_where_clause_for_update());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}

pub struct UpdateByPrimaryKeySelectiveFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> UpdateByPrimaryKeySelectiveFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::UpdateByPrimaryKeySelective;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function = KotlinFunction::one_line(format!(
            "{}.updateByPrimaryKeySelective",
            self.ctx.mapper_name
        ))
        .arg(KotlinArg::new("record").data_type(self.ctx.record_short_name()))
        .operation(op)
        .code_line("update {");
        let mut result = FunctionAndImports::with_function(function);
        result.imports.extend(self.ctx.record_type.import_list());
        result.imports.add(UPDATE_IMPORT);

        self.ctx
            .add_function_comment(&mut result, &MethodDoc::new(op).param("record"));

        result.merge_parts(&self.ctx.fragments.set_equal_when_present_lines());
        result.merge_parts(&self.ctx.fragments.primary_key_where_clause_for_update());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}
