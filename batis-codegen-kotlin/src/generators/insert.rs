//! Insert function generators.

use batis_codegen::{MethodDoc, OperationKind};

use super::{FunctionAndImports, FunctionContext};
use crate::ast::{KotlinArg, KotlinFunction};

pub struct InsertFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> InsertFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::Insert;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function = KotlinFunction::one_line(format!("{}.insert", self.ctx.mapper_name))
            .arg(KotlinArg::new("record").data_type(self.ctx.record_short_name()))
            .operation(op)
            .code_line(format!(
                "insertInto({}) {{",
                self.ctx.fragments.table_property()
            ));
        let mut result = FunctionAndImports::with_function(function);
        result.imports.extend(self.ctx.record_type.import_list());
        result
            .imports
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.insertInto");
        result.imports.add(self.ctx.fragments.table_import());

        self.ctx
            .add_function_comment(&mut result, &MethodDoc::new(op).param("record"));

        result.merge_parts(&self.ctx.fragments.insert_column_lines());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}

pub struct InsertSelectiveFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> InsertSelectiveFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::InsertSelective;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function =
            KotlinFunction::one_line(format!("{}.insertSelective", self.ctx.mapper_name))
                .arg(KotlinArg::new("record").data_type(self.ctx.record_short_name()))
                .operation(op)
                .code_line(format!(
                    "insertInto({}) {{",
                    self.ctx.fragments.table_property()
                ));
        let mut result = FunctionAndImports::with_function(function);
        result.imports.extend(self.ctx.record_type.import_list());
        result
            .imports
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.insertInto");
        result.imports.add(self.ctx.fragments.table_import());

        self.ctx
            .add_function_comment(&mut result, &MethodDoc::new(op).param("record"));

        result.merge_parts(&self.ctx.fragments.insert_selective_column_lines());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}
