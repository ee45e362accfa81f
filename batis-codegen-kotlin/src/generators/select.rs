//! Select and count function generators.

use batis_codegen::{MethodDoc, OperationKind};

use super::{FunctionAndImports, FunctionContext};
use crate::ast::KotlinFunction;

pub struct SelectByPrimaryKeyFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> SelectByPrimaryKeyFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::SelectByPrimaryKey;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let mut function =
            KotlinFunction::one_line(format!("{}.selectByPrimaryKey", self.ctx.mapper_name))
                .operation(op)
                .code_line("selectOne {");
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
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.selectOne");

        self.ctx.add_function_comment(&mut result, &doc);

        result.merge_parts(&self.ctx.fragments.primary_key_where_clause_for_args());
        result.function.code_lines.push("}".to_string());
        Some(result)
    }
}

pub struct SelectAllFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> SelectAllFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::SelectAll;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function = KotlinFunction::one_line(format!("{}.selectAll", self.ctx.mapper_name))
            .operation(op)
            .code_line("select {")
            .code_line("allRows()")
            .code_line("}");
        let mut result = FunctionAndImports::with_function(function);
        result
            .imports
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.select");

        self.ctx.add_function_comment(&mut result, &MethodDoc::new(op));
        Some(result)
    }
}

pub struct CountAllFunctionGenerator<'a> {
    ctx: &'a FunctionContext<'a>,
}

impl<'a> CountAllFunctionGenerator<'a> {
    pub fn new(ctx: &'a FunctionContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn generate(&self) -> Option<FunctionAndImports> {
        let op = OperationKind::CountAll;
        if !self.ctx.table.should_generate(op) {
            return None;
        }

        let function = KotlinFunction::one_line(format!("{}.countAll", self.ctx.mapper_name))
            .operation(op)
            .code_line(format!(
                "countFrom({}) {{",
                self.ctx.fragments.table_property()
            ))
            .code_line("allRows()")
            .code_line("}");
        let mut result = FunctionAndImports::with_function(function);
        result
            .imports
            .add("org.mybatis.dynamic.sql.util.kotlin.mybatis3.countFrom");
        result.imports.add(self.ctx.fragments.table_import());

        self.ctx.add_function_comment(&mut result, &MethodDoc::new(op));
        Some(result)
    }
}
