//! Mapper interface generation.

use batis_codegen::{CommentGenerator, ImportCollector, MethodDoc, OperationKind};
use batis_schema::IntrospectedTable;

use crate::{
    ast::{CompilationUnit, JavaInterface, JavaType, Method, Parameter, TypeDeclaration},
    naming,
    plugin::JavaPluginChain,
};

/// Builds the mapper interface for one table: one abstract method per
/// enabled operation, each tagged with its operation kind.
pub struct MapperInterfaceGenerator<'a> {
    table: &'a IntrospectedTable,
    model_package: &'a str,
    mapper_package: &'a str,
    comments: &'a dyn CommentGenerator,
    plugins: &'a JavaPluginChain,
}

impl<'a> MapperInterfaceGenerator<'a> {
    pub fn new(
        table: &'a IntrospectedTable,
        model_package: &'a str,
        mapper_package: &'a str,
        comments: &'a dyn CommentGenerator,
        plugins: &'a JavaPluginChain,
    ) -> Self {
        Self {
            table,
            model_package,
            mapper_package,
            comments,
            plugins,
        }
    }

    /// Build the compilation unit; absent when every operation is skipped
    /// or vetoed, or when a plugin vetoes the interface.
    pub fn generate(&self) -> Option<CompilationUnit> {
        let record_type = JavaType::new(format!(
            "{}.{}",
            self.model_package,
            naming::model_class_name(&self.table.name)
        ));

        let mut imports = ImportCollector::new();
        let mut interface = JavaInterface::new(naming::mapper_interface_name(&self.table.name));
        self.comments.add_type_comment(&mut interface.doc, self.table);
        self.comments
            .add_type_annotation(&mut interface.doc, &mut imports, self.table);

        for op in OperationKind::ALL {
            if !self.table.should_generate(op) {
                continue;
            }
            let mut method = self.build_method(op, &record_type, &mut imports);
            if self
                .plugins
                .mapper_method_generated(op, &mut method, self.table)
            {
                interface.methods.push(method);
            }
        }

        if interface.methods.is_empty() {
            tracing::debug!(table = %self.table.name, "no mapper methods generated");
            return None;
        }
        if !self
            .plugins
            .mapper_interface_generated(&mut interface, self.table)
        {
            tracing::debug!(table = %self.table.name, "mapper interface vetoed by plugin");
            return None;
        }

        let mut unit = CompilationUnit::new(self.mapper_package, TypeDeclaration::Interface(interface));
        unit.imports = imports;
        let file_name = unit.file_name();
        self.comments
            .add_file_comment(&mut unit.file_comment_lines, &file_name);
        Some(unit)
    }

    fn build_method(
        &self,
        op: OperationKind,
        record_type: &JavaType,
        imports: &mut ImportCollector,
    ) -> Method {
        let mut method = Method::new(op.method_name()).abstract_().operation(op);
        let mut doc = MethodDoc::new(op);

        match op {
            OperationKind::Insert
            | OperationKind::InsertSelective
            | OperationKind::UpdateByPrimaryKey
            | OperationKind::UpdateByPrimaryKeySelective => {
                imports.extend(record_type.import_list());
                method = method
                    .returns(JavaType::new("int"))
                    .param(Parameter::new("record", record_type.clone()));
                doc = doc.param("record").returns("int");
            }
            OperationKind::SelectByPrimaryKey => {
                imports.extend(record_type.import_list());
                method = method.returns(record_type.clone());
                for key in self.table.primary_key_columns() {
                    let ty = JavaType::new(&key.java_type);
                    imports.extend(ty.import_list());
                    method = method.param(Parameter::new(&key.field_name, ty));
                    doc = doc.param(&key.field_name);
                }
                doc = doc.returns(record_type.short_name());
            }
            OperationKind::SelectAll => {
                let list_type = JavaType::new("java.util.List").type_argument(record_type.clone());
                imports.extend(list_type.import_list());
                doc = doc.returns(list_type.short_name());
                method = method.returns(list_type);
            }
            OperationKind::DeleteByPrimaryKey => {
                method = method.returns(JavaType::new("int"));
                for key in self.table.primary_key_columns() {
                    let ty = JavaType::new(&key.java_type);
                    imports.extend(ty.import_list());
                    method = method.param(Parameter::new(&key.field_name, ty));
                    doc = doc.param(&key.field_name);
                }
                doc = doc.returns("int");
            }
            OperationKind::CountAll => {
                method = method.returns(JavaType::new("long"));
                doc = doc.returns("long");
            }
        }

        self.comments
            .add_method_comment(&mut method.doc, self.table, &doc);
        self.comments
            .add_method_annotation(&mut method.doc, imports, self.table, None);
        method
    }
}

#[cfg(test)]
mod tests {
    use batis_codegen::{CommentConfig, DefaultCommentGenerator};
    use batis_schema::IntrospectedColumn;

    use super::*;
    use crate::plugin::JavaPlugin;

    fn customer() -> IntrospectedTable {
        IntrospectedTable::new("customer")
            .column(IntrospectedColumn::new("cust_id", "java.lang.Long").primary_key())
            .column(IntrospectedColumn::new("cust_name", "java.lang.String"))
    }

    fn hook() -> DefaultCommentGenerator {
        DefaultCommentGenerator::new(CommentConfig::default())
    }

    fn generate(table: &IntrospectedTable, plugins: &JavaPluginChain) -> Option<CompilationUnit> {
        let hook = hook();
        MapperInterfaceGenerator::new(table, "com.acme.model", "com.acme.mapper", &hook, plugins)
            .generate()
    }

    fn method_names(unit: &CompilationUnit) -> Vec<String> {
        let TypeDeclaration::Interface(interface) = &unit.type_decl else {
            panic!("expected an interface");
        };
        interface.methods.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_all_operations_for_keyed_table() {
        let table = customer();
        let unit = generate(&table, &JavaPluginChain::new()).unwrap();
        assert_eq!(
            method_names(&unit),
            [
                "insert",
                "insertSelective",
                "selectByPrimaryKey",
                "selectAll",
                "updateByPrimaryKey",
                "updateByPrimaryKeySelective",
                "deleteByPrimaryKey",
                "countAll"
            ]
        );
        assert!(unit.imports.contains("com.acme.model.Customer"));
        assert!(unit.imports.contains("java.util.List"));
    }

    #[test]
    fn test_disabled_operation_is_absent() {
        let mut table = customer();
        table.config.delete_by_primary_key = false;
        let unit = generate(&table, &JavaPluginChain::new()).unwrap();
        assert!(!method_names(&unit).contains(&"deleteByPrimaryKey".to_string()));
    }

    #[test]
    fn test_no_plugin_call_for_skipped_operation() {
        use std::sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        };

        struct RecordDelete {
            seen: Arc<AtomicBool>,
        }
        impl JavaPlugin for RecordDelete {
            fn name(&self) -> &'static str {
                "record-delete"
            }
            fn mapper_method_generated(
                &self,
                operation: OperationKind,
                _method: &mut Method,
                _table: &IntrospectedTable,
            ) -> bool {
                if operation == OperationKind::DeleteByPrimaryKey {
                    self.seen.store(true, Ordering::SeqCst);
                }
                true
            }
        }

        let seen = Arc::new(AtomicBool::new(false));
        let mut table = customer();
        table.config.delete_by_primary_key = false;
        let plugins = JavaPluginChain::new().plugin(RecordDelete {
            seen: Arc::clone(&seen),
        });
        generate(&table, &plugins).unwrap();
        assert!(!seen.load(Ordering::SeqCst));
    }

    #[test]
    fn test_method_veto_removes_built_method() {
        struct VetoInsert;
        impl JavaPlugin for VetoInsert {
            fn name(&self) -> &'static str {
                "veto-insert"
            }
            fn mapper_method_generated(
                &self,
                operation: OperationKind,
                _method: &mut Method,
                _table: &IntrospectedTable,
            ) -> bool {
                operation != OperationKind::Insert
            }
        }

        let table = customer();
        let plugins = JavaPluginChain::new().plugin(VetoInsert);
        let unit = generate(&table, &plugins).unwrap();
        assert!(!method_names(&unit).contains(&"insert".to_string()));
    }

    #[test]
    fn test_all_operations_disabled_yields_no_unit() {
        let mut table = customer();
        table.config = batis_schema::TableConfiguration {
            insert: false,
            insert_selective: false,
            select_by_primary_key: false,
            select_all: false,
            update_by_primary_key: false,
            update_by_primary_key_selective: false,
            delete_by_primary_key: false,
            count_all: false,
        };
        assert!(generate(&table, &JavaPluginChain::new()).is_none());
    }

    #[test]
    fn test_select_by_primary_key_signature() {
        let table = customer();
        let unit = generate(&table, &JavaPluginChain::new()).unwrap();
        let TypeDeclaration::Interface(interface) = &unit.type_decl else {
            panic!("expected an interface");
        };
        let select = interface
            .methods
            .iter()
            .find(|m| m.operation == Some(OperationKind::SelectByPrimaryKey))
            .unwrap();
        assert_eq!(select.params.len(), 1);
        assert_eq!(select.params[0].name, "custId");
        assert_eq!(
            select.return_type.as_ref().unwrap().short_name(),
            "Customer"
        );
    }
}
