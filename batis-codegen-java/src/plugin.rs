//! Plugin seam for generated Java elements.

use batis_codegen::OperationKind;
use batis_schema::{IntrospectedColumn, IntrospectedTable};

use crate::ast::{Field, JavaClass, JavaInterface, Method};

/// A plugin that can inspect, mutate, or veto generated Java elements.
///
/// Each hook runs after an element is fully built (comments and
/// annotations attached) and before it is added to its parent. Returning
/// `false` drops the element silently; that is normal control flow, not
/// an error.
pub trait JavaPlugin {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called for each generated domain class.
    #[allow(unused_variables)]
    fn model_class_generated(&self, class: &mut JavaClass, table: &IntrospectedTable) -> bool {
        true
    }

    /// Called for each generated domain-class field.
    #[allow(unused_variables)]
    fn model_field_generated(
        &self,
        field: &mut Field,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        true
    }

    /// Called for each generated getter.
    #[allow(unused_variables)]
    fn model_getter_generated(
        &self,
        method: &mut Method,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        true
    }

    /// Called for each generated setter.
    #[allow(unused_variables)]
    fn model_setter_generated(
        &self,
        method: &mut Method,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        true
    }

    /// Called for each generated mapper interface.
    #[allow(unused_variables)]
    fn mapper_interface_generated(
        &self,
        interface: &mut JavaInterface,
        table: &IntrospectedTable,
    ) -> bool {
        true
    }

    /// Called for each generated mapper method, keyed by operation kind.
    #[allow(unused_variables)]
    fn mapper_method_generated(
        &self,
        operation: OperationKind,
        method: &mut Method,
        table: &IntrospectedTable,
    ) -> bool {
        true
    }
}

/// An ordered chain of plugins.
///
/// Every hook asks each plugin in registration order and short-circuits
/// on the first veto.
#[derive(Default)]
pub struct JavaPluginChain {
    plugins: Vec<Box<dyn JavaPlugin>>,
}

impl JavaPluginChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin at the end of the chain.
    pub fn plugin(mut self, plugin: impl JavaPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn model_class_generated(&self, class: &mut JavaClass, table: &IntrospectedTable) -> bool {
        self.plugins
            .iter()
            .all(|p| p.model_class_generated(class, table))
    }

    pub fn model_field_generated(
        &self,
        field: &mut Field,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.model_field_generated(field, table, column))
    }

    pub fn model_getter_generated(
        &self,
        method: &mut Method,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.model_getter_generated(method, table, column))
    }

    pub fn model_setter_generated(
        &self,
        method: &mut Method,
        table: &IntrospectedTable,
        column: &IntrospectedColumn,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.model_setter_generated(method, table, column))
    }

    pub fn mapper_interface_generated(
        &self,
        interface: &mut JavaInterface,
        table: &IntrospectedTable,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.mapper_interface_generated(interface, table))
    }

    pub fn mapper_method_generated(
        &self,
        operation: OperationKind,
        method: &mut Method,
        table: &IntrospectedTable,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.mapper_method_generated(operation, method, table))
    }
}
