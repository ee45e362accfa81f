//! Plugin seam for generated Kotlin elements.

use batis_codegen::OperationKind;
use batis_schema::IntrospectedTable;

use crate::ast::{KotlinDataClass, KotlinFile, KotlinFunction, KotlinObject};

/// A plugin that can inspect, mutate, or veto generated Kotlin elements.
///
/// Each hook runs after an element is fully built and before it is added
/// to its parent; returning `false` drops the element silently.
pub trait KotlinPlugin {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called for each generated data class.
    #[allow(unused_variables)]
    fn data_class_generated(&self, class: &mut KotlinDataClass, table: &IntrospectedTable) -> bool {
        true
    }

    /// Called for each generated dynamic-SQL support object.
    #[allow(unused_variables)]
    fn support_object_generated(
        &self,
        object: &mut KotlinObject,
        table: &IntrospectedTable,
    ) -> bool {
        true
    }

    /// Called for each generated mapper function, keyed by operation kind.
    #[allow(unused_variables)]
    fn mapper_function_generated(
        &self,
        operation: OperationKind,
        function: &mut KotlinFunction,
        table: &IntrospectedTable,
    ) -> bool {
        true
    }

    /// Called once per assembled mapper file.
    #[allow(unused_variables)]
    fn mapper_file_generated(&self, file: &mut KotlinFile, table: &IntrospectedTable) -> bool {
        true
    }
}

/// An ordered chain of plugins; every hook short-circuits on the first
/// veto.
#[derive(Default)]
pub struct KotlinPluginChain {
    plugins: Vec<Box<dyn KotlinPlugin>>,
}

impl KotlinPluginChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin at the end of the chain.
    pub fn plugin(mut self, plugin: impl KotlinPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn data_class_generated(
        &self,
        class: &mut KotlinDataClass,
        table: &IntrospectedTable,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.data_class_generated(class, table))
    }

    pub fn support_object_generated(
        &self,
        object: &mut KotlinObject,
        table: &IntrospectedTable,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.support_object_generated(object, table))
    }

    pub fn mapper_function_generated(
        &self,
        operation: OperationKind,
        function: &mut KotlinFunction,
        table: &IntrospectedTable,
    ) -> bool {
        self.plugins
            .iter()
            .all(|p| p.mapper_function_generated(operation, function, table))
    }

    pub fn mapper_file_generated(&self, file: &mut KotlinFile, table: &IntrospectedTable) -> bool {
        self.plugins
            .iter()
            .all(|p| p.mapper_file_generated(file, table))
    }
}
