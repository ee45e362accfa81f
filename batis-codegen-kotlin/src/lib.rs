//! Kotlin code generation for the batis generator.
//!
//! Contains the Kotlin structural model ([`ast`]), the fragment builders
//! ([`fragment`]), the brace-tracking renderer ([`render`]), the plugin
//! seam ([`plugin`]), and the per-table generators ([`generators`]).

pub mod ast;
pub mod fragment;
pub mod generators;
pub mod naming;
pub mod plugin;
pub mod render;

pub use ast::{
    KotlinArg, KotlinDataClass, KotlinFile, KotlinFunction, KotlinItem, KotlinObject,
    KotlinProperty, KotlinType,
};
pub use fragment::{FragmentGenerator, FunctionParts};
pub use generators::{
    DataClassGenerator, FunctionAndImports, FunctionContext, KotlinGenerator,
    KotlinMapperGenerator, SupportObjectGenerator,
};
pub use plugin::{KotlinPlugin, KotlinPluginChain};
pub use render::{RenderError, render_file};
