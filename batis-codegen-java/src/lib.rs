//! Java code generation for the batis generator.
//!
//! Contains the Java structural model ([`ast`]), the pure renderer
//! ([`render`]), the plugin seam ([`plugin`]), and the per-table
//! generators ([`generators`]).

pub mod ast;
pub mod generators;
pub mod naming;
pub mod plugin;
pub mod render;

pub use ast::{
    CompilationUnit, Field, JavaClass, JavaEnum, JavaInterface, JavaType, Method, Parameter,
    TypeDeclaration, Visibility,
};
pub use generators::{JavaGenerator, MapperInterfaceGenerator, ModelClassGenerator};
pub use plugin::{JavaPlugin, JavaPluginChain};
pub use render::{RenderError, render_unit};
