//! # mathgen
//!
//! Code generation for the math blocks of the visual editor. A tree of
//! operation nodes goes in; JavaScript source with exactly the parentheses it
//! needs comes out, along with the support routines (primality test, list
//! statistics, ...) that the generated code calls. Each routine is emitted
//! once per generation session under a collision-free name.
//!
//! Tree editing, persistence and whole-program wrapping belong to the editor;
//! this crate only produces code fragments.

pub mod compiler;
pub mod graph;
pub mod settings;

pub use compiler::{
    compile_expression, compile_program, compile_statement, BindingStrength, CodegenError, Emission,
    Session,
};
pub use graph::{BlockTree, FieldValue, NodeKind, OperationNode};
pub use settings::GeneratorSettings;
