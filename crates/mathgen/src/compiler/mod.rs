//! # The Math Block Compiler
//!
//! Transforms trees of math blocks into JavaScript source.
//!
//! ## Pipeline
//!
//! 1. **Dispatch**: `code_generator` matches on the node kind
//! 2. **Child resolution**: `data_resolver` emits each input slot and
//!    parenthesizes it against the strength the parent requires
//! 3. **Emission**: `generation` holds one rule per block family
//! 4. **Helpers**: rules needing support code register it once in the
//!    [`Session`], which is flushed ahead of the program body
//!
//! ## Example
//!
//! ```rust
//! use mathgen::compiler::{compile_expression, Session};
//! use mathgen::graph::{BlockTree, NodeKind, OperationNode};
//!
//! let mut tree = BlockTree::new();
//! tree.add_node(OperationNode::new("two", NodeKind::NumericLiteral).with_field("NUM", 2.0));
//! tree.add_node(
//!     OperationNode::new("prime", NodeKind::NumberProperty)
//!         .with_field("PROPERTY", "PRIME")
//!         .with_input("NUMBER_TO_CHECK", "two"),
//! );
//!
//! let mut session = Session::new();
//! let emission = compile_expression(&tree, "prime", &mut session)?;
//! assert_eq!(emission.code, "math_isPrime(2)");
//! assert_eq!(session.definitions().len(), 1);
//! # Ok::<(), mathgen::compiler::CodegenError>(())
//! ```

use crate::graph::BlockTree;

pub mod code_generator;
pub mod data_resolver;
pub mod error;
pub mod generation;
pub mod precedence;
pub mod session;


pub use code_generator::{CodeGenerator, Emission};
pub use error::{CodegenError, Result};
pub use precedence::{stronger_or_equal, BindingStrength};
pub use session::{HelperDefinition, IdentifierAllocator, NameRegistry, Session};

/// Generate code for one value block.
pub fn compile_expression(tree: &BlockTree, node_id: &str, session: &mut Session) -> Result<Emission> {
    let node = tree.node(node_id)?;
    CodeGenerator::new(tree, session).emit_expression(node)
}

/// Generate one statement line for a block in a stack.
pub fn compile_statement(tree: &BlockTree, node_id: &str, session: &mut Session) -> Result<String> {
    let node = tree.node(node_id)?;
    CodeGenerator::new(tree, session).emit_statement(node)
}

/// Generate every root of the tree in order, with the helper routines they
/// need placed once ahead of the statements. Consumes the session.
pub fn compile_program(tree: &BlockTree, mut session: Session) -> Result<String> {
    tracing::info!(roots = tree.roots.len(), nodes = tree.nodes.len(), "Compiling block program");

    let mut body = String::new();
    {
        let mut generator = CodeGenerator::new(tree, &mut session);
        for root_id in &tree.roots {
            let node = tree.node(root_id)?;
            body.push_str(&generator.emit_statement(node)?);
        }
    }

    let helper_count = session.definitions().len();
    let helpers = session.flush();
    tracing::info!(helpers = helper_count, "Block program compiled");

    if helpers.is_empty() {
        Ok(body)
    } else {
        Ok(format!("{}\n\n{}", helpers, body))
    }
}
