//! # Code Generator
//!
//! Walks a block tree depth-first and turns each node into JavaScript.
//!
//! Value blocks produce an [`Emission`]: the code plus the binding strength
//! it was emitted at, so the parent can decide whether it needs parentheses
//! (see `data_resolver`). Statement blocks produce a full line of code.
//! Emission rules for the individual node kinds live in `generation`.

use std::collections::HashSet;

use crate::graph::{BlockTree, NodeKind, OperationNode};
use super::{
    error::{CodegenError, Result},
    generation,
    precedence::BindingStrength,
    session::Session,
};

/// Code for one value block and how tightly it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub code: String,
    pub strength: BindingStrength,
}

impl Emission {
    pub fn new(code: impl Into<String>, strength: BindingStrength) -> Self {
        Self {
            code: code.into(),
            strength,
        }
    }
}

/// Main code generator
pub struct CodeGenerator<'a> {
    /// The tree being compiled
    tree: &'a BlockTree,

    /// Helper table and names for this pass
    session: &'a mut Session,

    /// Nodes currently being emitted, to stop cyclic references
    in_progress: HashSet<String>,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(tree: &'a BlockTree, session: &'a mut Session) -> Self {
        Self {
            tree,
            session,
            in_progress: HashSet::new(),
        }
    }

    pub fn tree(&self) -> &'a BlockTree {
        self.tree
    }

    pub fn session(&mut self) -> &mut Session {
        &mut *self.session
    }

    /// Register a helper routine through the session. `build` receives the
    /// issued name and the configured indent.
    pub fn ensure_helper<F>(&mut self, key: &str, build: F) -> String
    where
        F: FnOnce(&str, &str) -> String,
    {
        let indent = self.session.settings().indent.clone();
        self.session.ensure_helper(key, |name| build(name, &indent))
    }

    /// Generate code for a value block.
    pub fn emit_expression(&mut self, node: &'a OperationNode) -> Result<Emission> {
        if !self.in_progress.insert(node.id.clone()) {
            return Err(CodegenError::CyclicReference(node.id.clone()));
        }

        let result = self.dispatch(node);
        self.in_progress.remove(&node.id);

        let emission = result?;
        tracing::trace!(
            node_id = %node.id,
            kind = %node.kind,
            strength = %emission.strength,
            code = %emission.code,
            "Emitted expression"
        );
        Ok(emission)
    }

    /// Generate one line of code for a block in a statement stack.
    ///
    /// Value blocks placed directly in a stack become expression statements.
    pub fn emit_statement(&mut self, node: &'a OperationNode) -> Result<String> {
        if !node.kind.is_statement() {
            let emission = self.emit_expression(node)?;
            return Ok(format!("{};\n", emission.code));
        }

        if !self.in_progress.insert(node.id.clone()) {
            return Err(CodegenError::CyclicReference(node.id.clone()));
        }

        let result = generation::variables::emit_change(self, node);
        self.in_progress.remove(&node.id);
        result
    }

    fn dispatch(&mut self, node: &'a OperationNode) -> Result<Emission> {
        match node.kind {
            NodeKind::NumericLiteral => generation::arithmetic::emit_number(node),
            NodeKind::Arithmetic => generation::arithmetic::emit_arithmetic(self, node),
            NodeKind::Modulo => generation::arithmetic::emit_modulo(self, node),
            NodeKind::UnaryMath | NodeKind::Trig | NodeKind::Round => {
                generation::unary::emit_single(self, node)
            }
            NodeKind::Atan2 => generation::unary::emit_atan2(self, node),
            NodeKind::Constant => generation::constants::emit_constant(node),
            NodeKind::NumberProperty => generation::number_property::emit_number_property(self, node),
            NodeKind::Clamp => generation::arithmetic::emit_clamp(self, node),
            NodeKind::RandomInt => generation::random::emit_random_int(self, node),
            NodeKind::RandomFloat => Ok(generation::random::emit_random_float()),
            NodeKind::ListAggregate => generation::lists::emit_on_list(self, node),
            NodeKind::VariableGet => generation::variables::emit_get(self, node),
            NodeKind::VariableIncrement => Err(CodegenError::NotAnExpression {
                node_id: node.id.clone(),
                kind: node.kind.to_string(),
            }),
        }
    }
}
