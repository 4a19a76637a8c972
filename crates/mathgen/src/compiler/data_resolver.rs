//! # Child Resolver
//!
//! Resolves the code plugged into a node's input slot:
//! 1. Unconnected slots fall back to a default literal
//! 2. Connected children are emitted recursively
//! 3. Children that bind more loosely than the slot requires are wrapped in
//!    one pair of parentheses

use crate::graph::OperationNode;
use super::{
    code_generator::{CodeGenerator, Emission},
    error::Result,
    precedence::{stronger_or_equal, BindingStrength},
};

/// Default for an empty numeric slot
pub const NUMBER_DEFAULT: &str = "0";

/// Default for an empty list slot
pub const LIST_DEFAULT: &str = "[]";

impl<'a> CodeGenerator<'a> {
    /// Code for a numeric input slot, parenthesized when `min` requires it.
    pub fn resolve(&mut self, node: &OperationNode, slot: &str, min: BindingStrength) -> Result<String> {
        self.resolve_or(node, slot, min, NUMBER_DEFAULT)
    }

    /// Code for a list input slot.
    pub fn resolve_list(&mut self, node: &OperationNode, slot: &str, min: BindingStrength) -> Result<String> {
        self.resolve_or(node, slot, min, LIST_DEFAULT)
    }

    pub fn resolve_or(
        &mut self,
        node: &OperationNode,
        slot: &str,
        min: BindingStrength,
        default: &str,
    ) -> Result<String> {
        match self.tree().child(node, slot)? {
            Some(child) => {
                let emission = self.emit_expression(child)?;
                Ok(parenthesize(emission, min))
            }
            None => Ok(default.to_string()),
        }
    }
}

/// Splice an emission into a slot requiring `min`.
pub fn parenthesize(emission: Emission, min: BindingStrength) -> String {
    if stronger_or_equal(emission.strength, min) {
        emission.code
    } else {
        format!("({})", emission.code)
    }
}

/// Prefix a negation sign. `--x` would lex as a decrement, so an operand that
/// already starts with `-` is separated by a space.
pub fn negate(operand: &str) -> String {
    if operand.starts_with('-') {
        format!("- {}", operand)
    } else {
        format!("-{}", operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::session::Session;
    use crate::graph::{BlockTree, NodeKind};

    #[test]
    fn test_weaker_child_is_wrapped_once() {
        let sum = Emission::new("a + b", BindingStrength::Additive);
        assert_eq!(parenthesize(sum, BindingStrength::Multiplicative), "(a + b)");

        let already = Emission::new("(a + b)", BindingStrength::Atomic);
        assert_eq!(parenthesize(already, BindingStrength::Multiplicative), "(a + b)");
    }

    #[test]
    fn test_strong_enough_child_is_untouched() {
        let product = Emission::new("a * b", BindingStrength::Multiplicative);
        assert_eq!(parenthesize(product.clone(), BindingStrength::Multiplicative), "a * b");
        assert_eq!(parenthesize(product, BindingStrength::Additive), "a * b");

        let call = Emission::new("f(x)", BindingStrength::FUNCTION_CALL);
        assert_eq!(parenthesize(call, BindingStrength::None), "f(x)");
    }

    #[test]
    fn test_negate_guards_double_minus() {
        assert_eq!(negate("x"), "-x");
        assert_eq!(negate("5"), "-5");
        assert_eq!(negate("-5"), "- -5");
        assert_eq!(negate("-Math.PI"), "- -Math.PI");
    }

    #[test]
    fn test_unconnected_slots_use_defaults() {
        let mut tree = BlockTree::new();
        tree.add_node(OperationNode::new("sum", NodeKind::ListAggregate).with_field("OP", "SUM"));
        let node = tree.node("sum").unwrap();

        let mut session = Session::new();
        let mut generator = CodeGenerator::new(&tree, &mut session);
        assert_eq!(generator.resolve(node, "A", BindingStrength::Atomic).unwrap(), "0");
        assert_eq!(generator.resolve_list(node, "LIST", BindingStrength::None).unwrap(), "[]");
    }
}
