use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    error::Result,
    precedence::BindingStrength,
};
use crate::graph::OperationNode;
use super::helpers;

/// Random integer between `FROM` and `TO` inclusive, in either order.
pub fn emit_random_int(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let from = generator.resolve(node, "FROM", BindingStrength::None)?;
    let to = generator.resolve(node, "TO", BindingStrength::None)?;
    let function = generator.ensure_helper(helpers::RANDOM_INT, helpers::random_int);
    Ok(Emission::new(
        format!("{}({}, {})", function, from, to),
        BindingStrength::FUNCTION_CALL,
    ))
}

/// Random fraction in `[0, 1)`.
pub fn emit_random_float() -> Emission {
    Emission::new("Math.random()", BindingStrength::FUNCTION_CALL)
}
