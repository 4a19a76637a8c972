//! Blocks that read or update a program variable. Display names come from
//! the session, which binds each logical variable id to an identifier.

use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    error::{CodegenError, Result},
    precedence::BindingStrength,
};
use crate::graph::OperationNode;

fn bound_name(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<String> {
    let variable_id = node.selector("VAR")?;
    generator
        .session()
        .variable_name(&variable_id)
        .map(str::to_string)
        .ok_or(CodegenError::UnboundVariable(variable_id))
}

/// `name += DELTA;`
pub fn emit_change(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<String> {
    let delta = generator.resolve(node, "DELTA", BindingStrength::Additive)?;
    let name = bound_name(generator, node)?;
    Ok(format!("{} += {};\n", name, delta))
}

pub fn emit_get(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let name = bound_name(generator, node)?;
    Ok(Emission::new(name, BindingStrength::Atomic))
}
