use std::str::FromStr;

use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    error::Result,
    precedence::BindingStrength,
};
use crate::graph::OperationNode;
use super::{helpers, parse_selector, UnknownSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Sum,
    Min,
    Max,
    Average,
    Median,
    Mode,
    StdDev,
    Random,
}

impl FromStr for ListOp {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SUM" => Ok(ListOp::Sum),
            "MIN" => Ok(ListOp::Min),
            "MAX" => Ok(ListOp::Max),
            "AVERAGE" => Ok(ListOp::Average),
            "MEDIAN" => Ok(ListOp::Median),
            "MODE" => Ok(ListOp::Mode),
            "STD_DEV" => Ok(ListOp::StdDev),
            "RANDOM" => Ok(ListOp::Random),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

impl ListOp {
    /// Helper key and the template that builds it.
    pub fn helper(self) -> (&'static str, fn(&str, &str) -> String) {
        match self {
            ListOp::Sum => (helpers::SUM, helpers::sum),
            ListOp::Min => (helpers::MIN, helpers::min),
            ListOp::Max => (helpers::MAX, helpers::max),
            ListOp::Average => (helpers::MEAN, helpers::mean),
            ListOp::Median => (helpers::MEDIAN, helpers::median),
            ListOp::Mode => (helpers::MODES, helpers::modes),
            ListOp::StdDev => (helpers::STANDARD_DEVIATION, helpers::standard_deviation),
            ListOp::Random => (helpers::RANDOM_ITEM, helpers::random_item),
        }
    }
}

pub fn emit_on_list(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let op: ListOp = parse_selector(node, "OP")?;
    let list = generator.resolve_list(node, "LIST", BindingStrength::None)?;
    let (key, template) = op.helper();
    let function = generator.ensure_helper(key, template);
    Ok(Emission::new(
        format!("{}({})", function, list),
        BindingStrength::FUNCTION_CALL,
    ))
}
