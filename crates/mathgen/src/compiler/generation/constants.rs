use std::str::FromStr;

use crate::compiler::{code_generator::Emission, error::Result, precedence::BindingStrength};
use crate::graph::OperationNode;
use super::{parse_selector, UnknownSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathConstant {
    Pi,
    E,
    GoldenRatio,
    Sqrt2,
    Sqrt1_2,
    Infinity,
}

impl FromStr for MathConstant {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PI" => Ok(MathConstant::Pi),
            "E" => Ok(MathConstant::E),
            "GOLDEN_RATIO" => Ok(MathConstant::GoldenRatio),
            "SQRT2" => Ok(MathConstant::Sqrt2),
            "SQRT1_2" => Ok(MathConstant::Sqrt1_2),
            "INFINITY" => Ok(MathConstant::Infinity),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

impl MathConstant {
    pub fn code(self) -> (&'static str, BindingStrength) {
        match self {
            MathConstant::Pi => ("Math.PI", BindingStrength::UnaryPostfix),
            MathConstant::E => ("Math.E", BindingStrength::UnaryPostfix),
            MathConstant::GoldenRatio => ("(1 + Math.sqrt(5)) / 2", BindingStrength::Multiplicative),
            MathConstant::Sqrt2 => ("Math.SQRT2", BindingStrength::UnaryPostfix),
            MathConstant::Sqrt1_2 => ("Math.SQRT1_2", BindingStrength::UnaryPostfix),
            MathConstant::Infinity => ("Infinity", BindingStrength::Atomic),
        }
    }
}

pub fn emit_constant(node: &OperationNode) -> Result<Emission> {
    let constant: MathConstant = parse_selector(node, "CONSTANT")?;
    let (code, strength) = constant.code();
    Ok(Emission::new(code, strength))
}
