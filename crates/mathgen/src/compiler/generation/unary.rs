//! Single-operand math: negation, library wrappers, trigonometry in degrees.

use std::str::FromStr;

use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    data_resolver::negate,
    error::Result,
    precedence::BindingStrength,
};
use crate::graph::OperationNode;
use super::{parse_selector, UnknownSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Root,
    Abs,
    Neg,
    Ln,
    Log10,
    Exp,
    Pow10,
    Round,
    RoundUp,
    RoundDown,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl FromStr for UnaryOp {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let op = match s {
            "ROOT" => UnaryOp::Root,
            "ABS" => UnaryOp::Abs,
            "NEG" => UnaryOp::Neg,
            "LN" => UnaryOp::Ln,
            "LOG10" => UnaryOp::Log10,
            "EXP" => UnaryOp::Exp,
            "POW10" => UnaryOp::Pow10,
            "ROUND" => UnaryOp::Round,
            "ROUNDUP" => UnaryOp::RoundUp,
            "ROUNDDOWN" => UnaryOp::RoundDown,
            "SIN" => UnaryOp::Sin,
            "COS" => UnaryOp::Cos,
            "TAN" => UnaryOp::Tan,
            "ASIN" => UnaryOp::Asin,
            "ACOS" => UnaryOp::Acos,
            "ATAN" => UnaryOp::Atan,
            other => return Err(UnknownSelector(other.to_string())),
        };
        Ok(op)
    }
}

impl UnaryOp {
    /// Strength the operand must have before it is spliced in.
    pub fn operand_strength(self) -> BindingStrength {
        match self {
            UnaryOp::Neg => BindingStrength::UnaryPrefix,
            UnaryOp::Abs | UnaryOp::Round | UnaryOp::RoundUp | UnaryOp::RoundDown => {
                BindingStrength::UnaryPostfix
            }
            // operand is followed by `/ 180`
            UnaryOp::Sin | UnaryOp::Cos | UnaryOp::Tan => BindingStrength::Multiplicative,
            _ => BindingStrength::None,
        }
    }

    pub fn apply(self, arg: &str) -> Emission {
        let call = |function: &str| {
            Emission::new(format!("{}({})", function, arg), BindingStrength::UnaryPostfix)
        };
        let degrees_in = |function: &str| {
            Emission::new(
                format!("{}({} / 180 * Math.PI)", function, arg),
                BindingStrength::UnaryPostfix,
            )
        };
        let degrees_out = |function: &str| {
            Emission::new(
                format!("{}({}) / Math.PI * 180", function, arg),
                BindingStrength::Multiplicative,
            )
        };

        match self {
            UnaryOp::Neg => Emission::new(negate(arg), BindingStrength::UnaryPostfix),
            UnaryOp::Abs => call("Math.abs"),
            UnaryOp::Root => call("Math.sqrt"),
            UnaryOp::Ln => call("Math.log"),
            UnaryOp::Exp => call("Math.exp"),
            UnaryOp::Pow10 => Emission::new(format!("Math.pow(10, {})", arg), BindingStrength::UnaryPostfix),
            UnaryOp::Round => call("Math.round"),
            UnaryOp::RoundUp => call("Math.ceil"),
            UnaryOp::RoundDown => call("Math.floor"),
            UnaryOp::Sin => degrees_in("Math.sin"),
            UnaryOp::Cos => degrees_in("Math.cos"),
            UnaryOp::Tan => degrees_in("Math.tan"),
            UnaryOp::Log10 => Emission::new(
                format!("Math.log({}) / Math.log(10)", arg),
                BindingStrength::Multiplicative,
            ),
            UnaryOp::Asin => degrees_out("Math.asin"),
            UnaryOp::Acos => degrees_out("Math.acos"),
            UnaryOp::Atan => degrees_out("Math.atan"),
        }
    }
}

/// `math_single`, `math_trig` and `math_round` all read `OP` and `NUM`.
pub fn emit_single(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let op: UnaryOp = parse_selector(node, "OP")?;
    let arg = generator.resolve(node, "NUM", op.operand_strength())?;
    Ok(op.apply(&arg))
}

/// Angle of the point (X, Y) in degrees.
pub fn emit_atan2(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let x = generator.resolve(node, "X", BindingStrength::None)?;
    let y = generator.resolve(node, "Y", BindingStrength::None)?;
    Ok(Emission::new(
        format!("Math.atan2({}, {}) / Math.PI * 180", y, x),
        BindingStrength::Multiplicative,
    ))
}
