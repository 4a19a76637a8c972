//! Numbers, binary arithmetic, modulo and constrain.

use std::str::FromStr;

use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    error::Result,
    precedence::BindingStrength,
};
use crate::graph::OperationNode;
use super::{parse_selector, UnknownSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl FromStr for ArithmeticOp {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(ArithmeticOp::Add),
            "MINUS" => Ok(ArithmeticOp::Minus),
            "MULTIPLY" => Ok(ArithmeticOp::Multiply),
            "DIVIDE" => Ok(ArithmeticOp::Divide),
            "POWER" => Ok(ArithmeticOp::Power),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

impl ArithmeticOp {
    /// Infix symbol and strength, or `None` for power which is a call.
    fn infix(self) -> Option<(&'static str, BindingStrength)> {
        match self {
            ArithmeticOp::Add => Some(("+", BindingStrength::Additive)),
            ArithmeticOp::Minus => Some(("-", BindingStrength::Additive)),
            ArithmeticOp::Multiply => Some(("*", BindingStrength::Multiplicative)),
            ArithmeticOp::Divide => Some(("/", BindingStrength::Multiplicative)),
            ArithmeticOp::Power => None,
        }
    }

    /// Whether `a op (b op c)` can drop its parentheses.
    fn is_associative(self) -> bool {
        matches!(self, ArithmeticOp::Add | ArithmeticOp::Multiply)
    }
}

/// Print a number the way JavaScript's `String(n)` would for ordinary values.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // drops the sign of -0
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn emit_number(node: &OperationNode) -> Result<Emission> {
    let value = node.number_field("NUM")?;
    Ok(Emission::new(format_number(value), BindingStrength::Atomic))
}

pub fn emit_arithmetic(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let op: ArithmeticOp = parse_selector(node, "OP")?;

    match op.infix() {
        Some((symbol, strength)) => {
            let right_min = if op.is_associative() { strength } else { strength.tighter() };
            let a = generator.resolve(node, "A", strength)?;
            let b = generator.resolve(node, "B", right_min)?;
            Ok(Emission::new(format!("{} {} {}", a, symbol, b), strength))
        }
        None => {
            let a = generator.resolve(node, "A", BindingStrength::None)?;
            let b = generator.resolve(node, "B", BindingStrength::None)?;
            Ok(Emission::new(format!("Math.pow({}, {})", a, b), BindingStrength::UnaryPostfix))
        }
    }
}

pub fn emit_modulo(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let strength = BindingStrength::Multiplicative;
    let dividend = generator.resolve(node, "DIVIDEND", strength)?;
    let divisor = generator.resolve(node, "DIVISOR", strength.tighter())?;
    Ok(Emission::new(format!("{} % {}", dividend, divisor), strength))
}

pub fn emit_clamp(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let value = generator.resolve(node, "VALUE", BindingStrength::None)?;
    let low = generator.resolve(node, "LOW", BindingStrength::None)?;
    let high = generator.resolve(node, "HIGH", BindingStrength::None)?;
    let code = format!(
        "({value} < {low} ? {low} : ({value} > {high} ? {high} : {value}))",
        value = value,
        low = low,
        high = high
    );
    Ok(Emission::new(code, BindingStrength::UnaryPostfix))
}
