use std::str::FromStr;

use crate::compiler::{
    code_generator::{CodeGenerator, Emission},
    error::Result,
    precedence::BindingStrength,
};
use crate::graph::OperationNode;
use super::{helpers, parse_selector, UnknownSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberProperty {
    Even,
    Odd,
    Prime,
    Whole,
    Positive,
    Negative,
    DivisibleBy,
}

impl FromStr for NumberProperty {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "EVEN" => Ok(NumberProperty::Even),
            "ODD" => Ok(NumberProperty::Odd),
            "PRIME" => Ok(NumberProperty::Prime),
            "WHOLE" => Ok(NumberProperty::Whole),
            "POSITIVE" => Ok(NumberProperty::Positive),
            "NEGATIVE" => Ok(NumberProperty::Negative),
            "DIVISIBLE_BY" => Ok(NumberProperty::DivisibleBy),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

pub fn emit_number_property(generator: &mut CodeGenerator<'_>, node: &OperationNode) -> Result<Emission> {
    let property: NumberProperty = parse_selector(node, "PROPERTY")?;
    let number = generator.resolve(node, "NUMBER_TO_CHECK", BindingStrength::Multiplicative)?;

    let code = match property {
        NumberProperty::Prime => {
            let function = generator.ensure_helper(helpers::IS_PRIME, helpers::is_prime);
            return Ok(Emission::new(
                format!("{}({})", function, number),
                BindingStrength::FUNCTION_CALL,
            ));
        }
        NumberProperty::Even => format!("{} % 2 == 0", number),
        NumberProperty::Odd => format!("{} % 2 == 1", number),
        NumberProperty::Whole => format!("{} % 1 == 0", number),
        NumberProperty::Positive => format!("{} > 0", number),
        NumberProperty::Negative => format!("{} < 0", number),
        NumberProperty::DivisibleBy => {
            let divisor = generator.resolve(node, "DIVISOR", BindingStrength::UnaryPrefix)?;
            format!("{} % {} == 0", number, divisor)
        }
    };

    Ok(Emission::new(code, BindingStrength::Equality))
}
