//! # Node Emitters
//!
//! One emission rule per block family. Each rule reads the node's fields,
//! resolves its input slots through the child resolver and returns the code
//! together with the strength it binds at.
//!
//! | Module | Blocks |
//! |---|---|
//! | `arithmetic` | number, arithmetic, modulo, constrain |
//! | `unary` | single, trig, round, atan2 |
//! | `constants` | constant |
//! | `number_property` | number property (even, prime, ...) |
//! | `random` | random integer, random fraction |
//! | `lists` | aggregates over a list |
//! | `variables` | change by, variable getter |
//!
//! Rules that need shared support code register it through
//! [`CodeGenerator::ensure_helper`](super::code_generator::CodeGenerator::ensure_helper);
//! the routine text itself comes from `helpers`.

use std::str::FromStr;

use crate::graph::OperationNode;
use super::error::{CodegenError, Result};

pub mod arithmetic;
pub mod constants;
pub mod helpers;
pub mod lists;
pub mod number_property;
pub mod random;
pub mod unary;
pub mod variables;

/// Error for a dropdown value no emitter knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelector(pub String);

/// Read a dropdown field and parse it into its selector enum.
pub(crate) fn parse_selector<T>(node: &OperationNode, field: &str) -> Result<T>
where
    T: FromStr<Err = UnknownSelector>,
{
    let value = node.selector(field)?;
    value.parse().map_err(|UnknownSelector(value)| CodegenError::UnknownSelector {
        node_id: node.id.clone(),
        field: field.to_string(),
        value,
    })
}
