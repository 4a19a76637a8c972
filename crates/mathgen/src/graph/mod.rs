//! # Block Trees
//!
//! The tree the code generator reads from. Nodes are stored flat in a
//! [`BlockTree`] and refer to their children by id, so a node never owns the
//! blocks plugged into it. The editor persists trees as JSON in this shape.

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::compiler::error::{CodegenError, Result};

/// A tree (or forest) of operation nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockTree {
    pub nodes: HashMap<String, OperationNode>,
    /// Top-level nodes in program order
    #[serde(default)]
    pub roots: Vec<String>,
}

/// One block instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationNode {
    pub id: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
    /// Slot name -> id of the connected child. Missing slots are unconnected.
    #[serde(default)]
    pub inputs: HashMap<String, String>,
}

/// Every block shape the generator knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "math_number")]
    NumericLiteral,
    #[serde(rename = "math_arithmetic")]
    Arithmetic,
    #[serde(rename = "math_single")]
    UnaryMath,
    #[serde(rename = "math_trig")]
    Trig,
    #[serde(rename = "math_round")]
    Round,
    #[serde(rename = "math_constant")]
    Constant,
    #[serde(rename = "math_number_property")]
    NumberProperty,
    #[serde(rename = "math_change")]
    VariableIncrement,
    #[serde(rename = "math_modulo")]
    Modulo,
    #[serde(rename = "math_constrain")]
    Clamp,
    #[serde(rename = "math_random_int")]
    RandomInt,
    #[serde(rename = "math_random_float")]
    RandomFloat,
    #[serde(rename = "math_on_list")]
    ListAggregate,
    #[serde(rename = "math_atan2")]
    Atan2,
    #[serde(rename = "variables_get")]
    VariableGet,
}

impl NodeKind {
    /// The block type tag used by the editor.
    pub fn block_type(&self) -> &'static str {
        match self {
            NodeKind::NumericLiteral => "math_number",
            NodeKind::Arithmetic => "math_arithmetic",
            NodeKind::UnaryMath => "math_single",
            NodeKind::Trig => "math_trig",
            NodeKind::Round => "math_round",
            NodeKind::Constant => "math_constant",
            NodeKind::NumberProperty => "math_number_property",
            NodeKind::VariableIncrement => "math_change",
            NodeKind::Modulo => "math_modulo",
            NodeKind::Clamp => "math_constrain",
            NodeKind::RandomInt => "math_random_int",
            NodeKind::RandomFloat => "math_random_float",
            NodeKind::ListAggregate => "math_on_list",
            NodeKind::Atan2 => "math_atan2",
            NodeKind::VariableGet => "variables_get",
        }
    }

    /// Statement blocks sit in a block stack and produce no value.
    pub fn is_statement(&self) -> bool {
        matches!(self, NodeKind::VariableIncrement)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.block_type())
    }
}

/// A literal field value. Dropdowns are text, number fields are numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl BlockTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn add_node(&mut self, node: OperationNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Add a node and append it to the top-level program order.
    pub fn add_root(&mut self, node: OperationNode) {
        self.roots.push(node.id.clone());
        self.add_node(node);
    }

    pub fn node(&self, node_id: &str) -> Result<&OperationNode> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| CodegenError::UnknownNode(node_id.to_string()))
    }

    /// The child plugged into `slot`, or `None` when nothing is connected.
    ///
    /// A slot naming a node that is not in the tree is an error, not an
    /// unconnected slot.
    pub fn child(&self, node: &OperationNode, slot: &str) -> Result<Option<&OperationNode>> {
        match node.inputs.get(slot) {
            Some(child_id) => self.node(child_id).map(Some),
            None => Ok(None),
        }
    }
}

impl OperationNode {
    pub fn new(id: &str, kind: NodeKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            fields: HashMap::new(),
            inputs: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn with_input(mut self, slot: &str, child_id: &str) -> Self {
        self.connect(slot, child_id);
        self
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn connect(&mut self, slot: &str, child_id: &str) {
        self.inputs.insert(slot.to_string(), child_id.to_string());
    }

    pub fn disconnect(&mut self, slot: &str) {
        self.inputs.remove(slot);
    }

    pub fn field(&self, name: &str) -> Result<&FieldValue> {
        self.fields.get(name).ok_or_else(|| CodegenError::MissingField {
            node_id: self.id.clone(),
            field: name.to_string(),
        })
    }

    /// A dropdown selector, rendered as text whatever its stored form.
    pub fn selector(&self, name: &str) -> Result<String> {
        self.field(name).map(|value| value.to_string())
    }

    pub fn number_field(&self, name: &str) -> Result<f64> {
        let value = self.field(name)?;
        value.as_number().ok_or_else(|| CodegenError::InvalidNumber {
            node_id: self.id.clone(),
            field: name.to_string(),
            value: value.to_string(),
        })
    }
}
