use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unknown {field} selector '{value}' on node {node_id}")]
    UnknownSelector {
        node_id: String,
        field: String,
        value: String,
    },

    #[error("Node {node_id} is missing field {field}")]
    MissingField { node_id: String, field: String },

    #[error("Field {field} on node {node_id} is not a number: {value}")]
    InvalidNumber {
        node_id: String,
        field: String,
        value: String,
    },

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Variable has no bound name: {0}")]
    UnboundVariable(String),

    #[error("Node {node_id} ({kind}) does not produce a value")]
    NotAnExpression { node_id: String, kind: String },

    #[error("Cyclic reference through node {0}")]
    CyclicReference(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Settings serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
