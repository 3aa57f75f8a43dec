use thiserror::Error;

/// Errors that can occur while producing an export document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("No flowchart graph is loaded; nothing to export")]
    MissingGraph,

    #[error("Failed to serialize export document: {0}")]
    Serialization(String),

    #[error("Failed to write export document: {0}")]
    Io(String),
}

/// Errors that can occur when rebuilding a graph from a canonical document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Failed to parse export document JSON: {0}")]
    JsonParseError(String),

    #[error("Cell '{0}' appears more than once in the document")]
    DuplicateCell(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which is not in the document")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },
}

/// Errors that can occur when converting a custom editor format into a `FlowGraph`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while loading an export configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}
