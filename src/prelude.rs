//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the formflow
//! crate. Import it to get the graph model, the resolvers and the export types without
//! importing each one individually.

// Graph model
pub use crate::graph::{
    Attributes, CellId, EdgeGeometry, FlowEdge, FlowGraph, FlowNode, Geometry, GraphModel,
    IntoGraph, NodeKind, Point,
};

// Resolution
pub use crate::identifier::{
    IdentifierCache, IdentifierEngine, PrefixAction, PrefixDetector, PrefixPolicy,
    resolve_identifier, sanitize_document_name, slugify,
};
pub use crate::inheritance::{DocumentNameCache, DocumentNameResolver, resolve_document_name};
pub use crate::normalize::{ReferenceNormalizer, apply_gui_rewrites, normalize_references};

// Export
pub use crate::config::ExportConfig;
pub use crate::export::{
    CanonicalDocument, EdgeRenderStyle, ExportCell, ExportSerializer, FormSession, GraphMetadata,
    GuiDocument, TargetChoice, import_document,
};

// Tracing
pub use crate::trace::{IdentifierTier, ResolutionTrace, TraceFormatter};

// Error types
pub use crate::error::{ConfigError, ExportError, GraphConversionError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
