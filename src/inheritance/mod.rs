//! Document-name inheritance across graph edges.

mod resolver;

pub use resolver::*;

use crate::graph::{FlowNode, GraphModel};

/// Resolves the document name a node belongs to, or `None` when neither the
/// node, the documents it links to, nor any ancestor names one.
pub fn resolve_document_name<G: GraphModel>(node: &FlowNode, graph: &G) -> Option<String> {
    DocumentNameResolver::new(graph).resolve(node)
}
