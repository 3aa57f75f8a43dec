//! Canonical identifier resolution.

mod cache;
mod engine;
pub mod placeholder;
mod prefix;
pub mod slug;

pub use cache::IdentifierCache;
pub use engine::IdentifierEngine;
pub use prefix::{PrefixAction, PrefixDetector, PrefixPolicy, looks_like_document_prefix};
pub use slug::{sanitize_document_name, slugify};

use crate::graph::{FlowNode, GraphModel};

/// Resolves one node's canonical identifier.
///
/// Collects the graph's document names on every call; when resolving many
/// nodes, build one [`IdentifierEngine`] instead.
pub fn resolve_identifier<G: GraphModel>(node: &FlowNode, graph: &G, policy: PrefixPolicy) -> String {
    IdentifierEngine::new(graph, policy).resolve(node)
}
