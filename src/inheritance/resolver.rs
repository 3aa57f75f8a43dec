use crate::graph::attributes::{self, DOCUMENT_NAME_ALIASES, PDF_URL};
use crate::graph::{CellId, FlowNode, GraphModel};
use crate::identifier::placeholder::is_placeholder_document_name;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::debug;

/// Where a resolved document name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// One of the node's own document-name attributes.
    OwnAttribute(&'static str),
    /// The node is a document; its live display text names it.
    DisplayText,
    /// A document node the node points at.
    Target(CellId),
    /// A predecessor reached over incoming edges.
    Ancestor(CellId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedName {
    pub name: String,
    pub source: DocumentSource,
}

/// Resolves a node's document name by walking the graph.
///
/// Inheritance is one-directional: a node without its own document takes the
/// one of a document it links to, then of its nearest ancestor. Ties between
/// several predecessors are broken by edge enumeration order.
pub struct DocumentNameResolver<'g, G: GraphModel> {
    graph: &'g G,
}

impl<'g, G: GraphModel> DocumentNameResolver<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    pub fn resolve(&self, node: &FlowNode) -> Option<String> {
        self.resolve_with_source(node).map(|inherited| inherited.name)
    }

    pub fn resolve_with_source(&self, node: &FlowNode) -> Option<InheritedName> {
        if let Some(found) = self.resolve_local(node) {
            return Some(found);
        }

        let mut visited: AHashSet<CellId> = AHashSet::new();
        let mut queue: VecDeque<CellId> = VecDeque::new();
        visited.insert(node.id.clone());
        queue.push_back(node.id.clone());

        while let Some(current) = queue.pop_front() {
            for edge in self.graph.incoming_edges(&current) {
                if !visited.insert(edge.source.clone()) {
                    continue;
                }
                let Some(predecessor) = self.graph.node(&edge.source) else {
                    continue;
                };
                if let Some(found) = self.resolve_local(predecessor) {
                    debug!(
                        node = %node.id,
                        ancestor = %predecessor.id,
                        document = %found.name,
                        "inherited document name"
                    );
                    return Some(InheritedName {
                        name: found.name,
                        source: DocumentSource::Ancestor(predecessor.id.clone()),
                    });
                }
                queue.push_back(predecessor.id.clone());
            }
        }
        None
    }

    /// Steps that look only at the node and its direct document targets.
    fn resolve_local(&self, node: &FlowNode) -> Option<InheritedName> {
        if let Some(found) = own_document_name_with_source(node, self.graph) {
            return Some(found);
        }
        self.graph
            .outgoing_edges(&node.id)
            .into_iter()
            .filter_map(|edge| self.graph.node(&edge.target))
            .filter(|target| target.kind.is_document())
            .find_map(|target| {
                own_document_name(target, self.graph).map(|name| InheritedName {
                    name,
                    source: DocumentSource::Target(target.id.clone()),
                })
            })
    }
}

/// The document name a node declares itself: an alias attribute, or for a
/// document node, its live display text.
pub fn own_document_name<G: GraphModel>(node: &FlowNode, graph: &G) -> Option<String> {
    own_document_name_with_source(node, graph).map(|found| found.name)
}

fn own_document_name_with_source<G: GraphModel>(
    node: &FlowNode,
    graph: &G,
) -> Option<InheritedName> {
    for alias in DOCUMENT_NAME_ALIASES {
        let Some(raw) = attributes::string_attribute(&node.attributes, alias) else {
            continue;
        };
        let name = if alias == PDF_URL {
            name_from_url(&raw)
        } else {
            raw
        };
        if !is_placeholder_document_name(&name) {
            return Some(InheritedName {
                name,
                source: DocumentSource::OwnAttribute(alias),
            });
        }
    }

    if node.kind.is_document() {
        let text = graph.display_text(&node.id)?;
        if !is_placeholder_document_name(&text) {
            return Some(InheritedName {
                name: text,
                source: DocumentSource::DisplayText,
            });
        }
    }
    None
}

/// Reduces a URL-like reference to a bare document name: last path segment,
/// no query or fragment, no `.pdf` extension.
pub fn name_from_url(reference: &str) -> String {
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segment = without_query
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let name = match segment.len().checked_sub(4) {
        Some(cut) if segment.is_char_boundary(cut) && segment[cut..].eq_ignore_ascii_case(".pdf") => {
            &segment[..cut]
        }
        _ => segment,
    };
    name.trim().to_string()
}

/// Per-pass store of resolved document names, keyed by node.
#[derive(Debug, Clone, Default)]
pub struct DocumentNameCache {
    names: AHashMap<CellId, Option<String>>,
}

impl DocumentNameCache {
    /// Resolves every node of the graph once.
    pub fn build<G: GraphModel>(graph: &G) -> Self {
        let resolver = DocumentNameResolver::new(graph);
        let names = graph
            .nodes()
            .iter()
            .map(|node| (node.id.clone(), resolver.resolve(node)))
            .collect();
        Self { names }
    }

    /// The raw document name for a node, `None` when nothing resolves.
    pub fn get(&self, id: &CellId) -> Option<&str> {
        self.names.get(id).and_then(|name| name.as_deref())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
