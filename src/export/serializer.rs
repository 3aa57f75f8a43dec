use super::allowlist::{RESOLVED_DOCUMENT, is_public};
use super::document::{CanonicalDocument, ExportCell, GraphMetadata};
use crate::config::ExportConfig;
use crate::graph::attributes::{Attributes, NAME_ID};
use crate::graph::{CellId, FlowEdge, FlowNode, GraphModel};
use crate::identifier::{IdentifierCache, IdentifierEngine, PrefixDetector, PrefixPolicy};
use crate::inheritance::DocumentNameCache;
use crate::normalize::ReferenceNormalizer;
use ahash::AHashMap;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A graph with every derived value computed for one export pass.
pub struct ResolvedGraph<'g, G: GraphModel> {
    pub graph: &'g G,
    pub policy: PrefixPolicy,
    pub detector: PrefixDetector,
    pub documents: DocumentNameCache,
    identifiers: AHashMap<CellId, String>,
    attributes: AHashMap<CellId, Attributes>,
}

impl<'g, G: GraphModel> ResolvedGraph<'g, G> {
    pub fn identifier(&self, id: &CellId) -> Option<&str> {
        self.identifiers.get(id).map(String::as_str)
    }

    pub fn document(&self, id: &CellId) -> Option<&str> {
        self.documents.get(id)
    }

    /// The node's attributes after nested-reference normalization.
    pub fn attributes(&self, id: &CellId) -> Option<&Attributes> {
        self.attributes.get(id)
    }

    /// Resolved identifiers in node order.
    pub fn identifiers(&self) -> Vec<(CellId, String)> {
        self.graph
            .nodes()
            .iter()
            .filter_map(|node| {
                self.identifiers
                    .get(&node.id)
                    .map(|identifier| (node.id.clone(), identifier.clone()))
            })
            .collect()
    }
}

/// Turns a live graph into a canonical export document.
///
/// The passes run in a fixed order, each depending on the previous one:
/// document names, identifiers, nested references, then the snapshot.
pub struct ExportSerializer {
    policy: PrefixPolicy,
    metadata: GraphMetadata,
}

impl ExportSerializer {
    pub fn new(policy: PrefixPolicy, metadata: GraphMetadata) -> Self {
        Self { policy, metadata }
    }

    /// Uses the config's policy; metadata fields the document leaves empty are
    /// filled from the config defaults.
    pub fn from_config(config: &ExportConfig, metadata: GraphMetadata) -> Self {
        Self::new(config.policy, config.apply_defaults(metadata))
    }

    pub fn policy(&self) -> PrefixPolicy {
        self.policy
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    /// Serializes a graph with a fresh identifier cache.
    pub fn serialize<G: GraphModel>(&self, graph: &G) -> CanonicalDocument {
        let resolved = self.resolve(graph, &mut IdentifierCache::new());
        self.snapshot(&resolved)
    }

    /// Runs the resolution passes, reusing identifiers from `cache` where the
    /// node has not changed.
    pub fn resolve<'g, G: GraphModel>(
        &self,
        graph: &'g G,
        cache: &mut IdentifierCache,
    ) -> ResolvedGraph<'g, G> {
        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            add_document_prefix = self.policy.add_document_prefix,
            "resolving graph for export"
        );

        let documents = DocumentNameCache::build(graph);
        let detector = PrefixDetector::from_graph(graph);
        let engine = IdentifierEngine::with_detector(graph, self.policy, detector.clone());

        let identifiers: AHashMap<CellId, String> = graph
            .nodes()
            .iter()
            .map(|node| {
                let identifier = cache.get_or_resolve(&engine, node, documents.get(&node.id));
                (node.id.clone(), identifier)
            })
            .collect();

        let mut rewritten = 0;
        let attributes: AHashMap<CellId, Attributes> = graph
            .nodes()
            .iter()
            .map(|node| {
                let mut attributes = node.attributes.clone();
                rewritten += ReferenceNormalizer::new(
                    self.policy,
                    &detector,
                    documents.get(&node.id),
                )
                .normalize_in_place(&mut attributes);
                (node.id.clone(), attributes)
            })
            .collect();

        let (hits, misses) = cache.stats();
        debug!(hits, misses, rewritten, "resolution passes complete");

        ResolvedGraph {
            graph,
            policy: self.policy,
            detector,
            documents,
            identifiers,
            attributes,
        }
    }

    /// Builds the canonical document from resolved values.
    pub fn snapshot<G: GraphModel>(&self, resolved: &ResolvedGraph<'_, G>) -> CanonicalDocument {
        let graph = resolved.graph;
        let cells = graph
            .nodes()
            .iter()
            .map(|node| self.vertex_cell(node, resolved))
            .chain(graph.edges().iter().map(Self::edge_cell))
            .collect();

        CanonicalDocument {
            cells,
            metadata: self.metadata.clone(),
        }
    }

    fn vertex_cell<G: GraphModel>(&self, node: &FlowNode, resolved: &ResolvedGraph<'_, G>) -> ExportCell {
        let source = resolved.attributes(&node.id).unwrap_or(&node.attributes);
        let mut attributes: BTreeMap<String, Value> = source
            .iter()
            .filter(|(key, _)| is_public(node.kind, key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        attributes.remove(RESOLVED_DOCUMENT);
        if let Some(document) = resolved.document(&node.id) {
            attributes.insert(RESOLVED_DOCUMENT.to_string(), Value::from(document));
        }
        if node.kind.carries_identifier() {
            if let Some(identifier) = resolved.identifier(&node.id) {
                attributes.insert(NAME_ID.to_string(), Value::from(identifier));
            }
        }

        ExportCell {
            id: node.id.to_string(),
            is_vertex: true,
            is_edge: false,
            value: node.value.clone(),
            style_string: node.style.clone(),
            node_type: Some(node.kind),
            geometry: node.geometry,
            source: None,
            target: None,
            edge_geometry: None,
            attributes,
        }
    }

    fn edge_cell(edge: &FlowEdge) -> ExportCell {
        ExportCell {
            id: edge.id.to_string(),
            is_vertex: false,
            is_edge: true,
            value: edge.value.clone(),
            style_string: edge.style.clone(),
            node_type: None,
            geometry: None,
            source: Some(edge.source.to_string()),
            target: Some(edge.target.to_string()),
            edge_geometry: edge.geometry.clone(),
            attributes: BTreeMap::new(),
        }
    }
}
