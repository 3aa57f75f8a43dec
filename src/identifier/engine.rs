use super::placeholder::is_placeholder_identifier;
use super::prefix::{PrefixDetector, PrefixPolicy};
use super::slug::{is_purely_numeric, sanitize_document_name, slugify};
use crate::graph::attributes::{self, NAME};
use crate::graph::{FlowNode, GraphModel};
use crate::inheritance::DocumentNameResolver;
use crate::trace::{IdentifierTier, ResolutionTrace};
use tracing::debug;

/// Computes canonical identifiers for the nodes of one graph.
///
/// The engine holds no per-node state: every call derives the identifier from
/// the node's attributes, its inherited document name and the policy. Reuse one
/// engine for a whole pass so the graph's known document names are collected once.
pub struct IdentifierEngine<'g, G: GraphModel> {
    graph: &'g G,
    policy: PrefixPolicy,
    detector: PrefixDetector,
}

impl<'g, G: GraphModel> IdentifierEngine<'g, G> {
    pub fn new(graph: &'g G, policy: PrefixPolicy) -> Self {
        Self::with_detector(graph, policy, PrefixDetector::from_graph(graph))
    }

    pub fn with_detector(graph: &'g G, policy: PrefixPolicy, detector: PrefixDetector) -> Self {
        Self {
            graph,
            policy,
            detector,
        }
    }

    pub fn policy(&self) -> PrefixPolicy {
        self.policy
    }

    pub fn detector(&self) -> &PrefixDetector {
        &self.detector
    }

    pub fn resolve(&self, node: &FlowNode) -> String {
        self.resolve_traced(node).identifier
    }

    /// Resolves the node's document name by inheritance, then its identifier.
    pub fn resolve_traced(&self, node: &FlowNode) -> ResolutionTrace {
        let document = DocumentNameResolver::new(self.graph).resolve(node);
        self.resolve_with_document(node, document.as_deref())
    }

    /// Resolves an identifier given an already-resolved raw document name.
    pub fn resolve_with_document(&self, node: &FlowNode, document: Option<&str>) -> ResolutionTrace {
        let sanitized = document
            .map(sanitize_document_name)
            .filter(|doc| !doc.is_empty());
        let mut trace = ResolutionTrace::new(node.id.clone(), document.map(str::to_string));

        if node.is_manually_edited() {
            if let Some(stored) = node.manual_identifier() {
                trace.tier = IdentifierTier::ManualEdit;
                trace.found = Some(stored.clone());
                trace.identifier = stored;
                debug!(node = %node.id, identifier = %trace.identifier, "manual identifier kept");
                return trace;
            }
        }

        let mut base = String::new();
        let candidates = [
            (IdentifierTier::StoredIdentifier, node.stored_identifier()),
            (
                IdentifierTier::NameAttribute,
                attributes::string_attribute(&node.attributes, NAME),
            ),
        ];
        for (tier, value) in candidates {
            let Some(value) = value.filter(|v| !is_placeholder_identifier(v)) else {
                continue;
            };
            let (stripped, removed) = self.detector.strip_all(&value, sanitized.as_deref());
            trace.tier = tier;
            trace.found = Some(value);
            trace.stripped = removed;
            base = stripped;
            break;
        }

        if base.is_empty() || is_purely_numeric(&base) {
            let label = slugify(&node.plain_label());
            let fallback = if label.is_empty() {
                trace.tier = IdentifierTier::OpaqueId;
                node.id.to_string()
            } else {
                trace.tier = IdentifierTier::Label;
                label
            };
            // Derived bases are stripped like stored ones, so a written-back
            // identifier resolves to itself.
            let (stripped, removed) = self.detector.strip_all(&fallback, sanitized.as_deref());
            trace.stripped = removed;
            base = stripped;
        }
        trace.base = base.clone();

        let (identifier, action) = self.policy.apply(&base, sanitized.as_deref(), &self.detector);
        debug!(
            node = %node.id,
            tier = ?trace.tier,
            base = %base,
            identifier = %identifier,
            "resolved identifier"
        );
        trace.prefix = Some(action);
        trace.identifier = identifier;
        trace
    }
}
