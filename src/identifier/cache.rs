use super::engine::IdentifierEngine;
use crate::graph::{CellId, FlowNode, GraphModel};
use ahash::AHashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
struct CachedIdentifier {
    fingerprint: u64,
    identifier: String,
}

/// Memo of resolved identifiers, kept outside the nodes.
///
/// An entry is reused only while the node's fingerprint (attributes, label,
/// document name, policy and the graph's known documents) is unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentifierCache {
    entries: AHashMap<CellId, CachedIdentifier>,
    hits: u64,
    misses: u64,
}

impl IdentifierCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached identifier or resolves and stores a fresh one.
    pub fn get_or_resolve<G: GraphModel>(
        &mut self,
        engine: &IdentifierEngine<'_, G>,
        node: &FlowNode,
        document: Option<&str>,
    ) -> String {
        let fingerprint = Self::fingerprint(engine, node, document);
        if let Some(cached) = self.entries.get(&node.id) {
            if cached.fingerprint == fingerprint {
                self.hits += 1;
                return cached.identifier.clone();
            }
        }

        self.misses += 1;
        let identifier = engine.resolve_with_document(node, document).identifier;
        self.entries.insert(
            node.id.clone(),
            CachedIdentifier {
                fingerprint,
                identifier: identifier.clone(),
            },
        );
        identifier
    }

    pub fn get(&self, id: &CellId) -> Option<&str> {
        self.entries.get(id).map(|entry| entry.identifier.as_str())
    }

    pub fn invalidate(&mut self, id: &CellId) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellId, &str)> {
        self.entries
            .iter()
            .map(|(id, entry)| (id, entry.identifier.as_str()))
    }

    fn fingerprint<G: GraphModel>(
        engine: &IdentifierEngine<'_, G>,
        node: &FlowNode,
        document: Option<&str>,
    ) -> u64 {
        let mut hasher = DefaultHasher::new();
        node.id.hash(&mut hasher);
        node.value.hash(&mut hasher);
        serde_json::to_string(&node.attributes)
            .unwrap_or_default()
            .hash(&mut hasher);
        document.hash(&mut hasher);
        engine.policy().hash(&mut hasher);
        engine.detector().known_documents().hash(&mut hasher);
        hasher.finish()
    }
}
