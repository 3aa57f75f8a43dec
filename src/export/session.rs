use super::document::{CanonicalDocument, GraphMetadata};
use super::import::import_document;
use super::serializer::ExportSerializer;
use crate::config::ExportConfig;
use crate::error::{ExportError, ImportError};
use crate::graph::attributes::NAME_ID;
use crate::graph::{CellId, FlowGraph, GraphModel};
use crate::identifier::{IdentifierCache, IdentifierEngine};
use crate::trace::ResolutionTrace;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The editor's export entry point: an optional loaded graph, its metadata and
/// the identifier memo shared by successive exports.
#[derive(Debug, Default)]
pub struct FormSession {
    graph: Option<FlowGraph>,
    metadata: GraphMetadata,
    config: ExportConfig,
    cache: IdentifierCache,
}

impl FormSession {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_graph(graph: FlowGraph, metadata: GraphMetadata, config: ExportConfig) -> Self {
        Self {
            graph: Some(graph),
            metadata,
            config,
            cache: IdentifierCache::new(),
        }
    }

    /// Imports a canonical document, replacing any loaded graph.
    pub fn load_document(&mut self, document: CanonicalDocument) -> Result<(), ImportError> {
        let (graph, metadata) = import_document(document)?;
        self.load(graph, metadata);
        Ok(())
    }

    pub fn load(&mut self, graph: FlowGraph, metadata: GraphMetadata) {
        self.graph = Some(graph);
        self.metadata = metadata;
        self.cache.clear();
    }

    pub fn unload(&mut self) -> Option<FlowGraph> {
        self.cache.clear();
        self.graph.take()
    }

    pub fn graph(&self) -> Option<&FlowGraph> {
        self.graph.as_ref()
    }

    pub fn graph_mut(&mut self) -> Option<&mut FlowGraph> {
        self.graph.as_mut()
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ExportConfig {
        &mut self.config
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    pub fn cache(&self) -> &IdentifierCache {
        &self.cache
    }

    fn serializer(&self) -> ExportSerializer {
        ExportSerializer::from_config(&self.config, self.metadata.clone())
    }

    /// Builds the canonical document for the loaded graph.
    pub fn canonical_document(&mut self) -> Result<CanonicalDocument, ExportError> {
        let serializer = self.serializer();
        let graph = self.graph.as_ref().ok_or(ExportError::MissingGraph)?;
        let resolved = serializer.resolve(graph, &mut self.cache);
        Ok(serializer.snapshot(&resolved))
    }

    /// Renders the configured export target. With `write_back` enabled, the
    /// resolved identifiers are then stored on the nodes inside one update bracket.
    pub fn export(&mut self) -> Result<String, ExportError> {
        let serializer = self.serializer();
        let graph = self.graph.as_mut().ok_or(ExportError::MissingGraph)?;

        let (rendered, identifiers) = {
            let resolved = serializer.resolve(&*graph, &mut self.cache);
            let rendered = self
                .config
                .target
                .target::<FlowGraph>()
                .render(&serializer, &resolved)?;
            (rendered, resolved.identifiers())
        };

        if self.config.write_back {
            let written = graph.batch_update(|graph| write_back_identifiers(graph, &identifiers));
            debug!(written, "identifiers written back");
        }
        info!(export_target = ?self.config.target, bytes = rendered.len(), "export complete");
        Ok(rendered)
    }

    /// Exports and writes the result to `path`. Returns the number of bytes written.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let rendered = self.export()?;
        fs::write(path, &rendered)
            .map_err(|e| ExportError::Io(format!("'{}': {}", path.display(), e)))?;
        debug!(path = %path.display(), "export written");
        Ok(rendered.len())
    }

    /// Explains how one node's identifier resolves under the current policy.
    pub fn explain(&self, id: &CellId) -> Result<Option<ResolutionTrace>, ExportError> {
        let graph = self.graph.as_ref().ok_or(ExportError::MissingGraph)?;
        let engine = IdentifierEngine::new(graph, self.config.policy);
        Ok(graph.node(id).map(|node| engine.resolve_traced(node)))
    }
}

/// Stores identifiers in `_nameId`. Manually edited nodes and unchanged values
/// are skipped. Returns how many nodes were written.
pub fn write_back_identifiers(graph: &mut FlowGraph, identifiers: &[(CellId, String)]) -> usize {
    let mut written = 0;
    for (id, identifier) in identifiers {
        let Some(node) = graph.node(id) else {
            continue;
        };
        if node.is_manually_edited() || node.stored_identifier().as_deref() == Some(identifier.as_str()) {
            continue;
        }
        if graph.set_attribute(id, NAME_ID, identifier.as_str()) {
            written += 1;
        }
    }
    written
}
