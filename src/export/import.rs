use super::allowlist::RESOLVED_DOCUMENT;
use super::document::{CanonicalDocument, GraphMetadata};
use crate::error::{GraphConversionError, ImportError};
use crate::graph::attributes::Attributes;
use crate::graph::{CellId, FlowEdge, FlowGraph, FlowNode, IntoGraph, NodeKind};
use ahash::AHashSet;
use tracing::debug;

/// Rebuilds a graph and its metadata from a canonical document.
///
/// Vertices keep their document order; edges follow them. Derived fields written
/// only on export are dropped so that a re-export recomputes them.
pub fn import_document(document: CanonicalDocument) -> Result<(FlowGraph, GraphMetadata), ImportError> {
    let mut seen: AHashSet<String> = AHashSet::new();
    for cell in &document.cells {
        if !seen.insert(cell.id.clone()) {
            return Err(ImportError::DuplicateCell(cell.id.clone()));
        }
    }
    let vertex_ids: AHashSet<String> = document
        .vertices()
        .map(|cell| cell.id.clone())
        .collect();

    let mut graph = FlowGraph::new();
    let mut edges = Vec::new();
    for cell in document.cells {
        if cell.is_edge {
            let (Some(source), Some(target)) = (cell.source, cell.target) else {
                debug!(edge = %cell.id, "skipping edge without both endpoints");
                continue;
            };
            for endpoint in [&source, &target] {
                if !vertex_ids.contains(endpoint) {
                    return Err(ImportError::DanglingEdge {
                        edge_id: cell.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
            edges.push(FlowEdge {
                id: CellId(cell.id),
                source: CellId(source),
                target: CellId(target),
                value: cell.value,
                style: cell.style_string,
                geometry: cell.edge_geometry,
            });
        } else if cell.is_vertex {
            let kind = cell
                .node_type
                .unwrap_or_else(|| NodeKind::from_style(&cell.style_string));
            let attributes: Attributes = cell
                .attributes
                .into_iter()
                .filter(|(key, _)| key != RESOLVED_DOCUMENT)
                .collect();
            graph.add_node(FlowNode {
                id: CellId(cell.id),
                kind,
                value: cell.value,
                style: cell.style_string,
                geometry: cell.geometry,
                attributes,
            });
        }
    }
    for edge in edges {
        graph.add_edge(edge);
    }

    Ok((graph, document.metadata))
}

impl IntoGraph for CanonicalDocument {
    fn into_graph(self) -> Result<FlowGraph, GraphConversionError> {
        import_document(self)
            .map(|(graph, _)| graph)
            .map_err(|e| GraphConversionError::ValidationError(e.to_string()))
    }
}
