use super::model::FlowGraph;
use crate::error::GraphConversionError;

/// A trait for editor formats that can be converted into a formflow `FlowGraph`.
///
/// The resolution engine is format-agnostic; implementing this trait on your own
/// deserialized editor model is the translation layer that lets it run on your
/// diagrams.
///
/// # Example
///
/// ```rust,no_run
/// use formflow::prelude::*;
/// use formflow::error::GraphConversionError;
///
/// struct MyCell { id: String, node_type: String, label: String }
/// struct MyDiagram { cells: Vec<MyCell>, links: Vec<(String, String)> }
///
/// impl IntoGraph for MyDiagram {
///     fn into_graph(self) -> std::result::Result<FlowGraph, GraphConversionError> {
///         let mut graph = FlowGraph::new();
///         for cell in self.cells {
///             let kind = NodeKind::from_tag(&cell.node_type);
///             graph.add_node(FlowNode::new(cell.id, kind, cell.label));
///         }
///         for (index, (source, target)) in self.links.into_iter().enumerate() {
///             graph.add_edge(FlowEdge::new(format!("e{}", index), source, target));
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a flowchart graph.
    fn into_graph(self) -> Result<FlowGraph, GraphConversionError>;
}
