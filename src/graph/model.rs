use super::definition::{CellId, FlowEdge, FlowNode};
use super::text::plain_text;
use ahash::AHashMap;
use serde_json::Value;

/// Read access to a flowchart graph.
///
/// The resolution engine only ever sees a graph through this trait, so the
/// host's diagramming model can be plugged in without copying it into a
/// [`FlowGraph`]. Enumeration order is significant: document-name inheritance
/// breaks ties by edge order and exports follow node order.
pub trait GraphModel {
    fn nodes(&self) -> &[FlowNode];
    fn edges(&self) -> &[FlowEdge];
    fn node(&self, id: &CellId) -> Option<&FlowNode>;
    fn outgoing_edges(&self, id: &CellId) -> Vec<&FlowEdge>;
    fn incoming_edges(&self, id: &CellId) -> Vec<&FlowEdge>;

    /// The node's current display text with markup removed, read through on every call.
    fn display_text(&self, id: &CellId) -> Option<String> {
        self.node(id).map(|node| plain_text(&node.value))
    }
}

/// In-memory flowchart graph with adjacency indices.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    node_index: AHashMap<CellId, usize>,
    outgoing: AHashMap<CellId, Vec<usize>>,
    incoming: AHashMap<CellId, Vec<usize>>,
    update_depth: u32,
    revision: u64,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from ordered node and edge lists.
    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Adds a node, replacing any node with the same id in place.
    pub fn add_node(&mut self, node: FlowNode) {
        if let Some(&index) = self.node_index.get(&node.id) {
            self.nodes[index] = node;
        } else {
            self.node_index.insert(node.id.clone(), self.nodes.len());
            self.nodes.push(node);
        }
        self.touch();
    }

    pub fn add_edge(&mut self, edge: FlowEdge) {
        let index = self.edges.len();
        self.outgoing
            .entry(edge.source.clone())
            .or_default()
            .push(index);
        self.incoming
            .entry(edge.target.clone())
            .or_default()
            .push(index);
        self.edges.push(edge);
        self.touch();
    }

    pub fn node_mut(&mut self, id: &CellId) -> Option<&mut FlowNode> {
        let index = *self.node_index.get(id)?;
        self.touch();
        self.nodes.get_mut(index)
    }

    /// Writes one attribute. Returns `false` when the node does not exist.
    pub fn set_attribute(&mut self, id: &CellId, key: &str, value: impl Into<Value>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.attributes.insert(key.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    /// Opens an update bracket. Brackets nest; observers should only read the
    /// graph when [`FlowGraph::is_updating`] is false.
    pub fn begin_update(&mut self) {
        self.update_depth += 1;
    }

    pub fn end_update(&mut self) {
        self.update_depth = self.update_depth.saturating_sub(1);
    }

    pub fn is_updating(&self) -> bool {
        self.update_depth > 0
    }

    /// Runs `f` inside one begin/end update bracket.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut FlowGraph) -> R) -> R {
        self.begin_update();
        let result = f(self);
        self.end_update();
        result
    }

    /// Incremented on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn edges_at(&self, index: &AHashMap<CellId, Vec<usize>>, id: &CellId) -> Vec<&FlowEdge> {
        index
            .get(id)
            .map(|positions| positions.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }
}

impl GraphModel for FlowGraph {
    fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    fn node(&self, id: &CellId) -> Option<&FlowNode> {
        self.node_index.get(id).map(|&index| &self.nodes[index])
    }

    fn outgoing_edges(&self, id: &CellId) -> Vec<&FlowEdge> {
        self.edges_at(&self.outgoing, id)
    }

    fn incoming_edges(&self, id: &CellId) -> Vec<&FlowEdge> {
        self.edges_at(&self.incoming, id)
    }
}
