use super::attributes::{self, Attributes};
use super::kind::NodeKind;
use super::text::plain_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Engine-assigned opaque cell identifier. Stable for the lifetime of a graph,
/// not across editing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub String);

impl CellId {
    pub fn new(id: impl Into<String>) -> Self {
        CellId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        CellId(id.to_string())
    }
}

/// Vertex placement on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Routing waypoints of an edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeGeometry {
    #[serde(default)]
    pub points: Vec<Point>,
}

/// A vertex of the flowchart.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: CellId,
    pub kind: NodeKind,
    /// Live display value; may contain editor HTML.
    pub value: String,
    pub style: String,
    pub geometry: Option<Geometry>,
    pub attributes: Attributes,
}

impl FlowNode {
    /// Creates a node whose style string carries its type tag.
    pub fn new(id: impl Into<String>, kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            id: CellId::new(id),
            kind,
            value: value.into(),
            style: format!("nodeType={};", kind.tag()),
            geometry: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// The display value with markup removed.
    pub fn plain_label(&self) -> String {
        plain_text(&self.value)
    }

    pub fn stored_identifier(&self) -> Option<String> {
        attributes::string_attribute(&self.attributes, attributes::NAME_ID)
    }

    /// The stored identifier exactly as the user typed it, untrimmed.
    pub fn manual_identifier(&self) -> Option<String> {
        match self.attributes.get(attributes::NAME_ID)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_manually_edited(&self) -> bool {
        attributes::flag_attribute(&self.attributes, attributes::NAME_ID_MANUAL)
    }
}

/// A directed connection `source -> target`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub id: CellId,
    pub source: CellId,
    pub target: CellId,
    pub value: String,
    pub style: String,
    pub geometry: Option<EdgeGeometry>,
}

impl FlowEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: CellId::new(id),
            source: CellId::new(source),
            target: CellId::new(target),
            value: String::new(),
            style: String::new(),
            geometry: None,
        }
    }
}
