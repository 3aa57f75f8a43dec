use crate::error::{ExportError, ImportError};
use crate::graph::{EdgeGeometry, Geometry, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// How the editor draws connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRenderStyle {
    #[default]
    Curved,
    Straight,
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionPreference {
    pub name: String,
}

/// A named grouping of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub section_ids: Vec<String>,
}

/// Name, file and price applied to documents that do not set their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub price: String,
}

/// Graph-level data exported next to the cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    #[serde(default)]
    pub section_preferences: BTreeMap<String, SectionPreference>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub default_document_properties: DocumentProperties,
    #[serde(default)]
    pub form_name: String,
    #[serde(default)]
    pub edge_render_style: EdgeRenderStyle,
}

/// One vertex or edge of an exported document.
///
/// Type-specific attributes are flattened into the cell and kept sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCell {
    pub id: String,
    pub is_vertex: bool,
    pub is_edge: bool,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub style_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_geometry: Option<EdgeGeometry>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// The canonical, deterministic export of a flowchart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CanonicalDocument {
    pub cells: Vec<ExportCell>,
    #[serde(flatten)]
    pub metadata: GraphMetadata,
}

impl CanonicalDocument {
    /// Renders the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::JsonParseError(e.to_string()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &ExportCell> {
        self.cells.iter().filter(|cell| cell.is_vertex)
    }

    pub fn edges(&self) -> impl Iterator<Item = &ExportCell> {
        self.cells.iter().filter(|cell| cell.is_edge)
    }

    pub fn cell(&self, id: &str) -> Option<&ExportCell> {
        self.cells.iter().find(|cell| cell.id == id)
    }
}

impl ExportCell {
    pub fn string_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
