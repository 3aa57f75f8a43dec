use super::document::GraphMetadata;
use super::serializer::ResolvedGraph;
use crate::graph::attributes::{self, PDF_FILE, PDF_FILENAME, PDF_PRICE};
use crate::graph::{GraphModel, NodeKind};
use crate::inheritance::own_document_name;
use crate::normalize::{apply_gui_rewrites, collect_references};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiDocumentEntry {
    pub cell_id: String,
    pub name: String,
    pub file: String,
    pub price: String,
}

/// One identifier-carrying node as the cart runtime sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiField {
    pub cell_id: String,
    pub name_id: String,
    pub node_type: NodeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

/// The runtime ("gui") export: a flat field list with cart-specific identifier rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiDocument {
    pub form_name: String,
    pub documents: Vec<GuiDocumentEntry>,
    pub fields: Vec<GuiField>,
}

impl GuiDocument {
    pub fn build<G: GraphModel>(resolved: &ResolvedGraph<'_, G>, metadata: &GraphMetadata) -> Self {
        let graph = resolved.graph;
        let defaults = &metadata.default_document_properties;

        let documents = graph
            .nodes()
            .iter()
            .filter(|node| node.kind.is_document())
            .map(|node| {
                let file = attributes::string_attribute(&node.attributes, PDF_FILE)
                    .or_else(|| attributes::string_attribute(&node.attributes, PDF_FILENAME))
                    .unwrap_or_else(|| defaults.file.clone());
                GuiDocumentEntry {
                    cell_id: node.id.to_string(),
                    name: own_document_name(node, graph).unwrap_or_else(|| defaults.name.clone()),
                    file,
                    price: attributes::string_attribute(&node.attributes, PDF_PRICE)
                        .unwrap_or_else(|| defaults.price.clone()),
                }
            })
            .collect();

        let fields = graph
            .nodes()
            .iter()
            .filter(|node| node.kind.carries_identifier() && !node.kind.is_document())
            .filter_map(|node| {
                let identifier = resolved.identifier(&node.id)?;
                let references = resolved
                    .attributes(&node.id)
                    .map(collect_references)
                    .unwrap_or_default()
                    .iter()
                    .map(|reference| apply_gui_rewrites(reference))
                    .unique()
                    .collect();
                Some(GuiField {
                    cell_id: node.id.to_string(),
                    name_id: apply_gui_rewrites(identifier),
                    node_type: node.kind,
                    label: node.plain_label(),
                    document: resolved.document(&node.id).map(str::to_string),
                    references,
                })
            })
            .collect();

        Self {
            form_name: metadata.form_name.clone(),
            documents,
            fields,
        }
    }
}
