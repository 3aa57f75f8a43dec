use crate::error::ConfigError;
use crate::export::{DocumentProperties, EdgeRenderStyle, GraphMetadata, TargetChoice};
use crate::identifier::PrefixPolicy;
use serde::{Deserialize, Serialize};
use std::fs;

/// Export settings, matching the expected JSON config format.
///
/// Every field is optional in the file; missing ones take the [`Default`] value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    pub policy: PrefixPolicy,
    /// Used when the document does not name the form.
    pub form_name: String,
    /// Overrides the document's edge style when set.
    pub edge_render_style: Option<EdgeRenderStyle>,
    /// Fills the document's default document properties where they are empty.
    pub default_document: DocumentProperties,
    /// Write resolved identifiers back into `_nameId` after export.
    pub write_back: bool,
    pub target: TargetChoice,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            policy: PrefixPolicy::default(),
            form_name: "Untitled form".to_string(),
            edge_render_style: None,
            default_document: DocumentProperties::default(),
            write_back: false,
            target: TargetChoice::Canonical,
        }
    }
}

impl ExportConfig {
    /// Load the config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Fills empty metadata fields from this config.
    pub fn apply_defaults(&self, mut metadata: GraphMetadata) -> GraphMetadata {
        if metadata.form_name.trim().is_empty() {
            metadata.form_name = self.form_name.clone();
        }
        if let Some(style) = self.edge_render_style {
            metadata.edge_render_style = style;
        }
        let defaults = &mut metadata.default_document_properties;
        if defaults.name.is_empty() {
            defaults.name = self.default_document.name.clone();
        }
        if defaults.file.is_empty() {
            defaults.file = self.default_document.file.clone();
        }
        if defaults.price.is_empty() {
            defaults.price = self.default_document.price.clone();
        }
        metadata
    }
}
