use super::gui::GuiDocument;
use super::serializer::{ExportSerializer, ResolvedGraph};
use crate::error::ExportError;
use crate::graph::GraphModel;
use serde::{Deserialize, Serialize};

/// A textual output format produced from a resolved graph.
pub trait ExportTarget<G: GraphModel> {
    fn render(
        &self,
        serializer: &ExportSerializer,
        resolved: &ResolvedGraph<'_, G>,
    ) -> Result<String, ExportError>;
}

/// The available export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetChoice {
    /// The full canonical document; re-importable.
    #[default]
    Canonical,
    /// The flattened runtime document consumed by the cart.
    Gui,
}

impl TargetChoice {
    pub fn target<G: GraphModel>(self) -> Box<dyn ExportTarget<G>> {
        match self {
            TargetChoice::Canonical => Box::new(CanonicalTarget),
            TargetChoice::Gui => Box::new(GuiTarget),
        }
    }
}

pub struct CanonicalTarget;

impl<G: GraphModel> ExportTarget<G> for CanonicalTarget {
    fn render(
        &self,
        serializer: &ExportSerializer,
        resolved: &ResolvedGraph<'_, G>,
    ) -> Result<String, ExportError> {
        serializer.snapshot(resolved).to_json()
    }
}

pub struct GuiTarget;

impl<G: GraphModel> ExportTarget<G> for GuiTarget {
    fn render(
        &self,
        serializer: &ExportSerializer,
        resolved: &ResolvedGraph<'_, G>,
    ) -> Result<String, ExportError> {
        let document = GuiDocument::build(resolved, serializer.metadata());
        serde_json::to_string_pretty(&document).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
