use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node types a flowchart can contain.
///
/// The editor encodes the type inside the cell's style string (`nodeType=question`);
/// [`NodeKind::from_style`] recovers it. Tags the crate does not know map to
/// [`NodeKind::Unknown`] so that unfamiliar cells still export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Question,
    Options,
    Calculation,
    Notes,
    Checklist,
    Subtitle,
    Info,
    ImageOption,
    PdfDocument,
    PdfPreview,
    AmountOption,
    End,
    HiddenCheckbox,
    HiddenTextbox,
    LinkedLogic,
    LinkedCheckbox,
    InverseCheckbox,
    Status,
    Unknown,
}

impl NodeKind {
    pub const ALL: [NodeKind; 19] = [
        NodeKind::Question,
        NodeKind::Options,
        NodeKind::Calculation,
        NodeKind::Notes,
        NodeKind::Checklist,
        NodeKind::Subtitle,
        NodeKind::Info,
        NodeKind::ImageOption,
        NodeKind::PdfDocument,
        NodeKind::PdfPreview,
        NodeKind::AmountOption,
        NodeKind::End,
        NodeKind::HiddenCheckbox,
        NodeKind::HiddenTextbox,
        NodeKind::LinkedLogic,
        NodeKind::LinkedCheckbox,
        NodeKind::InverseCheckbox,
        NodeKind::Status,
        NodeKind::Unknown,
    ];

    /// The tag used in style strings and exported documents.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Question => "question",
            NodeKind::Options => "options",
            NodeKind::Calculation => "calculation",
            NodeKind::Notes => "notes",
            NodeKind::Checklist => "checklist",
            NodeKind::Subtitle => "subtitle",
            NodeKind::Info => "info",
            NodeKind::ImageOption => "imageOption",
            NodeKind::PdfDocument => "pdfDocument",
            NodeKind::PdfPreview => "pdfPreview",
            NodeKind::AmountOption => "amountOption",
            NodeKind::End => "end",
            NodeKind::HiddenCheckbox => "hiddenCheckbox",
            NodeKind::HiddenTextbox => "hiddenTextbox",
            NodeKind::LinkedLogic => "linkedLogic",
            NodeKind::LinkedCheckbox => "linkedCheckbox",
            NodeKind::InverseCheckbox => "inverseCheckbox",
            NodeKind::Status => "status",
            NodeKind::Unknown => "unknown",
        }
    }

    /// Parses a type tag. Matching ignores ASCII case; the legacy `pdfNode` tag is accepted.
    pub fn from_tag(tag: &str) -> NodeKind {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("pdfNode") {
            return NodeKind::PdfDocument;
        }
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
            .unwrap_or(NodeKind::Unknown)
    }

    /// Extracts the kind from a `key=value;key=value` style string.
    pub fn from_style(style: &str) -> NodeKind {
        style
            .split(';')
            .filter_map(|entry| entry.split_once('='))
            .find(|(key, _)| key.trim() == "nodeType")
            .map(|(_, value)| NodeKind::from_tag(value))
            .unwrap_or(NodeKind::Unknown)
    }

    /// Whether this node is itself a generated document.
    pub fn is_document(self) -> bool {
        matches!(self, NodeKind::PdfDocument)
    }

    /// Whether the node carries an identifier that appears in generated output.
    pub fn carries_identifier(self) -> bool {
        !matches!(
            self,
            NodeKind::Notes
                | NodeKind::Subtitle
                | NodeKind::Info
                | NodeKind::End
                | NodeKind::PdfPreview
                | NodeKind::Unknown
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
