//! Public attributes per node type. Anything not listed here is internal and never exported.

use crate::graph::NodeKind;
use crate::graph::attributes::*;

/// Resolved (possibly inherited) document name, written on export only.
pub const RESOLVED_DOCUMENT: &str = "_documentName";

const COMMON: [&str; 4] = [NAME_ID_MANUAL, "_createdAt", "_sectionNumber", RESOLVED_DOCUMENT];

/// Explicit document assignment is public on every node type.
const DOCUMENT_FIELDS: [&str; 4] = DOCUMENT_NAME_ALIASES;

/// Attributes exported for a given node type, on top of the common ones.
pub fn kind_attributes(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Question => &[
            NAME,
            QUESTION_TEXT,
            QUESTION_TYPE,
            CHECKBOX_OPTIONS,
            TEXTBOXES,
            DROPDOWNS,
            TRIGGER_SEQUENCES,
            LINKED_FIELDS,
            "_required",
            "_placeholder",
        ],
        NodeKind::Options => &[NAME, "_optionValue"],
        NodeKind::Calculation => &[
            "_calcTitle",
            "_calcTerms",
            "_calcOperator",
            "_calcThreshold",
            "_calcFinalText",
        ],
        NodeKind::Notes => &["_notesText", "_notesBold", "_notesFontSize"],
        NodeKind::Checklist => &["_checklistItems"],
        NodeKind::Subtitle => &["_subtitleText"],
        NodeKind::Info => &["_infoText"],
        NodeKind::ImageOption => &[NAME, "_imageUrl", "_imageWidth", "_imageHeight"],
        NodeKind::PdfDocument => &[PDF_PRICE, "_pdfLogicEnabled"],
        NodeKind::PdfPreview => &["_pdfPreviewLine", "_pdfPreviewFile"],
        NodeKind::AmountOption => &[NAME, "_amountName", "_amountPlaceholder"],
        NodeKind::End => &[],
        NodeKind::HiddenCheckbox => &[NAME, "_hiddenCheckboxDefault", HIDDEN_FIELDS],
        NodeKind::HiddenTextbox => &[NAME, "_hiddenTextboxDefault", HIDDEN_FIELDS],
        NodeKind::LinkedLogic => &["_linkedLogicIds", LINKED_FIELDS],
        NodeKind::LinkedCheckbox => &["_linkedCheckboxIds", CHECKBOX_OPTIONS, LINKED_FIELDS],
        NodeKind::InverseCheckbox => &["_inverseOf"],
        NodeKind::Status => &["_statusValue"],
        NodeKind::Unknown => &[],
    }
}

/// Whether `key` may appear in the exported cell of a node of this type.
pub fn is_public(kind: NodeKind, key: &str) -> bool {
    (key == NAME_ID && kind.carries_identifier())
        || COMMON.contains(&key)
        || DOCUMENT_FIELDS.contains(&key)
        || kind_attributes(kind).contains(&key)
}
