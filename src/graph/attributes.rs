//! Well-known attribute keys and typed accessors over a node's attribute bag.

use indexmap::IndexMap;
use serde_json::Value;

/// A node's open attribute bag. Insertion order is preserved so that exports stay stable.
pub type Attributes = IndexMap<String, Value>;

/// Stored identifier; doubles as the cache of the last resolution.
pub const NAME_ID: &str = "_nameId";
/// Set when the user typed the identifier by hand.
pub const NAME_ID_MANUAL: &str = "_nameIdManual";
/// Separately stored display name.
pub const NAME: &str = "name";
pub const QUESTION_TEXT: &str = "_questionText";
pub const QUESTION_TYPE: &str = "_questionType";

pub const PDF_NAME: &str = "_pdfName";
pub const PDF_FILENAME: &str = "_pdfFilename";
pub const PDF_FILE: &str = "_pdfFile";
pub const PDF_URL: &str = "_pdfUrl";
pub const PDF_PRICE: &str = "_pdfPrice";

pub const CHECKBOX_OPTIONS: &str = "_checkboxOptions";
pub const TEXTBOXES: &str = "_textboxes";
pub const DROPDOWNS: &str = "_dropdowns";
pub const TRIGGER_SEQUENCES: &str = "_triggerSequences";
pub const LINKED_FIELDS: &str = "_linkedFields";
pub const HIDDEN_FIELDS: &str = "_hiddenFields";

/// Document-name aliases, highest priority first.
pub const DOCUMENT_NAME_ALIASES: [&str; 4] = [PDF_NAME, PDF_FILENAME, PDF_FILE, PDF_URL];

/// Attributes holding nested structures that embed identifier references.
pub const STRUCTURED_ATTRIBUTES: [&str; 6] = [
    CHECKBOX_OPTIONS,
    TEXTBOXES,
    DROPDOWNS,
    TRIGGER_SEQUENCES,
    LINKED_FIELDS,
    HIDDEN_FIELDS,
];

/// Returns the attribute as a trimmed, non-empty string.
///
/// Numbers are accepted and rendered, since older documents stored some ids numerically.
pub fn string_attribute(attributes: &Attributes, key: &str) -> Option<String> {
    let text = match attributes.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Reads a boolean flag. Strings `"true"` and `"1"` count as set.
pub fn flag_attribute(attributes: &Attributes, key: &str) -> bool {
    match attributes.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}
