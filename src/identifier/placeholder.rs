use regex::Regex;
use std::sync::OnceLock;

/// Identifiers the editor assigns before the user names a node.
const IDENTIFIER_PLACEHOLDERS: [&str; 3] = ["new_question", "unnamed_node", "N/A"];

// Auto-generated option names: `option1`, `option_2`, `new_option_3`.
const OPTION_PLACEHOLDER_PATTERN: &str = r"^(new_)?option_?\d*$";

/// Document names that mean "nothing chosen yet". Compared case-insensitively.
const DOCUMENT_PLACEHOLDERS: [&str; 8] = [
    "untitled",
    "untitled document",
    "pdf",
    "pdf document",
    "document",
    "n/a",
    "null",
    "undefined",
];

/// Whether a stored identifier or name is a sentinel rather than a real identifier.
pub fn is_placeholder_identifier(value: &str) -> bool {
    static OPTION_REGEX: OnceLock<Regex> = OnceLock::new();
    let option_regex =
        OPTION_REGEX.get_or_init(|| Regex::new(OPTION_PLACEHOLDER_PATTERN).unwrap());

    let value = value.trim();
    value.is_empty() || IDENTIFIER_PLACEHOLDERS.contains(&value) || option_regex.is_match(value)
}

pub fn is_placeholder_document_name(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || DOCUMENT_PLACEHOLDERS
            .iter()
            .any(|placeholder| placeholder.eq_ignore_ascii_case(value))
}
