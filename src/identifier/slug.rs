use itertools::Itertools;

/// Turns free text into an identifier: lower-case, characters outside
/// `[a-z0-9\s]` dropped, whitespace runs joined with `_`, no leading or
/// trailing underscores.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace().join("_").trim_matches('_').to_string()
}

/// Sanitizes a document name for use as an identifier prefix.
pub fn sanitize_document_name(name: &str) -> String {
    slugify(name)
}

pub fn is_purely_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
