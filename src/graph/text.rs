use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

const TAG_PATTERN: &str = r"<[^>]*>";

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Strips editor markup from a display value: tags become spaces, common
/// entities are decoded and whitespace runs collapse to one space.
pub fn plain_text(value: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let tag_regex = TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).unwrap());

    let mut text = tag_regex.replace_all(value, " ").into_owned();
    // `&amp;` is decoded last so `&amp;lt;` stays literal.
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    text.split_whitespace().join(" ")
}
