use crate::graph::attributes::{Attributes, LINKED_FIELDS, STRUCTURED_ATTRIBUTES};
use crate::graph::FlowNode;
use crate::identifier::{PrefixDetector, PrefixPolicy, sanitize_document_name};
use serde_json::Value;
use tracing::warn;

/// Keys whose string value is an identifier reference.
pub const IDENTIFIER_KEYS: [&str; 4] = ["nameId", "linkedNameId", "linkedField", "targetNameId"];

/// Keys holding lists of identifier references.
pub const REFERENCE_LIST_KEYS: [&str; 2] = ["linkedFields", "linkedNameIds"];

/// Applies the prefix policy to identifier references nested inside a node's
/// structured attributes: checkbox options, textbox lists, dropdown trigger
/// sequences and linked-field descriptors.
///
/// Trailing instance indices (`<id>_<digits>`) are split off before the policy
/// runs and reattached unchanged. Values of unexpected shape are left alone.
pub struct ReferenceNormalizer<'a> {
    policy: PrefixPolicy,
    detector: &'a PrefixDetector,
    document: Option<String>,
}

impl<'a> ReferenceNormalizer<'a> {
    /// `document` is the owning node's raw document name.
    pub fn new(policy: PrefixPolicy, detector: &'a PrefixDetector, document: Option<&str>) -> Self {
        Self {
            policy,
            detector,
            document: document
                .map(sanitize_document_name)
                .filter(|doc| !doc.is_empty()),
        }
    }

    /// Normalizes one reference.
    ///
    /// Under the add policy, a reference already prefixed with another known
    /// document's name points into that document and is returned unchanged.
    pub fn normalize_identifier(&self, reference: &str) -> String {
        let (base, index) = split_instance_index(reference);
        if self.policy.add_document_prefix {
            if let Some(prefix) = self.detector.known_prefix(base) {
                if self.document.as_deref() != Some(prefix) {
                    return reference.to_string();
                }
            }
        }
        let (normalized, _) = self
            .policy
            .apply(base, self.document.as_deref(), self.detector);
        match index {
            Some(index) => format!("{}_{}", normalized, index),
            None => normalized,
        }
    }

    /// Rewrites every reference in the structured attributes. Returns how many changed.
    pub fn normalize_in_place(&self, attributes: &mut Attributes) -> usize {
        let mut changed = 0;
        for key in STRUCTURED_ATTRIBUTES {
            let Some(value) = attributes.get_mut(key) else {
                continue;
            };
            if key == LINKED_FIELDS {
                self.rewrite_reference_list(value, &mut changed);
            } else {
                self.walk(value, &mut changed);
            }
        }
        changed
    }

    /// Rewrites references anywhere inside `value`, to any depth.
    pub fn normalize_value(&self, value: &mut Value) -> usize {
        let mut changed = 0;
        self.walk(value, &mut changed);
        changed
    }

    fn walk(&self, value: &mut Value, changed: &mut usize) {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    if IDENTIFIER_KEYS.contains(&key.as_str()) {
                        match child {
                            Value::String(reference) => self.rewrite(reference, changed),
                            Value::Null => {}
                            other => warn!(key = %key, value = %other, "skipping malformed identifier reference"),
                        }
                    } else if REFERENCE_LIST_KEYS.contains(&key.as_str()) {
                        self.rewrite_reference_list(child, changed);
                    } else {
                        self.walk(child, changed);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.walk(item, changed);
                }
            }
            _ => {}
        }
    }

    fn rewrite_reference_list(&self, value: &mut Value, changed: &mut usize) {
        match value {
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(reference) => self.rewrite(reference, changed),
                        Value::Object(_) | Value::Array(_) => self.walk(item, changed),
                        _ => {}
                    }
                }
            }
            Value::String(reference) => self.rewrite(reference, changed),
            _ => {}
        }
    }

    fn rewrite(&self, reference: &mut String, changed: &mut usize) {
        if reference.trim().is_empty() {
            return;
        }
        let normalized = self.normalize_identifier(reference.trim());
        if normalized != *reference {
            *reference = normalized;
            *changed += 1;
        }
    }
}

/// Returns a copy of the node's attributes with nested references normalized.
pub fn normalize_references(
    node: &FlowNode,
    document: Option<&str>,
    policy: PrefixPolicy,
    detector: &PrefixDetector,
) -> Attributes {
    let mut attributes = node.attributes.clone();
    ReferenceNormalizer::new(policy, detector, document).normalize_in_place(&mut attributes);
    attributes
}

/// Splits `<base>_<digits>` into its base and instance index.
pub fn split_instance_index(reference: &str) -> (&str, Option<&str>) {
    match reference.rsplit_once('_') {
        Some((base, index))
            if !base.is_empty()
                && !index.is_empty()
                && index.chars().all(|c| c.is_ascii_digit()) =>
        {
            (base, Some(index))
        }
        _ => (reference, None),
    }
}

/// Lists every identifier reference in the structured attributes, in document order.
pub fn collect_references(attributes: &Attributes) -> Vec<String> {
    fn push(value: &Value, out: &mut Vec<String>) {
        if let Value::String(reference) = value {
            if !reference.trim().is_empty() {
                out.push(reference.trim().to_string());
            }
        }
    }

    fn collect_list(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(_) => push(item, out),
                        _ => collect(item, out),
                    }
                }
            }
            other => push(other, out),
        }
    }

    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    if IDENTIFIER_KEYS.contains(&key.as_str()) {
                        push(child, out);
                    } else if REFERENCE_LIST_KEYS.contains(&key.as_str()) {
                        collect_list(child, out);
                    } else {
                        collect(child, out);
                    }
                }
            }
            Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
            _ => {}
        }
    }

    let mut out = Vec::new();
    for key in STRUCTURED_ATTRIBUTES {
        let Some(value) = attributes.get(key) else {
            continue;
        };
        if key == LINKED_FIELDS {
            collect_list(value, &mut out);
        } else {
            collect(value, &mut out);
        }
    }
    out
}
