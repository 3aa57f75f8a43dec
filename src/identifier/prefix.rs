use super::slug::sanitize_document_name;
use crate::graph::GraphModel;
use crate::inheritance::own_document_name;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Global toggle controlling whether identifiers are decorated with their document name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixPolicy {
    pub add_document_prefix: bool,
}

/// What the prefix policy did to a base identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixAction {
    /// The document prefix was prepended, after removing any foreign prefixes.
    Added { prefix: String, replaced: Vec<String> },
    /// The base already started with the document prefix.
    AlreadyPresent { prefix: String },
    /// Leading document prefixes were removed.
    Stripped { removed: Vec<String> },
    Unchanged,
}

impl PrefixPolicy {
    pub fn with_prefix() -> Self {
        Self {
            add_document_prefix: true,
        }
    }

    pub fn without_prefix() -> Self {
        Self {
            add_document_prefix: false,
        }
    }

    /// Applies the policy to a base identifier.
    ///
    /// `document` is the sanitized document name of the owning node, if one resolves.
    /// Every recognised leading prefix is removed first, so the result only
    /// depends on the bare remainder.
    pub fn apply(
        &self,
        base: &str,
        document: Option<&str>,
        detector: &PrefixDetector,
    ) -> (String, PrefixAction) {
        let document = document.filter(|doc| !doc.is_empty());
        let (rest, removed) = detector.strip_all(base, document);
        match (self.add_document_prefix, document) {
            (true, Some(doc)) => {
                let prefixed = format!("{}_{}", doc, rest);
                if prefixed == base {
                    return (
                        prefixed,
                        PrefixAction::AlreadyPresent {
                            prefix: doc.to_string(),
                        },
                    );
                }
                let replaced = removed.into_iter().filter(|p| p != doc).collect();
                (
                    prefixed,
                    PrefixAction::Added {
                        prefix: doc.to_string(),
                        replaced,
                    },
                )
            }
            _ if removed.is_empty() => (rest, PrefixAction::Unchanged),
            _ => (rest, PrefixAction::Stripped { removed }),
        }
    }
}

/// Recognises leading document-name prefixes on identifiers.
///
/// Three sources are consulted in order: the owning node's own document name,
/// every document name known in the graph (longest first), and the
/// [`looks_like_document_prefix`] heuristic on the first token. A prefix is
/// only recognised when a non-empty remainder follows its underscore.
#[derive(Debug, Clone, Default)]
pub struct PrefixDetector {
    known: Vec<String>,
}

impl PrefixDetector {
    pub fn new<I, S>(known_documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = known_documents
            .into_iter()
            .map(|name| sanitize_document_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .unique()
            .sorted_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
            .collect();
        Self { known }
    }

    /// Collects every document name a node in the graph declares for itself.
    pub fn from_graph<G: GraphModel>(graph: &G) -> Self {
        Self::new(
            graph
                .nodes()
                .iter()
                .filter_map(|node| own_document_name(node, graph)),
        )
    }

    pub fn known_documents(&self) -> &[String] {
        &self.known
    }

    /// Returns the leading prefix (without its underscore) if one is recognised.
    pub fn detect<'a>(&self, identifier: &'a str, own_document: Option<&str>) -> Option<&'a str> {
        let candidates = own_document.into_iter().chain(self.known.iter().map(String::as_str));
        for candidate in candidates {
            if has_prefix(identifier, candidate) {
                return Some(&identifier[..candidate.len()]);
            }
        }
        let (token, rest) = identifier.split_once('_')?;
        (looks_like_document_prefix(token) && !rest.is_empty()).then_some(token)
    }

    /// The longest known document name `identifier` starts with, ignoring the heuristic.
    pub fn known_prefix<'a>(&self, identifier: &'a str) -> Option<&'a str> {
        self.known
            .iter()
            .find(|candidate| has_prefix(identifier, candidate))
            .map(|candidate| &identifier[..candidate.len()])
    }

    /// Removes recognised prefixes until none is left. Returns the remainder and
    /// the removed prefixes in order.
    pub fn strip_all(&self, identifier: &str, own_document: Option<&str>) -> (String, Vec<String>) {
        let mut current = identifier;
        let mut removed = Vec::new();
        while let Some(prefix) = self.detect(current, own_document) {
            removed.push(prefix.to_string());
            current = &current[prefix.len() + 1..];
        }
        (current.to_string(), removed)
    }
}

/// Heuristic for foreign document prefixes: a 2–8 character token of
/// `[a-z0-9]` holding at least one letter and one digit, the shape of form
/// codes such as `sc100` or `fl300`.
///
/// Nothing structural guarantees this; a legitimate first word like `q1`
/// matches too and will be stripped.
pub fn looks_like_document_prefix(token: &str) -> bool {
    (2..=8).contains(&token.len())
        && token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && token.chars().any(|c| c.is_ascii_lowercase())
        && token.chars().any(|c| c.is_ascii_digit())
}

fn has_prefix(identifier: &str, document: &str) -> bool {
    !document.is_empty()
        && identifier.len() > document.len() + 1
        && identifier.starts_with(document)
        && identifier.as_bytes()[document.len()] == b'_'
}
