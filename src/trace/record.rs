use crate::graph::CellId;
use crate::identifier::PrefixAction;

/// The priority tier that supplied a node's base identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierTier {
    /// The user set the identifier by hand; it is returned verbatim.
    ManualEdit,
    /// A previously stored identifier.
    StoredIdentifier,
    /// The separately stored `name` attribute.
    NameAttribute,
    /// Slug of the node's plain-text label.
    Label,
    /// The engine's opaque cell id.
    OpaqueId,
}

impl IdentifierTier {
    pub fn describe(self) -> &'static str {
        match self {
            IdentifierTier::ManualEdit => "manually edited identifier",
            IdentifierTier::StoredIdentifier => "stored identifier",
            IdentifierTier::NameAttribute => "name attribute",
            IdentifierTier::Label => "slugified label",
            IdentifierTier::OpaqueId => "opaque cell id",
        }
    }
}

/// Record of how one identifier was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionTrace {
    pub node: CellId,
    pub tier: IdentifierTier,
    /// The raw stored value or name the base was taken from.
    pub found: Option<String>,
    /// Prefixes removed from `found` before it became the base.
    pub stripped: Vec<String>,
    pub base: String,
    /// Raw (unsanitized) document name, if one resolved.
    pub document: Option<String>,
    /// `None` for manual identifiers, which bypass the prefix policy.
    pub prefix: Option<PrefixAction>,
    pub identifier: String,
}

impl ResolutionTrace {
    pub(crate) fn new(node: CellId, document: Option<String>) -> Self {
        Self {
            node,
            tier: IdentifierTier::OpaqueId,
            found: None,
            stripped: Vec::new(),
            base: String::new(),
            document,
            prefix: None,
            identifier: String::new(),
        }
    }
}
