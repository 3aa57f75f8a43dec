//! Canonical and runtime export of a flowchart graph.

pub mod allowlist;
mod document;
mod gui;
mod import;
mod serializer;
mod session;
mod target;

pub use document::*;
pub use gui::{GuiDocument, GuiDocumentEntry, GuiField};
pub use import::import_document;
pub use serializer::{ExportSerializer, ResolvedGraph};
pub use session::{FormSession, write_back_identifiers};
pub use target::{CanonicalTarget, ExportTarget, GuiTarget, TargetChoice};
