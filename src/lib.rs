//! # formflow - Identifier Resolution and Export for Form Flowcharts
//!
//! **formflow** is the export core of a legal-form flowchart editor. A flowchart is a
//! directed graph of typed nodes (questions, options, calculations, PDF documents, ...).
//! Before a chart can drive generated documents, every node needs a stable, canonical
//! identifier, and every node needs to know which document it belongs to.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Graph**: Either import a canonical document with [`export::import_document`],
//!     implement [`graph::IntoGraph`] for your own editor model, or implement
//!     [`graph::GraphModel`] directly on it.
//! 2.  **Resolve**: [`inheritance::resolve_document_name`] finds a node's document by
//!     walking edges; [`identifier::resolve_identifier`] derives its canonical identifier.
//! 3.  **Export**: [`export::ExportSerializer`] runs every pass over the whole graph and
//!     produces a deterministic [`export::CanonicalDocument`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = FlowGraph::new();
//!     graph.add_node(FlowNode::new("q1", NodeKind::Question, "Enter name"));
//!     graph.add_node(
//!         FlowNode::new("p1", NodeKind::PdfDocument, "Complaint")
//!             .with_attribute("_pdfName", "Complaint Form"),
//!     );
//!     graph.add_edge(FlowEdge::new("e1", "q1", "p1"));
//!
//!     let q1 = graph.node(&CellId::from("q1")).unwrap();
//!     let identifier = resolve_identifier(q1, &graph, PrefixPolicy::with_prefix());
//!     println!("q1 -> {}", identifier); // complaint_form_enter_name
//!
//!     let serializer = ExportSerializer::new(PrefixPolicy::without_prefix(), GraphMetadata::default());
//!     let document = serializer.serialize(&graph);
//!     println!("{}", document.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod identifier;
pub mod inheritance;
pub mod normalize;
pub mod prelude;
pub mod trace;
