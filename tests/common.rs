//! Common test utilities for building flowchart graphs.
use formflow::prelude::*;
use serde_json::json;

/// A question node with the given label.
#[allow(dead_code)]
pub fn question(id: &str, label: &str) -> FlowNode {
    FlowNode::new(id, NodeKind::Question, label)
}

/// A PDF document node named through its `_pdfName` attribute.
#[allow(dead_code)]
pub fn pdf_document(id: &str, name: &str) -> FlowNode {
    FlowNode::new(id, NodeKind::PdfDocument, name).with_attribute("_pdfName", name)
}

#[allow(dead_code)]
pub fn node<'g>(graph: &'g FlowGraph, id: &str) -> &'g FlowNode {
    graph
        .node(&CellId::from(id))
        .unwrap_or_else(|| panic!("node '{}' missing from fixture", id))
}

/// Q1 "Enter name" -> P1 "Complaint Form".
#[allow(dead_code)]
pub fn create_complaint_graph() -> FlowGraph {
    FlowGraph::from_parts(
        vec![
            question("q1", "Enter name"),
            pdf_document("p1", "Complaint Form"),
        ],
        vec![FlowEdge::new("e1", "q1", "p1")],
    )
}

/// A small but complete form:
///
/// ```text
/// p1 (Petition) -> q1 "Do you have children?" -> o1 "Yes" -> q2 "Child details"
///                                             -> o2 "No"  -> end
/// q2 -> n1 (notes)
/// ```
///
/// `q2` carries checkbox options with nested linked fields and `q1` an
/// internal editor attribute that must never be exported.
#[allow(dead_code)]
pub fn create_form_graph() -> FlowGraph {
    let petition = pdf_document("p1", "Petition")
        .with_attribute("_pdfPrice", "25.00")
        .with_attribute("_pdfFile", "petition.pdf")
        .with_geometry(Geometry {
            x: 0.0,
            y: 0.0,
            width: 160.0,
            height: 60.0,
        });

    let has_children = question("q1", "Do you have <b>children</b>?")
        .with_attribute("_questionType", "dropdown")
        .with_attribute("_editorScratch", json!({"selected": true}))
        .with_geometry(Geometry {
            x: 0.0,
            y: 120.0,
            width: 200.0,
            height: 80.0,
        });

    let child_details = question("q2", "Child details")
        .with_attribute("_questionType", "checkbox")
        .with_attribute("_nameId", "sc100_child_details")
        .with_attribute(
            "_checkboxOptions",
            json!([
                {
                    "checkboxText": "Lives with me",
                    "nameId": "petition_lives_with_me",
                    "linkedFields": ["petition_child_name_1", "child_age_2"]
                },
                {
                    "checkboxText": "Lives elsewhere",
                    "nameId": "lives_elsewhere"
                }
            ]),
        );

    FlowGraph::from_parts(
        vec![
            petition,
            has_children,
            FlowNode::new("o1", NodeKind::Options, "Yes"),
            FlowNode::new("o2", NodeKind::Options, "No"),
            child_details,
            FlowNode::new("n1", NodeKind::Notes, "Remember to attach birth certificates"),
            FlowNode::new("end", NodeKind::End, "End"),
        ],
        vec![
            FlowEdge::new("e1", "p1", "q1"),
            FlowEdge::new("e2", "q1", "o1"),
            FlowEdge::new("e3", "q1", "o2"),
            FlowEdge::new("e4", "o1", "q2"),
            FlowEdge::new("e5", "o2", "end"),
            FlowEdge {
                geometry: Some(EdgeGeometry {
                    points: vec![Point { x: 10.0, y: 20.0 }],
                }),
                ..FlowEdge::new("e6", "q2", "n1")
            },
        ],
    )
}

/// Labels that themselves look prefixed:
///
/// ```text
/// loose "Q1 name"                   (no document anywhere)
/// c1 "Complaint complaint name" -> p1 (Complaint)
/// s1 "SC100 claim"              -> p1
/// ```
#[allow(dead_code)]
pub fn create_prefixed_label_graph() -> FlowGraph {
    FlowGraph::from_parts(
        vec![
            question("loose", "Q1 name"),
            pdf_document("p1", "Complaint"),
            question("c1", "Complaint complaint name"),
            question("s1", "SC100 claim"),
        ],
        vec![FlowEdge::new("e1", "c1", "p1"), FlowEdge::new("e2", "s1", "p1")],
    )
}

/// Every fixture graph, for properties that must hold on all of them.
#[allow(dead_code)]
pub fn all_fixture_graphs() -> Vec<FlowGraph> {
    vec![
        create_complaint_graph(),
        create_form_graph(),
        create_prefixed_label_graph(),
    ]
}
