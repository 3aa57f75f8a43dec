//! Tests for canonical identifier resolution and the prefix policy.
mod common;
use common::*;
use formflow::identifier::looks_like_document_prefix;
use formflow::prelude::*;
use itertools::Itertools;

#[test]
fn test_end_to_end_prefix_policy() {
    let graph = create_complaint_graph();
    let q1 = node(&graph, "q1");

    assert_eq!(
        resolve_identifier(q1, &graph, PrefixPolicy::with_prefix()),
        "complaint_form_enter_name"
    );
    assert_eq!(
        resolve_identifier(q1, &graph, PrefixPolicy::without_prefix()),
        "enter_name"
    );
}

#[test]
fn test_policy_toggle_on_stored_identifier() {
    let graph = FlowGraph::from_parts(
        vec![
            question("q1", "Anything").with_attribute("_nameId", "foo_bar"),
            pdf_document("p1", "Doc1"),
        ],
        vec![FlowEdge::new("e1", "q1", "p1")],
    );
    let q1 = node(&graph, "q1");
    assert_eq!(
        resolve_identifier(q1, &graph, PrefixPolicy::with_prefix()),
        "doc1_foo_bar"
    );

    let prefixed = FlowGraph::from_parts(
        vec![
            question("q1", "Anything").with_attribute("_nameId", "doc1_foo_bar"),
            pdf_document("p1", "Doc1"),
        ],
        vec![FlowEdge::new("e1", "q1", "p1")],
    );
    let q1 = node(&prefixed, "q1");
    assert_eq!(
        resolve_identifier(q1, &prefixed, PrefixPolicy::without_prefix()),
        "foo_bar"
    );
    assert_eq!(
        resolve_identifier(q1, &prefixed, PrefixPolicy::with_prefix()),
        "doc1_foo_bar"
    );
}

#[test]
fn test_foreign_prefix_is_replaced() {
    let graph = FlowGraph::from_parts(
        vec![
            question("q1", "Claim amount").with_attribute("_nameId", "sc100_claim_amount"),
            pdf_document("p1", "Complaint Form"),
        ],
        vec![FlowEdge::new("e1", "q1", "p1")],
    );
    let engine = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());
    let trace = engine.resolve_traced(node(&graph, "q1"));

    assert_eq!(trace.identifier, "complaint_form_claim_amount");
    assert_eq!(trace.tier, IdentifierTier::StoredIdentifier);
    assert_eq!(trace.stripped, vec!["sc100".to_string()]);
    assert_eq!(trace.base, "claim_amount");
    assert_eq!(
        trace.prefix,
        Some(PrefixAction::Added {
            prefix: "complaint_form".to_string(),
            replaced: vec![],
        })
    );
}

#[test]
fn test_manual_identifier_is_returned_verbatim() {
    let graph = FlowGraph::from_parts(
        vec![
            question("q1", "Enter name")
                .with_attribute("_nameId", "SC100_Custom ID")
                .with_attribute("_nameIdManual", true),
            pdf_document("p1", "Complaint Form"),
        ],
        vec![FlowEdge::new("e1", "q1", "p1")],
    );
    let q1 = node(&graph, "q1");

    for policy in [PrefixPolicy::with_prefix(), PrefixPolicy::without_prefix()] {
        let trace = IdentifierEngine::new(&graph, policy).resolve_traced(q1);
        assert_eq!(trace.identifier, "SC100_Custom ID");
        assert_eq!(trace.tier, IdentifierTier::ManualEdit);
        assert_eq!(trace.prefix, None);
    }
}

#[test]
fn test_manual_flag_without_identifier_falls_through() {
    let graph = FlowGraph::from_parts(
        vec![question("q1", "Enter name").with_attribute("_nameIdManual", "true")],
        vec![],
    );
    let trace = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix())
        .resolve_traced(node(&graph, "q1"));
    assert_eq!(trace.tier, IdentifierTier::Label);
    assert_eq!(trace.identifier, "enter_name");
}

#[test]
fn test_placeholders_are_rejected() {
    for placeholder in ["new_question", "unnamed_node", "N/A", "option1", "option_2", "new_option_3", "  "] {
        let graph = FlowGraph::from_parts(
            vec![question("q1", "Date of birth").with_attribute("_nameId", placeholder)],
            vec![],
        );
        assert_eq!(
            resolve_identifier(node(&graph, "q1"), &graph, PrefixPolicy::without_prefix()),
            "date_of_birth",
            "placeholder '{}' should be ignored",
            placeholder
        );
    }
}

#[test]
fn test_name_attribute_used_when_no_stored_identifier() {
    let graph = FlowGraph::from_parts(
        vec![
            question("q1", "Label text")
                .with_attribute("_nameId", "new_question")
                .with_attribute("name", "fl300_hearing_date"),
        ],
        vec![],
    );
    let trace = IdentifierEngine::new(&graph, PrefixPolicy::without_prefix())
        .resolve_traced(node(&graph, "q1"));
    assert_eq!(trace.tier, IdentifierTier::NameAttribute);
    assert_eq!(trace.identifier, "hearing_date");
}

#[test]
fn test_numeric_base_falls_back_to_label() {
    let graph = FlowGraph::from_parts(
        vec![question("q1", "Your age").with_attribute("_nameId", 42)],
        vec![],
    );
    assert_eq!(
        resolve_identifier(node(&graph, "q1"), &graph, PrefixPolicy::without_prefix()),
        "your_age"
    );
}

#[test]
fn test_empty_label_falls_back_to_cell_id() {
    let graph = FlowGraph::from_parts(vec![question("cell-17", "<br>&nbsp;?")], vec![]);
    let trace = IdentifierEngine::new(&graph, PrefixPolicy::without_prefix())
        .resolve_traced(node(&graph, "cell-17"));
    assert_eq!(trace.tier, IdentifierTier::OpaqueId);
    assert_eq!(trace.identifier, "cell-17");
}

#[test]
fn test_add_policy_without_document_leaves_base() {
    let graph = FlowGraph::from_parts(vec![question("q1", "Enter name")], vec![]);
    let trace = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix())
        .resolve_traced(node(&graph, "q1"));
    assert_eq!(trace.identifier, "enter_name");
    assert_eq!(trace.document, None);
    assert_eq!(trace.prefix, Some(PrefixAction::Unchanged));
}

#[test]
fn test_heuristic_strips_short_alphanumeric_token() {
    let graph = FlowGraph::from_parts(
        vec![question("q1", "Answer").with_attribute("_nameId", "q1_answer")],
        vec![],
    );
    assert_eq!(
        resolve_identifier(node(&graph, "q1"), &graph, PrefixPolicy::without_prefix()),
        "answer"
    );

    assert!(looks_like_document_prefix("sc100"));
    assert!(looks_like_document_prefix("fl300"));
    assert!(!looks_like_document_prefix("child"));
    assert!(!looks_like_document_prefix("100"));
    assert!(!looks_like_document_prefix("a"));
    assert!(!looks_like_document_prefix("abcdefgh9"));
    assert!(!looks_like_document_prefix("SC100"));
}

#[test]
fn test_prefix_requires_remainder() {
    let detector = PrefixDetector::new(["Doc1"]);
    assert_eq!(detector.detect("doc1_", None), None);
    assert_eq!(detector.detect("doc1", None), None);
    assert_eq!(detector.detect("doc1_name", None), Some("doc1"));

    let (rest, removed) = detector.strip_all("sc100_doc1_name", None);
    assert_eq!(rest, "name");
    assert_eq!(removed, vec!["sc100".to_string(), "doc1".to_string()]);
}

#[test]
fn test_known_documents_are_longest_first() {
    let detector = PrefixDetector::new(["Complaint", "Complaint Form", "complaint form", ""]);
    assert_eq!(
        detector.known_documents(),
        &["complaint_form".to_string(), "complaint".to_string()]
    );
    assert_eq!(
        detector.detect("complaint_form_enter_name", None),
        Some("complaint_form")
    );
}

#[test]
fn test_resolution_is_idempotent() {
    for (graph, policy) in all_fixture_graphs().into_iter().cartesian_product([
        PrefixPolicy::with_prefix(),
        PrefixPolicy::without_prefix(),
    ]) {
        let engine = IdentifierEngine::new(&graph, policy);
        let mut rewritten = graph.clone();
        for flow_node in graph.nodes() {
            let identifier = engine.resolve(flow_node);
            rewritten.set_attribute(&flow_node.id, "_nameId", identifier);
        }

        let second = IdentifierEngine::new(&rewritten, policy);
        for flow_node in graph.nodes() {
            assert_eq!(
                second.resolve(node(&rewritten, flow_node.id.as_str())),
                engine.resolve(flow_node),
                "identifier of '{}' changed on a second pass",
                flow_node.id
            );
        }
    }
}

#[test]
fn test_form_graph_identifiers() {
    let graph = create_form_graph();
    let without = IdentifierEngine::new(&graph, PrefixPolicy::without_prefix());
    let with = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());

    let expected = [
        ("q1", "do_you_have_children", "petition_do_you_have_children"),
        ("o1", "yes", "petition_yes"),
        ("o2", "no", "petition_no"),
        ("q2", "child_details", "petition_child_details"),
        ("end", "end", "petition_end"),
    ];
    for (id, plain, prefixed) in expected {
        assert_eq!(without.resolve(node(&graph, id)), plain);
        assert_eq!(with.resolve(node(&graph, id)), prefixed);
    }
}

#[test]
fn test_identifier_cache_reuses_unchanged_nodes() {
    let mut graph = create_complaint_graph();
    let mut cache = IdentifierCache::new();
    {
        let engine = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());
        let q1 = node(&graph, "q1");
        let first = cache.get_or_resolve(&engine, q1, Some("Complaint Form"));
        let second = cache.get_or_resolve(&engine, q1, Some("Complaint Form"));
        assert_eq!(first, "complaint_form_enter_name");
        assert_eq!(first, second);
        assert_eq!(cache.stats(), (1, 1));
    }

    graph.node_mut(&CellId::from("q1")).unwrap().value = "Enter full name".to_string();
    let engine = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());
    let updated = cache.get_or_resolve(&engine, node(&graph, "q1"), Some("Complaint Form"));
    assert_eq!(updated, "complaint_form_enter_full_name");
    assert_eq!(cache.stats(), (1, 2));
    assert_eq!(cache.get(&CellId::from("q1")), Some("complaint_form_enter_full_name"));

    cache.invalidate(&CellId::from("q1"));
    assert!(cache.is_empty());
}

#[test]
fn test_identifier_cache_respects_policy_change() {
    let graph = create_complaint_graph();
    let q1 = node(&graph, "q1");
    let mut cache = IdentifierCache::new();

    let with = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());
    let without = IdentifierEngine::new(&graph, PrefixPolicy::without_prefix());
    assert_eq!(
        cache.get_or_resolve(&with, q1, Some("Complaint Form")),
        "complaint_form_enter_name"
    );
    assert_eq!(
        cache.get_or_resolve(&without, q1, Some("Complaint Form")),
        "enter_name"
    );
    assert_eq!(cache.stats(), (0, 2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_prefixed_labels_are_stripped() {
    let graph = create_prefixed_label_graph();
    let with = IdentifierEngine::new(&graph, PrefixPolicy::with_prefix());
    let without = IdentifierEngine::new(&graph, PrefixPolicy::without_prefix());

    let expected = [
        ("loose", "name", "name"),
        ("c1", "name", "complaint_name"),
        ("s1", "claim", "complaint_claim"),
        ("p1", "complaint", "complaint_complaint"),
    ];
    for (id, plain, prefixed) in expected {
        assert_eq!(without.resolve(node(&graph, id)), plain, "node '{}'", id);
        assert_eq!(with.resolve(node(&graph, id)), prefixed, "node '{}'", id);
    }

    let trace = with.resolve_traced(node(&graph, "s1"));
    assert_eq!(trace.tier, IdentifierTier::Label);
    assert_eq!(trace.stripped, vec!["sc100".to_string()]);
    assert_eq!(trace.base, "claim");
}

#[test]
fn test_written_back_label_identifier_is_stable() {
    let graph = create_prefixed_label_graph();
    for policy in [PrefixPolicy::with_prefix(), PrefixPolicy::without_prefix()] {
        for id in ["loose", "c1", "s1"] {
            let first = resolve_identifier(node(&graph, id), &graph, policy);
            let mut stored = graph.clone();
            stored.set_attribute(&CellId::from(id), "_nameId", first.as_str());
            let second = resolve_identifier(node(&stored, id), &stored, policy);
            assert_eq!(first, second, "node '{}' under {:?}", id, policy);
        }
    }
}

#[test]
fn test_policy_apply_strips_before_adding() {
    let detector = PrefixDetector::new(["Complaint"]);
    let policy = PrefixPolicy::with_prefix();

    assert_eq!(
        policy.apply("complaint_complaint_name", Some("complaint"), &detector),
        (
            "complaint_name".to_string(),
            PrefixAction::Added {
                prefix: "complaint".to_string(),
                replaced: vec![],
            }
        )
    );
    assert_eq!(
        policy.apply("complaint_name", Some("complaint"), &detector),
        (
            "complaint_name".to_string(),
            PrefixAction::AlreadyPresent {
                prefix: "complaint".to_string(),
            }
        )
    );
    assert_eq!(
        policy.apply("q1_name", None, &detector),
        (
            "name".to_string(),
            PrefixAction::Stripped {
                removed: vec!["q1".to_string()],
            }
        )
    );
}

#[test]
fn test_manual_identifier_keeps_whitespace() {
    let graph = FlowGraph::from_parts(
        vec![
            question("q1", "Enter name")
                .with_attribute("_nameId", " custom_id ")
                .with_attribute("_nameIdManual", true),
        ],
        vec![],
    );
    assert_eq!(
        resolve_identifier(node(&graph, "q1"), &graph, PrefixPolicy::with_prefix()),
        " custom_id "
    );
}
