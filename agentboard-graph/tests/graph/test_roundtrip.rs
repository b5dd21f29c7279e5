//! Round-trip guarantee: a persisted snapshot behaves identically

use super::common::*;
use agentboard_graph::{assign_layers, classify_edges, codec, simulate, validate};

#[test]
fn test_json_round_trip_preserves_graph_behavior() {
    let flow = review_flow();
    let json = codec::to_json(&flow.workflow).unwrap();
    let restored = codec::from_json(&json).unwrap();

    assert_eq!(restored, flow.workflow);
    assert_eq!(assign_layers(&restored), assign_layers(&flow.workflow));
    assert_eq!(simulate(&restored), simulate(&flow.workflow));
    assert_eq!(
        validate(&restored, &registry()),
        validate(&flow.workflow, &registry())
    );

    let layers = assign_layers(&flow.workflow);
    assert_eq!(
        classify_edges(&restored, &layers),
        classify_edges(&flow.workflow, &layers)
    );
}

#[test]
fn test_yaml_round_trip_preserves_graph_behavior() {
    let flow = review_flow();
    let yaml = codec::to_yaml(&flow.workflow).unwrap();
    let restored = codec::from_yaml(&yaml).unwrap();

    assert_eq!(restored, flow.workflow);
    assert_eq!(simulate(&restored), simulate(&flow.workflow));
}

#[test]
fn test_broken_states_survive_the_trip() {
    // a dangling entry is data, not an error, on both sides of the codec
    let flow = review_flow();
    let wf = agentboard_graph::editor::set_entry_step(&flow.workflow, "gone");
    let restored = codec::from_json(&codec::to_json(&wf).unwrap()).unwrap();
    assert_eq!(restored.entry_step_id, "gone");
    assert!(simulate(&restored).is_empty());
}

#[test]
fn test_missing_label_vector_reads_as_unlabeled() {
    // hand-written definitions may omit labels entirely
    let json = r#"{
        "id": "wf-1",
        "name": "Minimal",
        "description": "",
        "entry_step_id": "a",
        "steps": {
            "a": { "id": "a", "label": "A", "kind": "agent", "agent_id": "agent-tl", "next_steps": ["b"] },
            "b": { "id": "b", "label": "B", "kind": "agent", "agent_id": "agent-dev" }
        },
        "created_at": "2026-01-10T09:00:00Z",
        "updated_at": "2026-01-10T09:00:00Z"
    }"#;
    let wf = codec::from_json(json).unwrap();
    let a = wf.step("a").unwrap();
    assert_eq!(a.edge_label(0), "");
    assert!(validate(&wf, &registry()).is_empty());
}
