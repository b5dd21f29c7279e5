//! Simulation ordering from the declared entry step

use super::common::*;
use agentboard_graph::{editor, simulate};

#[test]
fn test_review_flow_order() {
    let flow = review_flow();
    let order = simulate(&flow.workflow);
    assert_eq!(order.len(), 3);
    assert_eq!(order[&flow.tl], 0);
    assert_eq!(order[&flow.dev], 1);
    assert_eq!(order[&flow.qa], 2);
}

#[test]
fn test_rejection_loop_does_not_reorder() {
    // QA -> Dev arrives after Dev was ordered; the first-reached index wins
    let flow = review_flow();
    let order = simulate(&flow.workflow);
    assert_eq!(order[&flow.dev], 1);
}

#[test]
fn test_empty_entry_yields_empty_order() {
    let flow = review_flow();
    let wf = editor::set_entry_step(&flow.workflow, "");
    assert!(simulate(&wf).is_empty());
}

#[test]
fn test_entry_change_moves_the_starting_wave() {
    let flow = review_flow();
    let wf = editor::set_entry_step(&flow.workflow, &flow.dev);
    let order = simulate(&wf);
    // TL is unreachable from Dev and drops out of the preview entirely
    assert!(!order.contains_key(&flow.tl));
    assert_eq!(order[&flow.dev], 0);
    assert_eq!(order[&flow.qa], 1);
}

#[test]
fn test_simulation_unaffected_by_detached_steps() {
    let flow = review_flow();
    let (wf, loose) = editor::add_step(&flow.workflow, None, &registry());
    let order = simulate(&wf);
    assert!(!order.contains_key(&loose));
    assert_eq!(order.len(), 3);
}
