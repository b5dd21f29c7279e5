//! Root finding and reachability
//!
//! Layout and orphan detection both start from the graph's roots: every
//! step with no inbound edge, or the declared entry step when the graph is
//! fully cyclic. Simulation deliberately does NOT share this rule (it runs
//! strictly from the entry step); keep the two apart.

use std::collections::{HashSet, VecDeque};

use crate::model::Workflow;

/// Root step ids: all steps with no inbound edge, sorted. When every step
/// has an inbound edge (the graph is fully cyclic) and the entry step
/// resolves, the entry alone is the root.
pub fn roots(workflow: &Workflow) -> Vec<String> {
    let has_incoming: HashSet<&str> = workflow
        .steps
        .values()
        .flat_map(|step| step.next_steps.iter().map(String::as_str))
        .collect();

    let mut roots: Vec<String> = workflow
        .steps
        .keys()
        .filter(|id| !has_incoming.contains(id.as_str()))
        .cloned()
        .collect();
    roots.sort();

    if roots.is_empty() {
        if let Some(entry) = workflow.entry_step() {
            roots.push(entry.id.clone());
        }
    }
    roots
}

/// All step ids reachable from any root, visited-set BFS. Targets that no
/// longer resolve to a step are skipped, not errors.
pub fn reachable_from_roots(workflow: &Workflow) -> HashSet<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    for root in roots(workflow) {
        if visited.insert(root.clone()) {
            queue.push_back(root);
        }
    }

    while let Some(id) = queue.pop_front() {
        if let Some(step) = workflow.step(&id) {
            for target in &step.next_steps {
                if workflow.contains_step(target) && visited.insert(target.clone()) {
                    queue.push_back(target.clone());
                }
            }
        }
    }
    visited
}

/// Steps unreachable from every root, sorted for stable display. Orphans
/// are listed outside the layered graph but stay fully editable.
pub fn orphans(workflow: &Workflow) -> Vec<String> {
    let reachable = reachable_from_roots(workflow);
    let mut orphans: Vec<String> = workflow
        .steps
        .keys()
        .filter(|id| !reachable.contains(*id))
        .cloned()
        .collect();
    orphans.sort();
    orphans
}
