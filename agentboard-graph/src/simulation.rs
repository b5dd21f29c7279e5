//! Execution-order preview
//!
//! Simulation answers "what runs when" before the workflow is handed to
//! the orchestration service. Unlike layout, it starts strictly from the
//! declared entry step and ignores every other root: a stage the entry
//! cannot reach will genuinely never run, and the preview says so by
//! leaving it out.

use std::collections::{HashMap, HashSet};

use crate::model::Workflow;

/// Wave index per step, starting from the entry step.
///
/// All steps in the same BFS wave share one index (0, 1, 2, ...). A step
/// reachable along several paths, or again through a back edge, keeps its
/// first-reached index; the visited guard also terminates cycles. An unset
/// or dangling entry yields an empty map.
pub fn simulate(workflow: &Workflow) -> HashMap<String, usize> {
    let mut order: HashMap<String, usize> = HashMap::new();
    let entry = match workflow.entry_step() {
        Some(step) => step.id.clone(),
        None => return order,
    };

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(entry.clone());
    let mut wave = vec![entry];
    let mut index = 0;

    while !wave.is_empty() {
        let mut next_wave = Vec::new();
        for id in &wave {
            order.insert(id.clone(), index);
            if let Some(step) = workflow.step(id) {
                for target in &step.next_steps {
                    if workflow.contains_step(target) && visited.insert(target.clone()) {
                        next_wave.push(target.clone());
                    }
                }
            }
        }
        wave = next_wave;
        index += 1;
    }
    order
}
