//! Structural validation against the external agent registry
//!
//! Validation never blocks editing: it turns tolerated defects (missing
//! entry, disconnected steps, stale agent references) into display-ready
//! messages and nothing else. An empty result means the workflow is ready
//! to hand off.

use std::collections::HashSet;

use crate::model::{AgentInfo, Workflow, TASK_SOURCE_AGENT_ID};
use crate::reachability::orphans;

/// Run all structural checks in order and collect their messages.
///
/// Checks: empty workflow, unresolvable entry step, disconnected step
/// count, and one message per agent step whose reference is neither the
/// task-source sentinel nor a registry agent.
pub fn validate(workflow: &Workflow, agents: &[AgentInfo]) -> Vec<String> {
    let mut problems = Vec::new();

    if workflow.steps.is_empty() {
        problems.push("Workflow is empty".to_string());
        return problems;
    }

    if workflow.entry_step().is_none() {
        problems.push("No entry point defined".to_string());
    }

    let orphan_count = orphans(workflow).len();
    if orphan_count > 0 {
        problems.push(format!("{} disconnected steps", orphan_count));
    }

    let known: HashSet<&str> = agents.iter().map(|a| a.id.as_str()).collect();
    let mut unassigned: Vec<(&str, &str)> = workflow
        .steps
        .values()
        .filter(|step| match step.kind.agent_id() {
            Some(agent_id) => agent_id != TASK_SOURCE_AGENT_ID && !known.contains(agent_id),
            None => false,
        })
        .map(|step| (step.label.as_str(), step.id.as_str()))
        .collect();
    unassigned.sort();
    for (label, _) in unassigned {
        problems.push(format!("Step \"{}\" has no valid agent", label));
    }

    problems
}
