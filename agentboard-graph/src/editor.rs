//! Edit operations over workflow snapshots
//!
//! Every operation takes the current snapshot by reference and returns a
//! new, fully consistent snapshot; the input is never mutated, so readers
//! holding the old snapshot stay valid. All operations are total: a
//! malformed or unknown id is a silent no-op, never an error.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AgentInfo, Step, StepKind, Workflow};

/// Optional fields shallow-merged into a step by [`update_step`].
///
/// `label` applies to any step; `agent_id` only to agent steps; the
/// condition fields only to condition steps. `next_steps` is never touched
/// here, connections go through [`connect_steps`]/[`disconnect_steps`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepPatch {
    pub label: Option<String>,
    pub agent_id: Option<String>,
    pub condition_field: Option<String>,
    pub condition_operator: Option<String>,
    pub condition_value: Option<String>,
}

/// Append an edge keeping the label vector aligned. Missing trailing
/// labels are padded to the empty string first so the new label lands at
/// the right index.
fn push_edge(step: &mut Step, to: &str, label: &str) {
    while step.next_step_labels.len() < step.next_steps.len() {
        step.next_step_labels.push(String::new());
    }
    step.next_steps.push(to.to_string());
    step.next_step_labels.push(label.to_string());
}

fn touch(workflow: &mut Workflow) {
    workflow.updated_at = Utc::now();
}

/// Add a fresh agent step, bound to the first registry agent (or left
/// unassigned when the registry is empty).
///
/// With a resolvable `parent_id` the new step is linked as that parent's
/// next hand-off. Without a parent, the step starts disconnected; if the
/// workflow was empty it also becomes the entry step. Returns the new id
/// so the editor can select it.
pub fn add_step(
    workflow: &Workflow,
    parent_id: Option<&str>,
    agents: &[AgentInfo],
) -> (Workflow, String) {
    let mut next = workflow.clone();
    let id = Uuid::new_v4().to_string();

    let step = Step {
        id: id.clone(),
        label: "New step".to_string(),
        kind: StepKind::Agent {
            agent_id: agents.first().map(|a| a.id.clone()).unwrap_or_default(),
        },
        next_steps: Vec::new(),
        next_step_labels: Vec::new(),
    };

    match parent_id {
        Some(parent_id) => {
            if let Some(parent) = next.steps.get_mut(parent_id) {
                push_edge(parent, &id, "");
            }
        }
        None => {
            if next.steps.is_empty() {
                next.entry_step_id = id.clone();
            }
        }
    }

    next.steps.insert(id.clone(), step);
    touch(&mut next);
    tracing::debug!(step_id = %id, parent = ?parent_id, "Added step");
    (next, id)
}

/// Add a structural step (condition, parallel, merge, source).
///
/// Structural steps are not agent-bound and are never auto-linked; the
/// user wires them up explicitly afterwards.
pub fn add_typed_step(workflow: &Workflow, kind: StepKind) -> (Workflow, String) {
    let mut next = workflow.clone();
    let id = Uuid::new_v4().to_string();

    let label = match &kind {
        StepKind::Agent { .. } => "New step",
        StepKind::Condition { .. } => "Condition",
        StepKind::Parallel => "Parallel",
        StepKind::Merge => "Merge",
        StepKind::Source => "Source",
    };

    next.steps.insert(
        id.clone(),
        Step {
            id: id.clone(),
            label: label.to_string(),
            kind,
            next_steps: Vec::new(),
            next_step_labels: Vec::new(),
        },
    );
    touch(&mut next);
    tracing::debug!(step_id = %id, "Added typed step");
    (next, id)
}

/// Delete a step and repair every inbound edge by splicing.
///
/// Each survivor that pointed at the deleted step drops that edge (and its
/// label) and inherits the deleted step's own targets instead, appended
/// unlabeled, so deleting a pass-through stage keeps its successors
/// connected. Inherited targets never include the deleted id itself and
/// never duplicate an edge the survivor already has. If the deleted step
/// was the entry, the entry moves to some remaining step, or clears.
pub fn remove_step(workflow: &Workflow, step_id: &str) -> Workflow {
    let mut next = workflow.clone();
    let removed = match next.steps.remove(step_id) {
        Some(step) => step,
        None => return next,
    };

    for step in next.steps.values_mut() {
        let mut had_edge = false;
        while let Some(pos) = step.next_steps.iter().position(|t| t == step_id) {
            step.next_steps.remove(pos);
            if pos < step.next_step_labels.len() {
                step.next_step_labels.remove(pos);
            }
            had_edge = true;
        }
        if had_edge {
            for target in &removed.next_steps {
                if target != step_id && !step.next_steps.contains(target) {
                    step.next_steps.push(target.clone());
                }
            }
        }
    }

    if next.entry_step_id == step_id {
        next.entry_step_id = next.steps.keys().next().cloned().unwrap_or_default();
    }

    touch(&mut next);
    tracing::debug!(step_id = %step_id, "Removed step");
    next
}

/// Shallow-merge `patch` into an existing step. Fields that do not apply
/// to the step's kind are ignored.
pub fn update_step(workflow: &Workflow, step_id: &str, patch: &StepPatch) -> Workflow {
    let mut next = workflow.clone();
    let step = match next.steps.get_mut(step_id) {
        Some(step) => step,
        None => return next,
    };

    if let Some(label) = &patch.label {
        step.label = label.clone();
    }
    if let Some(new_agent) = &patch.agent_id {
        if let StepKind::Agent { agent_id } = &mut step.kind {
            *agent_id = new_agent.clone();
        }
    }
    if let StepKind::Condition {
        field,
        operator,
        value,
    } = &mut step.kind
    {
        if let Some(new_field) = &patch.condition_field {
            *field = new_field.clone();
        }
        if let Some(new_operator) = &patch.condition_operator {
            *operator = new_operator.clone();
        }
        if let Some(new_value) = &patch.condition_value {
            *value = new_value.clone();
        }
    }

    touch(&mut next);
    next
}

/// Rewrite the entry step id unconditionally. Whether the id resolves is
/// a validation concern, not an editing-time error.
pub fn set_entry_step(workflow: &Workflow, step_id: &str) -> Workflow {
    let mut next = workflow.clone();
    next.entry_step_id = step_id.to_string();
    touch(&mut next);
    tracing::debug!(step_id = %step_id, "Set entry step");
    next
}

/// Connect two existing steps. Duplicate edges between the same ordered
/// pair are refused silently.
pub fn connect_steps(workflow: &Workflow, from: &str, to: &str, label: &str) -> Workflow {
    let mut next = workflow.clone();
    if !next.steps.contains_key(to) {
        return next;
    }
    let step = match next.steps.get_mut(from) {
        Some(step) => step,
        None => return next,
    };
    if step.next_steps.iter().any(|t| t == to) {
        return next;
    }

    push_edge(step, to, label);
    touch(&mut next);
    tracing::debug!(from = %from, to = %to, "Connected steps");
    next
}

/// Remove the first edge from `from` to `to` along with its label.
pub fn disconnect_steps(workflow: &Workflow, from: &str, to: &str) -> Workflow {
    let mut next = workflow.clone();
    let step = match next.steps.get_mut(from) {
        Some(step) => step,
        None => return next,
    };
    let pos = match step.next_steps.iter().position(|t| t == to) {
        Some(pos) => pos,
        None => return next,
    };

    step.next_steps.remove(pos);
    if pos < step.next_step_labels.len() {
        step.next_step_labels.remove(pos);
    }
    touch(&mut next);
    tracing::debug!(from = %from, to = %to, "Disconnected steps");
    next
}
