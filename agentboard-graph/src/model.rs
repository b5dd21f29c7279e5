//! Data model for workflow hand-off graphs
//!
//! A workflow is a directed multigraph of steps. Cycles and self-loops are
//! legal data (rejection loops like QA -> Developer are the whole point), so
//! nothing in this module assumes acyclicity; every traversal elsewhere in
//! the crate carries its own visited guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved agent reference meaning "work enters from the external
/// task-creation surface" rather than from a real agent.
pub const TASK_SOURCE_AGENT_ID: &str = "_task_source";

/// An agent registry record, supplied by the external agent store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Kind-specific payload of a step.
///
/// Only `Agent` steps carry an agent reference and only `Condition` steps
/// carry condition attributes; the structural kinds have no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    Agent {
        agent_id: String,
    },
    Condition {
        field: String,
        operator: String,
        value: String,
    },
    Parallel,
    Merge,
    Source,
}

impl StepKind {
    /// Agent reference of an `Agent` step, `None` for structural kinds.
    pub fn agent_id(&self) -> Option<&str> {
        match self {
            StepKind::Agent { agent_id } => Some(agent_id),
            _ => None,
        }
    }
}

/// A node in the workflow graph: one hand-off stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Opaque unique id, immutable after creation.
    pub id: String,
    /// Free-text description shown on the card.
    pub label: String,
    #[serde(flatten)]
    pub kind: StepKind,
    /// Ordered target step ids. May be empty, may point back at an
    /// ancestor or at the step itself.
    #[serde(default)]
    pub next_steps: Vec<String>,
    /// Edge labels, index-aligned with `next_steps`. Trailing entries may
    /// be missing and read as the empty string.
    #[serde(default)]
    pub next_step_labels: Vec<String>,
}

impl Step {
    /// Label of the outgoing edge at `index`, defaulting to `""` when the
    /// label vector is shorter than `next_steps`.
    pub fn edge_label(&self, index: usize) -> &str {
        self.next_step_labels
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Outgoing edges of this step as `(target, label)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.next_steps
            .iter()
            .enumerate()
            .map(|(i, to)| (to.as_str(), self.edge_label(i)))
    }
}

/// A directed edge of the graph with the empty-label default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// The workflow aggregate: all steps plus the declared traversal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Id of the step simulation starts from. Empty means unset; it may
    /// also dangle after edits elsewhere. Both are recoverable states that
    /// validation reports and rendering tolerates.
    #[serde(default)]
    pub entry_step_id: String,
    /// All steps keyed by id. Insertion order carries no meaning.
    #[serde(default)]
    pub steps: HashMap<String, Step>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    /// Create an empty workflow with fresh timestamps.
    pub fn new(name: &str, description: &str) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            entry_step_id: String::new(),
            steps: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.get(step_id)
    }

    pub fn contains_step(&self, step_id: &str) -> bool {
        self.steps.contains_key(step_id)
    }

    /// The entry step, if the entry id is set and still resolves.
    pub fn entry_step(&self) -> Option<&Step> {
        if self.entry_step_id.is_empty() {
            return None;
        }
        self.steps.get(&self.entry_step_id)
    }

    /// Number of edges pointing at `step_id` across the whole graph.
    /// Counts every occurrence, so parallel references all weigh in.
    pub fn incoming_edge_count(&self, step_id: &str) -> usize {
        self.steps
            .values()
            .flat_map(|step| step.next_steps.iter())
            .filter(|target| target.as_str() == step_id)
            .count()
    }

    /// Every edge in the graph, labels defaulted. Order follows the step
    /// map and is not significant; callers that render sort themselves.
    pub fn edges(&self) -> Vec<Edge> {
        self.steps
            .values()
            .flat_map(|step| {
                step.edges().map(move |(to, label)| Edge {
                    from: step.id.clone(),
                    to: to.to_string(),
                    label: label.to_string(),
                })
            })
            .collect()
    }
}
