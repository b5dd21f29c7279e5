//! Default workflow topology
//!
//! A project's first workflow is seeded from whatever agents the registry
//! currently lists: an intake source step feeding the agents as a hand-off
//! chain, with a rejection loop from the final reviewer back to its
//! predecessor. For the canonical tech-lead / developer / QA registry this
//! produces the classic "TL -> Dev -> QA, QA rejects back to Dev" board.

use uuid::Uuid;

use crate::model::{AgentInfo, Step, StepKind, Workflow};

/// Edge label used for the seeded rejection loop.
pub const REJECTED_EDGE_LABEL: &str = "Rejected";

/// Build the default workflow for a project from the agent registry.
///
/// The intake step is the entry. Agents are chained in registry order; an
/// empty registry seeds just the intake step.
pub fn default_workflow(name: &str, description: &str, agents: &[AgentInfo]) -> Workflow {
    let mut workflow = Workflow::new(name, description);

    let mut steps = vec![Step {
        id: Uuid::new_v4().to_string(),
        label: "Intake".to_string(),
        kind: StepKind::Source,
        next_steps: Vec::new(),
        next_step_labels: Vec::new(),
    }];
    workflow.entry_step_id = steps[0].id.clone();

    for agent in agents {
        let id = Uuid::new_v4().to_string();
        if let Some(prev) = steps.last_mut() {
            prev.next_steps.push(id.clone());
            prev.next_step_labels.push(String::new());
        }
        steps.push(Step {
            id,
            label: agent.name.clone(),
            kind: StepKind::Agent {
                agent_id: agent.id.clone(),
            },
            next_steps: Vec::new(),
            next_step_labels: Vec::new(),
        });
    }

    // rejection loop from the last agent back to the one before it
    if agents.len() >= 2 {
        let return_to = steps[steps.len() - 2].id.clone();
        if let Some(last) = steps.last_mut() {
            last.next_steps.push(return_to);
            last.next_step_labels.push(REJECTED_EDGE_LABEL.to_string());
        }
    }

    tracing::debug!(
        workflow_id = %workflow.id,
        agent_count = agents.len(),
        "Seeded default workflow"
    );
    for step in steps {
        workflow.steps.insert(step.id.clone(), step);
    }
    workflow
}
