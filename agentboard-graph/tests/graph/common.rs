//! Common fixtures for the graph engine tests

use agentboard_graph::{editor, AgentInfo, StepPatch, Workflow};

/// The canonical three-role registry.
pub fn registry() -> Vec<AgentInfo> {
    vec![
        AgentInfo {
            id: "agent-tl".to_string(),
            name: "Tech Lead".to_string(),
            role: "tech-lead".to_string(),
        },
        AgentInfo {
            id: "agent-dev".to_string(),
            name: "Developer".to_string(),
            role: "developer".to_string(),
        },
        AgentInfo {
            id: "agent-qa".to_string(),
            name: "QA".to_string(),
            role: "qa".to_string(),
        },
    ]
}

/// A review workflow with a rejection loop, built through the editor.
pub struct ReviewFlow {
    pub workflow: Workflow,
    pub tl: String,
    pub dev: String,
    pub qa: String,
}

/// TL (entry) -> Dev ("assign"), Dev -> QA ("done"), QA -> Dev ("rejected").
pub fn review_flow() -> ReviewFlow {
    let agents = registry();
    let workflow = Workflow::new("Code review", "Hand-off between roles");

    let (workflow, tl) = editor::add_step(&workflow, None, &agents);
    let workflow = rename_and_assign(&workflow, &tl, "Tech Lead", "agent-tl");

    let (workflow, dev) = editor::add_step(&workflow, None, &agents);
    let workflow = rename_and_assign(&workflow, &dev, "Developer", "agent-dev");

    let (workflow, qa) = editor::add_step(&workflow, None, &agents);
    let workflow = rename_and_assign(&workflow, &qa, "QA", "agent-qa");

    let workflow = editor::connect_steps(&workflow, &tl, &dev, "assign");
    let workflow = editor::connect_steps(&workflow, &dev, &qa, "done");
    let workflow = editor::connect_steps(&workflow, &qa, &dev, "rejected");

    ReviewFlow {
        workflow,
        tl,
        dev,
        qa,
    }
}

fn rename_and_assign(workflow: &Workflow, step_id: &str, label: &str, agent_id: &str) -> Workflow {
    editor::update_step(
        workflow,
        step_id,
        &StepPatch {
            label: Some(label.to_string()),
            agent_id: Some(agent_id.to_string()),
            ..Default::default()
        },
    )
}
