//! Workflow graph engine for the agentboard workflow editor
//!
//! This crate is the algorithmic core behind the drag-and-drop editor for
//! agent hand-off workflows ("Tech Lead -> Developer -> QA", with rejection
//! loops back to earlier roles). It provides reusable components over one
//! shared data model:
//! - **model**: the workflow graph (steps, labeled edges, entry step)
//! - **editor**: snapshot-producing edit operations
//! - **layout**: rendering layers and forward/back edge classification
//! - **reachability**: roots and orphan detection
//! - **validation**: structural checks against the agent registry
//! - **simulation**: execution-order preview from the entry step
//! - **seed**: default topology for a project's first workflow
//! - **codec**: JSON/YAML round-trip helpers for the save collaborator
//!
//! Rejection and escalation loops make cycles first-class data here, so no
//! component assumes a DAG; every traversal is visited-set guarded. All
//! operations are pure, synchronous, and total: edits on unknown ids are
//! silent no-ops, and broken states (dangling entry, orphans, stale agent
//! references) stay editable and are only ever reported by validation.

pub mod codec;
pub mod editor;
pub mod layout;
pub mod model;
pub mod reachability;
pub mod seed;
pub mod simulation;
pub mod validation;

pub use editor::StepPatch;
pub use layout::{assign_layers, classify_edges, ClassifiedEdge, EdgeKind};
pub use model::{AgentInfo, Edge, Step, StepKind, Workflow, TASK_SOURCE_AGENT_ID};
pub use reachability::{orphans, reachable_from_roots, roots};
pub use seed::{default_workflow, REJECTED_EDGE_LABEL};
pub use simulation::simulate;
pub use validation::validate;
