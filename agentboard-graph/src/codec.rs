//! Workflow serialization helpers
//!
//! The engine owns no file format; the dashboard's save collaborator gets
//! and returns text. These helpers exist so that hand-off is one call and
//! the round-trip guarantee (serialize, deserialize, identical graph
//! behavior) has a single place to live.

use anyhow::{Context, Result};

use crate::model::Workflow;

/// Serialize a workflow snapshot to pretty-printed JSON.
pub fn to_json(workflow: &Workflow) -> Result<String> {
    serde_json::to_string_pretty(workflow).context("Failed to serialize workflow to JSON")
}

/// Parse a workflow snapshot from JSON.
pub fn from_json(json: &str) -> Result<Workflow> {
    serde_json::from_str(json).context("Failed to parse workflow JSON")
}

/// Serialize a workflow snapshot to YAML.
pub fn to_yaml(workflow: &Workflow) -> Result<String> {
    serde_yaml::to_string(workflow).context("Failed to serialize workflow to YAML")
}

/// Parse a workflow snapshot from YAML.
pub fn from_yaml(yaml: &str) -> Result<Workflow> {
    serde_yaml::from_str(yaml).context("Failed to parse workflow YAML")
}
