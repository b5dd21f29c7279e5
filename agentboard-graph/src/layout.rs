//! Layer assignment and edge classification for rendering
//!
//! Steps are placed on integer layers by multi-source BFS from the graph's
//! roots, then every edge is classified as forward progression or a return
//! to an earlier stage. Classification compares layer numbers only; it is a
//! visualization heuristic, not a cycle decomposition, and diamonds feeding
//! a shared layer can mark an edge "back" that no cycle contains.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::model::Workflow;
use crate::reachability::roots;

/// Rendering class of an edge relative to the layer map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Forward,
    Back,
}

/// An edge annotated for rendering: a back edge returns to a layer at or
/// above its source (e.g. a QA rejection), a forward edge progresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub kind: EdgeKind,
}

/// Assign a rendering layer to every step reachable from the roots.
///
/// All roots sit on layer 0; each successor lands one layer below its
/// first-reaching parent (minimum layer wins, later arrivals are no-ops).
/// Steps the BFS never reaches are absent from the map; they are the
/// orphans the reachability pass reports separately.
pub fn assign_layers(workflow: &Workflow) -> HashMap<String, usize> {
    let mut layers: HashMap<String, usize> = HashMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    for root in roots(workflow) {
        layers.insert(root.clone(), 0);
        queue.push_back(root);
    }

    while let Some(id) = queue.pop_front() {
        let layer = layers[&id];
        if let Some(step) = workflow.step(&id) {
            for target in &step.next_steps {
                if workflow.contains_step(target) && !layers.contains_key(target) {
                    layers.insert(target.clone(), layer + 1);
                    queue.push_back(target.clone());
                }
            }
        }
    }
    layers
}

/// Classify every edge whose endpoints both carry a layer.
///
/// `layer(to) <= layer(from)` makes a back edge; strictly greater makes a
/// forward edge. Edges touching an unlayered (orphaned) step are omitted.
/// The result is sorted by `(from, to)` so repeated renders are identical.
pub fn classify_edges(
    workflow: &Workflow,
    layers: &HashMap<String, usize>,
) -> Vec<ClassifiedEdge> {
    let mut classified: Vec<ClassifiedEdge> = workflow
        .edges()
        .into_iter()
        .filter_map(|edge| {
            let from_layer = *layers.get(&edge.from)?;
            let to_layer = *layers.get(&edge.to)?;
            let kind = if to_layer <= from_layer {
                EdgeKind::Back
            } else {
                EdgeKind::Forward
            };
            Some(ClassifiedEdge {
                from: edge.from,
                to: edge.to,
                label: edge.label,
                kind,
            })
        })
        .collect();

    classified.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
    classified
}
