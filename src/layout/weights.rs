use crate::ir::Graph;
use std::collections::{HashMap, HashSet};

/// Edge-touch counts per node: outgoing plus incoming edges, counting only
/// edges whose endpoints are both present in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyWeights {
    counts: HashMap<String, usize>,
}

impl DependencyWeights {
    pub fn compute(graph: &Graph) -> Self {
        let ids: HashSet<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
        let mut counts: HashMap<String, usize> =
            ids.iter().map(|id| ((*id).to_string(), 0)).collect();

        for edge in &graph.edges {
            if !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()) {
                continue;
            }
            if let Some(count) = counts.get_mut(&edge.source) {
                *count += 1;
            }
            if let Some(count) = counts.get_mut(&edge.target) {
                *count += 1;
            }
        }

        Self { counts }
    }

    /// Unknown ids weigh nothing.
    pub fn get(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }
}
