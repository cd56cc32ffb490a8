use crate::ir::{Category, Edge, FileNode, Graph, NodePayload, Role};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("node #{index} has an empty id")]
    EmptyNodeId { index: usize },
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    role: Role,
    #[serde(flatten)]
    payload: NodePayload,
}

impl NodeRecord {
    fn into_node(self) -> FileNode {
        let path = self.path.unwrap_or_else(|| self.id.clone());
        let mut node = FileNode::new(self.id, path);
        if let Some(label) = self.label.filter(|label| !label.trim().is_empty()) {
            node.label = label;
        }
        node.category = self.category;
        node.role = self.role;
        node.payload = self.payload;
        node
    }
}

/// Parses the analyzer's `{ "nodes": [...], "edges": [...] }` document.
pub fn parse_graph(input: &str) -> Result<Graph, ParseError> {
    let file: GraphFile = serde_json::from_str(input)?;

    let mut nodes = Vec::with_capacity(file.nodes.len());
    for (index, record) in file.nodes.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(ParseError::EmptyNodeId { index });
        }
        nodes.push(record.into_node());
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = nodes
        .iter()
        .filter(|node| !seen.insert(node.id.as_str()))
        .map(|node| node.id.as_str())
        .collect();
    if !duplicates.is_empty() {
        tracing::warn!(ids = ?duplicates, "graph contains duplicate node ids");
    }

    tracing::debug!(nodes = nodes.len(), edges = file.edges.len(), "parsed graph");
    Ok(Graph {
        nodes,
        edges: file.edges,
    })
}
