use crate::ir::{Edge, FileNode, Graph, Role, UnknownRole};
use std::collections::HashSet;

/// Either every value passes, or only the given one does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against label and path. Only the
    /// empty string matches everything; whitespace is part of the needle.
    pub search: String,
    pub language: Selection<String>,
    pub role: Selection<Role>,
}

impl FilterSpec {
    pub fn is_match_all(&self) -> bool {
        self.search.is_empty() && self.language.is_all() && self.role.is_all()
    }

    /// `"all"` (any case) or an empty string selects every language. Any other
    /// value must equal the node's language exactly.
    pub fn parse_language(value: &str) -> Selection<String> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn parse_role(value: &str) -> Result<Selection<Role>, UnknownRole> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        value.parse().map(Selection::Only)
    }

    pub fn matches(&self, node: &FileNode) -> bool {
        self.matches_search(node) && self.matches_language(node) && self.matches_role(node)
    }

    fn matches_search(&self, node: &FileNode) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        node.label.to_lowercase().contains(&needle) || node.path.to_lowercase().contains(&needle)
    }

    fn matches_language(&self, node: &FileNode) -> bool {
        match &self.language {
            Selection::All => true,
            Selection::Only(language) => node.language() == Some(language.as_str()),
        }
    }

    fn matches_role(&self, node: &FileNode) -> bool {
        match self.role {
            Selection::All => true,
            Selection::Only(role) => node.role == role,
        }
    }
}

/// Returns the visible subgraph: nodes passing `spec`, and the edges whose
/// endpoints are both visible. Input order is preserved for both.
pub fn apply_filter(graph: &Graph, spec: &FilterSpec) -> Graph {
    let nodes: Vec<FileNode> = graph
        .nodes
        .iter()
        .filter(|node| spec.matches(node))
        .cloned()
        .collect();

    let visible: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let edges: Vec<Edge> = graph
        .edges
        .iter()
        .filter(|edge| {
            visible.contains(edge.source.as_str()) && visible.contains(edge.target.as_str())
        })
        .cloned()
        .collect();

    let known: HashSet<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
    let dangling = graph
        .edges
        .iter()
        .filter(|edge| {
            !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str())
        })
        .count();
    if dangling > 0 {
        tracing::warn!(dangling, "dropped edges referencing unknown node ids");
    }
    tracing::debug!(
        visible_nodes = nodes.len(),
        total_nodes = graph.nodes.len(),
        visible_edges = edges.len(),
        total_edges = graph.edges.len(),
        "applied visibility filter"
    );

    Graph { nodes, edges }
}
