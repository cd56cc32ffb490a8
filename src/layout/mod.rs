mod compose;
mod filter;
mod grid;
mod grouping;
mod packing;
pub(crate) mod types;
mod weights;

pub use compose::{PlacedDomain, compose};
pub use filter::{FilterSpec, Selection, apply_filter};
pub use grid::{GridShape, node_offset, role_box_size};
pub use grouping::{DomainGroups, RoleGroup, classify_domain, group_by_role, order_domain};
pub use packing::{Packing, RowPacker, pack_rows};
pub use types::*;
pub use weights::DependencyWeights;

use crate::config::{ConfigError, LayoutConfig};
use crate::ir::{Edge, FileNode, Graph};
use std::collections::HashSet;

/// Runs the layout pipeline with a configuration validated up front.
///
/// Every call recomputes the layout from scratch; the engine keeps no state
/// between calls and can be shared across threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Filters `graph`, then lays out what remains visible.
    pub fn layout(&self, graph: &Graph, filter: &FilterSpec) -> LayoutResult {
        let visible = apply_filter(graph, filter);
        self.layout_visible(&visible)
    }

    /// Lays out every node of `graph`. Edges with an endpoint outside the
    /// graph are dropped.
    pub fn layout_visible(&self, graph: &Graph) -> LayoutResult {
        let nodes = unique_nodes(graph);
        let present: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
        let edges: Vec<Edge> = graph
            .edges
            .iter()
            .filter(|edge| {
                present.contains(edge.source.as_str()) && present.contains(edge.target.as_str())
            })
            .cloned()
            .collect();

        let weights = DependencyWeights::compute(graph);
        let mut domains = group_by_role(&nodes);
        let placed: Vec<PlacedDomain> = domains
            .iter_mut()
            .map(|groups| {
                order_domain(groups, &weights);
                place_domain(groups, &weights, &self.config)
            })
            .collect();

        let result = compose(placed, edges, &self.config);
        tracing::debug!(
            nodes = result.nodes.len(),
            edges = result.edges.len(),
            role_boxes = result.domains.iter().map(|d| d.roles.len()).sum::<usize>(),
            width = result.width,
            height = result.height,
            "computed layout"
        );
        result
    }
}

/// One-shot convenience over [`LayoutEngine`].
pub fn compute_layout(
    graph: &Graph,
    filter: &FilterSpec,
    config: &LayoutConfig,
) -> Result<LayoutResult, ConfigError> {
    Ok(LayoutEngine::new(config.clone())?.layout(graph, filter))
}

/// Keeps the last occurrence of each id, in input order.
fn unique_nodes(graph: &Graph) -> Vec<&FileNode> {
    let index = graph.node_index();
    if index.len() != graph.nodes.len() {
        tracing::warn!(
            duplicates = graph.nodes.len() - index.len(),
            "duplicate node ids; keeping the last occurrence of each"
        );
    }
    graph
        .nodes
        .iter()
        .enumerate()
        .filter(|(idx, node)| index.get(node.id.as_str()) == Some(idx))
        .map(|(_, node)| node)
        .collect()
}

fn place_domain(
    groups: &DomainGroups<'_>,
    weights: &DependencyWeights,
    config: &LayoutConfig,
) -> PlacedDomain {
    let domain = groups.domain;
    let sizes: Vec<(f32, f32)> = groups
        .groups
        .iter()
        .map(|group| role_box_size(group.members.len(), config))
        .collect();
    let packing = pack_rows(&sizes, config);

    let mut roles = Vec::with_capacity(groups.groups.len());
    let mut nodes = Vec::with_capacity(groups.member_count());
    for ((group, &(width, height)), &(x, y)) in groups
        .groups
        .iter()
        .zip(&sizes)
        .zip(&packing.positions)
    {
        let id = role_box_id(domain, group.role);
        for (idx, member) in group.members.iter().enumerate() {
            let (node_x, node_y) = node_offset(idx, config);
            nodes.push(PositionedNode {
                node: (*member).clone(),
                parent: id.clone(),
                domain,
                weight: weights.get(&member.id),
                x: node_x,
                y: node_y,
                width: config.node_width,
                height: config.node_height,
            });
        }
        roles.push(RoleBox {
            id,
            domain,
            role: group.role,
            label: group.role.as_str().to_string(),
            member_count: group.members.len(),
            weight: group.weight,
            x,
            y,
            width,
            height,
            members: group.members.iter().map(|node| node.id.clone()).collect(),
        });
    }

    tracing::debug!(
        domain = domain.as_str(),
        role_boxes = roles.len(),
        rows = packing.rows,
        width = packing.width,
        height = packing.height,
        "packed domain"
    );

    PlacedDomain {
        domain_box: DomainBox {
            id: domain_box_id(domain),
            domain,
            label: config.domain_labels.get(domain).to_string(),
            member_count: nodes.len(),
            x: 0.0,
            y: 0.0,
            width: packing.width,
            height: packing.height,
            roles,
        },
        nodes,
    }
}
