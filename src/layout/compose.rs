use super::types::{DomainBox, LayoutResult, PositionedNode};
use crate::config::LayoutConfig;
use crate::ir::{Domain, Edge};

/// A domain box with its role boxes and nodes already placed, positioned at
/// the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDomain {
    pub domain_box: DomainBox,
    pub nodes: Vec<PositionedNode>,
}

/// Puts the primary domain at the origin and the secondary one to its right,
/// `domain_gap_x` apart and top-aligned.
pub fn compose(
    mut placed: Vec<PlacedDomain>,
    edges: Vec<Edge>,
    config: &LayoutConfig,
) -> LayoutResult {
    placed.sort_by_key(|domain| domain.domain_box.domain);

    let mut domains = Vec::with_capacity(placed.len());
    let mut nodes = Vec::new();
    let mut x = 0.0f32;
    let mut height = 0.0f32;
    for PlacedDomain {
        mut domain_box,
        nodes: domain_nodes,
    } in placed
    {
        domain_box.x = x;
        domain_box.y = 0.0;
        x += domain_box.width + config.domain_gap_x;
        height = height.max(domain_box.height);
        domains.push(domain_box);
        nodes.extend(domain_nodes);
    }
    let width = domains.last().map(|d| d.x + d.width).unwrap_or(0.0);

    debug_assert!(
        domains.len() == Domain::ALL.len(),
        "layout always carries both domains"
    );

    LayoutResult {
        domains,
        nodes,
        edges,
        width,
        height,
    }
}
