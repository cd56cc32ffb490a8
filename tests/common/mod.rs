#![allow(dead_code)]

use depgraph_layout::layout::Rect;
use depgraph_layout::{LayoutConfig, LayoutResult};
use std::collections::{HashMap, HashSet};

/// Area of a box left for children once header and padding are taken out.
fn content_area(width: f32, height: f32, padding: f32, header: f32) -> Rect {
    Rect::new(
        padding,
        header,
        width - 2.0 * padding,
        height - header - padding,
    )
}

/// Checks the structural guarantees every layout must satisfy.
pub fn assert_layout_invariants(result: &LayoutResult, config: &LayoutConfig) {
    assert_eq!(result.domains.len(), 2, "exactly two domains");
    assert!(result.domains[0].domain.is_primary());
    assert_eq!((result.domains[0].x, result.domains[0].y), (0.0, 0.0));
    assert!(
        !result.domains[0]
            .rect()
            .intersects(&result.domains[1].rect()),
        "domains overlap"
    );

    let mut membership: HashMap<&str, usize> = HashMap::new();
    for domain in &result.domains {
        assert!(domain.width >= config.min_domain_width);
        assert!(domain.height >= config.min_domain_height);
        let area = content_area(
            domain.width,
            domain.height,
            config.domain_padding,
            config.domain_header_height,
        );
        for role in &domain.roles {
            assert!(role.member_count > 0, "empty role box {}", role.id);
            assert_eq!(role.member_count, role.members.len());
            assert!(area.contains(&role.rect()), "{} escapes {}", role.id, domain.id);
            for member in &role.members {
                *membership.entry(member.as_str()).or_default() += 1;
            }
        }
        for (i, a) in domain.roles.iter().enumerate() {
            for b in &domain.roles[i + 1..] {
                assert!(
                    !domain
                        .role_absolute_rect(a)
                        .intersects(&domain.role_absolute_rect(b)),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
        let members: usize = domain.roles.iter().map(|r| r.member_count).sum();
        assert_eq!(domain.member_count, members);
    }

    assert_eq!(membership.len(), result.nodes.len());
    for node in &result.nodes {
        assert_eq!(membership.get(node.id()), Some(&1), "{} not in one box", node.id());
        let (domain, role) = result
            .role_box(&node.parent)
            .unwrap_or_else(|| panic!("missing parent {}", node.parent));
        assert_eq!(domain.domain, node.domain);
        let area = content_area(
            role.width,
            role.height,
            config.role_padding,
            config.role_header_height,
        );
        assert!(area.contains(&node.rect()), "{} escapes {}", node.id(), role.id);
    }

    let ids: HashSet<&str> = result.nodes.iter().map(|n| n.id()).collect();
    for edge in &result.edges {
        assert!(ids.contains(edge.source.as_str()), "dangling source {}", edge.source);
        assert!(ids.contains(edge.target.as_str()), "dangling target {}", edge.target);
    }

    for domain in &result.domains {
        for role in &domain.roles {
            let weights: Vec<usize> = role
                .members
                .iter()
                .map(|id| result.node(id).map(|n| n.weight).unwrap_or(0))
                .collect();
            assert!(
                weights.windows(2).all(|w| w[0] >= w[1]),
                "{} members out of weight order: {weights:?}",
                role.id
            );
        }
        let sums: Vec<usize> = domain.roles.iter().map(|r| r.weight).collect();
        assert!(sums.windows(2).all(|w| w[0] >= w[1]), "role order: {sums:?}");
    }
}
