use super::weights::DependencyWeights;
use crate::ir::{Category, Domain, FileNode, Role};

/// Maps a semantic category onto one of the two domains.
///
/// Only backend and infrastructure files go to the secondary domain; shared,
/// test, config, folder and unknown files fall into the primary one.
pub fn classify_domain(category: Category) -> Domain {
    match category {
        Category::Frontend => Domain::Frontend,
        Category::Backend | Category::Infrastructure => Domain::Backend,
        Category::Shared
        | Category::Test
        | Category::Config
        | Category::Folder
        | Category::Unknown => Domain::Frontend,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleGroup<'a> {
    pub role: Role,
    pub members: Vec<&'a FileNode>,
    /// Sum of member weights, filled in by [`order_domain`].
    pub weight: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainGroups<'a> {
    pub domain: Domain,
    pub groups: Vec<RoleGroup<'a>>,
}

impl DomainGroups<'_> {
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|group| group.members.len()).sum()
    }
}

/// Partitions nodes by domain, then by role. Groups appear in the order their
/// role is first seen and members keep input order; empty groups never exist.
pub fn group_by_role<'a>(nodes: &[&'a FileNode]) -> Vec<DomainGroups<'a>> {
    let mut domains: Vec<DomainGroups<'a>> = Domain::ALL
        .iter()
        .map(|domain| DomainGroups {
            domain: *domain,
            groups: Vec::new(),
        })
        .collect();

    for &node in nodes {
        let domain = classify_domain(node.category);
        let Some(bucket) = domains.iter_mut().find(|d| d.domain == domain) else {
            continue;
        };
        match bucket.groups.iter_mut().find(|group| group.role == node.role) {
            Some(group) => group.members.push(node),
            None => bucket.groups.push(RoleGroup {
                role: node.role,
                members: vec![node],
                weight: 0,
            }),
        }
    }

    domains
}

/// Sorts members inside each group, then the groups themselves, both by
/// descending weight. Both sorts are stable, so ties keep input order.
pub fn order_domain(domain: &mut DomainGroups<'_>, weights: &DependencyWeights) {
    for group in &mut domain.groups {
        group
            .members
            .sort_by(|a, b| weights.get(&b.id).cmp(&weights.get(&a.id)));
        group.weight = group.members.iter().map(|node| weights.get(&node.id)).sum();
    }
    domain.groups.sort_by(|a, b| b.weight.cmp(&a.weight));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Graph;

    #[test]
    fn classifier_defaults_to_primary() {
        assert_eq!(classify_domain(Category::Frontend), Domain::Frontend);
        assert_eq!(classify_domain(Category::Backend), Domain::Backend);
        assert_eq!(classify_domain(Category::Infrastructure), Domain::Backend);
        for category in [
            Category::Shared,
            Category::Test,
            Category::Config,
            Category::Folder,
            Category::Unknown,
        ] {
            assert_eq!(classify_domain(category), Domain::Frontend);
        }
    }

    fn file(id: &str, category: Category, role: Role) -> FileNode {
        FileNode::new(id, format!("{id}.ts"))
            .with_category(category)
            .with_role(role)
    }

    fn graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(file("ui", Category::Frontend, Role::Component));
        graph.add_node(file("api", Category::Backend, Role::Route));
        graph.add_node(file("fmt", Category::Shared, Role::Utility));
        graph.add_node(file("btn", Category::Frontend, Role::Component));
        graph.add_node(file("db", Category::Infrastructure, Role::Model));
        graph.add_node(file("date", Category::Frontend, Role::Utility));
        graph
    }

    #[test]
    fn groups_follow_first_appearance() {
        let graph = graph();
        let nodes: Vec<&FileNode> = graph.nodes.iter().collect();
        let domains = group_by_role(&nodes);
        assert_eq!(domains.len(), 2);

        let front = &domains[0];
        assert_eq!(front.domain, Domain::Frontend);
        let roles: Vec<Role> = front.groups.iter().map(|g| g.role).collect();
        assert_eq!(roles, vec![Role::Component, Role::Utility]);
        let components: Vec<&str> = front.groups[0]
            .members
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(components, vec!["ui", "btn"]);
        assert_eq!(front.member_count(), 4);

        let back = &domains[1];
        let roles: Vec<Role> = back.groups.iter().map(|g| g.role).collect();
        assert_eq!(roles, vec![Role::Route, Role::Model]);
    }

    #[test]
    fn empty_input_yields_two_empty_domains() {
        let domains = group_by_role(&[]);
        assert_eq!(domains.len(), 2);
        assert!(domains.iter().all(|d| d.groups.is_empty()));
    }

    #[test]
    fn ordering_is_descending_and_stable() {
        let mut graph = graph();
        graph.add_edge("btn", "date");
        graph.add_edge("fmt", "date");
        graph.add_edge("ui", "btn");
        let weights = DependencyWeights::compute(&graph);
        let nodes: Vec<&FileNode> = graph.nodes.iter().collect();
        let mut domains = group_by_role(&nodes);
        order_domain(&mut domains[0], &weights);

        let front = &domains[0];
        // utility: fmt=1, date=2 -> sum 3; component: ui=1, btn=2 -> sum 3
        let roles: Vec<Role> = front.groups.iter().map(|g| g.role).collect();
        assert_eq!(roles, vec![Role::Component, Role::Utility]);
        let members: Vec<Vec<&str>> = front
            .groups
            .iter()
            .map(|g| g.members.iter().map(|n| n.id.as_str()).collect())
            .collect();
        assert_eq!(members[0], vec!["btn", "ui"]);
        assert_eq!(members[1], vec!["date", "fmt"]);
        assert_eq!(front.groups[0].weight, 3);
        assert_eq!(front.groups[1].weight, 3);
    }

    #[test]
    fn heavier_group_moves_first() {
        let mut graph = graph();
        graph.add_edge("fmt", "date");
        let weights = DependencyWeights::compute(&graph);
        let nodes: Vec<&FileNode> = graph.nodes.iter().collect();
        let mut domains = group_by_role(&nodes);
        order_domain(&mut domains[0], &weights);
        assert_eq!(domains[0].groups[0].role, Role::Utility);
        assert_eq!(domains[0].groups[0].weight, 2);
        assert_eq!(domains[0].groups[1].weight, 0);
    }
}
