mod common;

use common::assert_layout_invariants;
use depgraph_layout::{
    Category, FileNode, FilterSpec, Graph, LayoutConfig, LayoutEngine, Role, Selection,
    apply_filter,
};
use proptest::prelude::*;

const CATEGORIES: [Category; 8] = [
    Category::Frontend,
    Category::Backend,
    Category::Shared,
    Category::Infrastructure,
    Category::Test,
    Category::Config,
    Category::Unknown,
    Category::Folder,
];

const LANGUAGES: [&str; 3] = ["typescript", "python", "rust"];

const SEARCHES: [&str; 5] = ["", "a", "src", "7", "LIB"];

fn node_strategy() -> impl Strategy<Value = (usize, usize, usize, bool)> {
    (
        0..CATEGORIES.len(),
        0..Role::ALL.len(),
        0..LANGUAGES.len(),
        any::<bool>(),
    )
}

/// Random graphs, including edges to ids that do not exist.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (
        prop::collection::vec(node_strategy(), 0..60),
        prop::collection::vec((0usize..70, 0usize..70), 0..150),
    )
        .prop_map(|(specs, edges)| {
            let mut graph = Graph::new();
            for (idx, (category, role, language, in_lib)) in specs.into_iter().enumerate() {
                let dir = if in_lib { "lib" } else { "src" };
                graph.add_node(
                    FileNode::new(format!("n{idx}"), format!("{dir}/file{idx}.x"))
                        .with_category(CATEGORIES[category])
                        .with_role(Role::ALL[role])
                        .with_language(LANGUAGES[language]),
                );
            }
            for (source, target) in edges {
                graph.add_edge(&format!("n{source}"), &format!("n{target}"));
            }
            graph
        })
}

fn filter_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        0..SEARCHES.len(),
        prop::option::of(0..LANGUAGES.len()),
        prop::option::of(0..Role::ALL.len()),
    )
        .prop_map(|(search, language, role)| FilterSpec {
            search: SEARCHES[search].to_string(),
            language: language
                .map_or(Selection::All, |l| Selection::Only(LANGUAGES[l].to_string())),
            role: role.map_or(Selection::All, |r| Selection::Only(Role::ALL[r])),
        })
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (1usize..5, prop::sample::select(vec![400.0f32, 800.0, 1200.0, 2400.0])).prop_map(
        |(columns, max_row_width)| LayoutConfig {
            columns,
            max_row_width,
            ..LayoutConfig::default()
        },
    )
}

proptest! {
    #[test]
    fn prop_layout_invariants_hold(
        graph in graph_strategy(),
        filter in filter_strategy(),
        config in config_strategy(),
    ) {
        let engine = LayoutEngine::new(config.clone()).unwrap();
        let result = engine.layout(&graph, &filter);
        assert_layout_invariants(&result, &config);

        let visible = apply_filter(&graph, &filter);
        prop_assert_eq!(result.nodes.len(), visible.nodes.len());
        prop_assert_eq!(&result.edges, &visible.edges);
    }

    #[test]
    fn prop_layout_is_deterministic(graph in graph_strategy(), filter in filter_strategy()) {
        let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();
        prop_assert_eq!(engine.layout(&graph, &filter), engine.layout(&graph, &filter));
    }

    #[test]
    fn prop_filter_is_idempotent(graph in graph_strategy(), filter in filter_strategy()) {
        let once = apply_filter(&graph, &filter);
        let twice = apply_filter(&once, &filter);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_every_edge_is_subset_of_input(graph in graph_strategy(), filter in filter_strategy()) {
        let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();
        let result = engine.layout(&graph, &filter);
        for edge in &result.edges {
            prop_assert!(graph.edges.contains(edge));
            prop_assert!(result.node(&edge.source).is_some());
            prop_assert!(result.node(&edge.target).is_some());
        }
    }
}
