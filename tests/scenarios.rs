//! 端到端场景测试：构建图、运行算法、检查着色 / 距离 / 生成树

use adjgraph::algorithm::{Dijkstra, DisjointSet, Kruskal, Traversal};
use adjgraph::config::GraphConfig;
use adjgraph::error::{Error, PolicyWarning};
use adjgraph::graph::Graph;
use adjgraph::import::{read_matrix_file, AdjacencyMatrix};
use adjgraph::types::{Color, DfsGuard, INFINITY};
use std::io::Write;
use tempfile::NamedTempFile;

// ==================== Helper ====================

fn undirected_abcd() -> Graph<&'static str> {
    let mut g = Graph::with_settings(false, true);
    for v in ["A", "B", "C", "D"] {
        g.add_vertex(v).unwrap();
    }
    g.put_edge(&"A", &"B", Some(1)).unwrap();
    g.put_edge(&"B", &"C", Some(2)).unwrap();
    g.put_edge(&"A", &"C", Some(4)).unwrap();
    g.put_edge(&"C", &"D", Some(3)).unwrap();
    g
}

fn directed_path() -> Graph<&'static str> {
    let mut g = Graph::with_settings(true, false);
    for v in ["A", "B", "C", "D"] {
        g.add_vertex(v).unwrap();
    }
    g.put_edge(&"A", &"B", None).unwrap();
    g.put_edge(&"B", &"C", None).unwrap();
    g.put_edge(&"C", &"D", None).unwrap();
    g
}

// ==================== Graph Tests ====================

#[test]
fn test_undirected_neighborhood_is_symmetric() {
    let g = undirected_abcd();
    assert_eq!(g.neighborhood(&"A").unwrap(), vec![&"B", &"C"]);
    assert_eq!(g.neighborhood(&"C").unwrap(), vec![&"B", &"A", &"D"]);
    assert_eq!(g.neighborhood(&"D").unwrap(), vec![&"C"]);
}

#[test]
fn test_directed_neighborhood_follows_edges() {
    let g = directed_path();
    assert_eq!(g.neighborhood(&"A").unwrap(), vec![&"B"]);
    assert!(g.neighborhood(&"D").unwrap().is_empty());
    assert!(matches!(g.neighborhood(&"Z"), Err(Error::VertexNotFound(_))));
}

#[test]
fn test_unweighted_graph_discards_weight() {
    let mut g = directed_path();
    let warning = g.put_edge(&"D", &"A", Some(9)).unwrap();

    assert_eq!(warning, Some(PolicyWarning::WeightDiscarded { weight: 9 }));
    assert!(g.contains_edge(&"D", &"A", None));
    assert!(g.edges().all(|e| e.weight().is_none()));
}

#[test]
fn test_edge_to_missing_vertex_is_rejected() {
    let mut g = directed_path();
    assert!(matches!(g.put_edge(&"A", &"Z", None), Err(Error::VertexNotFound(_))));
    assert_eq!(g.edge_count(), 3);
}

// ==================== Traversal Tests ====================

#[test]
fn test_bfs_directed_path_reaches_everything() {
    let g = directed_path();
    let result = Traversal::new(&g).bfs(&"A").unwrap();

    assert!(result.colors.iter().all(|c| *c == Color::Black));
    assert_eq!(result.discovery_order, vec!["A", "B", "C", "D"]);
    assert_eq!(result.predecessors, vec![None, Some("A"), Some("B"), Some("C")]);
}

#[test]
fn test_bfs_from_middle_leaves_upstream_white() {
    let g = directed_path();
    let result = Traversal::new(&g).bfs(&"C").unwrap();

    assert_eq!(result.color_of(&"A"), Some(Color::White));
    assert_eq!(result.color_of(&"B"), Some(Color::White));
    assert_eq!(result.color_of(&"D"), Some(Color::Black));
    assert_eq!(result.finished(), vec![&"C", &"D"]);
}

#[test]
fn test_dfs_finishes_every_vertex() {
    let mut g = directed_path();
    g.add_vertex("E").unwrap();
    let result = Traversal::new(&g).dfs();

    assert!(result.colors.iter().all(|c| *c == Color::Black));
    assert_eq!(result.discovery_order, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(result.predecessor_of(&"E"), None);
    assert_eq!(result.predecessor_of(&"D"), Some(&"C"));
}

#[test]
fn test_dfs_guards_agree_on_directed_path() {
    let g = directed_path();
    let unvisited = Traversal::new(&g).dfs_with(DfsGuard::Unvisited);
    let finished = Traversal::new(&g).dfs_with(DfsGuard::Finished);
    assert_eq!(unvisited.colors, finished.colors);
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_dijkstra_unweighted_path() {
    let g = directed_path();
    for paths in [
        Dijkstra::new(&g).run(&"A").unwrap(),
        Dijkstra::new(&g).run_with_heap(&"A").unwrap(),
    ] {
        assert_eq!(paths.distances, vec![0, 1, 2, 3]);
        assert_eq!(paths.predecessors, vec![None, Some("A"), Some("B"), Some("C")]);
        assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
    }
}

#[test]
fn test_dijkstra_unreachable_keeps_sentinel() {
    let g = directed_path();
    let paths = Dijkstra::new(&g).run(&"B").unwrap();

    assert_eq!(paths.distance_to(&"A"), Some(INFINITY));
    assert!(!paths.is_reachable(&"A"));
    assert_eq!(paths.predecessor_of(&"A"), None);
    assert_eq!(paths.path_to(&"A"), None);
}

#[test]
fn test_dijkstra_prefers_lighter_detour() {
    let g = undirected_abcd();
    let paths = Dijkstra::new(&g).run(&"A").unwrap();

    assert_eq!(paths.distance_to(&"C"), Some(3));
    assert_eq!(paths.distance_to(&"D"), Some(6));
    assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut g = undirected_abcd();
    g.put_edge(&"B", &"D", Some(-2)).unwrap();
    assert!(matches!(
        Dijkstra::new(&g).run(&"A"),
        Err(Error::NegativeWeight { weight: -2, .. })
    ));
}

// ==================== Union-Find / MST Tests ====================

#[test]
fn test_kruskal_scenario() {
    let g = undirected_abcd();
    let forest = Kruskal::new(&g).run().unwrap();

    assert_eq!(forest.total_weight, 6);
    assert_eq!(forest.edges.len(), 3);
    let chosen: Vec<(&str, &str, Option<i64>)> = forest
        .edges
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    assert_eq!(
        chosen,
        vec![("A", "B", Some(1)), ("B", "C", Some(2)), ("C", "D", Some(3))]
    );
}

#[test]
fn test_disjoint_set_transitivity() {
    let mut sets = DisjointSet::new();
    for x in 1..=5 {
        sets.make_set(x);
    }
    assert!(sets.union(&1, &2).unwrap());
    assert!(sets.union(&2, &3).unwrap());
    assert!(!sets.union(&1, &3).unwrap());

    assert_eq!(sets.find(&1).unwrap(), sets.find(&3).unwrap());
    assert!(!sets.same_set(&1, &4).unwrap());
    assert_eq!(sets.set_count(), 3);
    assert!(matches!(sets.find(&9), Err(Error::NotFound(_))));
}

// ==================== Import Tests ====================

#[test]
fn test_matrix_file_to_mst() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "4\n0 1 4 0\n1 0 2 0\n4 2 0 3\n0 0 3 0\n").unwrap();

    let g = Graph::load_matrix_file(file.path(), GraphConfig::undirected_weighted()).unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 8);

    let forest = Kruskal::new(&g).run().unwrap();
    assert_eq!(forest.total_weight, 6);
    assert!(forest.is_spanning_tree());

    let matrix = read_matrix_file(file.path()).unwrap();
    assert_eq!(g.to_matrix().unwrap(), matrix);
}

#[test]
fn test_malformed_matrix_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "3\n0 1\n1 0\n").unwrap();
    assert!(matches!(
        Graph::load_matrix_file(file.path(), GraphConfig::default()),
        Err(Error::InvalidInput(_))
    ));
    assert!(AdjacencyMatrix::parse("2\n0 1\n1 z").is_err());
}
