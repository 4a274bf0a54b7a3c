//! Adjacency and Laplacian construction tests.
//!
//! Covers the worked 3-note example, count semantics for duplicate links,
//! self-loops, out-of-range rejection, and the row-sum invariants
//! (adjacency row i sums to out-degree(i), Laplacian rows sum to zero).

use crate::error::CoreError;
use crate::matrix::{GraphEdge, GraphMatrixBuilder};
use crate::tests::test_data::three_note_graph;

#[test]
fn test_builder_assigns_first_seen_indices() {
    let (keys, _) = three_note_graph();
    let builder = GraphMatrixBuilder::new(keys);

    assert_eq!(builder.num_nodes(), 3);
    assert_eq!(builder.node_index("note1.md"), Some(0));
    assert_eq!(builder.node_index("note2.md"), Some(1));
    assert_eq!(builder.node_index("note3.md"), Some(2));
    assert_eq!(builder.node_index("missing.md"), None);
}

#[test]
fn test_adjacency_three_note_example() {
    let (keys, edges) = three_note_graph();
    let builder = GraphMatrixBuilder::new(keys);
    let matrix = builder.build_adjacency(&edges).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    assert_eq!(rows[0], vec![0.0, 1.0, 1.0]);
    assert_eq!(rows[1], vec![0.0, 0.0, 1.0]);
    assert_eq!(rows[2], vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_adjacency_duplicate_links_accumulate() {
    let builder = GraphMatrixBuilder::new(vec!["a.md".to_string(), "b.md".to_string()]);
    let edges = vec![GraphEdge { from: 0, to: 1 }, GraphEdge { from: 0, to: 1 }];

    let matrix = builder.build_adjacency(&edges).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    assert_eq!(rows[0], vec![0.0, 2.0]);
}

#[test]
fn test_adjacency_self_loop_counts() {
    let builder = GraphMatrixBuilder::new(vec!["a.md".to_string(), "b.md".to_string()]);
    let edges = vec![GraphEdge { from: 0, to: 0 }];

    let matrix = builder.build_adjacency(&edges).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    assert_eq!(rows[0][0], 1.0);
    // Out-degree includes the self-loop.
    let out_degree: f64 = rows[0].iter().sum();
    assert_eq!(out_degree, 1.0);
}

#[test]
fn test_adjacency_invalid_index_produces_no_matrix() {
    let builder = GraphMatrixBuilder::new(vec!["a.md".to_string(), "b.md".to_string()]);
    let edges = vec![GraphEdge { from: 0, to: 5 }];

    let result = builder.build_adjacency(&edges);
    match result {
        Err(CoreError::InvalidLinkIndex { from, to, max }) => {
            assert_eq!(from, 0);
            assert_eq!(to, 5);
            assert_eq!(max, 1);
        }
        other => panic!("expected InvalidLinkIndex, got {other:?}"),
    }
}

#[test]
fn test_laplacian_three_note_example() {
    let (keys, edges) = three_note_graph();
    let builder = GraphMatrixBuilder::new(keys);
    let matrix = builder.build_laplacian(&edges).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    assert_eq!(rows[0], vec![2.0, -1.0, -1.0]);
    assert_eq!(rows[1], vec![0.0, 1.0, -1.0]);
    assert_eq!(rows[2], vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_laplacian_self_loop() {
    let builder = GraphMatrixBuilder::new(vec!["a.md".to_string(), "b.md".to_string()]);
    let edges = vec![GraphEdge { from: 0, to: 0 }, GraphEdge { from: 0, to: 1 }];

    let matrix = builder.build_laplacian(&edges).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    // out-degree(0) = 2 including the self-loop; L[0][0] = 2 - 1.
    assert_eq!(rows[0], vec![1.0, -1.0]);
    assert_eq!(rows[1], vec![0.0, 0.0]);
}

#[test]
fn test_laplacian_isolated_nodes_are_zero_rows() {
    let builder = GraphMatrixBuilder::new(vec!["a.md".to_string(), "b.md".to_string()]);

    let matrix = builder.build_laplacian(&[]).expect("build failed");
    let rows = builder.to_dense_rows(&matrix);

    assert_eq!(rows[0], vec![0.0, 0.0]);
    assert_eq!(rows[1], vec![0.0, 0.0]);
}

#[test]
fn test_row_sum_invariants() {
    crate::tests::init();

    let keys: Vec<String> = (0..6).map(|i| format!("n{i}.md")).collect();
    let edges = vec![
        GraphEdge { from: 0, to: 1 },
        GraphEdge { from: 0, to: 1 },
        GraphEdge { from: 0, to: 5 },
        GraphEdge { from: 2, to: 2 },
        GraphEdge { from: 3, to: 0 },
        GraphEdge { from: 5, to: 4 },
        GraphEdge { from: 5, to: 4 },
        GraphEdge { from: 5, to: 3 },
    ];
    let builder = GraphMatrixBuilder::new(keys);

    let adjacency = builder.build_adjacency(&edges).expect("build failed");
    let adj_rows = builder.to_dense_rows(&adjacency);
    let expected_out_degrees = [3.0, 0.0, 1.0, 1.0, 0.0, 3.0];
    for (i, row) in adj_rows.iter().enumerate() {
        let sum: f64 = row.iter().sum();
        assert_eq!(sum, expected_out_degrees[i], "row {i} out-degree");
    }

    let laplacian = builder.laplacian_of(&adjacency);
    for (i, row) in builder.to_dense_rows(&laplacian).iter().enumerate() {
        let sum: f64 = row.iter().sum();
        assert_eq!(sum, 0.0, "Laplacian row {i} must sum to zero");
    }
}
