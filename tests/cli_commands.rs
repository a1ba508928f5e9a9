//! CLI command tests: edge-list loading and command output.

use std::io::Write;

use tempfile::NamedTempFile;

use label_graph::cli::{commands, CliError};

// ==================== Helpers ====================

fn edge_list(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE: &str = "# sample graph\n1 3\n3 1\n5 1\n1 6\n7\n";

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

// ==================== Commands ====================

#[test]
fn test_info_undirected() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    commands::cmd_info(file.path(), false, &mut out, false).unwrap();
    assert_eq!(output(out), "Kind: undirected\nNodes: 5\nEdges: 3\n");
}

#[test]
fn test_info_directed_json() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    commands::cmd_info(file.path(), true, &mut out, true).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "directed");
    assert_eq!(value["nodes"], 5);
    assert_eq!(value["edges"], 4);
}

#[test]
fn test_nodes_sorted() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    commands::cmd_nodes(file.path(), false, &mut out, false).unwrap();
    assert_eq!(output(out), "1\n3\n5\n6\n7\n");
}

#[test]
fn test_edges_undirected_are_canonical() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    commands::cmd_edges(file.path(), false, &mut out, false).unwrap();
    assert_eq!(output(out), "1 3\n1 5\n1 6\n");
}

#[test]
fn test_edges_directed_json() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    commands::cmd_edges(file.path(), true, &mut out, true).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([["1", "3"], ["1", "6"], ["3", "1"], ["5", "1"]])
    );
}

#[test]
fn test_neighbors_and_predecessors() {
    let file = edge_list(SAMPLE);

    let mut out = Vec::new();
    commands::cmd_neighbors(file.path(), false, "1", &mut out, false).unwrap();
    assert_eq!(output(out), "3\n5\n6\n");

    let mut out = Vec::new();
    commands::cmd_neighbors(file.path(), true, "1", &mut out, false).unwrap();
    assert_eq!(output(out), "3\n6\n");

    let mut out = Vec::new();
    commands::cmd_predecessors(file.path(), true, "1", &mut out, false).unwrap();
    assert_eq!(output(out), "3\n5\n");
}

#[test]
fn test_has_edge() {
    let file = edge_list(SAMPLE);

    let mut out = Vec::new();
    commands::cmd_has_edge(file.path(), false, "6", "1", &mut out, false).unwrap();
    assert_eq!(output(out), "true\n");

    let mut out = Vec::new();
    commands::cmd_has_edge(file.path(), true, "6", "1", &mut out, true).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["present"], false);

    let mut out = Vec::new();
    commands::cmd_has_edge(file.path(), true, "nope", "1", &mut out, false).unwrap();
    assert_eq!(output(out), "false\n");
}

// ==================== Errors ====================

#[test]
fn test_missing_node_exit_code() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    let err = commands::cmd_neighbors(file.path(), false, "42", &mut out, false).unwrap_err();
    assert!(matches!(err, CliError::Graph(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_predecessors_requires_directed() {
    let file = edge_list(SAMPLE);
    let mut out = Vec::new();
    let err = commands::cmd_predecessors(file.path(), false, "1", &mut out, false).unwrap_err();
    assert!(matches!(err, CliError::DirectedOnly(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_parse_error_exit_code() {
    let file = edge_list("1 2\n1 2 3\n");
    let mut out = Vec::new();
    let err = commands::cmd_info(file.path(), false, &mut out, false).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_undirected_self_loop_in_file() {
    let file = edge_list("1 1\n");
    let mut out = Vec::new();
    let err = commands::cmd_info(file.path(), false, &mut out, false).unwrap_err();
    assert_eq!(err.exit_code(), 3);

    // The same file is fine as a directed graph.
    let mut out = Vec::new();
    commands::cmd_info(file.path(), true, &mut out, false).unwrap();
    assert_eq!(output(out), "Kind: directed\nNodes: 1\nEdges: 1\n");
}

#[test]
fn test_missing_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let err = commands::cmd_info(&dir.path().join("absent.txt"), false, &mut out, false)
        .unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.exit_code(), 1);
}
