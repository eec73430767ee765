//! Integration tests for `hampath find`

mod support;

use predicates::prelude::*;
use support::{
    hampath, hard_no_path_json, write_graph, DIRECTED_CHAIN, NO_PATH, PENTAGON, SQUARE, TRIANGLE,
};
use tempfile::tempdir;

fn find_json(args: &[&str], graph: &str) -> serde_json::Value {
    let output = hampath()
        .args(["--format", "json", "find"])
        .args(args)
        .write_stdin(graph)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Reference graphs
// ============================================================================

#[test]
fn test_find_triangle_from_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "triangle.json", TRIANGLE);

    hampath()
        .arg("find")
        .arg(&graph)
        .assert()
        .success()
        .stdout("Path found: [0, 1, 2]\n");
}

#[test]
fn test_find_square_from_text_rows() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "square.txt", SQUARE);

    hampath()
        .arg("find")
        .arg(&graph)
        .assert()
        .success()
        .stdout("Path found: [0, 1, 2, 3]\n");
}

#[test]
fn test_find_directed_chain() {
    let json = find_json(&["--directed"], DIRECTED_CHAIN);
    assert_eq!(json["found"], true);
    assert_eq!(json["directed"], true);
    assert_eq!(json["path"], serde_json::json!([0, 1, 2, 3]));
}

#[test]
fn test_find_no_path_is_not_an_error() {
    hampath()
        .arg("find")
        .write_stdin(NO_PATH)
        .assert()
        .success()
        .stdout("Path found: None\n");
}

#[test]
fn test_find_pentagon() {
    let json = find_json(&[], PENTAGON);
    assert_eq!(json["path"], serde_json::json!([0, 1, 2, 3, 4]));
    assert_eq!(json["vertices"], 5);
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_find_reads_stdin_with_dash() {
    hampath()
        .args(["find", "-"])
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout("Path found: [0, 1, 2]\n");
}

#[test]
fn test_find_uses_directed_hint_from_document() {
    // Reversed chain: only the hint makes this directed
    let doc = r#"{"directed": true, "matrix": [[0,0,0],[1,0,0],[0,1,0]]}"#;
    let json = find_json(&[], doc);
    assert_eq!(json["directed"], true);
    assert_eq!(json["path"], serde_json::json!([2, 1, 0]));
}

#[test]
fn test_find_flag_overrides_document_hint() {
    let doc = r#"{"directed": true, "matrix": [[0,0,0],[1,0,0],[0,1,0]]}"#;
    let json = find_json(&["--undirected"], doc);
    assert_eq!(json["directed"], false);
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_find_asymmetric_matrix_undirected() {
    let json = find_json(&[], "[[0,0,0],[1,0,0],[0,1,0]]");
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_find_empty_graph() {
    let json = find_json(&[], "[]");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!([]));
    assert_eq!(json["vertices"], 0);
}

#[test]
fn test_find_single_vertex() {
    hampath()
        .arg("find")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout("Path found: [0]\n");
}

// ============================================================================
// Output formats and flags
// ============================================================================

#[test]
fn test_find_json_includes_stats() {
    let json = find_json(&[], NO_PATH);
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert_eq!(json["stats"]["starts_tried"], 3);
    assert_eq!(json["stats"]["nodes_expanded"], 5);
}

#[test]
fn test_find_records() {
    hampath()
        .args(["--format", "records", "find"])
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H hampath=1 records=1 mode=find vertices=3 directed=false found=true\nP 0 1 2\n",
        ))
        .stdout(predicate::str::contains("S nodes_expanded=3 starts_tried=1"));
}

#[test]
fn test_find_dot() {
    hampath()
        .args(["--format", "dot", "find", "--directed"])
        .write_stdin(DIRECTED_CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph hamiltonian {"))
        .stdout(predicate::str::contains("0 -> 1 [color=red, penwidth=3];"))
        .stdout(predicate::str::contains("1 -> 3 [color=lightgray];"));
}

#[test]
fn test_find_verbose_shows_arrows_and_stats() {
    hampath()
        .args(["--verbose", "find"])
        .write_stdin(PENTAGON)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 -> 3 -> 4"))
        .stdout(predicate::str::contains("5 vertices, undirected"));
}

#[test]
fn test_find_require_path_fails_without_path() {
    hampath()
        .args(["find", "--require-path"])
        .write_stdin(NO_PATH)
        .assert()
        .code(1)
        .stdout("Path found: None\n")
        .stderr(predicate::str::contains("no Hamiltonian path exists"));
}

#[test]
fn test_find_require_path_succeeds_with_path() {
    hampath()
        .args(["find", "--require-path"])
        .write_stdin(TRIANGLE)
        .assert()
        .success();
}

#[test]
fn test_find_timeout_aborts_hard_instance() {
    hampath()
        .args(["--format", "json", "find", "--timeout-ms", "0"])
        .write_stdin(hard_no_path_json(13))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"search_aborted\""))
        .stderr(predicate::str::contains("deadline exceeded"));
}
