#![allow(dead_code)]

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for hampath, isolated from any user configuration
pub fn hampath() -> Command {
    let mut cmd = cargo_bin_cmd!("hampath");
    cmd.env(
        "HAMPATH_CONFIG_DIR",
        std::env::temp_dir().join("hampath-tests-no-config"),
    )
    .env_remove("HAMPATH_CONFIG")
    .env_remove("HAMPATH_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write graph file");
    path
}

pub const TRIANGLE: &str = "[[0,1,1],[1,0,1],[1,1,0]]";

pub const SQUARE: &str = "0 1 0 1\n1 0 1 0\n0 1 0 1\n1 0 1 0\n";

pub const DIRECTED_CHAIN: &str = "[[0,1,0,0],[0,0,1,1],[0,0,0,1],[0,0,0,0]]";

pub const NO_PATH: &str = "[[0,1,0],[1,0,0],[0,0,0]]";

pub const PENTAGON: &str = "[[0,1,0,0,1],[1,0,1,0,0],[0,1,0,1,0],[0,0,1,0,1],[1,0,0,1,0]]";

/// Complete graph on `n - 1` vertices plus one isolated vertex, as JSON rows.
/// No Hamiltonian path exists and the search has to try every ordering.
pub fn hard_no_path_json(n: usize) -> String {
    let rows: Vec<String> = (0..n)
        .map(|i| {
            let cells: Vec<&str> = (0..n)
                .map(|j| if i != j && i < n - 1 && j < n - 1 { "1" } else { "0" })
                .collect();
            format!("[{}]", cells.join(","))
        })
        .collect();
    format!("[{}]", rows.join(","))
}
