use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn seedweave() -> Command {
    cargo_bin_cmd!("seedweave")
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, json).expect("write graph document");
    path
}

/// Complete graph on N0..N{n-1}, all edges typed "linked"
pub fn complete_graph_json(n: usize) -> String {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(format!(
                r#"{{"source": "N{}", "target": "N{}", "type": "linked"}}"#,
                i, j
            ));
        }
    }
    format!(r#"{{"edges": [{}]}}"#, edges.join(", "))
}

/// Star around "hub" with two relationship types and one labelled leaf
#[allow(dead_code)]
pub const STAR_GRAPH: &str = r#"{
    "nodes": [{"id": "hub", "label": "Center"}],
    "edges": [
        {"source": "hub", "target": "a", "type": "cites"},
        {"source": "hub", "target": "b", "type": "cites"},
        {"source": "hub", "target": "c", "type": "extends"},
        {"source": "hub", "target": "d", "type": "extends"}
    ]
}"#;
