//! Command implementations for seedweave

pub mod dispatch;
mod inspect;
mod sample;

use std::path::Path;
use std::time::Instant;

use seedweave_core::error::{Result, SeedweaveError};
use seedweave_core::{trace_time, MemoryGraph};

/// Load a graph document. Unreadable files are reported as data errors.
pub(crate) fn load_graph(path: &Path) -> Result<MemoryGraph> {
    let start = Instant::now();
    let graph = MemoryGraph::load(path).map_err(|e| match e {
        SeedweaveError::Io(err) => SeedweaveError::InvalidGraph {
            reason: format!("cannot read {}: {}", path.display(), err),
        },
        other => other,
    })?;
    trace_time!(
        start,
        "load_graph",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );
    Ok(graph)
}
