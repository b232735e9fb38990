use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Node identifier as handed out by the graph source.
pub type NodeId = String;

/// One adjacency entry returned by [`GraphSource::get_neighbors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub target_id: NodeId,
    pub relationship_type: String,
}

impl Neighbor {
    pub fn new(target_id: impl Into<NodeId>, relationship_type: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            relationship_type: relationship_type.into(),
        }
    }
}

/// Trait for providing graph adjacency to the expansion engine.
///
/// `get_neighbors` is the engine's only suspension point: it is awaited to
/// completion before the next pop is selected, and calls never overlap.
/// Implementations must enumerate neighbors in a stable order for runs to be
/// reproducible. Failures are propagated out of the run unchanged; retrying
/// is the implementation's business.
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Node payload returned by [`GraphSource::get_node`].
    type Node: Send;

    async fn get_neighbors(&self, id: &str) -> Result<Vec<Neighbor>>;

    fn get_degree(&self, id: &str) -> usize;

    /// Notification that the engine sampled `source -> target`.
    fn add_edge(&self, source: &str, target: &str, relationship_type: &str);

    async fn get_node(&self, id: &str) -> Result<Option<Self::Node>>;
}
