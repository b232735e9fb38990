use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::source::{GraphSource, Neighbor, NodeId};
use crate::error::{Result, SeedweaveError};

/// Relationship type used when a document edge carries none.
pub const DEFAULT_RELATIONSHIP: &str = "related";

/// Metadata about a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub id: NodeId,
    pub label: Option<String>,
}

/// An edge reported back to the graph through [`GraphSource::add_edge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub relationship_type: String,
}

/// On-disk graph document.
#[derive(Debug, Default, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, rename = "type")]
    pub relationship_type: Option<String>,
}

/// In-memory adjacency-list graph.
///
/// Neighbors are enumerated in insertion order, so sampling runs over a
/// `MemoryGraph` are reproducible. Undirected graphs store each edge on both
/// endpoints.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    directed: bool,
    order: Vec<NodeId>,
    nodes: HashMap<NodeId, NodeInfo>,
    adjacency: HashMap<NodeId, Vec<Neighbor>>,
    sampled: Mutex<Vec<SampledEdge>>,
}

impl MemoryGraph {
    /// Create an empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directed graph
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a node; re-adding an existing node only updates its label.
    pub fn add_node(&mut self, id: impl Into<NodeId>, label: Option<String>) {
        let id = id.into();
        match self.nodes.get_mut(&id) {
            Some(info) => {
                if label.is_some() {
                    info.label = label;
                }
            }
            None => {
                self.order.push(id.clone());
                self.adjacency.entry(id.clone()).or_default();
                self.nodes.insert(id.clone(), NodeInfo { id, label });
            }
        }
    }

    /// Add an edge, creating missing endpoints.
    pub fn insert_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        relationship_type: impl Into<String>,
    ) {
        let source = source.into();
        let target = target.into();
        let relationship_type = relationship_type.into();

        self.add_node(source.clone(), None);
        self.add_node(target.clone(), None);

        self.adjacency
            .entry(source.clone())
            .or_default()
            .push(Neighbor::new(target.clone(), relationship_type.clone()));

        if !self.directed && source != target {
            self.adjacency
                .entry(target)
                .or_default()
                .push(Neighbor::new(source, relationship_type));
        }
    }

    /// Build a graph from a parsed document
    pub fn from_document(doc: GraphDocument) -> Self {
        let mut graph = if doc.directed {
            Self::directed()
        } else {
            Self::new()
        };

        for node in doc.nodes {
            graph.add_node(node.id, node.label);
        }
        for edge in doc.edges {
            let rel = edge
                .relationship_type
                .unwrap_or_else(|| DEFAULT_RELATIONSHIP.to_string());
            graph.insert_edge(edge.source, edge.target, rel);
        }

        graph
    }

    /// Parse a graph from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: GraphDocument =
            serde_json::from_str(json).map_err(|e| SeedweaveError::InvalidGraph {
                reason: e.to_string(),
            })?;
        Ok(Self::from_document(doc))
    }

    /// Load a graph from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&NodeInfo> {
        self.nodes.get(id)
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Adjacency entries of `id` without going through the async source API
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges (undirected edges count once)
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|v| v.len()).sum();
        if self.directed {
            entries
        } else {
            let loops: usize = self
                .adjacency
                .iter()
                .map(|(id, v)| v.iter().filter(|n| &n.target_id == id).count())
                .sum();
            (entries - loops) / 2 + loops
        }
    }

    /// Edges reported by the engine through `add_edge`, in report order
    pub fn sampled_edges(&self) -> Vec<SampledEdge> {
        self.sampled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl GraphSource for MemoryGraph {
    type Node = NodeInfo;

    async fn get_neighbors(&self, id: &str) -> Result<Vec<Neighbor>> {
        Ok(self.neighbors(id).to_vec())
    }

    fn get_degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    fn add_edge(&self, source: &str, target: &str, relationship_type: &str) {
        self.sampled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SampledEdge {
                source: source.to_string(),
                target: target.to_string(),
                relationship_type: relationship_type.to_string(),
            });
    }

    async fn get_node(&self, id: &str) -> Result<Option<NodeInfo>> {
        Ok(self.nodes.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edges_are_mirrored() {
        let mut graph = MemoryGraph::new();
        graph.insert_edge("a", "b", "knows");

        assert_eq!(graph.neighbors("a"), &[Neighbor::new("b", "knows")]);
        assert_eq!(graph.neighbors("b"), &[Neighbor::new("a", "knows")]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = MemoryGraph::directed();
        graph.insert_edge("a", "b", "cites");

        assert_eq!(graph.get_degree("a"), 1);
        assert_eq!(graph.get_degree("b"), 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_counted_once() {
        let mut graph = MemoryGraph::new();
        graph.insert_edge("a", "a", "self");
        graph.insert_edge("a", "b", "knows");

        assert_eq!(graph.get_degree("a"), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_from_json_defaults() {
        let graph = MemoryGraph::from_json_str(
            r#"{
                "nodes": [{"id": "x", "label": "Start"}],
                "edges": [{"source": "x", "target": "y"}]
            }"#,
        )
        .unwrap();

        assert!(!graph.is_directed());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node("x").unwrap().label.as_deref(), Some("Start"));
        assert_eq!(graph.neighbors("y")[0].relationship_type, DEFAULT_RELATIONSHIP);
        assert_eq!(graph.node_ids(), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = MemoryGraph::from_json_str("{\"edges\": 5}").unwrap_err();
        assert!(matches!(err, SeedweaveError::InvalidGraph { .. }));
    }

    #[test]
    fn test_add_edge_is_recorded() {
        let graph = MemoryGraph::new();
        graph.add_edge("a", "b", "knows");

        let sampled = graph.sampled_edges();
        assert_eq!(sampled.len(), 1);
        assert_eq!(sampled[0].source, "a");
        assert_eq!(sampled[0].target, "b");
    }

    #[tokio::test]
    async fn test_source_lookups() {
        let mut graph = MemoryGraph::new();
        graph.insert_edge("a", "b", "knows");
        graph.insert_edge("a", "c", "likes");

        let neighbors = graph.get_neighbors("a").await.unwrap();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[1].target_id, "c");
        assert!(graph.get_neighbors("missing").await.unwrap().is_empty());
        assert!(graph.get_node("b").await.unwrap().is_some());
        assert!(graph.get_node("zzz").await.unwrap().is_none());
    }
}
