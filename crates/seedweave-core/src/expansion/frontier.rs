use std::collections::{HashMap, HashSet};

use super::queue::PriorityQueue;
use crate::graph::NodeId;

/// Link from a discovered node back to the node it was discovered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    pub parent: NodeId,
    pub edge: String,
}

/// Traversal state owned by one seed: its queue, visited set and parent map.
#[derive(Debug)]
pub struct FrontierState {
    index: usize,
    seed: NodeId,
    queue: PriorityQueue<NodeId>,
    visited: HashSet<NodeId>,
    parents: HashMap<NodeId, ParentLink>,
}

impl FrontierState {
    /// Start a frontier with only its seed visited and queued
    pub fn new(index: usize, seed: NodeId, initial_priority: f64) -> Self {
        let mut queue = PriorityQueue::new();
        queue.push(seed.clone(), initial_priority);
        let mut visited = HashSet::new();
        visited.insert(seed.clone());

        Self {
            index,
            seed,
            queue,
            visited,
            parents: HashMap::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.queue.peek_priority()
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop()
    }

    pub fn push(&mut self, node: NodeId, priority: f64) {
        self.queue.push(node, priority);
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn is_visited(&self, node: &str) -> bool {
        self.visited.contains(node)
    }

    /// Mark `node` visited and remember how it was reached.
    ///
    /// Returns false (and changes nothing) when `node` was already visited,
    /// which keeps the parent map a tree rooted at the seed.
    pub fn visit(&mut self, node: NodeId, link: ParentLink) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.parents.insert(node, link);
        true
    }

    pub fn parent(&self, node: &str) -> Option<&ParentLink> {
        self.parents.get(node)
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    pub fn visited(&self) -> &HashSet<NodeId> {
        &self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(parent: &str) -> ParentLink {
        ParentLink {
            parent: parent.to_string(),
            edge: "knows".to_string(),
        }
    }

    #[test]
    fn test_new_frontier_holds_seed() {
        let mut frontier = FrontierState::new(2, "s".to_string(), 0.7);

        assert_eq!(frontier.index(), 2);
        assert_eq!(frontier.seed(), "s");
        assert!(frontier.is_visited("s"));
        assert!(frontier.parent("s").is_none());
        assert_eq!(frontier.peek_priority(), Some(0.7));
        assert_eq!(frontier.pop().as_deref(), Some("s"));
        assert!(!frontier.has_pending());
    }

    #[test]
    fn test_visit_records_parent_once() {
        let mut frontier = FrontierState::new(0, "s".to_string(), 0.0);

        assert!(frontier.visit("a".to_string(), link("s")));
        assert!(!frontier.visit("a".to_string(), link("b")));
        assert!(!frontier.visit("s".to_string(), link("a")));

        assert_eq!(frontier.parent("a"), Some(&link("s")));
        assert_eq!(frontier.parent_count(), 1);
        assert_eq!(frontier.visited().len(), 2);
    }
}
