//! Path reconstruction and deduplication for frontier intersections

use std::collections::HashSet;

use serde::Serialize;

use super::frontier::FrontierState;
use crate::graph::NodeId;

/// A path between two seeds, `nodes[0]` being the seed of `from_seed` and
/// the last node the seed of `to_seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub from_seed: usize,
    pub to_seed: usize,
    pub nodes: Vec<NodeId>,
}

/// Deduplication key: unordered seed pair plus node count.
///
/// Distinct routes of equal length between the same seeds share a signature,
/// so only the first one found is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSignature {
    pub low_seed: usize,
    pub high_seed: usize,
    pub length: usize,
}

impl Path {
    pub fn signature(&self) -> PathSignature {
        PathSignature {
            low_seed: self.from_seed.min(self.to_seed),
            high_seed: self.from_seed.max(self.to_seed),
            length: self.nodes.len(),
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Walk parent links from `start` towards the frontier's seed.
///
/// The returned chain excludes `start` and ends at the first node without a
/// parent. `None` if the walk runs longer than the parent map could allow,
/// which only a corrupted map can cause.
fn parent_chain(frontier: &FrontierState, start: &str) -> Option<Vec<NodeId>> {
    let limit = frontier.parent_count();
    let mut chain = Vec::new();
    let mut current = start;

    while let Some(link) = frontier.parent(current) {
        if chain.len() >= limit {
            return None;
        }
        chain.push(link.parent.clone());
        current = &link.parent;
    }

    Some(chain)
}

/// Rebuild the seed-to-seed path through `meeting` where `active` just met
/// territory previously claimed by `owner`.
///
/// Returns `None` when either half does not end at its frontier's seed.
pub fn reconstruct_path(
    meeting: &str,
    active: &FrontierState,
    owner: &FrontierState,
) -> Option<Path> {
    // seed(active) .. meeting
    let mut from_active = parent_chain(active, meeting)?;
    from_active.reverse();
    from_active.push(meeting.to_string());

    // meeting's parent .. seed(owner)
    let from_owner = parent_chain(owner, meeting)?;

    if from_active.first().map(String::as_str) != Some(active.seed()) {
        return None;
    }
    let owner_half_valid = match from_owner.last() {
        Some(last) => last == owner.seed(),
        None => meeting == owner.seed(),
    };
    if !owner_half_valid {
        return None;
    }

    let mut nodes = from_active;
    nodes.extend(from_owner);

    Some(Path {
        from_seed: active.index(),
        to_seed: owner.index(),
        nodes,
    })
}

/// Accumulated paths, unique by [`PathSignature`], in discovery order
#[derive(Debug, Default)]
pub struct PathSet {
    paths: Vec<Path>,
    signatures: HashSet<PathSignature>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `path` unless its signature was already seen
    pub fn insert(&mut self, path: Path) -> bool {
        if !self.signatures.insert(path.signature()) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::frontier::ParentLink;

    fn frontier(index: usize, seed: &str, edges: &[(&str, &str)]) -> FrontierState {
        let mut frontier = FrontierState::new(index, seed.to_string(), 0.0);
        for (child, parent) in edges {
            frontier.visit(
                child.to_string(),
                ParentLink {
                    parent: parent.to_string(),
                    edge: "e".to_string(),
                },
            );
        }
        frontier
    }

    fn ids(nodes: &[&str]) -> Vec<NodeId> {
        nodes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_reconstruct_through_shared_node() {
        // a - x - m   and   b - y - m
        let active = frontier(0, "a", &[("x", "a"), ("m", "x")]);
        let owner = frontier(1, "b", &[("y", "b"), ("m", "y")]);

        let path = reconstruct_path("m", &active, &owner).unwrap();
        assert_eq!(path.from_seed, 0);
        assert_eq!(path.to_seed, 1);
        assert_eq!(path.nodes, ids(&["a", "x", "m", "y", "b"]));
        assert_eq!(path.hops(), 4);
    }

    #[test]
    fn test_reconstruct_meeting_at_owner_seed() {
        let active = frontier(1, "b", &[("a", "b")]);
        let owner = frontier(0, "a", &[]);

        let path = reconstruct_path("a", &active, &owner).unwrap();
        assert_eq!(path.nodes, ids(&["b", "a"]));
        assert_eq!(path.from_seed, 1);
        assert_eq!(path.to_seed, 0);
    }

    #[test]
    fn test_reconstruct_rejects_unclaimed_meeting() {
        // owner never reached "m" and "m" is not its seed
        let active = frontier(0, "a", &[("m", "a")]);
        let owner = frontier(1, "b", &[("y", "b")]);

        assert!(reconstruct_path("m", &active, &owner).is_none());
    }

    #[test]
    fn test_reconstruct_rejects_cyclic_parents() {
        let active = frontier(0, "a", &[("m", "a")]);
        let mut owner = FrontierState::new(1, "b".to_string(), 0.0);
        let link = |p: &str| ParentLink {
            parent: p.to_string(),
            edge: "e".to_string(),
        };
        owner.visit("m".to_string(), link("n"));
        owner.visit("n".to_string(), link("m"));

        assert!(reconstruct_path("m", &active, &owner).is_none());
    }

    #[test]
    fn test_signature_is_unordered_in_seeds() {
        let forward = Path {
            from_seed: 0,
            to_seed: 2,
            nodes: ids(&["a", "x", "c"]),
        };
        let backward = Path {
            from_seed: 2,
            to_seed: 0,
            nodes: ids(&["c", "y", "a"]),
        };
        assert_eq!(forward.signature(), backward.signature());
    }

    #[test]
    fn test_path_set_drops_equal_length_duplicates() {
        let mut set = PathSet::new();
        assert!(set.insert(Path {
            from_seed: 0,
            to_seed: 1,
            nodes: ids(&["a", "x", "b"]),
        }));
        assert!(!set.insert(Path {
            from_seed: 1,
            to_seed: 0,
            nodes: ids(&["b", "y", "a"]),
        }));
        assert!(set.insert(Path {
            from_seed: 0,
            to_seed: 1,
            nodes: ids(&["a", "x", "y", "b"]),
        }));

        assert_eq!(set.len(), 2);
        let paths = set.into_paths();
        assert_eq!(paths[0].nodes, ids(&["a", "x", "b"]));
        assert_eq!(paths[1].nodes.len(), 4);
    }
}
