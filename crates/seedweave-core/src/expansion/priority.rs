//! Priority functions for the expansion engine
//!
//! All functions produce min-heap keys: a lower value is expanded sooner.
//!
//! - Degree: `ln(deg + 1)`, so hubs are deferred
//! - Entropy: `ln(deg + 1) / (H_local + eps)`. Homogeneous (low entropy)
//!   neighborhoods get *larger* values and are deferred relative to diverse ones.
//! - Path potential: `deg / (1 + potential)`, where potential counts nodes
//!   claimed by other frontiers that look "adjacent" to the candidate

use std::collections::{BTreeMap, HashMap};

use super::frontier::FrontierState;
use crate::graph::{Neighbor, NodeId};

/// Shannon entropy (base 2) of the relationship types among `neighbors`.
///
/// Zero for no neighbors or a single type; `log2(k)` for `k` equally
/// frequent types.
pub fn local_entropy(neighbors: &[Neighbor]) -> f64 {
    if neighbors.is_empty() {
        return 0.0;
    }

    // BTreeMap keeps the summation order, and so the exact float, stable
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for neighbor in neighbors {
        *counts.entry(neighbor.relationship_type.as_str()).or_insert(0) += 1;
    }

    let total = neighbors.len() as f64;
    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single type yields -0.0, and f64::max may keep the sign
    if entropy > 0.0 {
        entropy
    } else {
        0.0
    }
}

pub fn degree_priority(degree: usize) -> f64 {
    ((degree + 1) as f64).ln()
}

pub fn entropy_priority(entropy: f64, degree: usize, epsilon: f64) -> f64 {
    (1.0 / (entropy + epsilon)) * degree_priority(degree)
}

pub fn path_potential_priority(degree: usize, path_potential: usize) -> f64 {
    degree as f64 / (1 + path_potential) as f64
}

/// Count nodes owned by frontiers other than `current` that look adjacent
/// to `candidate`.
///
/// "Adjacent" is approximated by frontier membership: an owned node counts
/// when the candidate is already in its owner's visited set, or when the
/// owned node is already in `current`'s visited set. No graph lookups are
/// made.
pub fn path_potential(
    candidate: &str,
    current: usize,
    ownership: &HashMap<NodeId, usize>,
    frontiers: &[FrontierState],
) -> usize {
    let Some(active) = frontiers.get(current) else {
        return 0;
    };

    ownership
        .iter()
        .filter(|(_, &owner)| owner != current)
        .filter(|(node, &owner)| {
            let owner_saw_candidate = frontiers
                .get(owner)
                .is_some_and(|frontier| frontier.is_visited(candidate));
            owner_saw_candidate || active.is_visited(node)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::frontier::ParentLink;

    fn neighbors(types: &[&str]) -> Vec<Neighbor> {
        types
            .iter()
            .enumerate()
            .map(|(i, t)| Neighbor::new(format!("n{}", i), *t))
            .collect()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_entropy_no_neighbors() {
        assert_eq!(local_entropy(&[]), 0.0);
    }

    #[test]
    fn test_entropy_single_type() {
        let entropy = local_entropy(&neighbors(&["cites", "cites", "cites"]));
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn test_entropy_uniform_types() {
        assert!(approx_eq(local_entropy(&neighbors(&["a", "b"])), 1.0));
        assert!(approx_eq(
            local_entropy(&neighbors(&["a", "b", "c", "d"])),
            2.0
        ));
        assert!(approx_eq(
            local_entropy(&neighbors(&["a", "b", "c", "a", "b", "c"])),
            3f64.log2()
        ));
    }

    #[test]
    fn test_entropy_skewed_types() {
        // p = (0.75, 0.25)
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        let entropy = local_entropy(&neighbors(&["a", "a", "a", "b"]));
        assert!(approx_eq(entropy, expected));
        assert!(entropy < 1.0);
    }

    #[test]
    fn test_degree_priority_defers_hubs() {
        assert_eq!(degree_priority(0), 0.0);
        assert!(approx_eq(degree_priority(1), 2f64.ln()));
        assert!(degree_priority(3) < degree_priority(50));
    }

    #[test]
    fn test_entropy_priority_defers_high_degree() {
        let entropy = 1.0;
        let low = entropy_priority(entropy, 2, 0.001);
        let high = entropy_priority(entropy, 100, 0.001);
        assert!(low < high);
    }

    #[test]
    fn test_entropy_priority_defers_homogeneous_nodes() {
        let homogeneous = entropy_priority(0.0, 10, 0.001);
        let diverse = entropy_priority(2.0, 10, 0.001);
        assert!(homogeneous > diverse);
        assert!(approx_eq(homogeneous, 1000.0 * 11f64.ln()));
    }

    #[test]
    fn test_path_potential_priority() {
        assert_eq!(path_potential_priority(6, 0), 6.0);
        assert_eq!(path_potential_priority(6, 2), 2.0);
        assert_eq!(path_potential_priority(0, 4), 0.0);
    }

    #[test]
    fn test_path_potential_counts_other_frontiers_only() {
        let mut a = FrontierState::new(0, "a".to_string(), 0.0);
        let mut b = FrontierState::new(1, "b".to_string(), 0.0);
        let link = |p: &str| ParentLink {
            parent: p.to_string(),
            edge: "e".to_string(),
        };
        a.visit("x".to_string(), link("a"));
        b.visit("x".to_string(), link("b"));
        b.visit("y".to_string(), link("b"));

        let ownership: HashMap<NodeId, usize> = [
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("x".to_string(), 1),
            ("y".to_string(), 1),
        ]
        .into_iter()
        .collect();
        let frontiers = vec![a, b];

        // "x" is in b's visited set, so every node b owns counts
        assert_eq!(path_potential("x", 0, &ownership, &frontiers), 3);
        // "z" is unknown to b; only "x" (visited by a) counts
        assert_eq!(path_potential("z", 0, &ownership, &frontiers), 1);
        // frontier b looking at a's territory: "x" is visited by a, and "a"
        // is owned by a
        assert_eq!(path_potential("x", 1, &ownership, &frontiers), 1);
        assert_eq!(path_potential("x", 7, &ownership, &frontiers), 0);
    }
}
