use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::frontier::{FrontierState, ParentLink};
use super::path::{reconstruct_path, Path, PathSet};
use super::priority::{
    degree_priority, entropy_priority, local_entropy, path_potential, path_potential_priority,
};
use super::stats::ExpansionStats;
use crate::bail_invalid;
use crate::config::{Algorithm, SamplerConfig};
use crate::error::Result;
use crate::graph::{GraphSource, Neighbor, NodeId};

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleResult {
    /// Deduplicated seed-to-seed paths, in discovery order
    pub paths: Vec<Path>,
    /// Union of every frontier's visited set
    pub sampled_nodes: BTreeSet<NodeId>,
    /// Traversed edges as `source->target`
    pub sampled_edges: BTreeSet<String>,
    /// Visited set of each frontier, indexed like the seeds
    pub visited_per_frontier: Vec<BTreeSet<NodeId>>,
    pub stats: ExpansionStats,
    /// Iteration at which each node was first discovered (entropy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_discovery_iteration: Option<BTreeMap<NodeId, usize>>,
    /// Popped nodes in pop order
    pub expansion_order: Vec<NodeId>,
}

/// Multi-frontier priority-guided expansion over a [`GraphSource`].
///
/// One frontier per seed; every iteration pops the globally smallest queued
/// priority (ties go to the lowest frontier index), expands that node, and
/// records a path whenever the active frontier reaches a node last claimed by
/// another frontier. The engine is consumed by [`ExpansionEngine::run`], so
/// no state survives between runs.
pub struct ExpansionEngine<'g, G: GraphSource> {
    graph: &'g G,
    config: SamplerConfig,
    frontiers: Vec<FrontierState>,
    /// Latest frontier to claim each node
    ownership: HashMap<NodeId, usize>,
    paths: PathSet,
    /// Paths per unordered seed pair `(low, high)`; path-potential only
    pair_paths: HashMap<(usize, usize), usize>,
    sampled_edges: BTreeSet<String>,
    discovery: Option<BTreeMap<NodeId, usize>>,
    expansion_order: Vec<NodeId>,
    stats: ExpansionStats,
}

fn initial_priority(algorithm: Algorithm, degree: usize) -> f64 {
    match algorithm {
        // Entropy needs the seed's neighbors, which are not fetched yet
        Algorithm::Degree | Algorithm::Entropy => degree_priority(degree),
        Algorithm::PathPotential => path_potential_priority(degree, 0),
    }
}

impl<'g, G: GraphSource> ExpansionEngine<'g, G> {
    /// Build one frontier per seed.
    ///
    /// Fails with `InvalidArgument` when `seeds` is empty or the config does
    /// not validate.
    pub fn new(graph: &'g G, seeds: &[NodeId], config: SamplerConfig) -> Result<Self> {
        if seeds.is_empty() {
            bail_invalid!("at least one seed is required");
        }
        config.validate()?;

        if config.target_paths_per_pair.is_some() && config.algorithm != Algorithm::PathPotential {
            warn!(
                algorithm = %config.algorithm,
                "target_paths_per_pair only applies to path-potential, ignoring"
            );
        }

        let mut ownership = HashMap::with_capacity(seeds.len());
        let frontiers = seeds
            .iter()
            .enumerate()
            .map(|(index, seed)| {
                ownership.insert(seed.clone(), index);
                let priority = initial_priority(config.algorithm, graph.get_degree(seed));
                FrontierState::new(index, seed.clone(), priority)
            })
            .collect();

        let discovery = (config.algorithm == Algorithm::Entropy)
            .then(|| seeds.iter().map(|seed| (seed.clone(), 0)).collect());

        Ok(Self {
            graph,
            config,
            frontiers,
            ownership,
            paths: PathSet::new(),
            pair_paths: HashMap::new(),
            sampled_edges: BTreeSet::new(),
            discovery,
            expansion_order: Vec::new(),
            stats: ExpansionStats::default(),
        })
    }

    /// Expand until every frontier is exhausted or, for path-potential with a
    /// target, every seed pair has enough paths.
    ///
    /// A graph source failure aborts the run and is returned as-is.
    #[tracing::instrument(
        name = "expansion",
        skip(self),
        fields(algorithm = %self.config.algorithm, seeds = self.frontiers.len())
    )]
    pub async fn run(mut self) -> Result<SampleResult> {
        while !self.target_reached() {
            let Some(active) = self.select_frontier() else {
                break;
            };
            let Some(node) = self.frontiers[active].pop() else {
                continue;
            };
            self.expand(active, node).await?;
        }

        debug!(
            iterations = self.stats.iterations,
            edges_traversed = self.stats.edges_traversed,
            paths = self.paths.len(),
            "expansion finished"
        );
        Ok(self.into_result())
    }

    /// Frontier holding the strictly smallest head priority
    fn select_frontier(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for frontier in &self.frontiers {
            let Some(priority) = frontier.peek_priority() else {
                continue;
            };
            if best.is_none_or(|(_, lowest)| priority < lowest) {
                best = Some((frontier.index(), priority));
            }
        }
        best.map(|(index, _)| index)
    }

    fn target_reached(&self) -> bool {
        let Some(target) = self.config.target_paths_per_pair else {
            return false;
        };
        let seeds = self.frontiers.len();
        if self.config.algorithm != Algorithm::PathPotential || seeds < 2 {
            return false;
        }

        (0..seeds).all(|low| {
            (low + 1..seeds).all(|high| {
                self.pair_paths.get(&(low, high)).copied().unwrap_or(0) >= target
            })
        })
    }

    async fn expand(&mut self, active: usize, node: NodeId) -> Result<()> {
        let degree = self.graph.get_degree(&node);
        self.stats.record_pop(degree);
        trace!(
            frontier = active,
            node = %node,
            degree,
            iteration = self.stats.iterations,
            "pop"
        );
        self.expansion_order.push(node.clone());

        let neighbors = self.graph.get_neighbors(&node).await?;
        for neighbor in neighbors {
            self.visit_neighbor(active, &node, neighbor).await?;
        }
        Ok(())
    }

    async fn visit_neighbor(&mut self, active: usize, node: &str, neighbor: Neighbor) -> Result<()> {
        let Neighbor {
            target_id,
            relationship_type,
        } = neighbor;

        if self.frontiers[active].is_visited(&target_id) {
            return Ok(());
        }

        self.stats.record_edge();
        self.graph.add_edge(node, &target_id, &relationship_type);
        self.sampled_edges.insert(format!("{}->{}", node, target_id));
        self.frontiers[active].visit(
            target_id.clone(),
            ParentLink {
                parent: node.to_string(),
                edge: relationship_type,
            },
        );
        if let Some(discovery) = self.discovery.as_mut() {
            discovery
                .entry(target_id.clone())
                .or_insert(self.stats.iterations);
        }

        if self.config.algorithm == Algorithm::Entropy {
            // Queued first, intersection tested afterwards
            let priority = self.priority(active, &target_id).await?;
            self.frontiers[active].push(target_id.clone(), priority);
            self.check_intersection(active, &target_id);
            self.ownership.insert(target_id, active);
        } else {
            self.check_intersection(active, &target_id);
            self.ownership.insert(target_id.clone(), active);
            let priority = self.priority(active, &target_id).await?;
            self.frontiers[active].push(target_id, priority);
        }
        Ok(())
    }

    /// Record a path if `node` was last claimed by another frontier
    fn check_intersection(&mut self, active: usize, node: &str) {
        let Some(&owner) = self.ownership.get(node) else {
            return;
        };
        if owner == active {
            return;
        }

        let Some(path) = reconstruct_path(node, &self.frontiers[active], &self.frontiers[owner])
        else {
            trace!(node, active, owner, "intersection without a seed-to-seed path");
            return;
        };

        let hops = path.hops();
        if !self.paths.insert(path) {
            return;
        }
        debug!(meeting = node, from_seed = active, to_seed = owner, hops, "path found");

        if self.config.algorithm == Algorithm::PathPotential {
            let pair = (active.min(owner), active.max(owner));
            *self.pair_paths.entry(pair).or_insert(0) += 1;
        }
    }

    async fn priority(&self, active: usize, node: &str) -> Result<f64> {
        let degree = self.graph.get_degree(node);
        let priority = match self.config.algorithm {
            Algorithm::Degree => degree_priority(degree),
            Algorithm::Entropy => {
                let neighbors = self.graph.get_neighbors(node).await?;
                entropy_priority(
                    local_entropy(&neighbors),
                    degree,
                    self.config.entropy_epsilon,
                )
            }
            Algorithm::PathPotential => {
                let potential = path_potential(node, active, &self.ownership, &self.frontiers);
                path_potential_priority(degree, potential)
            }
        };
        Ok(priority)
    }

    fn into_result(self) -> SampleResult {
        let visited_per_frontier: Vec<BTreeSet<NodeId>> = self
            .frontiers
            .iter()
            .map(|frontier| frontier.visited().iter().cloned().collect())
            .collect();
        let sampled_nodes = visited_per_frontier.iter().flatten().cloned().collect();

        SampleResult {
            paths: self.paths.into_paths(),
            sampled_nodes,
            sampled_edges: self.sampled_edges,
            visited_per_frontier,
            stats: self.stats,
            node_discovery_iteration: self.discovery,
            expansion_order: self.expansion_order,
        }
    }
}

/// Build an engine for `seeds` and run it to completion
pub async fn sample<G: GraphSource>(
    graph: &G,
    seeds: &[NodeId],
    config: SamplerConfig,
) -> Result<SampleResult> {
    ExpansionEngine::new(graph, seeds, config)?.run().await
}
