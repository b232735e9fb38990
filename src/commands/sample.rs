//! `seedweave sample` - run the expansion engine over a graph document

use serde::Serialize;
use seedweave_core::error::{Result, SeedweaveError};
use seedweave_core::expansion::{sample, SampleResult};
use seedweave_core::graph::{GraphSource, MemoryGraph};
use seedweave_core::{Algorithm, NodeId, SamplerConfig};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat, SampleArgs};

#[derive(Serialize)]
struct SampleOutput<'a> {
    algorithm: Algorithm,
    seeds: &'a [NodeId],
    #[serde(flatten)]
    result: &'a SampleResult,
}

/// File configuration first, then flags on top
fn resolve_config(args: &SampleArgs) -> Result<SamplerConfig> {
    let mut config = match &args.config {
        Some(path) => SamplerConfig::load(path)?,
        None => SamplerConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config = config.with_algorithm(algorithm);
    }
    if let Some(target) = args.target_paths_per_pair {
        config = config.with_target_paths_per_pair(target);
    }
    config.validate()?;
    Ok(config)
}

async fn ensure_seeds_exist(graph: &MemoryGraph, seeds: &[NodeId]) -> Result<()> {
    for seed in seeds {
        if graph.get_node(seed).await?.is_none() {
            return Err(SeedweaveError::not_found(seed.clone()));
        }
    }
    Ok(())
}

pub async fn execute(cli: &Cli, args: &SampleArgs) -> Result<()> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved_config");

    let graph = super::load_graph(&args.graph)?;
    ensure_seeds_exist(&graph, &args.seeds).await?;

    let result = sample(&graph, &args.seeds, config.clone()).await?;
    info!(
        algorithm = %config.algorithm,
        sampled_nodes = result.sampled_nodes.len(),
        paths = result.paths.len(),
        "sample_complete"
    );

    match cli.format {
        OutputFormat::Json => {
            let output = SampleOutput {
                algorithm: config.algorithm,
                seeds: &args.seeds,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(cli, &config, &args.seeds, &result),
    }
    Ok(())
}

fn print_human(cli: &Cli, config: &SamplerConfig, seeds: &[NodeId], result: &SampleResult) {
    if !cli.quiet {
        println!(
            "Sampled {} nodes and {} edges with {} priority",
            result.sampled_nodes.len(),
            result.sampled_edges.len(),
            config.algorithm
        );
        println!(
            "Iterations: {}  Nodes expanded: {}  Edges traversed: {}",
            result.stats.iterations, result.stats.nodes_expanded, result.stats.edges_traversed
        );
        println!("Degree histogram:");
        for (bucket, count) in result.stats.histogram() {
            println!("  {:>9}: {}", bucket, count);
        }
        println!("Paths: {}", result.paths.len());
    }

    for path in &result.paths {
        println!(
            "  {} -> {} ({} hops): {}",
            seeds[path.from_seed],
            seeds[path.to_seed],
            path.hops(),
            path.nodes.join(" -> ")
        );
    }
}
