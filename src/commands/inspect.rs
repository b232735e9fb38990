//! `seedweave inspect` - show how the priority functions score one node

use serde::Serialize;
use seedweave_core::bail_invalid;
use seedweave_core::error::{Result, SeedweaveError};
use seedweave_core::expansion::{degree_bucket, degree_priority, entropy_priority, local_entropy};
use seedweave_core::graph::GraphSource;

use crate::cli::{Cli, InspectArgs, OutputFormat};

#[derive(Debug, Serialize)]
struct NodeReport<'a> {
    id: &'a str,
    label: Option<String>,
    degree: usize,
    degree_bucket: &'static str,
    relationship_types: usize,
    local_entropy: f64,
    degree_priority: f64,
    entropy_priority: f64,
}

pub async fn execute(cli: &Cli, args: &InspectArgs) -> Result<()> {
    if !args.entropy_epsilon.is_finite() || args.entropy_epsilon <= 0.0 {
        bail_invalid!("--entropy-epsilon must be a positive number");
    }

    let graph = super::load_graph(&args.graph)?;

    let node = graph
        .get_node(&args.node)
        .await?
        .ok_or_else(|| SeedweaveError::not_found(args.node.clone()))?;
    let neighbors = graph.get_neighbors(&args.node).await?;
    let degree = graph.get_degree(&args.node);
    let entropy = local_entropy(&neighbors);

    let mut types: Vec<&str> = neighbors
        .iter()
        .map(|n| n.relationship_type.as_str())
        .collect();
    types.sort_unstable();
    types.dedup();

    let report = NodeReport {
        id: &args.node,
        label: node.label,
        degree,
        degree_bucket: degree_bucket(degree),
        relationship_types: types.len(),
        local_entropy: entropy,
        degree_priority: degree_priority(degree),
        entropy_priority: entropy_priority(entropy, degree, args.entropy_epsilon),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            match &report.label {
                Some(label) => println!("{} ({})", report.id, label),
                None => println!("{}", report.id),
            }
            println!("  Degree: {} [{}]", report.degree, report.degree_bucket);
            println!("  Relationship types: {}", report.relationship_types);
            println!("  Local entropy: {:.4}", report.local_entropy);
            println!("  Degree priority: {:.4}", report.degree_priority);
            println!("  Entropy priority: {:.4}", report.entropy_priority);
        }
    }
    Ok(())
}
