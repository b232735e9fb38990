//! Seedweave Core Library
//!
//! Samples a bounded subgraph connecting seed nodes by growing one
//! priority-ordered frontier per seed and recording where frontiers meet.

pub mod config;
pub mod error;
pub mod expansion;
pub mod graph;
pub mod logging;

pub use config::{Algorithm, SamplerConfig};
pub use error::{Result, SeedweaveError};
pub use expansion::{sample, ExpansionEngine, SampleResult};
pub use graph::{GraphSource, MemoryGraph, Neighbor, NodeId};
