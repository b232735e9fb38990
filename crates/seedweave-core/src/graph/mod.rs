//! Graph data sources
//!
//! - `source`: the async adjacency trait consumed by the expansion engine
//! - `memory`: an in-memory adjacency-list implementation loadable from JSON

pub mod memory;
pub mod source;

pub use memory::{GraphDocument, MemoryGraph, NodeInfo, SampledEdge, DEFAULT_RELATIONSHIP};
pub use source::{GraphSource, Neighbor, NodeId};
