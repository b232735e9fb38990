//! Multi-frontier priority-guided expansion
//!
//! - `queue`: min-heap keyed by `f64` priority
//! - `frontier`: per-seed queue, visited set and parent map
//! - `priority`: degree, entropy and path-potential scoring
//! - `path`: parent-chain path rebuilding and signature dedup
//! - `stats`: run counters and degree histogram
//! - `engine`: the global pop-selection loop tying them together

pub mod engine;
pub mod frontier;
pub mod path;
pub mod priority;
pub mod queue;
pub mod stats;

pub use engine::{sample, ExpansionEngine, SampleResult};
pub use frontier::{FrontierState, ParentLink};
pub use path::{reconstruct_path, Path, PathSet, PathSignature};
pub use priority::{
    degree_priority, entropy_priority, local_entropy, path_potential, path_potential_priority,
};
pub use queue::PriorityQueue;
pub use stats::{degree_bucket, ExpansionStats, DEGREE_BUCKETS};
