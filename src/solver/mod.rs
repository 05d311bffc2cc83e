pub mod consistency;
pub mod engine;
pub mod heuristics;
pub mod propagate;
pub mod prune;
pub mod stats;
pub mod trace;
