//! # Algoscope
//!
//! Classic sorting and searching algorithms behind one instrumented
//! execution harness: every run reports elapsed time, allocated memory,
//! comparison and swap counts, and an optional step log for visualization.
//! The same harness is served over HTTP and from the command line.

pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod history;
pub mod instrument;
pub mod manager;
pub mod registry;
pub mod searching;
pub mod server;
pub mod sorting;
pub mod trace;
pub mod tui;
pub mod utils;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::data::{DataKind, Dataset, Element};
    pub use crate::error::{LabError, Result};
    pub use crate::generator::{generate, DataShape, GenerateOptions};
    pub use crate::instrument::{run_with_metrics, ExecutionResult, Metadata};
    pub use crate::manager::AlgorithmManager;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner, Outcome, RunOptions};
}
