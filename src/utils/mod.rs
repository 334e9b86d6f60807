//! Measurement utilities used by the instrumentation wrapper and the CLI.

pub mod alloc;
pub mod cpu_affinity;
pub mod report;
pub mod timer;

#[cfg(feature = "cpu_cycles")]
pub mod cycles;

// Re-export commonly used items
pub use alloc::{MemoryScope, MemorySource, MemoryUsage};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{round_to, Stopwatch, Timing};
