//! Instrumentation wrapper: runs one algorithm and captures its metrics.
//!
//! [`run_with_metrics`] gives every call a fresh [`RunContext`], starts
//! allocation tracking and a monotonic timer, executes the algorithm and
//! bundles the outcome with a [`Metadata`] record. Tracking is scoped, so it
//! is torn down whether the algorithm succeeds or fails; failures propagate
//! unchanged.

use crate::data::Dataset;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, Outcome, RunOptions};
use crate::trace::{RunContext, Step, DEFAULT_STEP_LIMIT, DEFAULT_TRACE_ELEMENT_LIMIT};
use crate::utils::{round_to, CpuPinGuard, MemoryScope, MemorySource, Stopwatch};
use serde::Serialize;

/// Knobs for the wrapper, taken from the engine configuration.
#[derive(Clone, Debug)]
pub struct InstrumentSettings {
    /// Maximum number of steps stored per run
    pub step_limit: usize,
    /// Maximum number of elements held by the stored steps of one run
    pub trace_element_limit: usize,
    /// Pin the executing thread to its current core while measuring
    pub pin_cpu: bool,
}

impl Default for InstrumentSettings {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            trace_element_limit: DEFAULT_TRACE_ELEMENT_LIMIT,
            pin_cpu: false,
        }
    }
}

/// Metrics captured for one execution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metadata {
    pub execution_time_ms: f64,
    pub memory_used_kb: f64,
    pub memory_peak_kb: f64,
    pub memory_source: MemorySource,
    pub comparisons: u64,
    pub swaps: u64,
    pub input_size: usize,
    /// Steps that occurred, including ones past the log limit
    pub steps_count: u64,
    pub steps_recorded: usize,
    pub trace_truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cycles: Option<u64>,
}

/// Outcome plus metadata envelope. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub result: Outcome,
    pub metadata: Metadata,
    /// Recorded step log, present only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl ExecutionResult {
    /// Copy of this result without its step log.
    pub fn without_steps(&self) -> Self {
        Self {
            result: self.result.clone(),
            metadata: self.metadata.clone(),
            steps: None,
        }
    }
}

/// Run `algo` over `data` and measure it.
///
/// Steps are only built when `options.include_steps` is set; otherwise they
/// are counted and `steps_recorded` is 0.
pub fn run_with_metrics(
    algo: &dyn AlgorithmRunner,
    data: &Dataset,
    options: &RunOptions,
    settings: &InstrumentSettings,
) -> Result<ExecutionResult> {
    let mut ctx = if options.include_steps {
        RunContext::new(settings.step_limit).with_element_limit(settings.trace_element_limit)
    } else {
        RunContext::counting()
    };
    let pin = settings.pin_cpu.then(CpuPinGuard::new);

    let (outcome, timing, memory) = {
        let scope = MemoryScope::start();
        let watch = Stopwatch::start();
        let outcome = algo.execute(data.as_slice(), options, &mut ctx);
        let timing = watch.stop();
        (outcome, timing, scope.usage())
    };

    let cpu_core = pin.as_ref().and_then(CpuPinGuard::core_id);
    drop(pin);

    let outcome = outcome?;

    let metadata = Metadata {
        execution_time_ms: round_to(timing.as_millis_f64(), 4),
        memory_used_kb: round_to(memory.used_kb(), 4),
        memory_peak_kb: round_to(memory.peak_kb(), 4),
        memory_source: memory.source,
        comparisons: ctx.comparisons(),
        swaps: ctx.swaps(),
        input_size: data.len(),
        steps_count: ctx.steps_count(),
        steps_recorded: ctx.steps().len(),
        trace_truncated: ctx.is_truncated(),
        cpu_core,
        cpu_cycles: timing.cycles,
    };

    tracing::debug!(
        algorithm = algo.id(),
        input_size = metadata.input_size,
        comparisons = metadata.comparisons,
        swaps = metadata.swaps,
        elapsed_ms = metadata.execution_time_ms,
        "execution finished"
    );

    Ok(ExecutionResult {
        result: outcome,
        metadata,
        steps: options.include_steps.then(|| ctx.into_steps()),
    })
}
