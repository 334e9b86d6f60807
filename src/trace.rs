//! Per-run instrumentation state: counters and the step log.
//!
//! A [`RunContext`] is created for exactly one execution and handed to the
//! algorithm by mutable reference, so concurrent runs of the same algorithm
//! never share counters or steps.

use crate::data::Element;
use serde::Serialize;

/// Default number of steps kept in the log before truncation.
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Default number of elements held across all stored steps.
pub const DEFAULT_TRACE_ELEMENT_LIMIT: usize = 1_000_000;

/// One primitive operation, with enough state to render a visualization frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Two positions exchanged; `array` is the state after the swap.
    Swap {
        indices: [usize; 2],
        array: Vec<Element>,
    },
    /// Quick sort pivot moved to its final position.
    Pivot {
        pivot_index: usize,
        array: Vec<Element>,
    },
    /// Heap property restored by swapping a parent with its larger child.
    Heapify {
        indices: [usize; 2],
        array: Vec<Element>,
    },
    /// Two sorted runs merged.
    Merge {
        left: Vec<Element>,
        right: Vec<Element>,
        result: Vec<Element>,
    },
    /// Sequential scan visited `index`.
    Compare {
        index: usize,
        value: Element,
        target: Element,
    },
    /// Binary search probed `mid` inside `[left, right]`.
    Probe {
        left: usize,
        right: usize,
        mid: usize,
        value: Element,
        target: Element,
    },
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Step::Swap { .. } => "swap",
            Step::Pivot { .. } => "pivot",
            Step::Heapify { .. } => "heapify",
            Step::Merge { .. } => "merge",
            Step::Compare { .. } => "compare",
            Step::Probe { .. } => "probe",
        }
    }

    /// Number of elements this step holds.
    pub fn weight(&self) -> usize {
        match self {
            Step::Swap { array, .. } | Step::Pivot { array, .. } | Step::Heapify { array, .. } => {
                array.len()
            }
            Step::Merge {
                left,
                right,
                result,
            } => left.len() + right.len() + result.len(),
            Step::Compare { .. } | Step::Probe { .. } => 2,
        }
    }
}

/// Counters and step log for a single execution.
///
/// The log is bounded twice: by number of steps and by the total number of
/// elements the stored steps hold. Once either bound is hit the log is
/// closed, so the stored steps are always a prefix of the execution.
#[derive(Debug)]
pub struct RunContext {
    comparisons: u64,
    swaps: u64,
    steps_seen: u64,
    recording: bool,
    step_limit: usize,
    element_limit: usize,
    stored_elements: usize,
    closed: bool,
    steps: Vec<Step>,
}

impl RunContext {
    /// Context that stores up to `step_limit` steps.
    pub fn new(step_limit: usize) -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            steps_seen: 0,
            recording: true,
            step_limit,
            element_limit: DEFAULT_TRACE_ELEMENT_LIMIT,
            stored_elements: 0,
            closed: false,
            steps: Vec::new(),
        }
    }

    /// Context that counts steps without building any of them.
    pub fn counting() -> Self {
        Self {
            recording: false,
            ..Self::new(0)
        }
    }

    pub fn with_element_limit(mut self, element_limit: usize) -> Self {
        self.element_limit = element_limit;
        self
    }

    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    /// Count a step and store it while the log is open.
    ///
    /// The step is built lazily: snapshots are only cloned when the log is
    /// open and below its step limit.
    #[inline]
    pub fn record(&mut self, step: impl FnOnce() -> Step) {
        self.steps_seen += 1;
        if !self.recording || self.closed {
            return;
        }
        if self.steps.len() >= self.step_limit {
            self.closed = true;
            return;
        }

        let step = step();
        let weight = step.weight();
        if self.stored_elements + weight > self.element_limit {
            self.closed = true;
            return;
        }
        self.stored_elements += weight;
        self.steps.push(step);
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Total number of steps that occurred, including ones not stored.
    pub fn steps_count(&self) -> u64 {
        self.steps_seen
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether a recording run dropped steps. Always false when counting.
    pub fn is_truncated(&self) -> bool {
        self.recording && self.steps_seen > self.steps.len() as u64
    }

    /// Elements held by the stored steps.
    pub fn stored_elements(&self) -> usize {
        self.stored_elements
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_LIMIT)
    }
}
