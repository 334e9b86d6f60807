//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every algorithm is a stateless [`AlgorithmRunner`]. Mutable run state
//! (counters, step log) lives in a [`RunContext`] owned by the caller, so a
//! single registered runner can serve any number of concurrent executions.

use crate::data::{DataKind, Element};
use crate::error::{LabError, Result};
use crate::trace::RunContext;
use serde::Serialize;

/// Per-call options recognized by the algorithms.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Value to look for (search algorithms only).
    pub target: Option<Element>,
    /// Return the recorded step log with the result.
    pub include_steps: bool,
}

impl RunOptions {
    pub fn with_target(target: impl Into<Element>) -> Self {
        Self {
            target: Some(target.into()),
            include_steps: false,
        }
    }

    /// The search target, checked against the kind of the data being searched.
    pub fn require_target(&self, kind: Option<DataKind>) -> Result<&Element> {
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| LabError::invalid("The 'target' parameter is required for search"))?;
        match kind {
            Some(kind) if kind != target.kind() => Err(LabError::invalid(format!(
                "Target '{}' does not match the {:?} data being searched",
                target, kind
            ))),
            _ => Ok(target),
        }
    }
}

/// Outcome of a search: `index` is `-1` and `value` absent when not found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub found: bool,
    pub index: i64,
    pub value: Option<Element>,
}

impl SearchOutcome {
    pub fn found(index: usize, value: Element) -> Self {
        Self {
            found: true,
            index: index as i64,
            value: Some(value),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            index: -1,
            value: None,
        }
    }
}

/// Algorithm-specific return payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Sorted(Vec<Element>),
    Search(SearchOutcome),
}

impl Outcome {
    pub fn as_sorted(&self) -> Option<&[Element]> {
        match self {
            Outcome::Sorted(v) => Some(v),
            Outcome::Search(_) => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchOutcome> {
        match self {
            Outcome::Search(s) => Some(s),
            Outcome::Sorted(_) => None,
        }
    }
}

/// Trait that all algorithms must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Stable identifier (e.g., "bubble_sort")
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "Bubble Sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category ("sorting" or "searching")
    fn category(&self) -> &'static str;

    /// Run the algorithm once over `data`, counting into `ctx`.
    ///
    /// Implementations never mutate `data`; sorts work on a private copy.
    fn execute(&self, data: &[Element], options: &RunOptions, ctx: &mut RunContext)
        -> Result<Outcome>;

    /// Verify correctness against a reference implementation
    fn verify(&self) -> std::result::Result<(), String>;
}

/// Listing entry for one registered algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl AlgorithmInfo {
    pub fn of(algo: &dyn AlgorithmRunner) -> Self {
        Self {
            name: algo.name(),
            description: algo.description(),
            category: algo.category(),
        }
    }
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm, replacing any runner with the same id
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        match self.algorithms.iter().position(|a| a.id() == algo.id()) {
            Some(idx) => self.algorithms[idx] = Box::new(algo),
            None => self.algorithms.push(Box::new(algo)),
        }
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by id
    pub fn find(&self, id: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.as_ref())
    }

    /// List algorithm ids
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.id()).collect()
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sorting::bubble_sort::BubbleSortRunner);
    registry.register(crate::sorting::merge_sort::MergeSortRunner);
    registry.register(crate::sorting::quick_sort::QuickSortRunner);
    registry.register(crate::sorting::heap_sort::HeapSortRunner);
    registry.register(crate::searching::linear_search::LinearSearchRunner);
    registry.register(crate::searching::binary_search::BinarySearchRunner);

    registry
}
