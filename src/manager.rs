//! Algorithm manager: lookup, input validation, execution, comparison and
//! history.
//!
//! The manager is shared between request handlers behind an `Arc`. Runners
//! are stateless and every execution gets its own run context, so the only
//! shared mutable state is the history, which serializes its own appends.

use crate::config::EngineConfig;
use crate::data::Dataset;
use crate::error::{LabError, Result};
use crate::history::{History, HistoryEntry};
use crate::instrument::{run_with_metrics, ExecutionResult, InstrumentSettings};
use crate::registry::{build_registry, AlgorithmInfo, AlgorithmRegistry, AlgorithmRunner, RunOptions};
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

/// Outcome of one algorithm inside a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub algorithm: String,
    pub outcome: std::result::Result<ExecutionResult, LabError>,
}

pub struct AlgorithmManager {
    registry: AlgorithmRegistry,
    history: History,
    settings: InstrumentSettings,
    max_input_size: usize,
    shuffle_compare_order: bool,
}

impl AlgorithmManager {
    /// Manager over the default registry with default limits.
    pub fn new() -> Self {
        Self::with_registry(build_registry(), &EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_registry(build_registry(), config)
    }

    pub fn with_registry(registry: AlgorithmRegistry, config: &EngineConfig) -> Self {
        Self {
            registry,
            history: History::new(config.history_capacity),
            settings: config.instrument_settings(),
            max_input_size: config.max_input_size,
            shuffle_compare_order: config.shuffle_compare_order,
        }
    }

    /// Register an additional algorithm, replacing one with the same id.
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.registry.register(algo);
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Identifier to name/description/category for every algorithm.
    pub fn list(&self) -> BTreeMap<String, AlgorithmInfo> {
        self.registry
            .all()
            .iter()
            .map(|algo| (algo.id().to_string(), AlgorithmInfo::of(algo.as_ref())))
            .collect()
    }

    /// Reject inputs no algorithm should run on.
    pub fn validate(&self, data: &Dataset) -> Result<()> {
        if data.is_empty() {
            return Err(LabError::invalid("Input data must not be empty"));
        }
        if data.len() > self.max_input_size {
            return Err(LabError::TooLarge {
                size: data.len(),
                max: self.max_input_size,
            });
        }
        Ok(())
    }

    fn lookup(&self, id: &str) -> Result<&dyn AlgorithmRunner> {
        self.registry
            .find(id)
            .ok_or_else(|| LabError::NotFound(id.to_string()))
    }

    /// Run one algorithm and record it in the history on success.
    pub fn execute(&self, id: &str, data: &Dataset, options: &RunOptions) -> Result<ExecutionResult> {
        let algo = self.lookup(id)?;
        self.validate(data)?;
        self.run(algo, data, options)
    }

    fn run(
        &self,
        algo: &dyn AlgorithmRunner,
        data: &Dataset,
        options: &RunOptions,
    ) -> Result<ExecutionResult> {
        let result = run_with_metrics(algo, data, options, &self.settings)
            .map_err(|e| LabError::execution(algo.id(), e))?;
        let entry = self.history.record(algo.id(), &result);
        tracing::debug!(algorithm = algo.id(), history_id = entry, "execution recorded");
        Ok(result)
    }

    /// Run every algorithm in `ids` against the same input.
    ///
    /// The input is validated once; after that each entry fails or succeeds
    /// on its own. Results come back in the order of `ids`.
    pub fn compare(
        &self,
        ids: &[String],
        data: &Dataset,
        options: &RunOptions,
    ) -> Result<Vec<ComparisonEntry>> {
        if ids.is_empty() {
            return Err(LabError::invalid("At least one algorithm is required"));
        }
        self.validate(data)?;

        let mut order: Vec<usize> = (0..ids.len()).collect();
        if self.shuffle_compare_order {
            order.shuffle(&mut rand::rng());
        }

        let mut outcomes: Vec<Option<std::result::Result<ExecutionResult, LabError>>> =
            vec![None; ids.len()];
        for idx in order {
            let id = &ids[idx];
            let outcome = self.lookup(id).and_then(|algo| self.run(algo, data, options));
            if let Err(err) = &outcome {
                tracing::warn!(algorithm = %id, error = %err, "comparison entry failed");
            }
            outcomes[idx] = Some(outcome);
        }

        Ok(ids
            .iter()
            .zip(outcomes)
            .map(|(id, outcome)| ComparisonEntry {
                algorithm: id.clone(),
                outcome: outcome.unwrap_or_else(|| {
                    Err(LabError::Internal(format!("'{}' was not executed", id)))
                }),
            })
            .collect())
    }

    /// The most recent `limit` executions, oldest first.
    pub fn history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.history.recent(limit)
    }

    pub fn max_input_size(&self) -> usize {
        self.max_input_size
    }
}

impl Default for AlgorithmManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AlgorithmManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmManager")
            .field("algorithms", &self.registry.list_ids())
            .field("history_len", &self.history.len())
            .field("max_input_size", &self.max_input_size)
            .finish()
    }
}
