//! Report rows and CSV export for CLI runs.

use crate::error::LabError;
use crate::instrument::ExecutionResult;
use std::io::Write;

/// One line of a run or comparison report
pub struct ReportRow {
    pub algorithm: String,
    pub input_size: usize,
    pub execution_time_ms: Option<f64>,
    pub memory_peak_kb: Option<f64>,
    pub comparisons: Option<u64>,
    pub swaps: Option<u64>,
    pub steps: Option<u64>,
    pub error: Option<String>,
}

impl ReportRow {
    pub fn from_result(
        algorithm: &str,
        input_size: usize,
        outcome: &Result<ExecutionResult, LabError>,
    ) -> Self {
        match outcome {
            Ok(result) => {
                let m = &result.metadata;
                Self {
                    algorithm: algorithm.to_string(),
                    input_size: m.input_size,
                    execution_time_ms: Some(m.execution_time_ms),
                    memory_peak_kb: Some(m.memory_peak_kb),
                    comparisons: Some(m.comparisons),
                    swaps: Some(m.swaps),
                    steps: Some(m.steps_count),
                    error: None,
                }
            }
            Err(err) => Self {
                algorithm: algorithm.to_string(),
                input_size,
                execution_time_ms: None,
                memory_peak_kb: None,
                comparisons: None,
                swaps: None,
                steps: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// Quote fields containing separators, as error messages may
fn field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Write report rows as CSV to any writer
pub fn write_csv<W: Write>(mut out: W, rows: &[ReportRow]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,input_size,execution_time_ms,memory_peak_kb,comparisons,swaps,steps,error"
    )?;

    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            field(&row.algorithm),
            row.input_size,
            opt(row.execution_time_ms),
            opt(row.memory_peak_kb),
            opt(row.comparisons),
            opt(row.swaps),
            opt(row.steps),
            field(row.error.as_deref().unwrap_or_default())
        )?;
    }

    Ok(())
}

/// Export report rows to a CSV file
pub fn export_csv(path: &str, rows: &[ReportRow]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), rows)
}
