//! JSON envelopes and request bodies.

use crate::data::{Dataset, Element};
use crate::error::{LabError, Result};
use crate::registry::RunOptions;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const SERIALIZE_FAILED: &str = r#"{"success":false,"error":"Failed to serialize response"}"#;

pub(crate) fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_status(status, Bytes::from(bytes)),
        Err(err) => {
            tracing::error!("failed to serialize response: {}", err);
            with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(SERIALIZE_FAILED.as_bytes()),
            )
        }
    }
}

fn with_status(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

pub(crate) fn error(status: StatusCode, message: impl std::fmt::Display) -> Response<Full<Bytes>> {
    json(
        status,
        &json!({
            "success": false,
            "error": message.to_string(),
        }),
    )
}

pub(crate) fn lab_error(err: &LabError) -> Response<Full<Bytes>> {
    error(err.status_code(), err)
}

/// Input list as sent by the client; anything but an array is rejected.
fn dataset(data: Option<Value>) -> Result<Dataset> {
    match data {
        None | Some(Value::Null) => Err(LabError::invalid("Input data is required")),
        Some(Value::Array(items)) => Dataset::from_json(&items),
        Some(_) => Err(LabError::invalid("Data must be a list")),
    }
}

fn options(target: Option<Value>, trace: bool) -> Result<RunOptions> {
    let target = match target {
        None | Some(Value::Null) => None,
        Some(value) => Some(Element::from_json(&value)?),
    };
    Ok(RunOptions {
        target,
        include_steps: trace,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunRequest {
    pub algorithm: Option<String>,
    pub data: Option<Value>,
    pub target: Option<Value>,
    #[serde(default)]
    pub trace: bool,
}

impl RunRequest {
    pub fn into_parts(self) -> Result<(String, Dataset, RunOptions)> {
        let algorithm = self
            .algorithm
            .filter(|a| !a.is_empty())
            .ok_or_else(|| LabError::invalid("Algorithm name is required"))?;
        let data = dataset(self.data)?;
        Ok((algorithm, data, options(self.target, self.trace)?))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    #[serde(default)]
    pub algorithms: Vec<String>,
    pub data: Option<Value>,
    pub target: Option<Value>,
    #[serde(default)]
    pub trace: bool,
}

impl CompareRequest {
    pub fn into_parts(self) -> Result<(Vec<String>, Dataset, RunOptions)> {
        if self.algorithms.is_empty() {
            return Err(LabError::invalid("At least one algorithm is required"));
        }
        let data = dataset(self.data)?;
        Ok((self.algorithms, data, options(self.target, self.trace)?))
    }
}

fn default_shape() -> String {
    "random".to_string()
}

fn default_size() -> i64 {
    100
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateRequest {
    #[serde(rename = "type", default = "default_shape")]
    pub shape: String,
    #[serde(default = "default_size")]
    pub size: i64,
    pub min_val: Option<i64>,
    pub max_val: Option<i64>,
    pub swaps: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    pub limit: Option<String>,
}
