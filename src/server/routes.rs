use super::response::{self, CompareRequest, GenerateRequest, HistoryQuery, RunRequest};
use super::AppState;
use crate::error::LabError;
use crate::generator::{generate, DataShape, GenerateOptions};
use crate::history::DEFAULT_HISTORY_LIMIT;
use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Body;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const ROUTES: [&str; 5] = [
    "/api/algorithms",
    "/api/run",
    "/api/generate",
    "/api/compare",
    "/api/history",
];

/// Route one request. Never fails: every error becomes a JSON error envelope.
pub async fn handle<B>(state: Arc<AppState>, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "http_request",
        http.method = %method,
        http.path = %path,
        http.request_id = %request_id
    );

    async move {
        let started = Instant::now();
        let response = route(state, req).await;
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}

async fn route<B>(state: Arc<AppState>, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method, path.as_str()) {
        (Method::GET, "/api/algorithms") => list_algorithms(&state),
        (Method::POST, "/api/run") => run_algorithm(state, req).await,
        (Method::POST, "/api/generate") => generate_data(state, req).await,
        (Method::POST, "/api/compare") => compare_algorithms(state, req).await,
        (Method::GET, "/api/history") => history(&state, &req),
        (_, path) if ROUTES.contains(&path) => {
            response::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        (_, path) => response::error(StatusCode::NOT_FOUND, format!("No route for {}", path)),
    }
}

/// Read and parse a JSON body of at most `max_body_bytes`.
async fn read_json<T, B>(state: &AppState, req: Request<B>) -> Result<T, Response<Full<Bytes>>>
where
    T: DeserializeOwned,
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let limited = Limited::new(req.into_body(), state.max_body_bytes);
    let bytes = match limited.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.downcast_ref::<http_body_util::LengthLimitError>().is_some() => {
            return Err(response::error(
                StatusCode::BAD_REQUEST,
                format!(
                    "Request body is too large (maximum {} bytes)",
                    state.max_body_bytes
                ),
            ));
        }
        Err(err) => {
            return Err(response::error(
                StatusCode::BAD_REQUEST,
                format!("Failed to read request body: {}", err),
            ));
        }
    };

    if bytes.is_empty() {
        return Err(response::error(StatusCode::BAD_REQUEST, "No data provided"));
    }
    serde_json::from_slice(&bytes)
        .map_err(|e| response::error(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e)))
}

/// Run CPU-bound work off the async executor.
async fn blocking<T, F>(work: F) -> Result<T, LabError>
where
    F: FnOnce() -> Result<T, LabError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| LabError::Internal(format!("execution task failed: {}", e)))?
}

fn list_algorithms(state: &AppState) -> Response<Full<Bytes>> {
    response::json(
        StatusCode::OK,
        &json!({
            "success": true,
            "algorithms": state.manager.list(),
        }),
    )
}

async fn run_algorithm<B>(state: Arc<AppState>, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let body: RunRequest = match read_json(&state, req).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let (algorithm, data, options) = match body.into_parts() {
        Ok(parts) => parts,
        Err(err) => return response::lab_error(&err),
    };

    let manager = Arc::clone(&state.manager);
    let id = algorithm.clone();
    match blocking(move || manager.execute(&id, &data, &options)).await {
        Ok(result) => response::json(
            StatusCode::OK,
            &json!({
                "success": true,
                "algorithm": algorithm,
                "result": result,
            }),
        ),
        Err(err) => {
            tracing::debug!(%algorithm, error = %err, "run rejected");
            response::lab_error(&err)
        }
    }
}

async fn generate_data<B>(state: Arc<AppState>, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let body: GenerateRequest = match read_json(&state, req).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let shape: DataShape = match body.shape.parse() {
        Ok(shape) => shape,
        Err(err) => return response::lab_error(&err),
    };
    let defaults = GenerateOptions::default();
    let options = GenerateOptions {
        min_val: body.min_val.unwrap_or(defaults.min_val),
        max_val: body.max_val.unwrap_or(defaults.max_val),
        swaps: body.swaps.unwrap_or(defaults.swaps),
        min_length: body.min_length.unwrap_or(defaults.min_length),
        max_length: body.max_length.unwrap_or(defaults.max_length),
        seed: body.seed,
        max_size: state.manager.max_input_size(),
    };
    // Negative sizes fall through to the range check
    let size = usize::try_from(body.size).unwrap_or(0);

    match blocking(move || generate(shape, size, &options)).await {
        Ok(data) => response::json(
            StatusCode::OK,
            &json!({
                "success": true,
                "data": data,
                "type": shape,
                "size": data.len(),
            }),
        ),
        Err(err) => response::lab_error(&err),
    }
}

async fn compare_algorithms<B>(state: Arc<AppState>, req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let body: CompareRequest = match read_json(&state, req).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };
    let (ids, data, options) = match body.into_parts() {
        Ok(parts) => parts,
        Err(err) => return response::lab_error(&err),
    };

    let manager = Arc::clone(&state.manager);
    let entries = match blocking(move || manager.compare(&ids, &data, &options)).await {
        Ok(entries) => entries,
        Err(err) => return response::lab_error(&err),
    };

    let mut results = Map::new();
    for entry in entries {
        let value = match entry.outcome {
            Ok(result) => serde_json::to_value(&result)
                .unwrap_or_else(|e| json!({ "error": format!("Failed to serialize result: {}", e) })),
            Err(err) => json!({ "error": err.to_string() }),
        };
        results.insert(entry.algorithm, value);
    }

    response::json(
        StatusCode::OK,
        &json!({
            "success": true,
            "results": Value::Object(results),
        }),
    )
}

fn history<B>(state: &AppState, req: &Request<B>) -> Response<Full<Bytes>> {
    let query: HistoryQuery = serde_urlencoded::from_str(req.uri().query().unwrap_or(""))
        .unwrap_or_default();
    // Unparseable limits fall back to the default
    let limit = query
        .limit
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    response::json(
        StatusCode::OK,
        &json!({
            "success": true,
            "history": state.manager.history(limit),
        }),
    )
}
