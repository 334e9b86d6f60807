//! HTTP surface over the algorithm manager.
//!
//! A plain hyper 1.x HTTP/1 server: one tokio task per connection, one
//! [`handle`] call per request. Routing is a `match` on method and path; the
//! handler is generic over the body type so it can be driven in-process.

mod response;
mod routes;

pub use routes::handle;

use crate::config::Config;
use crate::manager::AlgorithmManager;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared state handed to every request.
#[derive(Debug)]
pub struct AppState {
    pub manager: Arc<AlgorithmManager>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(manager: AlgorithmManager, max_body_bytes: usize) -> Self {
        Self {
            manager: Arc::new(manager),
            max_body_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AlgorithmManager::from_config(&config.engine),
            config.server.max_body_bytes,
        )
    }
}

/// Bind `config.server.addr` and serve until `shutdown` resolves.
pub async fn run(config: &Config, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.server.addr).await?;
    let state = Arc::new(AppState::from_config(config));
    serve(listener, state, shutdown).await
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Connections already accepted keep running to completion on their own tasks.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        algorithms = state.manager.registry().len(),
        "algoscope listening on http://{}",
        addr
    );

    tokio::pin!(shutdown);
    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = &mut shutdown => {
                tracing::info!("shutdown requested, no longer accepting connections");
                return Ok(());
            }
        };
        let io = TokioIo::new(stream);
        let state = Arc::clone(&state);

        tokio::task::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let state = Arc::clone(&state);
                async move { Ok::<_, Infallible>(handle(state, req).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!(%peer, "error serving connection: {:?}", err);
            }
        });
    }
}
