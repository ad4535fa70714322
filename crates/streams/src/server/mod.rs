mod cli;
mod error;
mod handlers;

pub use cli::App;

use crate::prelude::{eprintln, *};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::time::Instant;
use streams_core::catalog::{self, endpoints, paths};
use streams_core::names::NameOperations;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub names: NameOperations,
}

impl AppState {
    pub fn new(names: NameOperations) -> Self {
        Self { names }
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.options;
    let addr = options.addr();

    if global.verbose {
        eprintln!("Starting streams server on {addr}...");
    }

    let state = AppState::new(global.name_operations());
    log::info!("serving {} names", state.names.names().len());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;

    if global.verbose {
        eprintln!("Listening on http://{addr}");
        for endpoint in endpoints() {
            eprintln!("  {:<5} http://{addr}{}", endpoint.method, endpoint.path);
        }
    }
    log::info!("listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Serve(e.to_string()))?;

    log::info!("server stopped");
    Ok(())
}

/// Build the HTTP router over the given state
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(paths::INDEX, get(handlers::index))
        .route(paths::MAP, get(handlers::map_to_upper))
        .route(paths::FILTER, get(handlers::filter_by_starting_letter))
        .route(paths::PREDICATE, get(handlers::filter_by_length))
        .route(paths::SUPPLIER, get(handlers::generate_identifier))
        .route(paths::CONSUMER, get(handlers::format_all))
        .route(paths::UNARY, get(handlers::double))
        .route(paths::BINARY, post(handlers::sum))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    if let Some(summary) = route_summary(&method, &path) {
        log::debug!("{method} {path}: {summary}");
    }

    let response = next.run(request).await;

    log::info!(
        "{method} {path} -> {} ({:?})",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

/// Catalog summary of the route a request targets, if it is a documented one
fn route_summary(method: &axum::http::Method, path: &str) -> Option<&'static str> {
    let method = catalog::Method::parse(method.as_str())?;
    catalog::find(method, path).map(|endpoint| endpoint.summary)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}
