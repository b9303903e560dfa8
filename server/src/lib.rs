//! In-memory REST service for todos.
//!
//! # Overview
//! Serves list/create/update/delete over `/api/todos` backed by a single
//! owned [`TodoStore`]. The router is built from an explicit [`AppState`];
//! there is no process-global state.
//!
//! # Design
//! - `store` holds the collection and id counter and knows nothing about HTTP.
//! - `handlers` translate requests into store calls and store errors into
//!   `{"error": ...}` responses.
//! - `run`/`serve` take an already-bound listener so tests can pick a port.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod store;
pub mod telemetry;

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::TodoError;
pub use model::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use state::AppState;
pub use store::TodoStore;

use handlers::{create_todo, delete_todo, get_todo, health, list_todos, update_todo};

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(AppState::new())
}

/// Router over the given state. Keep a clone of `state` to inspect or reset
/// the store from outside the HTTP surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Apply the optional layers selected by `config`.
pub fn configure(router: Router, config: &ServerConfig) -> Router {
    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
