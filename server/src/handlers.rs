//! Axum handlers for `/api/todos`.
//!
//! # Design
//! JSON bodies are extracted as `Result<Json<T>, JsonRejection>` so that the
//! handler decides the error: a bad create body is the same validation error
//! as a missing `text`, and a bad update body only matters once the id is
//! known to exist. Path ids arrive as raw strings; an unparseable id is
//! reported as not found.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::TodoError;
use crate::model::{parse_id, CreateTodo, Todo, TodoId, UpdateTodo};
use crate::state::AppState;

fn resolve_id(raw: &str) -> Result<TodoId, TodoError> {
    parse_id(raw).ok_or_else(|| {
        tracing::debug!(id = raw, "unparseable todo id");
        TodoError::NotFound
    })
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let store = state.read().await;
    Json(store.list().to_vec())
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let id = resolve_id(&id)?;
    let todo = state.read().await.get(id)?.clone();
    Ok(Json(todo))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected create body");
            CreateTodo::default()
        }
    };

    let todo = state.write().await.create(input.text.as_deref())?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, TodoError> {
    let id = resolve_id(&id)?;
    let mut store = state.write().await;
    store.get(id)?;

    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(id, %rejection, "rejected update body");
        TodoError::completed_not_boolean()
    })?;

    let todo = store.update_completion(id, input.completed)?;
    tracing::info!(id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoError> {
    let id = resolve_id(&id)?;
    state.write().await.delete(id)?;
    tracing::info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    todos: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let todos = state.read().await.len();
    Json(Health { status: "ok", todos })
}
