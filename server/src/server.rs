use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use tasklight_core::TodoService;

use crate::api::{
    CreateTodoRequest, DeleteTodoResponse, StatsResponse, TodoListResponse, TodoMessageResponse,
    TodoResponse, UpdateTodoRequest,
};
use crate::errors::ApiError;

// One service behind one lock: every request performs its single store
// operation under mutual exclusion, as the in-memory model requires when
// the runtime serves connections on multiple workers.
pub type SharedTodos = Arc<Mutex<TodoService>>;

pub fn build_router(state: SharedTodos) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/stats", get(todo_stats))
        .route(
            "/api/todos/:id",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/api/todos/:id/toggle", post(toggle_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the tasklight API",
        "endpoints": {
            "GET /api/todos": "list all todos",
            "POST /api/todos": "create a todo",
            "GET /api/todos/{id}": "fetch a single todo",
            "PATCH /api/todos/{id}": "update a todo",
            "DELETE /api/todos/{id}": "delete a todo",
            "POST /api/todos/{id}/toggle": "toggle completion state",
            "GET /api/todos/stats": "todo statistics"
        }
    }))
}

async fn list_todos(State(state): State<SharedTodos>) -> Json<TodoListResponse> {
    let todos = state.lock().await.list();
    Json(TodoListResponse { todos })
}

async fn create_todo(
    State(state): State<SharedTodos>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoMessageResponse>), ApiError> {
    let title = payload
        .title
        .ok_or_else(|| ApiError::Validation("title is required".to_string()))?;
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("title must not be blank".to_string()));
    }

    let todo = state.lock().await.create(title.to_string());
    tracing::info!(id = %todo.id, "todo created");

    Ok((
        StatusCode::CREATED,
        Json(TodoMessageResponse {
            message: "todo created".to_string(),
            todo,
        }),
    ))
}

async fn get_todo(
    State(state): State<SharedTodos>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state
        .lock()
        .await
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("todo not found".to_string()))?;

    Ok(Json(TodoResponse { todo }))
}

async fn update_todo(
    State(state): State<SharedTodos>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<TodoMessageResponse>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::Validation("request body is required".to_string()));
    }

    // A present-but-null title flattens to "no change" below; only a
    // provided title is validated.
    let title = match payload.title.flatten() {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ApiError::Validation("title must not be blank".to_string()));
            }
            Some(title)
        }
        None => None,
    };

    let todo = state
        .lock()
        .await
        .update_title(&id, title)
        .ok_or_else(|| ApiError::NotFound("todo not found".to_string()))?;

    Ok(Json(TodoMessageResponse {
        message: "todo updated".to_string(),
        todo,
    }))
}

async fn delete_todo(
    State(state): State<SharedTodos>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    let removed = state.lock().await.delete(&id);
    if !removed {
        return Err(ApiError::NotFound("todo not found".to_string()));
    }
    tracing::info!(id = %id, "todo deleted");

    Ok(Json(DeleteTodoResponse {
        message: "todo deleted".to_string(),
        id,
    }))
}

async fn toggle_todo(
    State(state): State<SharedTodos>,
    Path(id): Path<String>,
) -> Result<Json<TodoMessageResponse>, ApiError> {
    let todo = state
        .lock()
        .await
        .toggle(&id)
        .ok_or_else(|| ApiError::NotFound("todo not found".to_string()))?;

    Ok(Json(TodoMessageResponse {
        message: "todo status updated".to_string(),
        todo,
    }))
}

async fn todo_stats(State(state): State<SharedTodos>) -> Json<StatsResponse> {
    let stats = state.lock().await.stats();
    Json(StatsResponse::from(stats))
}
