//! TODO Endpoints
//!
//! Frontend bindings for `/todos` on the REST server.

use super::{encode, request_json, ApiError, Method};
use crate::config::AppConfig;
use crate::models::{DeleteResponse, NewTodo, Todo, TodoPatch};
use crate::validation::{validate_description, validate_title};

pub async fn list_todos(config: &AppConfig) -> Result<Vec<Todo>, ApiError> {
    let todos: Vec<Todo> = request_json(Method::Get, &config.todos_url(), None).await?;
    log::info!("Loaded {} todos", todos.len());
    Ok(todos)
}

pub async fn get_todo(config: &AppConfig, id: u32) -> Result<Todo, ApiError> {
    request_json(Method::Get, &config.todo_url(id), None).await
}

pub async fn create_todo(config: &AppConfig, new_todo: &NewTodo<'_>) -> Result<Todo, ApiError> {
    validate_title(new_todo.title).map_err(ApiError::Invalid)?;
    validate_description(new_todo.description).map_err(ApiError::Invalid)?;

    let todo: Todo = request_json(Method::Post, &config.todos_url(), Some(encode(new_todo)?)).await?;
    log::info!("Created todo #{}", todo.id);
    Ok(todo)
}

/// Send a partial update; only the fields set in `patch` change
pub async fn update_todo(config: &AppConfig, id: u32, patch: &TodoPatch) -> Result<Todo, ApiError> {
    if let Some(title) = &patch.title {
        validate_title(title).map_err(ApiError::Invalid)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description).map_err(ApiError::Invalid)?;
    }

    let todo: Todo = request_json(Method::Put, &config.todo_url(id), Some(encode(patch)?)).await?;
    log::info!("Updated todo #{}", todo.id);
    Ok(todo)
}

pub async fn delete_todo(config: &AppConfig, id: u32) -> Result<DeleteResponse, ApiError> {
    let response: DeleteResponse = request_json(Method::Delete, &config.todo_url(id), None).await?;
    log::info!("Deleted todo #{}: {}", id, response.message.as_deref().unwrap_or("ok"));
    Ok(response)
}

/// Flip completion relative to the state the caller last saw
pub async fn toggle_todo(config: &AppConfig, id: u32, currently_completed: bool) -> Result<Todo, ApiError> {
    update_todo(config, id, &TodoPatch::completed(!currently_completed)).await
}
