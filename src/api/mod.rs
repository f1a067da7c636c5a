//! Requests against the remote todo API.

use crate::config::API_BASE_URL;
use crate::core::error::FetchError;
use crate::models::Todo;
use crate::utils::fetch_json;

/// URL of the todo collection.
pub fn todos_url() -> String {
    format!("{}/todos", API_BASE_URL)
}

/// URL of a single todo.
pub fn todo_url(id: u32) -> String {
    format!("{}/todos/{}", API_BASE_URL, id)
}

/// `GET /todos`
pub async fn get_todos() -> Result<Vec<Todo>, FetchError> {
    fetch_json(&todos_url()).await
}

/// `GET /todos/{id}`
pub async fn get_todo(id: u32) -> Result<Todo, FetchError> {
    fetch_json(&todo_url(id)).await
}
