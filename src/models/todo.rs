//! Todo records served by the remote API.

use serde::{Deserialize, Serialize};

/// A todo as returned by `GET /todos/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
    #[serde(default)]
    pub completed: bool,
}

/// Check that a fetched todo is usable: positive id and user id, non-blank title.
pub fn is_a_todo(todo: &Todo) -> bool {
    todo.id > 0 && todo.user_id > 0 && !todo.title.trim().is_empty()
}

/// Check that every todo in the list passes [`is_a_todo`].
pub fn is_an_array_of_todos(todos: &Vec<Todo>) -> bool {
    todos.iter().all(is_a_todo)
}
