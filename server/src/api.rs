use serde::{Deserialize, Deserializer, Serialize};

use tasklight_core::{Todo, TodoStats};

#[derive(Deserialize, Debug)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

/// PATCH body. The outer `Option` on `title` distinguishes "field absent"
/// from "field present but null": an empty body object is rejected, while an
/// explicit null title is a no-op read.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present_or_null")]
    pub title: Option<Option<String>>,
}

impl UpdateTodoRequest {
    /// True when the body carried none of the recognized fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Debug)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Serialize, Debug)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Serialize, Debug)]
pub struct TodoMessageResponse {
    pub message: String,
    pub todo: Todo,
}

#[derive(Serialize, Debug)]
pub struct DeleteTodoResponse {
    pub message: String,
    pub id: String,
}

#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub total_todos: usize,
    pub completed_todos: usize,
    pub pending_todos: usize,
}

impl From<TodoStats> for StatsResponse {
    fn from(stats: TodoStats) -> Self {
        Self {
            total_todos: stats.total,
            completed_todos: stats.completed,
            pending_todos: stats.pending,
        }
    }
}
