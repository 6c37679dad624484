use chrono::Utc;

use crate::model::stats::TodoStats;
use crate::model::todo::Todo;
use crate::store::RecordStore;

/// Mutation policy over the todo store: records are never edited in place,
/// every change builds a replacement value that keeps `id` and `created_at`
/// and refreshes `updated_at`.
pub struct TodoService {
    store: RecordStore<Todo>,
}

impl TodoService {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    pub fn create(&mut self, title: String) -> Todo {
        let todo = Todo::new(title);
        let inserted = self.store.add(todo.clone());
        debug_assert!(inserted, "freshly generated id collided");
        todo
    }

    pub fn list(&self) -> Vec<Todo> {
        self.store.list_all()
    }

    pub fn get(&self, id: &str) -> Option<Todo> {
        self.store.find_by_id(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Partial update. `None` means "leave the title alone": the stored
    /// record is returned untouched, `updated_at` included.
    pub fn update_title(&mut self, id: &str, title: Option<String>) -> Option<Todo> {
        let current = self.store.find_by_id(id)?.clone();
        let title = match title {
            Some(title) => title,
            None => return Some(current),
        };
        let updated = Todo {
            title,
            updated_at: Utc::now(),
            ..current
        };
        self.store.replace(updated.clone());
        Some(updated)
    }

    pub fn toggle(&mut self, id: &str) -> Option<Todo> {
        let current = self.store.find_by_id(id)?.clone();
        let updated = Todo {
            completed: !current.completed,
            updated_at: Utc::now(),
            ..current
        };
        self.store.replace(updated.clone());
        Some(updated)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn stats(&self) -> TodoStats {
        let todos = self.store.list_all();
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new()
    }
}
