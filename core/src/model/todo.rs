use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Todo {
    // Opaque id, assigned once at creation.
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_serialize_as_rfc3339_strings() {
        let todo = Todo::new("Buy milk".to_string());
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["title"], "Buy milk");
        assert_eq!(value["completed"], false);

        let created = value["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        let updated = value["updated_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(updated).is_ok());
    }
}
