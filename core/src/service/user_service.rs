use crate::model::user::User;
use crate::store::RecordStore;

/// Registry counterpart to the todo service, built on the same store.
/// Users carry no mutable fields; profile update and search are not
/// implemented yet.
pub struct UserService {
    store: RecordStore<User>,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    pub fn register(&mut self, name: String, email: String) -> User {
        let user = User::new(name, email);
        let inserted = self.store.add(user.clone());
        debug_assert!(inserted, "freshly generated id collided");
        user
    }

    pub fn list(&self) -> Vec<User> {
        self.store.list_all()
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.store.find_by_id(id).cloned()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_look_up() {
        let mut service = UserService::new();
        let alice = service.register("Alice".to_string(), "alice@example.com".to_string());
        let bob = service.register("Bob".to_string(), "bob@example.com".to_string());

        assert_eq!(service.count(), 2);
        assert_ne!(alice.id, bob.id);

        let found = service.get(&alice.id).unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(found.email, "alice@example.com");
    }

    #[test]
    fn list_preserves_registration_order() {
        let mut service = UserService::new();
        let a = service.register("Alice".to_string(), "alice@example.com".to_string());
        let b = service.register("Bob".to_string(), "bob@example.com".to_string());

        let ids: Vec<_> = service.list().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let mut service = UserService::new();
        let alice = service.register("Alice".to_string(), "alice@example.com".to_string());

        assert!(!service.delete("nope"));
        assert_eq!(service.count(), 1);

        assert!(service.delete(&alice.id));
        assert_eq!(service.count(), 0);
        assert!(service.get(&alice.id).is_none());
    }
}
