//! In-memory user store

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{StoreResult, UserStore};
use crate::models::User;

struct Inner {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

/// In-memory [`UserStore`] backed by a `BTreeMap` behind an async lock
///
/// Ids are assigned from a monotonically increasing counter starting at 1.
/// `delete_all` resets the counter, so a freshly emptied store hands out
/// id 1 again. BTreeMap iteration order gives `find_all` its ascending-id
/// ordering for free.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn create(&self, name: String) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        let user = User {
            id: inner.next_id,
            name,
            hours_worked: 0,
        };
        inner.next_id += 1;
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> StoreResult<User> {
        let mut inner = self.inner.write().await;
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: u64) -> StoreResult<Option<User>> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.remove(&id))
    }

    async fn delete_all(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.users.clear();
        inner.next_id = 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let alice = store.create("Alice".to_string()).await.unwrap();
        let bob = store.create("Bob".to_string()).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.hours_worked, 0);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = MemoryStore::new();
        for name in ["c", "a", "b"] {
            store.create(name.to_string()).await.unwrap();
        }

        let users = store.find_all().await.unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_record() {
        let store = MemoryStore::new();
        let mut user = store.create("Alice".to_string()).await.unwrap();
        user.hours_worked = 8;
        store.save(user).await.unwrap();

        let reloaded = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(reloaded.hours_worked, 8);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = MemoryStore::new();
        store.create("Alice".to_string()).await.unwrap();

        let removed = store.delete(1).await.unwrap();
        assert_eq!(removed.unwrap().name, "Alice");
        assert!(store.find_by_id(1).await.unwrap().is_none());
        assert!(store.delete(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_all_resets_id_counter() {
        let store = MemoryStore::new();
        store.create("Alice".to_string()).await.unwrap();
        store.create("Bob".to_string()).await.unwrap();

        store.delete_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        let fresh = store.create("Carol".to_string()).await.unwrap();
        assert_eq!(fresh.id, 1);
    }
}
