//! In-memory roster storage, one opaque JSON array per owner.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

use charbuild_shared::Owner;

/// Rosters keyed by owner. Contents are stored as sent and never interpreted.
#[derive(Debug, Default)]
pub struct InMemoryCharacterStore {
    rosters: RwLock<HashMap<Owner, Vec<Value>>>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace an owner's roster wholesale. Returns the number of records stored.
    pub async fn save(&self, owner: Owner, records: Vec<Value>) -> usize {
        let count = records.len();
        self.rosters.write().await.insert(owner, records);
        count
    }

    /// An owner's roster; empty if nothing was saved.
    pub async fn load(&self, owner: &Owner) -> Vec<Value> {
        self.rosters
            .read()
            .await
            .get(owner)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_replaces_previous_roster() {
        let store = InMemoryCharacterStore::new();
        let owner = Owner::new("tester").unwrap();

        store.save(owner.clone(), vec![json!({"id": 1}), json!({"id": 2})]).await;
        let count = store.save(owner.clone(), vec![json!({"id": 7})]).await;

        assert_eq!(count, 1);
        assert_eq!(store.load(&owner).await, vec![json!({"id": 7})]);
    }

    #[tokio::test]
    async fn unknown_owner_loads_empty() {
        let store = InMemoryCharacterStore::new();
        let owner = Owner::new("nobody").unwrap();
        assert!(store.load(&owner).await.is_empty());
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let store = InMemoryCharacterStore::new();
        let alice = Owner::new("alice").unwrap();
        let bob = Owner::new("bob").unwrap();
        store.save(alice.clone(), vec![json!({"id": 1})]).await;
        assert!(store.load(&bob).await.is_empty());
        assert_eq!(store.load(&alice).await.len(), 1);
    }
}
