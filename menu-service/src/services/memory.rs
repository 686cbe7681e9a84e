use super::store::{parse_id, MenuStore, StoreError};
use crate::models::{MenuItem, MenuItemChanges};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store for development runs and tests.
#[derive(Default)]
pub struct InMemoryMenuStore {
    items: RwLock<HashMap<ObjectId, MenuItem>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored item, in no particular order.
    pub async fn items(&self) -> Vec<MenuItem> {
        self.items.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn insert(&self, item: MenuItem) -> Result<MenuItem, StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        let id = parse_id(id)?;
        let mut items = self.items.write().await;
        Ok(items.get_mut(&id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.items.write().await.remove(&id))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
