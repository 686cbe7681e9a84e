use crate::models::{MenuItem, MenuItemChanges};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid menu item id \"{id}\": {reason}")]
    InvalidId { id: String, reason: String },

    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for menu items.
///
/// Lookups by id return `Ok(None)` when no item matches; a malformed id is
/// an error (`StoreError::InvalidId`), not a miss.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn insert(&self, item: MenuItem) -> Result<MenuItem, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError>;

    /// Apply `changes` and return the item as it is after the update.
    async fn update_by_id(
        &self,
        id: &str,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError>;

    /// Remove the item and return it as it was before deletion.
    async fn delete_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|e| StoreError::InvalidId {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Stand-in used when the database client could not be created at startup.
/// The listener still comes up; every store call fails with the startup error.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl MenuStore for UnavailableStore {
    async fn insert(&self, _item: MenuItem) -> Result<MenuItem, StoreError> {
        Err(self.error())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        parse_id(id)?;
        Err(self.error())
    }

    async fn update_by_id(
        &self,
        id: &str,
        _changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        parse_id(id)?;
        Err(self.error())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        parse_id(id)?;
        Err(self.error())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(self.error())
    }
}
