use super::store::{parse_id, MenuStore, StoreError};
use crate::models::menu_item::MENU_ITEMS_COLLECTION;
use crate::models::{MenuItem, MenuItemChanges};
use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};

/// Database used when neither configuration nor the URI names one.
pub const DEFAULT_DATABASE: &str = "menu";

#[derive(Clone)]
pub struct MongoMenuStore {
    client: MongoClient,
    db: Database,
}

impl MongoMenuStore {
    /// Build the client. The driver connects lazily, so an unreachable server
    /// surfaces on the first operation rather than here.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self, StoreError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            StoreError::from(e)
        })?;

        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        tracing::info!(database = %db.name(), "MongoDB client ready");

        Ok(Self { client, db })
    }

    /// Ping the server in the background and log the outcome.
    pub fn spawn_connection_check(&self) {
        let store = self.clone();
        tokio::spawn(async move {
            match store.health_check().await {
                Ok(()) => tracing::info!("Connected to MongoDB"),
                Err(e) => tracing::error!("Error connecting to MongoDB: {}", e),
            }
        });
    }

    pub fn menu_items(&self) -> Collection<MenuItem> {
        self.db.collection(MENU_ITEMS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn insert(&self, item: MenuItem) -> Result<MenuItem, StoreError> {
        self.menu_items()
            .insert_one(&item, None)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %item.id, "Failed to insert menu item: {}", e);
                StoreError::from(e)
            })?;
        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let id = parse_id(id)?;
        self.menu_items()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %id, "Failed to find menu item: {}", e);
                StoreError::from(e)
            })
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: MenuItemChanges,
    ) -> Result<Option<MenuItem>, StoreError> {
        // `$set` with no fields is rejected by the server
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let id = parse_id(id)?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.menu_items()
            .find_one_and_update(doc! { "_id": id }, changes.to_update_document(), options)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %id, "Failed to update menu item: {}", e);
                StoreError::from(e)
            })
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let id = parse_id(id)?;
        self.menu_items()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(menu_item_id = %id, "Failed to delete menu item: {}", e);
                StoreError::from(e)
            })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
