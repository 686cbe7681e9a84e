#![allow(dead_code)]

use menu_service::config::{MenuConfig, MongoConfig, StoreBackend, StoreConfig};
use menu_service::services::{InMemoryMenuStore, MenuStore};
use menu_service::startup::Application;
use reqwest::{Client, Response};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<dyn MenuStore>,
    pub client: Client,
}

/// Configuration bound to a random port with the given store settings.
pub fn test_config(backend: StoreBackend, uri: Option<&str>, database: Option<&str>) -> MenuConfig {
    MenuConfig {
        common: CoreConfig {
            port: 0,
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
        mongodb: MongoConfig {
            uri: uri.map(str::to_string),
            database: database.map(str::to_string),
        },
        store: StoreConfig { backend },
    }
}

impl TestApp {
    /// Spawn the service on an in-memory store and return it with a handle to
    /// that store for direct inspection.
    pub async fn spawn() -> (Self, Arc<InMemoryMenuStore>) {
        let memory = Arc::new(InMemoryMenuStore::new());
        let app = Self::spawn_with_store(memory.clone()).await;
        (app, memory)
    }

    pub async fn spawn_with_store(store: Arc<dyn MenuStore>) -> Self {
        let config = test_config(StoreBackend::Memory, None, None);
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    /// Spawn through the regular startup path, store selection included.
    pub async fn spawn_with_config(config: MenuConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::start(app).await
    }

    async fn start(app: Application) -> Self {
        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = Client::new();

        // Wait for the listener by polling the readiness endpoint
        let ready_url = format!("{}/ready", address);
        for _ in 0..50 {
            if client.get(&ready_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub async fn post_menu(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/menu", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_menu(&self, id: &str, body: &Value) -> Response {
        self.client
            .put(format!("{}/menu/{}", self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_menu(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/menu/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
