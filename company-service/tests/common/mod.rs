use company_service::config::CompanyConfig;
use company_service::services::{CompanyStore, InMemoryStore};
use company_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Spawns the service on a random port, backed by an in-memory store.
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let dyn_store: Arc<dyn CompanyStore> = store.clone();
        let address = spawn_app(Some(dyn_store)).await;

        TestApp { address, store }
    }
}

/// Spawns the service with the given store and returns its base URL.
pub async fn spawn_app(store: Option<Arc<dyn CompanyStore>>) -> String {
    let mut config = CompanyConfig::load().expect("Failed to load configuration");
    config.common.port = 0; // Random port for testing

    let app = Application::with_store(config, store)
        .await
        .expect("Failed to build test application");
    let port = app.port();

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    // Wait for the server to be ready by polling the root endpoint
    let client = reqwest::Client::new();
    let root_url = format!("http://127.0.0.1:{}/", port);
    for _ in 0..50 {
        if client.get(&root_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    format!("http://127.0.0.1:{}", port)
}
