#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use urlshort::application::services::{LinkService, LinkSettings};
use urlshort::domain::entities::Link;
use urlshort::domain::error::StoreError;
use urlshort::domain::repositories::LinkRepository;
use urlshort::domain::store::LinkStore;
use urlshort::infrastructure::persistence::MemoryLinkRepository;
use urlshort::routes::router;
use urlshort::state::AppState;
use urlshort::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://s.example.com";

/// Repository whose writes always fail and whose database is unreachable.
pub struct BrokenRepository;

#[async_trait]
impl LinkRepository for BrokenRepository {
    async fn fetch_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _link: &Link) -> Result<(), StoreError> {
        Err(StoreError::persistence("connection refused"))
    }

    async fn ping(&self) -> bool {
        false
    }
}

pub fn create_test_state_with(repository: Arc<dyn LinkRepository>) -> AppState {
    let store = Arc::new(LinkStore::new(repository));
    let link_service = Arc::new(LinkService::new(
        store,
        CodeGenerator::from_seed(2024),
        LinkSettings {
            base_url: BASE_URL.to_string(),
            code_length: 6,
            max_attempts: 10,
        },
    ));

    AppState::new(link_service)
}

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(MemoryLinkRepository::new()))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, id: &str, url: &str) {
    state.link_service.store().put(id, url).await.unwrap();
}
