//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::UrlStore;
use crate::domain::shortener::Shortener;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, store: Arc<dyn UrlStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(shortener, store)),
        }
    }
}
