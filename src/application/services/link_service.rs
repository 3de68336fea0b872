//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlPair;
use crate::domain::repositories::UrlStore;
use crate::domain::shortener::Shortener;
use crate::error::AppError;
use serde_json::json;
use tracing::{error, info};

/// Service for shortening URLs and resolving suffixes.
///
/// The shortener only mints suffixes; this service persists each new
/// mapping and reads mappings back. The shortener's lock is released before
/// any store call.
pub struct LinkService {
    shortener: Arc<Shortener>,
    store: Arc<dyn UrlStore>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(shortener: Arc<Shortener>, store: Arc<dyn UrlStore>) -> Self {
        Self { shortener, store }
    }

    /// Mints a suffix for `base_url` and saves the mapping.
    ///
    /// # Deduplication
    ///
    /// None. Shortening the same URL twice creates two mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or has no domain.
    /// Returns [`AppError::Internal`] if the counter is exhausted.
    /// Returns [`AppError::Unavailable`] if the store rejects the write. The
    /// counter slot stays consumed in that case.
    pub async fn shorten(&self, base_url: &str) -> Result<UrlPair, AppError> {
        let suffix = self.shortener.shorten_url(base_url)?;

        self.store.save(&suffix, base_url).await.map_err(|e| {
            error!("Failed to save {} -> {}: {}", suffix, base_url, e);
            AppError::from(e)
        })?;

        info!("Shortened {} -> {}", base_url, suffix);

        Ok(UrlPair::new(suffix, base_url, self.shortener.domain()))
    }

    /// Resolves a suffix to its stored pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists. A failed or
    /// timed-out store read is logged and reported as not found too.
    pub async fn expand(&self, suffix: &str) -> Result<UrlPair, AppError> {
        let base_url = self
            .store
            .load(suffix)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to load {}: {}", suffix, e);
                None
            })
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "suffix": suffix }))
            })?;

        Ok(UrlPair::new(suffix, base_url, self.shortener.domain()))
    }

    /// Domain prefix shown alongside suffixes.
    pub fn domain(&self) -> String {
        self.shortener.domain()
    }

    pub fn shortener(&self) -> &Shortener {
        &self.shortener
    }

    pub fn store(&self) -> &dyn UrlStore {
        self.store.as_ref()
    }
}
