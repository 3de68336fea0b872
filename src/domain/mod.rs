//! Domain layer: suffix minting and the storage contract.
//!
//! Nothing here depends on HTTP or on a concrete store.
//!
//! # Architecture
//!
//! - [`encoder`] - fixed-width base-62 encoding
//! - [`validator`] - pre-mint URL checks
//! - [`shortener`] - counter-backed suffix generator
//! - [`entities`] - [`entities::UrlPair`]
//! - [`repositories`] - [`repositories::UrlStore`] trait
//! - [`errors`] - [`errors::ShortenError`] and [`errors::StoreError`]
//!
//! # Flow
//!
//! 1. [`validator::validate_url`] rejects empty or domain-less input
//! 2. [`shortener::Shortener`] increments its counter under a mutex
//! 3. [`encoder::encode`] turns the counter into a suffix
//! 4. The caller saves `(suffix, url)` through a [`repositories::UrlStore`]

pub mod encoder;
pub mod entities;
pub mod errors;
pub mod repositories;
pub mod shortener;
pub mod validator;
