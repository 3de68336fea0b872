//! Application layer services implementing business logic.
//!
//! Services compose the domain shortener with a mapping store and expose the
//! operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - minting, persisting, and resolving suffixes

pub mod services;
