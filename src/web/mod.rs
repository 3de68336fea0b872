//! Browser-facing layer.
//!
//! Serves the landing page and the HTMX shorten form, and redirects suffixes
//! to their base URLs. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and redirect handlers
//! - [`middleware`] - HTMX request detection
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
