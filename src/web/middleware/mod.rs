//! Web-specific request helpers.

pub mod htmx;

pub use htmx::HxRequest;
