//! Domain entities.

pub mod url_pair;

pub use url_pair::UrlPair;
