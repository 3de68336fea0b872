//! Counter-backed suffix minting.
//!
//! A [`Shortener`] owns a monotonically increasing counter and turns every
//! valid URL into a fresh suffix by encoding the next counter value. It does not
//! persist anything; storing the `(suffix, url)` mapping is the caller's job.
//!
//! Minting is deliberately not idempotent: submitting the same URL twice
//! yields two different suffixes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::encoder::{Base62Encoder, Encoder, max_value};
use crate::domain::errors::ShortenError;
use crate::domain::validator::validate_url;

pub const DEFAULT_DOMAIN: &str = "example.com/";
pub const DEFAULT_SUFFIX_WIDTH: u32 = 7;
/// `62^7 - 1`, rendered as `zzzzzzz`.
pub const DEFAULT_COUNTER_CEILING: u64 = 3_521_614_606_207;
/// Starting well above zero keeps early suffixes from looking sequential.
pub const DEFAULT_COUNTER: u64 = 500;

/// Shortener settings plus the live counter.
///
/// Fields only change through the setters below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    domain: String,
    suffix_width: u32,
    counter_ceiling: u64,
    counter: u64,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            suffix_width: DEFAULT_SUFFIX_WIDTH,
            counter_ceiling: DEFAULT_COUNTER_CEILING,
            counter: DEFAULT_COUNTER,
        }
    }
}

impl ShortenerConfig {
    /// Builds a config whose ceiling is the largest value `suffix_width`
    /// symbols can hold.
    pub fn new(domain: impl Into<String>, suffix_width: u32, counter: u64) -> Self {
        Self {
            domain: domain.into(),
            suffix_width,
            counter_ceiling: max_value(suffix_width),
            counter,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn suffix_width(&self) -> u32 {
        self.suffix_width
    }

    pub fn counter_ceiling(&self) -> u64 {
        self.counter_ceiling
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    pub fn set_suffix_width(&mut self, suffix_width: u32) {
        self.suffix_width = suffix_width;
    }

    pub fn set_counter_ceiling(&mut self, counter_ceiling: u64) {
        self.counter_ceiling = counter_ceiling;
    }

    pub fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }
}

/// Mints suffixes from a counter guarded by a single mutex.
///
/// The ceiling check, validation, increment and encode all happen while the
/// lock is held, so concurrent callers never observe the same counter value.
/// The lock is never held across I/O.
pub struct Shortener {
    state: Mutex<ShortenerConfig>,
    encoder: Box<dyn Encoder>,
}

impl Shortener {
    /// Creates a shortener that encodes with [`Base62Encoder`] at the
    /// configured width.
    pub fn new(config: ShortenerConfig) -> Self {
        let encoder = Base62Encoder::new(config.suffix_width as usize);
        Self::with_encoder(config, encoder)
    }

    pub fn with_encoder(config: ShortenerConfig, encoder: impl Encoder + 'static) -> Self {
        Self {
            state: Mutex::new(config),
            encoder: Box::new(encoder),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ShortenerConfig::default())
    }

    /// Mints a new suffix for `base_url`.
    ///
    /// The first successful call on a default shortener encodes `501`.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::CounterExceeded`] once the counter reaches its ceiling
    /// - [`ShortenError::InvalidUrl`] for empty or domain-less input
    ///
    /// Neither error advances the counter.
    pub fn shorten_url(&self, base_url: &str) -> Result<String, ShortenError> {
        let mut state = self.lock();

        if state.counter >= state.counter_ceiling {
            warn!(
                current = state.counter,
                max = state.counter_ceiling,
                "Counter ceiling reached"
            );
            return Err(ShortenError::CounterExceeded {
                current: state.counter,
                max: state.counter_ceiling,
            });
        }

        validate_url(base_url)?;

        state.counter += 1;
        let suffix = self.encoder.encode(state.counter);
        debug!(counter = state.counter, %suffix, "Minted suffix");

        Ok(suffix)
    }

    /// Returns a snapshot of the current configuration and counter.
    pub fn config(&self) -> ShortenerConfig {
        self.lock().clone()
    }

    pub fn domain(&self) -> String {
        self.lock().domain.clone()
    }

    pub fn suffix_width(&self) -> u32 {
        self.lock().suffix_width
    }

    pub fn counter(&self) -> u64 {
        self.lock().counter
    }

    pub fn set_domain(&self, domain: impl Into<String>) {
        self.lock().set_domain(domain);
    }

    /// Resets the counter. Only meant for tests and operator intervention:
    /// moving it backwards re-issues suffixes that may already be stored.
    pub fn set_counter(&self, counter: u64) {
        self.lock().set_counter(counter);
    }

    fn lock(&self) -> MutexGuard<'_, ShortenerConfig> {
        // The guarded data is plain values, so a panic elsewhere cannot leave
        // it half-updated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Shortener {
    fn default() -> Self {
        Self::with_defaults()
    }
}
