// Application state module
// Holds configuration and the process-wide random generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::types::Config;

/// Shared application state
///
/// The generator is seeded from OS entropy exactly once at startup and
/// shared across all request handlers behind a mutex. Reseeding per request
/// would correlate consecutive draws under load.
pub struct AppState {
    pub config: Config,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create state with a fixed generator seed, for deterministic tests.
    #[cfg(test)]
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        Self {
            config: config.clone(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw a uniform index in `0..len` from the shared generator.
    pub fn random_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap();
        rng.random_range(0..len)
    }
}
