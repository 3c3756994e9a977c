//! Random reply selection.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::{ConfabError, Result};

/// Picks one reply uniformly at random from an intent's responses.
///
/// Each call is an independent draw, so the same reply can come up on
/// consecutive turns. The random source is injected; tests pass a seeded or
/// fixed one.
#[derive(Debug, Clone)]
pub struct ResponseSelector<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> ResponseSelector<R> {
    /// Create a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose one of `responses`.
    pub fn select<'a>(&mut self, responses: &'a [String]) -> Result<&'a str> {
        responses
            .choose(&mut self.rng)
            .map(String::as_str)
            .ok_or_else(|| ConfabError::insufficient_data("no responses to choose from"))
    }
}

impl ResponseSelector<StdRng> {
    /// A reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A selector seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}
