//! Random input generation.

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;

use rand::Rng;

use crate::config::GenerateConfig;

/// Draw `config.len` values uniformly from `config.min..=config.max`.
pub fn generate_array<R: Rng + ?Sized>(rng: &mut R, config: &GenerateConfig) -> Vec<i64> {
    (0..config.len)
        .map(|_| rng.random_range(config.min..=config.max))
        .collect()
}

/// `generate_array` backed by the thread-local RNG.
#[must_use]
pub fn random_array(config: &GenerateConfig) -> Vec<i64> {
    generate_array(&mut rand::rng(), config)
}
