//! Runtime configuration parsed from environment variables.
//!
//! Every knob has a default; a missing or unparsable value falls back to it
//! rather than failing start-up.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GENERATE_LEN: usize = 10;
pub const DEFAULT_GENERATE_MIN: i64 = 10;
pub const DEFAULT_GENERATE_MAX: i64 = 100;
pub const DEFAULT_PLAYBACK_TICK_MS: u64 = 100;

/// Shape of the random arrays handed out by `/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub len: usize,
    pub min: i64,
    pub max: i64,
}

impl GenerateConfig {
    /// Build a generator config. Inverted bounds are swapped.
    #[must_use]
    pub fn new(len: usize, min: i64, max: i64) -> Self {
        if min <= max { Self { len, min, max } } else { Self { len, min: max, max: min } }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATE_LEN, DEFAULT_GENERATE_MIN, DEFAULT_GENERATE_MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub generate: GenerateConfig,
    /// Delay between animation frames in the player.
    pub playback_tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            generate: GenerateConfig::default(),
            playback_tick: Duration::from_millis(DEFAULT_PLAYBACK_TICK_MS),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GENERATE_LEN`: default 10
    /// - `GENERATE_MIN` / `GENERATE_MAX`: default 10 / 100
    /// - `PLAYBACK_TICK_MS`: default 100, clamped to at least 1
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let tick_ms: u64 = parse_or(lookup("PLAYBACK_TICK_MS"), DEFAULT_PLAYBACK_TICK_MS);

        Self {
            port: parse_or(lookup("PORT"), DEFAULT_PORT),
            generate: GenerateConfig::new(
                parse_or(lookup("GENERATE_LEN"), DEFAULT_GENERATE_LEN),
                parse_or(lookup("GENERATE_MIN"), DEFAULT_GENERATE_MIN),
                parse_or(lookup("GENERATE_MAX"), DEFAULT_GENERATE_MAX),
            ),
            playback_tick: Duration::from_millis(tick_ms.max(1)),
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
