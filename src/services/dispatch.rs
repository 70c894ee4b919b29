//! Sort dispatcher: identifier lookup, timing, and run packaging.
//!
//! DESIGN
//! ======
//! The dispatcher is the copy boundary. It clones the caller's sequence
//! before handing it to a sorter, times only the sorter call, and attaches
//! the static complexity descriptor for the algorithm.
//!
//! ERROR HANDLING
//! ==============
//! Missing or empty parameters are checked before the identifier so an
//! empty array is rejected regardless of algorithm.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sort::{self, Algorithm, Complexity, SortError, Step, UnknownAlgorithm};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Missing parameters")]
    MissingParameters,
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),
}

/// Step trace plus timing and complexity for one algorithm on one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub steps: Vec<Step>,
    /// Wall-clock seconds spent inside the sorter.
    pub execution_time: f64,
    pub complexity: Complexity,
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Validate wire-level parameters and run the named algorithm.
///
/// # Errors
///
/// `MissingParameters` if either field is absent or empty,
/// `UnknownAlgorithm` for an unrecognized identifier, `Sort` if the sorter
/// fails.
pub fn dispatch(algorithm: Option<&str>, array: Option<&[i64]>) -> Result<Run, DispatchError> {
    let (Some(algorithm), Some(array)) = (algorithm.filter(|a| !a.is_empty()), array.filter(|a| !a.is_empty())) else {
        return Err(DispatchError::MissingParameters);
    };
    let algorithm: Algorithm = algorithm.parse()?;
    run(algorithm, array)
}

/// Run a known algorithm over a copy of `array`.
///
/// # Errors
///
/// `MissingParameters` for an empty array, `Sort` if the sorter fails.
pub fn run(algorithm: Algorithm, array: &[i64]) -> Result<Run, DispatchError> {
    if array.is_empty() {
        return Err(DispatchError::MissingParameters);
    }
    let input = array.to_vec();

    let started = Instant::now();
    let steps = sort::sort(algorithm, &input)?;
    let execution_time = started.elapsed().as_secs_f64();

    debug!(
        %algorithm,
        family = ?algorithm.family(),
        len = input.len(),
        steps = steps.len(),
        execution_time,
        "sort dispatched"
    );
    Ok(Run { steps, execution_time, complexity: algorithm.complexity() })
}

/// Run every algorithm over the same input, in canonical order.
#[must_use]
pub fn dispatch_all(array: &[i64]) -> Vec<(Algorithm, Result<Run, DispatchError>)> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, run(algorithm, array)))
        .collect()
}
