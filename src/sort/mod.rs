//! Instrumented sorting algorithms.
//!
//! DESIGN
//! ======
//! Every sorter works on an owned copy of its input and hands a snapshot to
//! a `StepRecorder` at each comparison or write. Recursive sorters take the
//! buffer and the recorder by `&mut` instead of capturing them in closures.
//!
//! The recorder derives `mutated` by diffing each snapshot against the one
//! before it, so a comparison-only step never reports a change. Selection's
//! swap goes through `record_write` and is always reported as a write.
//!
//! ERROR HANDLING
//! ==============
//! Sorters return `SortError` only for invariant violations (a malformed
//! step, a cycle sort overrun) and for counting sort inputs whose value span
//! is too wide to walk.

pub mod comparison;
pub mod distribution;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest number of positions a single step may highlight.
pub const MAX_HIGHLIGHTED: usize = 2;

// =============================================================================
// ALGORITHM
// =============================================================================

/// The ten supported sorting algorithms, keyed by their wire identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Cycle,
    Counting,
    Radix,
    Bucket,
}

/// Comparison-based sorts order by pairwise comparison; distribution-based
/// sorts order by bucketing on value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Comparison,
    Distribution,
}

impl Algorithm {
    /// Canonical order used by "run all".
    pub const ALL: [Algorithm; 10] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Quick,
        Self::Merge,
        Self::Heap,
        Self::Cycle,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
            Self::Cycle => "cycle",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
        }
    }

    /// Human-readable pane title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Heap => "Heap Sort",
            Self::Cycle => "Cycle Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
        }
    }

    #[must_use]
    pub fn family(self) -> Family {
        match self {
            Self::Counting | Self::Radix | Self::Bucket => Family::Distribution,
            _ => Family::Comparison,
        }
    }

    /// Static complexity lookup. Never derived from input.
    #[must_use]
    pub fn complexity(self) -> Complexity {
        match self {
            Self::Bubble | Self::Insertion | Self::Selection | Self::Cycle => Complexity::fixed("O(n^2)", "O(1)"),
            Self::Quick => Complexity::fixed("O(n log n) average, O(n^2) worst", "O(log n)"),
            Self::Merge => Complexity::fixed("O(n log n)", "O(n)"),
            Self::Heap => Complexity::fixed("O(n log n)", "O(1)"),
            Self::Counting | Self::Bucket => Complexity::fixed("O(n + k)", "O(n + k)"),
            Self::Radix => Complexity::fixed("O(d*(n + k))", "O(n + k)"),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

// =============================================================================
// COMPLEXITY
// =============================================================================

/// Textbook time/space complexity strings for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: Cow<'static, str>,
    pub space: Cow<'static, str>,
}

impl Complexity {
    const fn fixed(time: &'static str, space: &'static str) -> Self {
        Self { time: Cow::Borrowed(time), space: Cow::Borrowed(space) }
    }
}

// =============================================================================
// STEP
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("step highlights {0} positions (max 2)")]
    TooManyHighlights(usize),
    #[error("highlighted position {position} out of range for length {len}")]
    OutOfRange { position: usize, len: usize },
}

/// One animation frame: a snapshot of the sequence, the positions involved
/// in the current comparison or write, and whether the snapshot changed.
///
/// Serialized as `{ array, compared, swapped }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct Step {
    #[serde(rename = "array")]
    sequence: Vec<i64>,
    #[serde(rename = "compared")]
    highlighted: Vec<usize>,
    #[serde(rename = "swapped")]
    mutated: bool,
}

#[derive(Deserialize)]
struct RawStep {
    array: Vec<i64>,
    compared: Vec<usize>,
    swapped: bool,
}

impl TryFrom<RawStep> for Step {
    type Error = StepError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        Self::new(raw.array, raw.compared, raw.swapped)
    }
}

impl Step {
    /// Build a step. A position highlighted twice in a row collapses to one.
    ///
    /// # Errors
    ///
    /// Returns `StepError` if more than two positions remain highlighted or
    /// any position falls outside the snapshot.
    pub fn new(sequence: Vec<i64>, mut highlighted: Vec<usize>, mutated: bool) -> Result<Self, StepError> {
        highlighted.dedup();
        if highlighted.len() > MAX_HIGHLIGHTED {
            return Err(StepError::TooManyHighlights(highlighted.len()));
        }
        if let Some(&position) = highlighted.iter().find(|&&p| p >= sequence.len()) {
            return Err(StepError::OutOfRange { position, len: sequence.len() });
        }
        Ok(Self { sequence, highlighted, mutated })
    }

    #[must_use]
    pub fn sequence(&self) -> &[i64] {
        &self.sequence
    }

    #[must_use]
    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    #[must_use]
    pub fn mutated(&self) -> bool {
        self.mutated
    }
}

// =============================================================================
// RECORDER
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("invalid step: {0}")]
    InvalidStep(#[from] StepError),
    #[error("value span {span} across {len} values exceeds the counting sort limit of {limit} trace cells")]
    RangeTooLarge { span: u64, len: usize, limit: u64 },
    #[error("cycle starting at {start} ran past the end of the sequence")]
    CycleOverrun { start: usize },
}

/// Accumulates steps in chronological order.
pub struct StepRecorder {
    steps: Vec<Step>,
    last: Vec<i64>,
}

impl StepRecorder {
    /// Start recording; the first step is diffed against `input`.
    #[must_use]
    pub fn new(input: &[i64]) -> Self {
        Self { steps: Vec::new(), last: input.to_vec() }
    }

    /// Snapshot `sequence` with the given positions highlighted.
    ///
    /// # Errors
    ///
    /// Returns `StepError` if the highlighted positions are invalid for the
    /// snapshot.
    pub fn record(&mut self, sequence: &[i64], highlighted: &[usize]) -> Result<(), StepError> {
        let mutated = sequence != self.last.as_slice();
        self.push(sequence, highlighted, mutated)
    }

    /// Snapshot a declared write. Always `mutated`, even if the write left
    /// the sequence unchanged.
    ///
    /// # Errors
    ///
    /// Same as `record`.
    pub fn record_write(&mut self, sequence: &[i64], highlighted: &[usize]) -> Result<(), StepError> {
        self.push(sequence, highlighted, true)
    }

    fn push(&mut self, sequence: &[i64], highlighted: &[usize], mutated: bool) -> Result<(), StepError> {
        let step = Step::new(sequence.to_vec(), highlighted.to_vec(), mutated)?;
        self.last.clear();
        self.last.extend_from_slice(sequence);
        self.steps.push(step);
        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run `algorithm` over a copy of `input` and return its step trace.
///
/// # Errors
///
/// Propagates the sorter's `SortError`.
pub fn sort(algorithm: Algorithm, input: &[i64]) -> Result<Vec<Step>, SortError> {
    match algorithm {
        Algorithm::Bubble => comparison::bubble(input),
        Algorithm::Insertion => comparison::insertion(input),
        Algorithm::Selection => comparison::selection(input),
        Algorithm::Quick => comparison::quick(input),
        Algorithm::Merge => comparison::merge(input),
        Algorithm::Heap => comparison::heap(input),
        Algorithm::Cycle => comparison::cycle(input),
        Algorithm::Counting => distribution::counting(input),
        Algorithm::Radix => distribution::radix(input),
        Algorithm::Bucket => distribution::bucket(input),
    }
}
