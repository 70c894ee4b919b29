//! Distribution-based sorters: counting, radix and bucket.
//!
//! These never compare pairs, so their steps trace the bookkeeping phases
//! instead (tallying, prefix sums, placement, write-back). Placement steps
//! snapshot the output buffer, which starts zero-filled.

#[cfg(test)]
#[path = "distribution_test.rs"]
mod tests;

use super::{SortError, Step, StepRecorder};

/// Most values counting sort's step trace may hold. The trace has
/// `span + 2n` snapshots of `n` values each.
pub const MAX_COUNTING_TRACE_CELLS: u64 = 10_000_000;

const RADIX: u64 = 10;

/// Stable counting sort over `value - min`.
///
/// # Errors
///
/// Returns `SortError::RangeTooLarge` if the trace for this span and length
/// would exceed `MAX_COUNTING_TRACE_CELLS`.
pub fn counting(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
        return Ok(Vec::new());
    };
    let span = max.abs_diff(min);
    if counting_trace_cells(span, input.len()) > MAX_COUNTING_TRACE_CELLS {
        return Err(SortError::RangeTooLarge { span, len: input.len(), limit: MAX_COUNTING_TRACE_CELLS });
    }

    let mut rec = StepRecorder::new(input);
    let mut count = vec![0_usize; counting_slot(max, min) + 1];

    for (i, &value) in input.iter().enumerate() {
        count[counting_slot(value, min)] += 1;
        rec.record(input, &[i])?;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
        rec.record(input, &[])?;
    }

    let mut output = vec![0; input.len()];
    for &value in input.iter().rev() {
        let slot = counting_slot(value, min);
        count[slot] -= 1;
        output[count[slot]] = value;
        rec.record(&output, &[count[slot]])?;
    }
    Ok(rec.finish())
}

/// Values held by counting sort's trace: n tallies, `span` prefix sums and
/// n placements, each a snapshot of n values.
fn counting_trace_cells(span: u64, len: usize) -> u64 {
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    span.saturating_add(len.saturating_mul(2)).saturating_mul(len)
}

#[allow(clippy::cast_possible_truncation)]
fn counting_slot(value: i64, min: i64) -> usize {
    // Bounded by MAX_COUNTING_TRACE_CELLS.
    value.abs_diff(min) as usize
}

/// LSD radix sort, base 10, one counting pass per digit.
///
/// Keys are offset by the minimum when the input holds negatives so digit
/// extraction always works on non-negative keys.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn radix(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let Some(&min) = input.iter().min() else {
        return Ok(Vec::new());
    };
    let base = min.min(0);
    let max_key = input.iter().map(|v| v.abs_diff(base)).max().unwrap_or(0);

    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    let mut exp: u64 = 1;
    while max_key / exp > 0 {
        radix_pass(&mut arr, base, exp, &mut rec)?;
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(rec.finish())
}

fn radix_pass(arr: &mut [i64], base: i64, exp: u64, rec: &mut StepRecorder) -> Result<(), SortError> {
    let n = arr.len();
    let mut output = vec![0; n];
    let mut count = [0_usize; 10];

    for i in 0..n {
        count[digit(arr[i], base, exp)] += 1;
        rec.record(arr, &[i])?;
    }
    for d in 1..count.len() {
        count[d] += count[d - 1];
        rec.record(arr, &[])?;
    }
    for i in (0..n).rev() {
        let d = digit(arr[i], base, exp);
        count[d] -= 1;
        output[count[d]] = arr[i];
        rec.record(&output, &[i])?;
    }
    for i in 0..n {
        arr[i] = output[i];
        rec.record(arr, &[i])?;
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn digit(value: i64, base: i64, exp: u64) -> usize {
    (value.abs_diff(base) / exp % RADIX) as usize
}

/// Bucket sort with one bucket per input element, indexed by linear
/// interpolation over the value range. Sorting inside a bucket is not
/// traced; each bucket contributes a single step once gathered.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn bucket(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
        return Ok(Vec::new());
    };
    let n = input.len();
    let mut rec = StepRecorder::new(input);
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); n];

    for (i, &value) in input.iter().enumerate() {
        buckets[bucket_index(value, min, max, n)].push(value);
        rec.record(input, &[i])?;
    }

    let mut gathered = Vec::with_capacity(n);
    for bucket in &mut buckets {
        bucket.sort_unstable();
        gathered.extend_from_slice(bucket);
        rec.record(&gathered, &[])?;
    }

    let mut arr = input.to_vec();
    for (i, &value) in gathered.iter().enumerate() {
        arr[i] = value;
        rec.record(&arr, &[i])?;
    }
    Ok(rec.finish())
}

fn bucket_index(value: i64, min: i64, max: i64, buckets: usize) -> usize {
    if max == min {
        return 0;
    }
    let last = buckets - 1;
    let scaled = u128::from(value.abs_diff(min)) * last as u128 / u128::from(max.abs_diff(min));
    usize::try_from(scaled).map_or(last, |index| index.min(last))
}
