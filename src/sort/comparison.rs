//! Comparison-based sorters: bubble, insertion, selection, quick, merge,
//! heap and cycle.
//!
//! Each follows the textbook trace so the animation shows every comparison,
//! not just the writes. Positions in a step are always absolute indexes into
//! the full buffer, including inside recursive helpers.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod tests;

use super::{SortError, Step, StepRecorder};

/// `n` full passes of adjacent compare-and-swap. A step is recorded after
/// every comparison whether or not it swapped.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn bubble(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    let n = arr.len();

    for _ in 0..n {
        for j in 0..n.saturating_sub(1) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
            rec.record(&arr, &[j, j + 1])?;
        }
    }
    Ok(rec.finish())
}

/// One step per shift while the key walks left, then one when it lands.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn insertion(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);

    for i in 1..arr.len() {
        let key = arr[i];
        // `slot` is the hole the key will drop into.
        let mut slot = i;
        while slot > 0 && key < arr[slot - 1] {
            arr[slot] = arr[slot - 1];
            rec.record(&arr, &[slot - 1, slot])?;
            slot -= 1;
        }
        arr[slot] = key;
        rec.record(&arr, &[slot, i])?;
    }
    Ok(rec.finish())
}

/// A comparison step per candidate, then a swap step per outer index. The
/// swap step is always `mutated`, even when the minimum is already in place.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn selection(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.record(&arr, &[min_idx, j])?;
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
        rec.record_write(&arr, &[i, min_idx])?;
    }
    Ok(rec.finish())
}

/// Lomuto quick sort, last element as pivot, low partition first.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn quick(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    if arr.len() > 1 {
        let high = arr.len() - 1;
        quick_range(&mut arr, 0, high, &mut rec)?;
    }
    Ok(rec.finish())
}

fn quick_range(arr: &mut [i64], low: usize, high: usize, rec: &mut StepRecorder) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }
    let pivot = partition(arr, low, high, rec)?;
    if pivot > low {
        quick_range(arr, low, pivot - 1, rec)?;
    }
    quick_range(arr, pivot + 1, high, rec)
}

fn partition(arr: &mut [i64], low: usize, high: usize, rec: &mut StepRecorder) -> Result<usize, SortError> {
    let pivot = arr[high];
    let mut store = low;
    for j in low..high {
        rec.record(arr, &[j, high])?;
        if arr[j] <= pivot {
            arr.swap(store, j);
            if store != j {
                rec.record(arr, &[store, j])?;
            }
            store += 1;
        }
    }
    arr.swap(store, high);
    rec.record(arr, &[store, high])?;
    Ok(store)
}

/// Top-down merge sort over inclusive ranges.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn merge(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    if !arr.is_empty() {
        let end = arr.len() - 1;
        merge_range(&mut arr, 0, end, &mut rec)?;
    }
    Ok(rec.finish())
}

fn merge_range(arr: &mut [i64], start: usize, end: usize, rec: &mut StepRecorder) -> Result<(), SortError> {
    if start < end {
        let mid = start + (end - start) / 2;
        merge_range(arr, start, mid, rec)?;
        merge_range(arr, mid + 1, end, rec)?;
        merge_runs(arr, start, mid, end, rec)?;
    }
    Ok(())
}

fn merge_runs(arr: &mut [i64], start: usize, mid: usize, end: usize, rec: &mut StepRecorder) -> Result<(), SortError> {
    let left = arr[start..=mid].to_vec();
    let right = arr[mid + 1..=end].to_vec();
    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        rec.record(arr, &[start + i, mid + 1 + j])?;
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    // One side is exhausted; the tail copies highlight only the target.
    for &value in left[i..].iter().chain(&right[j..]) {
        arr[k] = value;
        rec.record(arr, &[k])?;
        k += 1;
    }
    Ok(())
}

/// Max-heap build then repeated root extraction. Only swaps are recorded.
///
/// # Errors
///
/// Only on an internal step invariant violation.
pub fn heap(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);
    let n = arr.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut arr, n, root, &mut rec)?;
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        rec.record(&arr, &[0, end])?;
        sift_down(&mut arr, end, 0, &mut rec)?;
    }
    Ok(rec.finish())
}

fn sift_down(arr: &mut [i64], len: usize, mut root: usize, rec: &mut StepRecorder) -> Result<(), SortError> {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && arr[left] > arr[largest] {
            largest = left;
        }
        if right < len && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        arr.swap(root, largest);
        rec.record(arr, &[root, largest])?;
        root = largest;
    }
}

/// Cycle sort: each element is written directly to its final position.
///
/// # Errors
///
/// Returns `SortError::CycleOverrun` if skipping duplicates would run past
/// the end of the buffer.
pub fn cycle(input: &[i64]) -> Result<Vec<Step>, SortError> {
    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new(input);

    for start in 0..arr.len().saturating_sub(1) {
        let mut item = arr[start];
        let mut pos = rank(&arr, start, item, &mut rec)?;
        if pos == start {
            continue;
        }
        pos = skip_equal(&arr, pos, item, start)?;
        std::mem::swap(&mut arr[pos], &mut item);
        rec.record(&arr, &[pos])?;

        while pos != start {
            pos = rank(&arr, start, item, &mut rec)?;
            pos = skip_equal(&arr, pos, item, start)?;
            std::mem::swap(&mut arr[pos], &mut item);
            rec.record(&arr, &[pos])?;
        }
    }
    Ok(rec.finish())
}

/// Count the elements right of `start` smaller than `item`.
fn rank(arr: &[i64], start: usize, item: i64, rec: &mut StepRecorder) -> Result<usize, SortError> {
    let mut pos = start;
    for i in start + 1..arr.len() {
        rec.record(arr, &[start, i])?;
        if arr[i] < item {
            pos += 1;
        }
    }
    Ok(pos)
}

fn skip_equal(arr: &[i64], mut pos: usize, item: i64, start: usize) -> Result<usize, SortError> {
    while arr.get(pos) == Some(&item) {
        pos += 1;
    }
    if pos < arr.len() { Ok(pos) } else { Err(SortError::CycleOverrun { start }) }
}
