//! Longest strictly-increasing subsequence (LIS) with deterministic
//! reconstruction.

use log::trace;

/// One longest strictly-increasing subsequence of an input sequence.
///
/// `sequence` holds exactly `length` elements, strictly increasing by value
/// and drawn from the input in original left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsequence<T> {
    pub length: usize,
    pub sequence: Vec<T>,
}

/// Computes the length of a longest strictly-increasing subsequence and
/// reconstructs one such subsequence in original left-to-right order.
///
/// Duplicate values are permitted, but a duplicate cannot extend a chain:
/// the comparison is strict (`<`, not `<=`).
///
/// Ties are broken deterministically. Among all predecessors yielding the
/// same maximal chain length ending at a position, the smallest index wins;
/// among all positions achieving the overall maximum length, the smallest
/// index is the chain end. Repeated calls with identical input therefore
/// produce identical output.
///
/// Runs in O(n²) comparisons with O(n) auxiliary space.
///
/// # Examples
///
/// ```
/// use lis::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = longest_increasing_subsequence(&arr);
/// assert_eq!(lis.length, 4);
/// assert_eq!(lis.sequence, vec![2, 5, 7, 101]);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(values: &[T]) -> Subsequence<T> {
    if values.is_empty() {
        return Subsequence {
            length: 0,
            sequence: Vec::new(),
        };
    }

    let n = values.len();
    // dp[i] = length of the longest strictly-increasing subsequence ending
    // exactly at position i; a single element is a chain of length 1.
    let mut dp = vec![1_usize; n];
    // prev[i] = predecessor of position i in the best chain ending at i,
    // or None if i starts its chain.
    let mut prev: Vec<Option<usize>> = vec![None; n];

    let mut max_length = 1_usize;
    let mut max_index = 0_usize;

    for i in 0..n {
        for j in 0..i {
            // Strict `>` on the length: the first j reaching a new maximum
            // is kept, later j's that merely equal it do not overwrite.
            if values[j] < values[i] && dp[j] + 1 > dp[i] {
                dp[i] = dp[j] + 1;
                prev[i] = Some(j);
            }
        }

        // Strict again, so the earliest position achieving the overall
        // maximum stays the chain end.
        if dp[i] > max_length {
            max_length = dp[i];
            max_index = i;
        }
    }

    trace!("lis: n={n} length={max_length}");

    // Walk the predecessor chain backward from max_index. Every predecessor
    // index is strictly smaller than its successor, so this terminates in
    // at most n steps.
    let mut sequence = Vec::with_capacity(max_length);
    let mut current = Some(max_index);
    while let Some(idx) = current {
        sequence.push(values[idx].clone());
        current = prev[idx];
    }
    sequence.reverse();

    Subsequence {
        length: max_length,
        sequence,
    }
}

/// Returns only the length of a longest strictly-increasing subsequence.
///
/// Patience-sorting fast path: O(n log n) instead of the quadratic
/// reconstruction above. The length of an LIS is unique, so this always
/// agrees with [`longest_increasing_subsequence`].
///
/// # Examples
///
/// ```
/// use lis::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(values: &[T]) -> usize {
    // tails[len] = index of the smallest value that ends an increasing
    // subsequence of length len + 1.
    let mut tails: Vec<usize> = Vec::with_capacity(values.len());

    for (i, value) in values.iter().enumerate() {
        // An equal element lands on its own pile (Ok branch), which keeps
        // the subsequence strictly increasing.
        let pos = match tails.binary_search_by(|&idx| values[idx].cmp(value)) {
            Ok(pos) | Err(pos) => pos,
        };
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    tails.len()
}
