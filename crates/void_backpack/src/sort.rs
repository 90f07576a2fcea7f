//! Iterative bottom-up merge sort
//!
//! Used to order inventory slots by a key that lives outside the slot (item
//! weight from the catalog), so the comparison is a caller-supplied closure
//! that may do its own lookups.

/// Stable, non-recursive merge sort
///
/// `in_order(a, b)` returns true when `a` may precede `b`. Runs of width 1, 2,
/// 4, ... are merged pairwise until one run covers the slice. On ties the
/// left element is taken first, which keeps equal elements in their original
/// relative order.
pub fn merge_sort_by<T, F>(items: &mut [T], mut in_order: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut width = 1;
    while width < len {
        let mut left = 0;
        while left < len - 1 {
            let mid = (left + width - 1).min(len - 1);
            let right = (left + 2 * width - 1).min(len - 1);
            if mid < right {
                merge(items, left, mid, right, &mut in_order);
            }
            left += 2 * width;
        }
        width *= 2;
    }
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]` in place
fn merge<T, F>(items: &mut [T], left: usize, mid: usize, right: usize, in_order: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let left_run = items[left..=mid].to_vec();
    let right_run = items[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        if in_order(&left_run[i], &right_run[j]) {
            items[k] = left_run[i].clone();
            i += 1;
        } else {
            items[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
    }

    // Copy whichever run still has elements
    for item in left_run[i..].iter().chain(&right_run[j..]) {
        items[k] = item.clone();
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_ascending() {
        let mut values = vec![5, 3, 9, 1, 4, 8, 2, 7, 6];
        merge_sort_by(&mut values, |a, b| a <= b);

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_stable_on_ties() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        merge_sort_by(&mut pairs, |a, b| a.0 <= b.0);

        assert_eq!(pairs, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_small_inputs() {
        let mut empty: Vec<u32> = Vec::new();
        merge_sort_by(&mut empty, |a, b| a <= b);
        assert!(empty.is_empty());

        let mut single = vec![42];
        merge_sort_by(&mut single, |a, b| a <= b);
        assert_eq!(single, vec![42]);

        let mut two = vec![2, 1];
        merge_sort_by(&mut two, |a, b| a <= b);
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn test_uneven_tail_run() {
        // 7 elements: the final pass merges a run of 4 with a run of 3
        let mut values = vec![7, 6, 5, 4, 3, 2, 1];
        merge_sort_by(&mut values, |a, b| a <= b);

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_counts_comparisons() {
        let mut values: Vec<u32> = (0..16).rev().collect();
        let mut comparisons = 0;
        merge_sort_by(&mut values, |a, b| {
            comparisons += 1;
            a <= b
        });

        assert_eq!(values, (0..16).collect::<Vec<_>>());
        // n log n upper bound for n = 16
        assert!(comparisons <= 64);
    }
}
