use std::fmt;
use std::str::FromStr;

use levenshtein::levenshtein;
use serde::{Deserialize, Serialize};

use crate::errors::DncError;

/*
                                                  ╒══════════════════╕
    ============================================= │  IMPLEMENTATION  │ =============================================
                                                  ╘══════════════════╛
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStrategy {
    /// Halves are left unsorted and combined by repeated minimum extraction, O(n²)
    #[serde(rename = "selection")]
    SelectionMin,

    /// Halves are sorted recursively and then combined by repeated minimum extraction
    #[serde(rename = "selection-recursive")]
    SelectionMinRecursive,

    /// Halves are sorted recursively and combined with a linear merge, O(n log n)
    #[serde(rename = "merge")]
    MergeRecursive
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::SelectionMin,
        SortStrategy::SelectionMinRecursive,
        SortStrategy::MergeRecursive
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::SelectionMin => "selection",
            SortStrategy::SelectionMinRecursive => "selection-recursive",
            SortStrategy::MergeRecursive => "merge",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = DncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(strategy) = SortStrategy::ALL.iter().find(|i| i.name() == s) {
            return Ok(*strategy);
        }

        let mut names = SortStrategy::ALL.iter().map(|i| i.name()).collect::<Vec<_>>();
        names.sort_by_key(|i| levenshtein(i, s));

        Err(
            DncError::config_error(format!("Unknown sort strategy {:?}", s))
                .with_suggestions(names.into_iter().take(1).map(|i| format!("Did you mean {:?}?", i)).collect())
        )
    }
}

/*
    ╒═════════════════════╕
    │ Shared combine step │
    ╘═════════════════════╛
*/

/// Split index for a sequence of length `len`. Odd lengths give the extra element to the left half.
#[inline]
pub fn split_point(len: usize) -> usize {
    (len + 1) / 2
}

/// Merges two sorted slices by walking both heads.
///
/// `on_right_taken` is called with the number of left elements still pending every time a right
/// element is emitted before the left side is exhausted. Equal heads always emit the left element
/// first: an equal pair is not an inversion, and inversion counting relies on this ordering.
pub fn merge_with<T, F>(left: &[T], right: &[T], mut on_right_taken: F) -> Vec<T>
where
    T: Ord + Clone,
    F: FnMut(usize)
{
    let mut res = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            res.push(left[l].clone());
            l += 1;

        } else {
            on_right_taken(left.len() - l);
            res.push(right[r].clone());
            r += 1;
        }
    }

    // At most one side has elements left and they are already sorted
    res.extend_from_slice(&left[l..]);
    res.extend_from_slice(&right[r..]);

    res
}

pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_with(left, right, |_| {})
}

/*
    ╒════════════════════════════╕
    │ Minimum extraction combine │
    ╘════════════════════════════╛
*/

// Working pool over a borrowed half. Taken elements are flagged instead of removed,
// so the caller's data is never touched.
struct Pool<'a, T> {
    items: &'a [T],
    taken: Vec<bool>,
    remaining: usize
}

impl<'a, T: Ord> Pool<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Pool { items, taken: vec!(false; items.len()), remaining: items.len() }
    }

    // Linear scan, first occurrence wins
    fn min_index(&self) -> Option<usize> {
        let mut res: Option<usize> = None;

        for (i, item) in self.items.iter().enumerate() {
            if self.taken[i] {
                continue;
            }

            match res {
                Some(j) if self.items[j] <= *item => {},
                _ => res = Some(i)
            }
        }

        res
    }

    fn take(&mut self, idx: usize) -> &'a T {
        self.taken[idx] = true;
        self.remaining -= 1;

        let items: &'a [T] = self.items;
        &items[idx]
    }
}

fn combine_by_min<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut res = Vec::with_capacity(left.len() + right.len());
    let mut left_pool = Pool::new(left);
    let mut right_pool = Pool::new(right);

    while left_pool.remaining + right_pool.remaining > 0 {
        let next = match (left_pool.min_index(), right_pool.min_index()) {
            (Some(l), Some(r)) => {
                if left[l] <= right[r] {
                    left_pool.take(l)

                } else {
                    right_pool.take(r)
                }
            },

            (Some(l), None) => left_pool.take(l),
            (None, Some(r)) => right_pool.take(r),
            (None, None) => break
        };

        res.push(next.clone());
    }

    res
}

/*
    ╒═════════╕
    │ Sorters │
    ╘═════════╛
*/

/// Splits the input in two unsorted halves and builds the output by repeatedly taking the
/// smallest remaining element of either half.
pub fn merge_sort_min<T: Ord + Clone>(a: &[T]) -> Vec<T> {
    if a.len() <= 1 {
        return a.to_vec();
    }

    let (left, right) = a.split_at(split_point(a.len()));

    combine_by_min(left, right)
}

pub fn merge_sort_min_recursive<T: Ord + Clone>(a: &[T]) -> Vec<T> {
    if a.len() <= 1 {
        return a.to_vec();
    }

    let (left, right) = a.split_at(split_point(a.len()));

    combine_by_min(&merge_sort_min_recursive(left), &merge_sort_min_recursive(right))
}

/// Classic top-down merge sort.
pub fn merge_sort_recursive<T: Ord + Clone>(a: &[T]) -> Vec<T> {
    if a.len() <= 1 {
        return a.to_vec();
    }

    let (left, right) = a.split_at(split_point(a.len()));

    merge(&merge_sort_recursive(left), &merge_sort_recursive(right))
}

pub fn sort<T: Ord + Clone>(strategy: SortStrategy, a: &[T]) -> Vec<T> {
    match strategy {
        SortStrategy::SelectionMin => merge_sort_min(a),
        SortStrategy::SelectionMinRecursive => merge_sort_min_recursive(a),
        SortStrategy::MergeRecursive => merge_sort_recursive(a),
    }
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/

#[cfg(test)]
mod tests {
    use rand::distributions::{Distribution, Uniform};

    use crate::errors::ErrorKind;
    use crate::sorting::*;

    fn is_sorted<T: Ord>(a: &[T]) -> bool {
        a.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn known_values() {
        for strategy in SortStrategy::ALL {
            assert_eq!(sort(strategy, &[7, 2, 4, 5, 3, 4, 8, 1, 5]), vec!(1, 2, 3, 4, 4, 5, 5, 7, 8));
            assert_eq!(sort::<i32>(strategy, &[]), Vec::<i32>::new());
            assert_eq!(sort(strategy, &[12]), vec!(12));
        }
    }

    #[test]
    fn split_gives_extra_element_to_the_left() {
        assert_eq!(split_point(0), 0);
        assert_eq!(split_point(1), 1);
        assert_eq!(split_point(2), 1);
        assert_eq!(split_point(9), 5);
        assert_eq!(split_point(10), 5);
    }

    // Compares by key only, so the output order reveals which side won a tie
    #[derive(Debug, Clone)]
    struct Tagged(i32, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = [Tagged(1, 'l'), Tagged(4, 'l')];
        let right = [Tagged(1, 'r'), Tagged(4, 'r')];

        let mut pending = vec!();
        let res = merge_with(&left, &right, |p| pending.push(p));

        assert_eq!(res.iter().map(|i| i.1).collect::<String>(), "lrlr");
        assert_eq!(pending, vec!(1));
    }

    #[test]
    fn merge_reports_pending_left_elements() {
        let mut pending = vec!();
        let res = merge_with(&[3, 5, 9], &[1, 6, 10], |p| pending.push(p));

        assert_eq!(res, vec!(1, 3, 5, 6, 9, 10));
        assert_eq!(pending, vec!(3, 1));
    }

    #[test]
    fn caller_sequence_is_untouched() {
        let original = vec!(5, 1, 4, 1, 3);
        let copy = original.clone();

        for strategy in SortStrategy::ALL {
            let _ = sort(strategy, &original);
            assert_eq!(original, copy);
        }
    }

    #[test]
    fn random_sequences() {
        let mut rng = rand::thread_rng();
        let lengths = Uniform::from(0..200);
        let values = Uniform::from(-50..50);

        for _ in 0..200 {
            let a = (0..lengths.sample(&mut rng)).map(|_| values.sample(&mut rng)).collect::<Vec<i64>>();

            let mut expected = a.clone();
            expected.sort();

            for strategy in SortStrategy::ALL {
                let sorted = sort(strategy, &a);

                assert!(is_sorted(&sorted));
                assert_eq!(sorted, expected);
                assert_eq!(sort(strategy, &sorted), sorted);
            }
        }
    }

    #[test]
    fn non_numeric_elements() {
        let words = ["pear", "apple", "fig", "apple", "banana"];

        for strategy in SortStrategy::ALL {
            assert_eq!(sort(strategy, &words), vec!("apple", "apple", "banana", "fig", "pear"));
        }
    }

    #[test]
    fn strategy_names() {
        for strategy in SortStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<SortStrategy>().unwrap(), strategy);
        }

        let err = "mrege".parse::<SortStrategy>().unwrap_err();

        assert_eq!(err.kind, ErrorKind::Config);
        assert_eq!(err.suggestions, vec!("Did you mean \"merge\"?".to_string()));
    }
}
