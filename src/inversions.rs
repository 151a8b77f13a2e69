use crate::sorting::{merge_with, split_point};

/// Sorts `a` and counts its inversions, the pairs `(i, j)` with `i < j` and `a[i] > a[j]`.
///
/// Each half is counted recursively. While merging, every right element emitted ahead of the
/// pending left elements is smaller than all of them, so it closes one inversion per pending
/// element. Ties are emitted from the left and never counted.
pub fn count_and_sort<T: Ord + Clone>(a: &[T]) -> (Vec<T>, u64) {
    if a.len() <= 1 {
        return (a.to_vec(), 0);
    }

    let (left, right) = a.split_at(split_point(a.len()));

    let (left_sorted, left_count) = count_and_sort(left);
    let (right_sorted, right_count) = count_and_sort(right);

    let mut split_count = 0;
    let sorted = merge_with(&left_sorted, &right_sorted, |pending| split_count += pending as u64);

    (sorted, left_count + right_count + split_count)
}

/// Quadratic pair-by-pair inversion count.
pub fn count_inversions_naive<T: Ord>(a: &[T]) -> u64 {
    let mut res = 0;

    for (i, x) in a.iter().enumerate() {
        res += a[i + 1..].iter().filter(|y| x > *y).count() as u64;
    }

    res
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/

#[cfg(test)]
mod tests {
    use rand::distributions::{Distribution, Uniform};
    use rayon::prelude::*;

    use crate::inversions::*;
    use crate::sorting::merge_sort_recursive;

    #[test]
    fn known_values() {
        assert_eq!(count_and_sort(&[7, 2, 4, 5, 3, 4, 8, 1, 5]), (vec!(1, 2, 3, 4, 4, 5, 5, 7, 8), 17));
        assert_eq!(count_and_sort::<i32>(&[]), (vec!(), 0));
        assert_eq!(count_and_sort(&[12]), (vec!(12), 0));
    }

    #[test]
    fn sorted_and_reversed() {
        let sorted = (0..100).collect::<Vec<i32>>();
        let reversed = sorted.iter().rev().cloned().collect::<Vec<_>>();

        assert_eq!(count_and_sort(&sorted), (sorted.clone(), 0));
        assert_eq!(count_and_sort(&reversed), (sorted, 100 * 99 / 2));
    }

    #[test]
    fn equal_values_across_the_split_are_not_inversions() {
        // Left half [3, 5, 5], right half [5, 5]: the duplicates meet at the merge boundary
        assert_eq!(count_and_sort(&[3, 5, 5, 5, 5]), (vec!(3, 5, 5, 5, 5), 0));
        assert_eq!(count_and_sort(&[2, 4, 4, 1]), (vec!(1, 2, 4, 4), 3));
        assert_eq!(count_and_sort(&[4, 2, 2, 4]), (vec!(2, 2, 4, 4), 2));
        assert_eq!(count_and_sort(&[1, 1, 1, 1, 1, 1, 1]), (vec!(1; 7), 0));
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = rand::thread_rng();
        let lengths = Uniform::from(0..150);
        let values = Uniform::from(0..20);

        for _ in 0..300 {
            let a = (0..lengths.sample(&mut rng)).map(|_| values.sample(&mut rng)).collect::<Vec<i32>>();
            let (sorted, count) = count_and_sort(&a);

            assert_eq!(sorted, merge_sort_recursive(&a));
            assert_eq!(count, count_inversions_naive(&a));
        }
    }

    #[test]
    fn concurrent_calls_on_disjoint_inputs() {
        let inputs = (0..64).map(|i| (0..i * 7).rev().collect::<Vec<i64>>()).collect::<Vec<_>>();

        let counts = inputs.par_iter().map(|a| count_and_sort(a).1).collect::<Vec<_>>();
        let expected = inputs.iter().map(|a| count_inversions_naive(a)).collect::<Vec<_>>();

        assert_eq!(counts, expected);
    }
}
