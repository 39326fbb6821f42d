//! Generic correctness properties over any [`Sort`], instantiated per
//! implementation via [`instantiate_sort_tests!`](crate::instantiate_sort_tests).

use std::cell::Cell;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::patterns;
use crate::Sort;

fn test_sizes() -> Vec<usize> {
    let mut sizes = vec![
        0, 1, 2, 3, 5, 8, 13, 16, 24, 33, 64, 128, 256, 1024, 4096, 10_000,
    ];
    if cfg!(feature = "large_test_sizes") {
        sizes.push(100_000);
    }
    sizes
}

/// Sorts `original` with `S` and checks the outcome against the standard
/// library as oracle, which covers both the ordering and the permutation
/// property in one comparison.
fn check_against_oracle<S: Sort, T: Ord + Clone + Debug>(original: &[T]) {
    let mut observed = original.to_vec();
    S::sort(&mut observed);

    let mut expected = original.to_vec();
    expected.sort();

    assert_eq!(
        observed,
        expected,
        "sort: {}, len: {}, seed: {}",
        S::name(),
        original.len(),
        patterns::random_init_seed()
    );
}

pub fn basic<S: Sort>() {
    let mut empty: Vec<i32> = Vec::new();
    S::sort(&mut empty);
    assert!(empty.is_empty());

    check_against_oracle::<S, i32>(&[37]);
    check_against_oracle::<S, i32>(&[2, 1]);
    check_against_oracle::<S, i32>(&[1, 2]);
    check_against_oracle::<S, i32>(&[3, 1, 2]);
    check_against_oracle::<S, i32>(&[i32::MAX, i32::MIN, 0]);
}

/// The fixed scenarios every front end demonstrates.
pub fn fixed_scenarios<S: Sort>() {
    let mut v = vec![45, 12, 78, 22, 90, 5, 60];
    S::sort(&mut v);
    assert_eq!(v, [5, 12, 22, 45, 60, 78, 90]);

    let mut v = vec![5, 4, 3, 2, 1];
    S::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);

    let mut v = vec![1, 1, 1];
    S::sort(&mut v);
    assert_eq!(v, [1, 1, 1]);

    let mut v = vec![45, 12, 78, 22, 90, 5, 60];
    S::sort_by(&mut v, |a, b| b.cmp(a));
    assert_eq!(v, [90, 78, 60, 45, 22, 12, 5]);
}

pub fn strings<S: Sort>() {
    let mut v: Vec<String> = ["banana", "apple", "cherry", "date"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    S::sort(&mut v);
    assert_eq!(v, ["apple", "banana", "cherry", "date"]);
}

pub fn random<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::random(len));
    }
}

pub fn random_uniform<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::random_uniform(len, 0..16));
    }
}

pub fn random_zipf<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::random_zipf(len, 1.0));
    }
}

pub fn ascending<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::ascending(len));
    }
}

pub fn descending<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::descending(len));
    }
}

pub fn all_equal<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::all_equal(len));
    }
}

pub fn pipe_organ<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::pipe_organ(len));
    }
}

pub fn saw_mixed<S: Sort>() {
    for len in test_sizes() {
        check_against_oracle::<S, i32>(&patterns::saw_mixed(len, 32));
    }
}

/// Equal-ranking elements must keep their original relative order.
pub fn stability<S: Sort>() {
    for len in [2usize, 10, 33, 500, 2048] {
        let mut v: Vec<(i32, usize)> = patterns::random_uniform(len, 0..10)
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();

        // Compare by key only; the payload records the original position.
        S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        for pair in v.windows(2) {
            let ordered =
                pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1);
            assert!(
                ordered,
                "sort: {}, len: {}, seed: {}",
                S::name(),
                len,
                patterns::random_init_seed()
            );
        }
    }
}

/// Sorting an already-sorted sequence must reproduce it exactly.
pub fn idempotent<S: Sort>() {
    for len in [0usize, 1, 2, 16, 129, 1024] {
        let mut v = patterns::random(len);
        S::sort(&mut v);
        let once = v.clone();
        S::sort(&mut v);
        assert_eq!(v, once);
    }
}

/// Sorting under a reversed relation yields descending order.
pub fn reverse_relation<S: Sort>() {
    for len in [0usize, 1, 7, 64, 500, 4096] {
        let mut v = patterns::random(len);
        S::sort_by(&mut v, |a, b| b.cmp(a));
        assert!(v.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

/// A comparator that panics mid-sort must not lose or duplicate elements.
pub fn panic_retains_original_elements<S: Sort>() {
    // The intentional panics below would spam the test output through the
    // default hook.
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    for len in [16usize, 128, 1024] {
        let original = patterns::random(len);
        let mut v = original.clone();

        let comparisons = Cell::new(0usize);
        let panic_after = len / 2;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            S::sort_by(&mut v, |a, b| {
                let seen = comparisons.get() + 1;
                comparisons.set(seen);
                if seen > panic_after {
                    panic!("comparator unwind probe");
                }
                a.cmp(b)
            });
        }));
        assert!(result.is_err());

        let mut remaining = v.clone();
        remaining.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(
            remaining,
            expected,
            "sort: {}, len: {}, seed: {}",
            S::name(),
            len,
            patterns::random_init_seed()
        );
    }

    panic::set_hook(prev_hook);
}
