//! Deterministic input patterns for sort tests and benchmarks.
//!
//! Every generator derives its values from one process-wide seed, so a
//! failing run can be reproduced by exporting `SORT_TEST_SEED` with the
//! seed the failure message reported.

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| match std::env::var("SORT_TEST_SEED") {
    Ok(val) => val.parse().expect("SORT_TEST_SEED must be a u64"),
    Err(_) => thread_rng().gen(),
});

/// The seed shared by every generator in this module.
pub fn random_init_seed() -> u64 {
    *SEED
}

// Mix the length in so different sizes do not replay a prefix of the same
// stream.
fn rng_for(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed().wrapping_add(len as u64))
}

/// Fully random values.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    rng_for(len).sample_iter(Standard).take(len).collect()
}

/// Random values drawn uniformly from `range`; a small range produces heavy
/// duplication.
pub fn random_uniform(len: usize, range: std::ops::Range<i32>) -> Vec<i32> {
    let dist = Uniform::from(range);
    let mut rng = rng_for(len);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values under a zipfian distribution, a handful of values
/// dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let dist = ZipfDistribution::new(len, exponent).expect("invalid zipf parameters");
    let mut rng = rng_for(len);
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// 0, 1, 2 ... already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// ... 2, 1, 0, fully reversed.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// One value repeated `len` times.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    // /\
    let mid = len / 2;
    let mut v: Vec<i32> = (0..mid as i32).collect();
    v.extend((mid..len).map(|i| (len - i) as i32));
    v
}

/// Alternating ascending and descending runs of roughly `len / saw_count`
/// elements.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // /\/\/\
    if len == 0 || saw_count == 0 {
        return ascending(len);
    }
    let run_len = (len / saw_count).max(1);
    let mut v = Vec::with_capacity(len);
    let mut up = true;
    while v.len() < len {
        let n = run_len.min(len - v.len()) as i32;
        if up {
            v.extend(0..n);
        } else {
            v.extend((0..n).rev());
        }
        up = !up;
    }
    v
}
