//! Seeded `i32` inputs for the test suites and the benches.
//!
//! All generators draw from one seed per process so a failing run can be replayed with
//! `OVERRIDE_SEED=<seed>`. Benches switch to a fresh seed per call with
//! [`use_random_seed_each_time`].

use std::env;
use std::sync::Mutex;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum SeedMode {
    PerProcess(u64),
    Override(u64),
    EachCall,
}

static SEED_MODE: Mutex<Option<SeedMode>> = Mutex::new(None);

fn seed_mode() -> SeedMode {
    *SEED_MODE.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => SeedMode::Override(
                seed.parse()
                    .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed:?}")),
            ),
            Err(_) => SeedMode::PerProcess(thread_rng().gen()),
        }
    })
}

/// The seed the next generator call will use.
pub fn random_init_seed() -> u64 {
    match seed_mode() {
        SeedMode::PerProcess(seed) | SeedMode::Override(seed) => seed,
        SeedMode::EachCall => thread_rng().gen(),
    }
}

/// Makes every generator call draw new values instead of repeating the per-process ones.
///
/// # Panics
///
/// Panics if `OVERRIDE_SEED` is set, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    if let SeedMode::Override(_) = seed_mode() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_MODE.lock().unwrap() = Some(SeedMode::EachCall);
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();
    let mut rng = rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values where the first `sorted_percent` of the slice is already in order.
pub fn presorted_prefix(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into ascending runs of `run_len`, the last run may be shorter.
pub fn sorted_runs(len: usize, run_len: usize) -> Vec<i32> {
    let mut v = random(len);
    for run in v.chunks_mut(run_len.max(1)) {
        run.sort_unstable();
    }
    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// Even values in the lower half, odd values in the upper half, both ascending.
///
/// Split at `len / 2` both halves are sorted and their values alternate, so the top level merge
/// can never drain one side early.
pub fn interleaved_halves(len: usize) -> Vec<i32> {
    let mid = len / 2;
    let evens = (0..mid as i32).map(|i| i * 2);
    let odds = (0..(len - mid) as i32).map(|i| i * 2 + 1);

    evens.chain(odds).collect()
}

/// Two ascending runs meeting at `split`, drawn from overlapping ranges.
pub fn two_runs(len: usize, split: usize) -> Vec<i32> {
    let mut v = random_uniform(len, 0..=(len as i32));
    let (head, tail) = v.split_at_mut(split.min(len));
    head.sort_unstable();
    tail.sort_unstable();
    v
}
