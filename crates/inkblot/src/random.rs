//! Pseudorandom source helpers.
//!
//! Every stage takes `&mut impl Rng`; nothing here holds a shared generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Uniform value in `[0, n)`, or 0 when the range is empty
pub fn below<R: Rng>(rng: &mut R, n: i32) -> i32 {
    if n <= 0 { 0 } else { rng.random_range(0..n) }
}

/// Fresh generator seeded from the wall clock's nanoseconds.
/// Calls within the same nanosecond still get distinct seeds.
pub fn clock_seeded() -> StdRng {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let salt = SEED_COUNTER
        .fetch_add(1, Ordering::Relaxed)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(nanos ^ salt)
}
