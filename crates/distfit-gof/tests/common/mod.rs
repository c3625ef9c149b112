//! Shared utilities for integration tests

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Draw `n` values from `dist` with a fixed seed
pub fn sample<D: Distribution<f64>>(dist: D, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Route `tracing` output through the test harness; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
