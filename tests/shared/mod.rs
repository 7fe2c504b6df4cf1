// Helpers shared by the integration tests.  Not every test uses all of them.
#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use fixmat::{Layout, Matrix};

pub fn init_logger() {
    let _ = env_logger::try_init();
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_matrix<const R: usize, const C: usize, L: Layout>(rng: &mut StdRng) -> Matrix<R, C, f64, L> {
    Matrix::from_fn(|_, _| rng.gen_range(-1.0..1.0))
}

/// Random, but with a dominant diagonal.
pub fn random_invertible<const N: usize, L: Layout>(rng: &mut StdRng) -> Matrix<N, N, f64, L> {
    let mut m = random_matrix::<N, N, L>(rng);
    for i in 0..N {
        m[(i, i)] += 2.0 * N as f64;
    }
    m
}
