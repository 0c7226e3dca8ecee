use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform samples in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which makes constant or scripted
/// sources trivial in tests. Wrap a [`rand::Rng`] in [`RngSource`] to draw from
/// a real generator.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

/// The default source: the thread-local generator from `rand::rng()`.
pub type ThreadSource = RngSource<ThreadRng>;

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Reproducible source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // StandardUniform for f64 is [0, 1)
        self.rng.random::<f64>()
    }
}
