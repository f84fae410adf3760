use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::points::Point;
use crate::streams::stream::Stream;

/// Draws points independently and uniformly from the unit square.
///
/// Each coordinate comes from `StdRng::random::<f64>()`, i.e. `[0, 1)`.
#[derive(Debug)]
pub struct UniformSquareSampler {
    seed: u64,
    rng: StdRng,
    max_points: Option<usize>,
    produced: usize,
}

impl UniformSquareSampler {
    pub fn new(seed: u64, max_points: Option<usize>) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            max_points,
            produced: 0,
        }
    }

    /// Sampler seeded from the thread RNG.
    ///
    /// The drawn seed is kept, so [`restart`](Stream::restart) still replays
    /// the same sequence.
    pub fn from_entropy(max_points: Option<usize>) -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed, max_points)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    #[inline]
    fn gen_coordinate(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl Stream for UniformSquareSampler {
    fn has_more_points(&self) -> bool {
        self.max_points.is_none_or(|max| self.produced < max)
    }

    fn next_point(&mut self) -> Option<Point> {
        if !self.has_more_points() {
            return None;
        }

        let x = self.gen_coordinate();
        let y = self.gen_coordinate();
        self.produced += 1;
        Some(Point::new(x, y))
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
    }
}
