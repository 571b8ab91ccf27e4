//! Bounded-range random producers used to populate matrices.
//!
//! Everything here draws from a closed interval `[min, max]`. Samplers are
//! seeded from entropy by default; use [`RangeSampler::seeded`] for
//! reproducible sequences.

use std::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::error::SamplingError;

/// Number of draws made by [`generate_random_bytes`].
pub const RANDOM_BYTES_LEN: usize = 100;

/// Uniform sampler over the closed interval `[min, max]`.
pub struct RangeSampler<X: SampleUniform> {
    dist: Uniform<X>,
    rng: StdRng,
}

impl<X> RangeSampler<X>
where
    X: SampleUniform + PartialOrd + fmt::Debug,
{
    pub fn new(min: X, max: X) -> Result<Self, SamplingError> {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    pub fn seeded(min: X, max: X, seed: u64) -> Result<Self, SamplingError> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: X, max: X, rng: StdRng) -> Result<Self, SamplingError> {
        if min > max {
            return Err(SamplingError::EmptyRange {
                min: format!("{:?}", min),
                max: format!("{:?}", max),
            });
        }
        Ok(Self {
            dist: Uniform::new_inclusive(min, max),
            rng,
        })
    }

    pub fn sample(&mut self) -> X {
        self.rng.sample(&self.dist)
    }

    pub fn sample_n(&mut self, count: usize) -> Vec<X> {
        (0..count).map(|_| self.sample()).collect()
    }
}

impl<X: SampleUniform> fmt::Debug for RangeSampler<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSampler").finish_non_exhaustive()
    }
}

/// Draw a single value from `[min, max]`.
pub fn generate_random(min: u32, max: u32) -> Result<u32, SamplingError> {
    Ok(RangeSampler::new(min, max)?.sample())
}

/// Draw [`RANDOM_BYTES_LEN`] values from `[min, max]`.
pub fn generate_random_bytes(min: u64, max: u64) -> Result<Vec<u64>, SamplingError> {
    Ok(RangeSampler::new(min, max)?.sample_n(RANDOM_BYTES_LEN))
}

/// `count` uppercase letters drawn uniformly from `'A'..='P'`.
pub fn generate_random_chars(count: usize) -> Vec<char> {
    let dist = Uniform::new_inclusive(b'A', b'P');
    thread_rng()
        .sample_iter(dist)
        .take(count)
        .map(char::from)
        .collect()
}
