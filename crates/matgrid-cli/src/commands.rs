use anyhow::{bail, Result};
use matgrid::primes::{compute_primes, primes_between};
use matgrid::sampling::RangeSampler;
use matgrid::Matrix;

/// Lay out primes `<= limit` in a matrix `columns` wide.
///
/// `low` and `high` restrict the output to primes strictly between them.
pub fn prime_table(
    limit: u64,
    low: Option<u64>,
    high: Option<u64>,
    columns: usize,
) -> Result<Matrix<u64>> {
    if columns == 0 {
        bail!("--columns must be at least 1");
    }
    let primes = match (low, high) {
        (None, None) => compute_primes(limit),
        (low, high) => primes_between(limit, low.unwrap_or(0), high.unwrap_or(u64::MAX)),
    };
    let rows = primes.len().div_ceil(columns);
    let mut table = Matrix::new(rows, columns);
    table.distribute_mono(primes);
    Ok(table)
}

/// `count` draws from `[min, max]`.
pub fn random_values(min: u64, max: u64, count: usize, seed: Option<u64>) -> Result<Vec<u64>> {
    let mut sampler = match seed {
        Some(seed) => RangeSampler::seeded(min, max, seed)?,
        None => RangeSampler::new(min, max)?,
    };
    Ok(sampler.sample_n(count))
}
