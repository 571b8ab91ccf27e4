//! The end-to-end walkthrough: distribute, reshape, fill with primes,
//! transpose, fill with random values, then add copies together.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use matgrid::primes::primes_between;
use matgrid::sampling::RangeSampler;
use matgrid::{Dimensions, Distribution, Matrix};

use crate::config::DemoConfig;

/// What the walkthrough produced, for callers that want more than the text.
#[derive(Debug)]
pub struct DemoReport {
    pub mono: Distribution,
    pub poly: Distribution,
    pub primes: Distribution,
    pub transposed_shape: Dimensions,
    pub random: Matrix<u64>,
    pub sum: Matrix<u64>,
    pub doubled: Matrix<u64>,
}

pub fn write_matrix<W, T>(out: &mut W, title: &str, matrix: &Matrix<T>) -> std::io::Result<()>
where
    W: Write,
    T: Display,
{
    writeln!(out, "{} ({}):", title, matrix.dimensions())?;
    if !matrix.dimensions().is_degenerate() {
        writeln!(out, "{}", matrix)?;
    }
    writeln!(out)
}

pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoReport> {
    config.validate().context("Invalid demo configuration")?;

    let mut matrix: Matrix<u64> =
        Matrix::new(config.mono_shape.rows, config.mono_shape.columns);

    info!("[matgrid::demo] mono distribution into {}", matrix.dimensions());
    let mono = matrix.distribute_mono(config.mono_values.iter().copied());
    write_matrix(out, "Matrix", &matrix)?;

    matrix.set_dimensions(config.poly_shape.rows, config.poly_shape.columns);
    info!("[matgrid::demo] poly distribution into {}", matrix.dimensions());
    let poly = matrix
        .distribute_poly(&config.poly_rows)
        .context("Poly distribution failed")?;
    write_matrix(out, "Matrix after resize", &matrix)?;

    matrix.set_dimensions(config.prime_shape.rows, config.prime_shape.columns);
    let primes = primes_between(config.prime_limit, config.prime_low, config.prime_high);
    info!(
        "[matgrid::demo] {} primes in ({}, {})",
        primes.len(),
        config.prime_low,
        config.prime_high
    );
    let primes = matrix.distribute_mono(primes);
    write_matrix(out, "Matrix with prime numbers", &matrix)?;

    matrix.transpose();
    write_matrix(out, "Matrix with primes after transposition", &matrix)?;
    writeln!(out, "Prime field matrix size: {}\n", matrix.size())?;
    let transposed_shape = matrix.dimensions();

    let mut sampler = match config.seed {
        Some(seed) => RangeSampler::seeded(config.random_min, config.random_max, seed),
        None => RangeSampler::new(config.random_min, config.random_max),
    }
    .context("Invalid random range")?;
    matrix.fill_with(|| sampler.sample());
    write_matrix(out, "Matrix with random numbers", &matrix)?;

    let mut a: Matrix<u64> = Matrix::new(config.mono_shape.rows, config.mono_shape.columns);
    a.distribute_mono(config.addition_values.iter().copied());
    let b = a.clone();
    let c = b.clone();
    writeln!(
        out,
        "Dimensions: a({}), b({}), c({})",
        a.dimensions(),
        b.dimensions(),
        c.dimensions()
    )?;

    let sum = (&b + &c).context("Adding copies failed")?;
    write_matrix(out, "b + c", &sum)?;
    let doubled = (&sum + &sum).context("Adding result to itself failed")?;
    write_matrix(out, "(b + c) + (b + c)", &doubled)?;
    writeln!(out, "Matrix size: {}", doubled.size())?;

    Ok(DemoReport {
        mono,
        poly,
        primes,
        transposed_shape,
        random: matrix,
        sum,
        doubled,
    })
}
