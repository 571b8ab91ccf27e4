//! matgrid: a small dense matrix container.
//!
//! The core is [`math::Matrix`], a resizable row-major grid over any
//! [`math::Element`] with flat and per-row value distribution, in-place
//! reshape and transpose, structural equality and checked elementwise
//! addition. The [`sampling`] and [`primes`] modules produce integer
//! sequences for filling matrices; they are independent of the core.
pub mod error;
pub mod math;
pub mod primes;
pub mod sampling;

pub use error::{MatrixError, Result, SamplingError};
pub use math::{Dimensions, Distribution, Element, Matrix};
