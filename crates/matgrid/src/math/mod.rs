//! Dense matrix types.
//!
//! `Matrix` is a row-major 2D container over any [`Element`], with its shape
//! held as a runtime [`Dimensions`] value. Storage is a single `Vec` so the
//! shape invariants hold by construction.
pub mod dims;
pub mod element;
pub mod matrix;

pub use dims::Dimensions;
pub use element::Element;
pub use matrix::{Distribution, Matrix};
