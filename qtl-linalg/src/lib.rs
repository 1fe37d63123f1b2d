//! qtl-linalg: Linear algebra wrappers for qtl-rs
//!
//! Provides the dense matrix type, axis-wise reductions, and the
//! reduced QR decomposition used to build covariate bases.

pub mod decomposition;
pub mod dense;

pub use decomposition::{LinalgError, QrDecomp};
pub use dense::{Axis, DenseMatrix};
