//! Numerical helpers that sit outside the residualization pipeline.

pub mod normalize;
