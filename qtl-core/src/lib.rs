//! qtl-core: Covariate residualization and p-value adjustment for QTL mapping
//!
//! Removes confounding covariate signal (batch, population structure)
//! from per-feature measurements via a QR-derived orthonormal basis, and
//! adjusts p-values for false-discovery rate with Benjamini-Hochberg.

pub mod data;
pub mod error;
pub mod multiple_testing;
pub mod residualize;
pub mod util;

pub use data::{Data, LabeledMatrix, LabeledVector};
pub use error::{QtlError, Result};
pub use multiple_testing::{padjust_bh, padjust_bh_labeled};
pub use residualize::{
    residualize, residualize_with, CovariateBasis, Notice, NoticeSink, ResidualizeOptions,
    Residualizer,
};
pub use util::normalize::center_normalize;
