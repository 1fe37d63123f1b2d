//! Error type shared by the qtl-core operations.

use qtl_linalg::LinalgError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QtlError {
    #[error("Colinear or zero covariates detected ({count} columns)")]
    ColinearCovariates { count: usize },

    #[error("Sample dimension mismatch: covariates have {expected} samples, data has {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Invalid axis {axis} for {ndim}-dimensional input")]
    InvalidAxis { axis: usize, ndim: usize },

    #[error("{what} has {labels} labels for {values} values")]
    LabelMismatch {
        what: &'static str,
        labels: usize,
        values: usize,
    },

    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

pub type Result<T> = std::result::Result<T, QtlError>;
