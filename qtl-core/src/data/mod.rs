//! Input adapter for the numerical routines.
//!
//! Every input is one of four shapes: a plain vector, a plain matrix, or
//! a labeled version of either. Each converts to the canonical
//! features x samples matrix (a vector becomes a single row) and is
//! rebuilt, labels and all, from a canonical result of the same shape.

pub mod labeled;

use qtl_linalg::DenseMatrix;

use crate::error::Result;
pub use labeled::{LabeledMatrix, LabeledVector};

#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Vector(Vec<f64>),
    Matrix(DenseMatrix),
    LabeledVector(LabeledVector),
    LabeledMatrix(LabeledMatrix),
}

impl Data {
    /// Number of dimensions of the input (1 for vectors, 2 for matrices).
    pub fn ndim(&self) -> usize {
        match self {
            Data::Vector(_) | Data::LabeledVector(_) => 1,
            Data::Matrix(_) | Data::LabeledMatrix(_) => 2,
        }
    }

    /// Canonical features x samples form.
    pub fn to_canonical(&self) -> DenseMatrix {
        match self {
            Data::Vector(v) => DenseMatrix::row_vector(v),
            Data::LabeledVector(v) => DenseMatrix::row_vector(v.values()),
            Data::Matrix(m) => m.clone(),
            Data::LabeledMatrix(m) => m.values().clone(),
        }
    }

    /// Rebuild this variant around `values`, which must have the
    /// canonical shape of `self`. Vectors are squeezed back from row 0.
    pub fn from_canonical(&self, values: DenseMatrix) -> Result<Data> {
        Ok(match self {
            Data::Vector(_) => Data::Vector(values.row(0)),
            Data::LabeledVector(v) => Data::LabeledVector(v.with_values(values.row(0))?),
            Data::Matrix(_) => Data::Matrix(values),
            Data::LabeledMatrix(m) => Data::LabeledMatrix(m.with_values(values)?),
        })
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Data::Vector(v) => Some(v.as_slice()),
            Data::LabeledVector(v) => Some(v.values()),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&DenseMatrix> {
        match self {
            Data::Matrix(m) => Some(m),
            Data::LabeledMatrix(m) => Some(m.values()),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for Data {
    fn from(v: Vec<f64>) -> Self {
        Data::Vector(v)
    }
}

impl From<&[f64]> for Data {
    fn from(v: &[f64]) -> Self {
        Data::Vector(v.to_vec())
    }
}

impl From<DenseMatrix> for Data {
    fn from(m: DenseMatrix) -> Self {
        Data::Matrix(m)
    }
}

impl From<LabeledVector> for Data {
    fn from(v: LabeledVector) -> Self {
        Data::LabeledVector(v)
    }
}

impl From<LabeledMatrix> for Data {
    fn from(m: LabeledMatrix) -> Self {
        Data::LabeledMatrix(m)
    }
}
