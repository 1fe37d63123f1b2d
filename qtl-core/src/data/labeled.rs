//! Labeled containers: a named vector indexed by sample IDs, and a matrix
//! with feature labels on rows and sample IDs on columns.

use qtl_linalg::DenseMatrix;

use crate::error::{QtlError, Result};

/// A vector of values with one label per entry and an optional name.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledVector {
    name: Option<String>,
    index: Vec<String>,
    values: Vec<f64>,
}

impl LabeledVector {
    pub fn new(name: Option<String>, index: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(QtlError::LabelMismatch {
                what: "vector index",
                labels: index.len(),
                values: values.len(),
            });
        }
        Ok(Self { name, index, values })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Same name and index, new values. Lengths must agree.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Result<Self> {
        Self::new(self.name.clone(), self.index.clone(), values)
    }
}

/// A features x samples matrix with row and column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    index: Vec<String>,
    columns: Vec<String>,
    values: DenseMatrix,
}

impl LabeledMatrix {
    pub fn new(index: Vec<String>, columns: Vec<String>, values: DenseMatrix) -> Result<Self> {
        if index.len() != values.nrows() {
            return Err(QtlError::LabelMismatch {
                what: "row index",
                labels: index.len(),
                values: values.nrows(),
            });
        }
        if columns.len() != values.ncols() {
            return Err(QtlError::LabelMismatch {
                what: "columns",
                labels: columns.len(),
                values: values.ncols(),
            });
        }
        Ok(Self {
            index,
            columns,
            values,
        })
    }

    /// Row labels.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &DenseMatrix {
        &self.values
    }

    pub(crate) fn with_values(&self, values: DenseMatrix) -> Result<Self> {
        Self::new(self.index.clone(), self.columns.clone(), values)
    }
}
