//! Column-major dense matrix used for record redistribution
//!
//! External matrix-based processing hands sample data back as one
//! rectangular block; each column belongs to exactly one record.

use crate::error::{Result, SeisError};

/// Rectangular matrix of f64 samples, stored column-major
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a matrix from column-major data
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SeisError::MatrixShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    /// Create a matrix from equally long columns
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let rows = columns.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * columns.len());
        for col in columns {
            if col.len() != rows {
                return Err(SeisError::MatrixShape {
                    rows,
                    cols: columns.len(),
                    len: col.len(),
                });
            }
            data.extend_from_slice(col);
        }
        Ok(DenseMatrix {
            rows,
            cols: columns.len(),
            data,
        })
    }

    /// Matrix with no rows or columns
    pub fn empty() -> Self {
        DenseMatrix::default()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One column as a contiguous slice
    ///
    /// Panics if `col` is out of bounds; callers index columns they have
    /// already range-checked against ownership tables.
    pub fn col(&self, col: usize) -> &[f64] {
        let start = col * self.rows;
        &self.data[start..start + self.rows]
    }
}
