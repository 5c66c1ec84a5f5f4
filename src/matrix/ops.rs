use alloc::vec::Vec;
use core::ops::Mul;

use crate::traits::Scalar;

use super::{Matrix, ShapeError};

// ── Shape manipulation ──────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3]]).unwrap();
    /// assert_eq!(m.transpose().shape(), (3, 1));
    /// ```
    pub fn transpose(&self) -> Self {
        let (m, n) = (self.nrows, self.ncols);
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(self.data[i * n + j]);
            }
        }
        Matrix {
            data,
            nrows: n,
            ncols: m,
        }
    }

    /// Horizontal concatenation `[self | rhs]`.
    ///
    /// Both operands must have the same number of rows.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[[5], [6]]).unwrap();
    /// assert_eq!(a.hstack(&b).unwrap().row(1).unwrap(), vec![3, 4, 6]);
    /// ```
    pub fn hstack(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.nrows != rhs.nrows {
            return Err(ShapeError::ShapeMismatch {
                expected: (self.nrows, rhs.ncols),
                got: rhs.shape(),
            });
        }
        Ok(self.concat_columns(rhs))
    }

    /// `[self | rhs]` for operands already known to share a row count.
    pub(crate) fn concat_columns(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.nrows, rhs.nrows);
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for (l, r) in self.rows().zip(rhs.rows()) {
            data.extend_from_slice(l);
            data.extend_from_slice(r);
        }
        Matrix {
            data,
            nrows: self.nrows,
            ncols,
        }
    }

    /// Append `column` as a new last column, producing `[self | column]`.
    pub fn augment(&self, column: &[T]) -> Result<Self, ShapeError> {
        if column.len() != self.nrows {
            return Err(ShapeError::RowLengthMismatch {
                expected: self.nrows,
                got: column.len(),
            });
        }
        Ok(self.append_column(column))
    }

    pub(crate) fn append_column(&self, column: &[T]) -> Self {
        debug_assert_eq!(self.nrows, column.len());
        let ncols = self.ncols + 1;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for (row, &c) in self.rows().zip(column) {
            data.extend_from_slice(row);
            data.push(c);
        }
        Matrix {
            data,
            nrows: self.nrows,
            ncols,
        }
    }

    /// Sub-matrix made of the leading `ncols` columns.
    pub fn leading_columns(&self, ncols: usize) -> Result<Self, ShapeError> {
        if ncols == 0 || ncols > self.ncols {
            return Err(ShapeError::ShapeMismatch {
                expected: (self.nrows, self.ncols),
                got: (self.nrows, ncols),
            });
        }
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for row in self.rows() {
            data.extend_from_slice(&row[..ncols]);
        }
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols,
        })
    }
}

// ── Products ────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product `A * x`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.mul_vec(&[1, 2]).unwrap(), vec![5, 11]);
    /// ```
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, ShapeError> {
        if x.len() != self.ncols {
            return Err(ShapeError::RowLengthMismatch {
                expected: self.ncols,
                got: x.len(),
            });
        }
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Matrix product `A * B`, checking inner dimensions.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.ncols != rhs.nrows {
            return Err(ShapeError::ShapeMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        Ok(self * rhs)
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = alloc::vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}
