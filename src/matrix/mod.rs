mod ops;
mod util;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Malformed shapes and out-of-range accesses.
///
/// Raised at construction time for [`Matrix`] and the system types, and by
/// the checked accessors. Every variant carries the offending indices or
/// dimensions so the caller can report them.
///
/// ```
/// use echelon::Matrix;
/// use echelon::matrix::ShapeError;
///
/// let ragged = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0]]);
/// assert_eq!(
///     ragged.unwrap_err(),
///     ShapeError::RaggedRows { row: 1, expected: 2, got: 1 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no cells.
    EmptyMatrix,
    /// Row `row` has `got` cells while the first row has `expected`.
    RaggedRows { row: usize, expected: usize, got: usize },
    /// Two operands disagree on shape; `(rows, cols)` pairs.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// A row, vector or name list has the wrong length.
    RowLengthMismatch { expected: usize, got: usize },
    /// `(row, col)` lies outside an `nrows x ncols` matrix.
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::EmptyMatrix => write!(f, "matrix must have at least one row and one column"),
            ShapeError::RaggedRows { row, expected, got } => write!(
                f,
                "row {} has {} entries, expected {} like the first row",
                row, got, expected
            ),
            ShapeError::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            ShapeError::RowLengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {}, got {}", expected, got)
            }
            ShapeError::IndexOutOfRange {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, nrows, ncols
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage so that every row is a contiguous slice, which
/// is what elementary row operations touch. A `Matrix` always has at least
/// one row and one column; all constructors reject empty or ragged input.
///
/// Cloning is a deep copy. Reading a row through [`Matrix::row`] returns an
/// owned copy, so callers never alias the internal storage.
///
/// # Examples
///
/// ```
/// use echelon::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a.row(1).unwrap(), vec![3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Build a matrix from a sequence of rows, copying every cell.
    ///
    /// Fails with [`ShapeError::EmptyMatrix`] when there are no rows or the
    /// first row is empty, and [`ShapeError::RaggedRows`] when a later row
    /// differs in length from the first.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let ncols = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(ShapeError::EmptyMatrix),
        };
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ShapeError::RaggedRows {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            nrows: rows.len(),
            ncols,
        })
    }

    /// Build a matrix whose columns are the given vectors.
    ///
    /// This is how generator sets `{v1, ..., vk}` become the coefficient
    /// matrix `[v1 ... vk]`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_columns(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m[(2, 1)], 6);
    /// ```
    pub fn from_columns<C: AsRef<[T]>>(columns: &[C]) -> Result<Self, ShapeError> {
        Ok(Self::from_rows(columns)?.transpose())
    }

    /// Build a matrix from a flat row-major vector.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        if nrows == 0 || ncols == 0 {
            return Err(ShapeError::EmptyMatrix);
        }
        if data.len() != nrows * ncols {
            return Err(ShapeError::RowLengthMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create an `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        if nrows == 0 || ncols == 0 {
            return Err(ShapeError::EmptyMatrix);
        }
        Ok(Self {
            data: alloc::vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let id = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(0, 2)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self, ShapeError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }
}

// ── Checked access ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<(), ShapeError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(ShapeError::IndexOutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, ShapeError> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.ncols + col])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ShapeError> {
        self.check_index(row, col)?;
        self.data[row * self.ncols + col] = value;
        Ok(())
    }

    /// Copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vec<T>, ShapeError> {
        self.check_index(row, 0)?;
        Ok(self.row_as_slice(row).to_vec())
    }

    /// Copy of column `col`.
    pub fn column(&self, col: usize) -> Result<Vec<T>, ShapeError> {
        self.check_index(0, col)?;
        Ok((0..self.nrows)
            .map(|i| self.data[i * self.ncols + col])
            .collect())
    }

    /// Replace row `row` with `values`.
    ///
    /// Fails with [`ShapeError::ShapeMismatch`] (as `1 x n` rows) if
    /// `values.len()` differs from the column count; the matrix is left
    /// untouched in that case.
    pub fn replace_row(&mut self, row: usize, values: &[T]) -> Result<(), ShapeError> {
        self.check_index(row, 0)?;
        if values.len() != self.ncols {
            return Err(ShapeError::ShapeMismatch {
                expected: (1, self.ncols),
                got: (1, values.len()),
            });
        }
        self.row_as_mut_slice(row).copy_from_slice(values);
        Ok(())
    }

    /// Deep copy as a nested `Vec` of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.ncols).map(|r| r.to_vec()).collect()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.ncols)
    }

    /// Row-major view of the underlying storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize) -> &[T] {
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T] {
        let start = row * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let n = self.ncols;
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..lo * n + n].swap_with_slice(&mut tail[..n]);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn from_rows() {
        let m = sample();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn from_rows_empty() {
        let none: [[f64; 2]; 0] = [];
        assert_eq!(Matrix::from_rows(&none).unwrap_err(), ShapeError::EmptyMatrix);
        let empty_row: [Vec<f64>; 1] = [vec![]];
        assert_eq!(
            Matrix::from_rows(&empty_row).unwrap_err(),
            ShapeError::EmptyMatrix
        );
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRows {
                row: 2,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_rows_copies_input() {
        let mut rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let m = Matrix::from_rows(&rows).unwrap();
        rows[0][0] = 99.0;
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn from_columns() {
        let m = Matrix::from_columns(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(0).unwrap(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn from_row_major_checks_length() {
        assert_eq!(
            Matrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err(),
            ShapeError::RowLengthMismatch {
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            Matrix::<f64>::from_row_major(0, 2, vec![]).unwrap_err(),
            ShapeError::EmptyMatrix
        );
    }

    #[test]
    fn zeros_and_identity() {
        let z = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
        let id = Matrix::<i32>::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { 1 } else { 0 });
            }
        }
        assert_eq!(Matrix::<f64>::zeros(0, 1).unwrap_err(), ShapeError::EmptyMatrix);
    }

    #[test]
    fn get_set() {
        let mut m = sample();
        assert_eq!(m.get(1, 2), Ok(6.0));
        m.set(1, 2, -1.0).unwrap();
        assert_eq!(m[(1, 2)], -1.0);
    }

    #[test]
    fn get_out_of_range() {
        let m = sample();
        assert_eq!(
            m.get(2, 0).unwrap_err(),
            ShapeError::IndexOutOfRange {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 3
            }
        );
        assert!(m.get(0, 3).is_err());
    }

    #[test]
    fn set_out_of_range_leaves_matrix() {
        let mut m = sample();
        assert!(m.set(5, 5, 0.0).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn row_is_a_copy() {
        let m = sample();
        let mut r = m.row(0).unwrap();
        r[0] = 100.0;
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn column() {
        let m = sample();
        assert_eq!(m.column(1).unwrap(), vec![2.0, 5.0]);
        assert!(m.column(3).is_err());
    }

    #[test]
    fn replace_row() {
        let mut m = sample();
        m.replace_row(0, &[7.0, 8.0, 9.0]).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn replace_row_wrong_length() {
        let mut m = sample();
        assert_eq!(
            m.replace_row(0, &[1.0]).unwrap_err(),
            ShapeError::ShapeMismatch {
                expected: (1, 3),
                got: (1, 1)
            }
        );
        assert_eq!(m, sample());
        assert!(m.replace_row(4, &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn to_rows() {
        assert_eq!(
            sample().to_rows(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
    }

    #[test]
    fn swap_rows() {
        let mut m = Matrix::from_rows(&[[1, 2], [3, 4], [5, 6]]).unwrap();
        m.swap_rows(2, 0);
        assert_eq!(m.to_rows(), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
        m.swap_rows(1, 1);
        assert_eq!(m.to_rows(), vec![vec![5, 6], vec![3, 4], vec![1, 2]]);
    }

    #[test]
    fn clone_is_deep() {
        let a = sample();
        let mut b = a.clone();
        b[(0, 0)] = 42.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics_out_of_range() {
        let m = sample();
        let _ = m[(0, 3)];
    }
}
