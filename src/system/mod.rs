//! Linear systems `Ax = b` and matrix equations `AX = B`.
//!
//! Both types validate their shapes on construction and own their data.
//! The augmented matrix is built on demand, so every solve starts from a
//! fresh copy.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::matrix::ShapeError;
use crate::traits::Scalar;
use crate::Matrix;

/// A system `Ax = b` with `m` equations and `n` unknowns.
///
/// ```
/// use echelon::Matrix;
/// use echelon::system::LinearSystem;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// let sys = LinearSystem::new(a, vec![5.0, 11.0]).unwrap();
/// assert_eq!(sys.num_equations(), 2);
/// assert_eq!(sys.augmented().row(1).unwrap(), vec![3.0, 4.0, 11.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T> {
    a: Matrix<T>,
    b: Vec<T>,
    names: Option<Vec<String>>,
}

impl<T: Scalar> LinearSystem<T> {
    /// Pair a coefficient matrix with a right-hand side.
    ///
    /// Fails with [`ShapeError::RowLengthMismatch`] unless `b` has one entry
    /// per row of `a`.
    pub fn new(a: Matrix<T>, b: Vec<T>) -> Result<Self, ShapeError> {
        if b.len() != a.nrows() {
            return Err(ShapeError::RowLengthMismatch {
                expected: a.nrows(),
                got: b.len(),
            });
        }
        Ok(Self { a, b, names: None })
    }

    /// Split `[A | b]` at its last column.
    ///
    /// The augmented matrix needs at least two columns.
    pub fn from_augmented(aug: &Matrix<T>) -> Result<Self, ShapeError> {
        let n = aug.ncols();
        let a = aug.leading_columns(n.saturating_sub(1))?;
        let b = aug.column(n - 1)?;
        Ok(Self { a, b, names: None })
    }

    /// `Ax = 0`.
    pub fn homogeneous(a: Matrix<T>) -> Self {
        let b = alloc::vec![T::zero(); a.nrows()];
        Self { a, b, names: None }
    }

    /// Attach display names for the unknowns, one per column of `A`.
    pub fn with_variable_names<I, S>(mut self, names: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.num_variables() {
            return Err(ShapeError::RowLengthMismatch {
                expected: self.num_variables(),
                got: names.len(),
            });
        }
        self.names = Some(names);
        Ok(self)
    }

    /// Coefficient matrix `A`.
    #[inline]
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.a
    }

    /// Right-hand side `b`.
    #[inline]
    pub fn rhs(&self) -> &[T] {
        &self.b
    }

    #[inline]
    pub fn num_equations(&self) -> usize {
        self.a.nrows()
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.a.ncols()
    }

    /// Names given through [`with_variable_names`](Self::with_variable_names).
    pub fn variable_names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Name of unknown `j`: the attached name, or `x1`, `x2`, ... by default.
    pub fn variable_name(&self, j: usize) -> String {
        match self.names.as_ref().and_then(|n| n.get(j)) {
            Some(name) => name.clone(),
            None => format!("x{}", j + 1),
        }
    }

    /// Whether every entry of `b` is zero.
    pub fn is_homogeneous(&self) -> bool {
        self.b.iter().all(|x| x.is_zero())
    }

    /// `[A | b]`, an `m x (n + 1)` copy.
    pub fn augmented(&self) -> Matrix<T> {
        self.a.append_column(&self.b)
    }
}

/// A matrix equation `AX = B` with `k` right-hand-side columns.
///
/// Decomposes into `k` independent [`LinearSystem`]s sharing `A`.
///
/// ```
/// use echelon::Matrix;
/// use echelon::system::MatrixSystem;
///
/// let a = Matrix::<f64>::identity(2).unwrap();
/// let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let eq = MatrixSystem::new(a, b).unwrap();
/// let rhs: Vec<Vec<f64>> = eq.systems().map(|s| s.rhs().to_vec()).collect();
/// assert_eq!(rhs, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSystem<T> {
    a: Matrix<T>,
    b: Matrix<T>,
}

impl<T: Scalar> MatrixSystem<T> {
    /// Fails with [`ShapeError::ShapeMismatch`] unless `A` and `B` have the
    /// same number of rows.
    pub fn new(a: Matrix<T>, b: Matrix<T>) -> Result<Self, ShapeError> {
        if a.nrows() != b.nrows() {
            return Err(ShapeError::ShapeMismatch {
                expected: (a.nrows(), b.ncols()),
                got: b.shape(),
            });
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn coefficients(&self) -> &Matrix<T> {
        &self.a
    }

    #[inline]
    pub fn rhs(&self) -> &Matrix<T> {
        &self.b
    }

    #[inline]
    pub fn num_equations(&self) -> usize {
        self.a.nrows()
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.a.ncols()
    }

    /// Number of right-hand-side columns.
    #[inline]
    pub fn num_rhs(&self) -> usize {
        self.b.ncols()
    }

    /// The system `A x = B[:, j]`.
    pub fn rhs_column(&self, j: usize) -> Result<LinearSystem<T>, ShapeError> {
        let b = self.b.column(j)?;
        Ok(LinearSystem {
            a: self.a.clone(),
            b,
            names: None,
        })
    }

    /// One system per column of `B`, in column order.
    pub fn systems(&self) -> impl Iterator<Item = LinearSystem<T>> + '_ {
        (0..self.num_rhs()).map(move |j| LinearSystem {
            a: self.a.clone(),
            b: self.b.rows().map(|row| row[j]).collect(),
            names: None,
        })
    }

    /// `[A | B]`, an `m x (n + k)` copy.
    pub fn augmented(&self) -> Matrix<T> {
        self.a.concat_columns(&self.b)
    }
}
