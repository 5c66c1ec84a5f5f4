use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::elimination::{reduce, EliminationError, EliminationSettings};
use crate::matrix::ShapeError;
use crate::system::{LinearSystem, MatrixSystem};
use crate::traits::FieldScalar;
use crate::Matrix;

use super::gauss_jordan::{direction_vectors, GaussJordanSolver};
use super::{Solution, SolutionStatus};

/// Solve `Ax = b` in one call.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::{solve_single, SolutionStatus};
///
/// let a = Matrix::from_rows(&[[1.0_f64, 1.0], [2.0, 2.0]]).unwrap();
/// let sol = solve_single(&a, &[3.0, 8.0], &EliminationSettings::default()).unwrap();
/// assert_eq!(sol.status(), SolutionStatus::Inconsistent);
/// ```
pub fn solve_single<T: FieldScalar>(
    a: &Matrix<T>,
    b: &[T],
    settings: &EliminationSettings<T>,
) -> Result<Solution<T>, EliminationError> {
    let system = LinearSystem::new(a.clone(), b.to_vec())?;
    GaussJordanSolver::new(*settings).solve(&system)
}

/// Solution for one column of `B` in `AX = B`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSolution<T> {
    /// `b1`, `b2`, ... in column order.
    pub label: String,
    pub solution: Solution<T>,
}

/// Per-column results of `AX = B` and their aggregate status.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixEquationReport<T> {
    pub columns: Vec<ColumnSolution<T>>,
    /// Worst status over all columns.
    pub status: SolutionStatus,
}

impl<T: FieldScalar> MatrixEquationReport<T> {
    /// Look up a column by its label.
    pub fn column(&self, label: &str) -> Option<&Solution<T>> {
        self.columns
            .iter()
            .find(|c| c.label == label)
            .map(|c| &c.solution)
    }

    /// `X` with `X[:, j]` the solution for column `j`, when every column
    /// has a unique solution.
    pub fn solution_matrix(&self) -> Option<Matrix<T>> {
        let cols = self
            .columns
            .iter()
            .map(|c| c.solution.unique())
            .collect::<Option<Vec<_>>>()?;
        Matrix::from_columns(&cols).ok()
    }
}

/// Solve `AX = B` column by column.
///
/// Each column of `B` is an independent system sharing `A`. The report's
/// status is the worst per-column status.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::{solve_matrix_equation, SolutionStatus};
///
/// let a = Matrix::<f64>::identity(2).unwrap();
/// let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let report = solve_matrix_equation(&a, &b, &EliminationSettings::default()).unwrap();
/// assert_eq!(report.status, SolutionStatus::Unique);
/// assert_eq!(report.solution_matrix(), Some(b));
/// ```
pub fn solve_matrix_equation<T: FieldScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    settings: &EliminationSettings<T>,
) -> Result<MatrixEquationReport<T>, EliminationError> {
    let equation = MatrixSystem::new(a.clone(), b.clone())?;
    let solver = GaussJordanSolver::new(*settings);

    let mut columns = Vec::with_capacity(equation.num_rhs());
    let mut status = SolutionStatus::Unique;
    for (j, system) in equation.systems().enumerate() {
        let solution = solver.solve(&system)?;
        status = status.worst(solution.status());
        columns.push(ColumnSolution {
            label: format!("b{}", j + 1),
            solution,
        });
    }
    log::debug!("matrix equation with {} columns is {}", columns.len(), status);
    Ok(MatrixEquationReport { columns, status })
}

/// Basis of the kernel of the coefficient matrix whose RREF is `rref`.
///
/// `rref` may carry trailing columns beyond `n_vars`; they are ignored.
/// Returns one vector per free column, empty when the kernel is trivial.
pub fn null_space_from_rref<T: FieldScalar>(
    rref: &Matrix<T>,
    pivot_cols: &[usize],
    n_vars: usize,
    eps: T,
) -> Result<Vec<Vec<T>>, EliminationError> {
    if n_vars > rref.ncols() {
        return Err(ShapeError::ShapeMismatch {
            expected: (rref.nrows(), n_vars),
            got: rref.shape(),
        }
        .into());
    }
    if pivot_cols.iter().any(|&p| p >= n_vars) {
        return Err(EliminationError::InvariantViolated(
            "pivot column outside the variable columns",
        ));
    }
    let free: Vec<usize> = (0..n_vars).filter(|c| !pivot_cols.contains(c)).collect();
    direction_vectors(rref, pivot_cols, &free, n_vars, eps)
}

/// Basis of `{ v : A v = 0 }`.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::null_space;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]).unwrap();
/// let basis = null_space(&a, &EliminationSettings::default()).unwrap();
/// assert_eq!(basis, vec![vec![-2.0, 1.0]]);
/// ```
pub fn null_space<T: FieldScalar>(
    a: &Matrix<T>,
    settings: &EliminationSettings<T>,
) -> Result<Vec<Vec<T>>, EliminationError> {
    let n = a.ncols();
    let red = reduce(a, n, settings, None)?;
    null_space_from_rref(&red.matrix, &red.pivot_cols, n, settings.epsilon)
}
