use alloc::vec::Vec;

use crate::elimination::{reduce, EliminationError, EliminationSettings, History, Reduction};
use crate::system::LinearSystem;
use crate::traits::FieldScalar;
use crate::Matrix;

use super::{ParametricSolution, Solution, SolutionKind};

/// Solver for `Ax = b` by full Gauss-Jordan reduction of `[A | b]`.
///
/// The solver holds only its settings, so one instance can be reused for
/// any number of systems. Each call reduces a private copy of the
/// augmented matrix.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::GaussJordanSolver;
/// use echelon::system::LinearSystem;
/// use num_rational::Rational64;
///
/// let r = |n| Rational64::from_integer(n);
/// let a = Matrix::from_rows(&[[r(1), r(2)], [r(3), r(4)]]).unwrap();
/// let sys = LinearSystem::new(a, vec![r(5), r(11)]).unwrap();
///
/// let solver = GaussJordanSolver::new(EliminationSettings::default().with_steps(true));
/// let sol = solver.solve(&sys).unwrap();
/// assert_eq!(sol.unique(), Some(&[r(1), r(2)][..]));
/// assert!(sol.history.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussJordanSolver<T> {
    settings: EliminationSettings<T>,
}

impl<T: FieldScalar> Default for GaussJordanSolver<T> {
    fn default() -> Self {
        Self::new(EliminationSettings::default())
    }
}

impl<T: FieldScalar> GaussJordanSolver<T> {
    pub fn new(settings: EliminationSettings<T>) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn settings(&self) -> &EliminationSettings<T> {
        &self.settings
    }

    /// Solve `system`, classifying it as unique, infinite or inconsistent.
    ///
    /// Errors only signal malformed input or a broken internal invariant;
    /// an inconsistent system is reported through
    /// [`SolutionKind::Inconsistent`].
    pub fn solve(&self, system: &LinearSystem<T>) -> Result<Solution<T>, EliminationError> {
        let n_vars = system.num_variables();
        let aug = system.augmented();
        let mut history = self.settings.record_steps.then(History::new);
        let red = reduce(&aug, n_vars, &self.settings, history.as_mut())?;
        let solution = classify(&red, n_vars, self.settings.epsilon, history)?;
        log::debug!(
            "{}x{} system is {} (rank {}, free {:?})",
            system.num_equations(),
            n_vars,
            solution.status(),
            solution.rank,
            solution.free_vars
        );
        Ok(solution)
    }
}

/// Read the solution off a reduced `[A | b]` whose RHS sits in column
/// `n_vars`.
fn classify<T: FieldScalar>(
    red: &Reduction<T>,
    n_vars: usize,
    eps: T,
    history: Option<History<T>>,
) -> Result<Solution<T>, EliminationError> {
    let m = &red.matrix;
    let free_vars = red.free_cols(n_vars);

    let kind = if has_contradiction(m, n_vars, eps) {
        SolutionKind::Inconsistent
    } else {
        let particular = particular_solution(m, &red.pivot_cols, n_vars, eps)?;
        if red.rank == n_vars {
            SolutionKind::Unique(particular)
        } else {
            let directions = direction_vectors(m, &red.pivot_cols, &free_vars, n_vars, eps)?;
            SolutionKind::Infinite(ParametricSolution {
                particular,
                directions,
                free_vars: free_vars.clone(),
            })
        }
    };

    Ok(Solution {
        kind,
        pivot_cols: red.pivot_cols.clone(),
        free_vars,
        rank: red.rank,
        history,
    })
}

/// Whether some row reads `0 = c` with `c` non-negligible.
///
/// Every row is checked since a zero row is not guaranteed to be last.
fn has_contradiction<T: FieldScalar>(m: &Matrix<T>, n_vars: usize, eps: T) -> bool {
    m.rows().any(|row| {
        row[..n_vars].iter().all(|x| x.is_negligible(eps)) && !row[n_vars].is_negligible(eps)
    })
}

/// Row holding the leading one of pivot column `col`.
pub(super) fn pivot_row<T: FieldScalar>(
    m: &Matrix<T>,
    col: usize,
    eps: T,
) -> Result<usize, EliminationError> {
    m.rows()
        .position(|row| row[col].is_unit(eps))
        .ok_or(EliminationError::InvariantViolated(
            "pivot column has no leading one",
        ))
}

/// Free variables at zero, pivot variables read from the RHS column.
fn particular_solution<T: FieldScalar>(
    m: &Matrix<T>,
    pivot_cols: &[usize],
    n_vars: usize,
    eps: T,
) -> Result<Vec<T>, EliminationError> {
    let mut x = alloc::vec![T::zero(); n_vars];
    for &p in pivot_cols {
        let row = pivot_row(m, p, eps)?;
        x[p] = m[(row, n_vars)];
    }
    Ok(x)
}

/// One null-space vector per free column of an RREF matrix.
///
/// For free column `f` the vector has a one at `f` and, at each pivot
/// column `p`, minus the entry at column `f` of `p`'s row.
pub(super) fn direction_vectors<T: FieldScalar>(
    m: &Matrix<T>,
    pivot_cols: &[usize],
    free_cols: &[usize],
    n_vars: usize,
    eps: T,
) -> Result<Vec<Vec<T>>, EliminationError> {
    let rows = pivot_cols
        .iter()
        .map(|&p| pivot_row(m, p, eps).map(|r| (p, r)))
        .collect::<Result<Vec<_>, _>>()?;

    free_cols
        .iter()
        .map(|&f| {
            let mut d = alloc::vec![T::zero(); n_vars];
            d[f] = T::one();
            for &(p, r) in &rows {
                let coef = m[(r, f)];
                if !coef.is_negligible(eps) {
                    d[p] = coef
                        .try_neg()
                        .ok_or(EliminationError::Overflow { row: r, col: f })?;
                }
            }
            Ok(d)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn contradiction_anywhere() {
        // Zero row in the middle.
        let m = Matrix::from_rows(&[[1.0, 0.0, 2.0], [0.0, 0.0, 1.0], [0.0, 1.0, 3.0]]).unwrap();
        assert!(has_contradiction(&m, 2, 1e-12));
        let ok = Matrix::from_rows(&[[1.0, 0.0, 2.0], [0.0, 0.0, 0.0], [0.0, 1.0, 3.0]]).unwrap();
        assert!(!has_contradiction(&ok, 2, 1e-12));
    }

    #[test]
    fn tiny_rhs_is_not_a_contradiction() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [0.0, 1e-15]]).unwrap();
        assert!(!has_contradiction(&m, 1, 1e-12));
    }

    #[test]
    fn pivot_row_search() {
        let m = Matrix::from_rows(&[[0.0, 1.0, 5.0], [1.0, 0.0, 4.0]]).unwrap();
        assert_eq!(pivot_row(&m, 0, 1e-12), Ok(1));
        assert_eq!(pivot_row(&m, 1, 1e-12), Ok(0));
        assert!(matches!(
            pivot_row(&m, 2, 1e-12),
            Err(EliminationError::InvariantViolated(_))
        ));
    }

    #[test]
    fn directions_from_rref() {
        // x1 + 2 x2 - x4 = 0, x3 + 3 x4 = 0
        let m = Matrix::from_rows(&[[1.0, 2.0, 0.0, -1.0], [0.0, 0.0, 1.0, 3.0]]).unwrap();
        let d = direction_vectors(&m, &[0, 2], &[1, 3], 4, 1e-12).unwrap();
        assert_eq!(d, vec![vec![-2.0, 1.0, 0.0, 0.0], vec![1.0, 0.0, -3.0, 1.0]]);
    }

    #[test]
    fn history_only_when_requested() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 3.0]]).unwrap();
        let sys = LinearSystem::new(a, vec![3.0, 5.0]).unwrap();
        assert!(GaussJordanSolver::default().solve(&sys).unwrap().history.is_none());
        let traced = GaussJordanSolver::new(EliminationSettings::default().with_steps(true));
        let sol = traced.solve(&sys).unwrap();
        let h = sol.history.as_ref().unwrap();
        assert_eq!(h.steps()[0].before, sys.augmented());
    }
}
