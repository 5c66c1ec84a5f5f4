//! Solving linear systems by Gauss-Jordan elimination.
//!
//! [`GaussJordanSolver`] reduces `[A | b]` to RREF and classifies the result
//! as a unique solution, a parametric family, or an inconsistent system. An
//! inconsistent system is a regular [`Solution`] state, not an error.
//!
//! On top of the single-system solver:
//!
//! - [`solve_single`] and [`solve_matrix_equation`] are one-shot entry points
//!   for `Ax = b` and `AX = B`.
//! - [`null_space`] / [`null_space_from_rref`] return a kernel basis.
//! - [`linear_dependence`] and [`linear_combination`] answer span questions
//!   about a set of vectors.
//!
//! # Example
//!
//! ```
//! use echelon::Matrix;
//! use echelon::elimination::EliminationSettings;
//! use echelon::solve::{solve_single, SolutionKind};
//!
//! let a = Matrix::from_rows(&[[1.0_f64, 2.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
//! let sol = solve_single(&a, &[3.0, 1.0], &EliminationSettings::default()).unwrap();
//! match sol.kind {
//!     SolutionKind::Infinite(ref p) => {
//!         assert_eq!(p.particular, vec![3.0, 0.0, 1.0]);
//!         assert_eq!(p.directions, vec![vec![-2.0, 1.0, 0.0]]);
//!         assert_eq!(p.free_vars, vec![1]);
//!     }
//!     _ => panic!("expected a parametric solution"),
//! }
//! ```

mod batch;
mod gauss_jordan;
mod vectors;


pub use batch::{
    null_space, null_space_from_rref, solve_matrix_equation, solve_single, ColumnSolution,
    MatrixEquationReport,
};
pub use gauss_jordan::GaussJordanSolver;
pub use vectors::{linear_combination, linear_dependence, CombinationReport, DependenceReport};

use alloc::vec::Vec;
use core::fmt;

use crate::elimination::History;
use crate::matrix::ShapeError;
use crate::traits::Scalar;

/// Classification of a solve, ordered from best to worst.
///
/// The ordering is what [`worst`](SolutionStatus::worst) uses to aggregate
/// several independent solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolutionStatus {
    Unique,
    Infinite,
    Inconsistent,
}

impl SolutionStatus {
    /// The worse of two outcomes: `Inconsistent > Infinite > Unique`.
    #[inline]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolutionStatus::Unique => "unique",
            SolutionStatus::Infinite => "infinite",
            SolutionStatus::Inconsistent => "inconsistent",
        };
        f.write_str(s)
    }
}

/// General solution `x = particular + Σ t_i · directions[i]`.
///
/// `directions[i]` belongs to free variable `free_vars[i]`: it has a one at
/// that index, zero at every other free index, and minus the coupling
/// coefficient at each pivot index.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricSolution<T> {
    /// Solution with every free variable set to zero.
    pub particular: Vec<T>,
    /// One null-space vector per free variable.
    pub directions: Vec<Vec<T>>,
    /// Indices of the free variables, increasing.
    pub free_vars: Vec<usize>,
}

impl<T: Scalar> ParametricSolution<T> {
    /// Number of free parameters.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.directions.len()
    }

    /// Evaluate the family at the given parameter values, one per free
    /// variable.
    ///
    /// ```
    /// use echelon::solve::ParametricSolution;
    ///
    /// let p = ParametricSolution {
    ///     particular: vec![3, 0, 1],
    ///     directions: vec![vec![-2, 1, 0]],
    ///     free_vars: vec![1],
    /// };
    /// assert_eq!(p.evaluate(&[2]).unwrap(), vec![-1, 2, 1]);
    /// ```
    pub fn evaluate(&self, params: &[T]) -> Result<Vec<T>, ShapeError> {
        if params.len() != self.directions.len() {
            return Err(ShapeError::RowLengthMismatch {
                expected: self.directions.len(),
                got: params.len(),
            });
        }
        let mut x = self.particular.clone();
        for (&t, dir) in params.iter().zip(&self.directions) {
            for (xi, &di) in x.iter_mut().zip(dir) {
                *xi = *xi + t * di;
            }
        }
        Ok(x)
    }
}

/// The three possible outcomes of solving `Ax = b`.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionKind<T> {
    /// Exactly one solution.
    Unique(Vec<T>),
    /// Infinitely many solutions.
    Infinite(ParametricSolution<T>),
    /// No solution.
    Inconsistent,
}

/// Result of one solve: the classification plus the pivot structure that
/// produced it.
///
/// `pivot_cols.len() + free_vars.len()` always equals the number of
/// unknowns.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    pub kind: SolutionKind<T>,
    /// Columns of `A` that received a pivot.
    pub pivot_cols: Vec<usize>,
    /// Columns of `A` without a pivot.
    pub free_vars: Vec<usize>,
    /// `pivot_cols.len()`.
    pub rank: usize,
    /// Step trace, present when the solver ran with `record_steps`.
    pub history: Option<History<T>>,
}

impl<T> Solution<T> {
    pub fn status(&self) -> SolutionStatus {
        match self.kind {
            SolutionKind::Unique(_) => SolutionStatus::Unique,
            SolutionKind::Infinite(_) => SolutionStatus::Infinite,
            SolutionKind::Inconsistent => SolutionStatus::Inconsistent,
        }
    }

    /// Whether at least one solution exists.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        !matches!(self.kind, SolutionKind::Inconsistent)
    }

    /// The solution vector when it is unique.
    pub fn unique(&self) -> Option<&[T]> {
        match &self.kind {
            SolutionKind::Unique(x) => Some(x),
            _ => None,
        }
    }

    /// The solution family when there are free variables.
    pub fn parametric(&self) -> Option<&ParametricSolution<T>> {
        match &self.kind {
            SolutionKind::Infinite(p) => Some(p),
            _ => None,
        }
    }

    /// Any one solution: the unique one, or the particular solution.
    pub fn any_solution(&self) -> Option<&[T]> {
        match &self.kind {
            SolutionKind::Unique(x) => Some(x),
            SolutionKind::Infinite(p) => Some(&p.particular),
            SolutionKind::Inconsistent => None,
        }
    }
}
