//! Gauss-Jordan elimination: pivot selection, elementary row operations,
//! step recording and reduction to RREF.
//!
//! The pieces compose bottom-up:
//!
//! - [`PivotStrategy`] picks the pivot row for a column.
//! - [`row_ops`] applies swap / scale / combine / normalize in place on any
//!   [`MatrixMut`](crate::MatrixMut).
//! - [`History`] is an append-only log of [`Step`]s with before/after
//!   snapshots. It is only allocated when tracing is requested.
//! - [`reduce`] / [`reduce_in_place`] drive a matrix to reduced row-echelon
//!   form and report the pivot columns.
//!
//! All of it is generic over [`FieldScalar`](crate::FieldScalar), so exact
//! rationals and floats share one implementation.
//!
//! ```
//! use echelon::Matrix;
//! use echelon::elimination::{reduce, EliminationSettings};
//!
//! let aug = Matrix::from_rows(&[[1.0_f64, 2.0, 5.0], [3.0, 4.0, 11.0]]).unwrap();
//! let red = reduce(&aug, 2, &EliminationSettings::default(), None).unwrap();
//! assert_eq!(red.pivot_cols, vec![0, 1]);
//! assert!((red.matrix[(0, 2)] - 1.0).abs() < 1e-12);
//! assert!((red.matrix[(1, 2)] - 2.0).abs() < 1e-12);
//! ```

mod history;
mod pivot;
mod reduce;
pub mod row_ops;


pub use history::{History, Step, StepKind};
pub use pivot::PivotStrategy;
pub use reduce::{reduce, reduce_in_place, Reduction};

use crate::matrix::ShapeError;
use crate::traits::FieldScalar;

/// Errors raised while reducing a matrix.
///
/// The numeric-guard variants signal that an internal invariant of the
/// reduction was broken. The reducer never requests such an operation on
/// its own, so seeing one means a bug or a hand-driven misuse of
/// [`row_ops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationError {
    /// Malformed input shape or out-of-range row/column.
    Shape(ShapeError),
    /// The entry at `(row, col)` is too small to be normalized to 1.
    NumericallyZeroPivot { row: usize, col: usize },
    /// A row cannot be combined with itself using a nonzero factor.
    InvalidRowCombination { row: usize },
    /// The reduced matrix does not satisfy a property the solver relies on.
    InvariantViolated(&'static str),
    /// The entry at `(row, col)` cannot be represented by the element type,
    /// e.g. a `Ratio<i64>` whose numerator left the `i64` range.
    Overflow { row: usize, col: usize },
}

impl From<ShapeError> for EliminationError {
    fn from(e: ShapeError) -> Self {
        EliminationError::Shape(e)
    }
}

impl core::fmt::Display for EliminationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EliminationError::Shape(e) => write!(f, "{}", e),
            EliminationError::NumericallyZeroPivot { row, col } => write!(
                f,
                "pivot at ({}, {}) is numerically zero and cannot be normalized",
                row, col
            ),
            EliminationError::InvalidRowCombination { row } => {
                write!(f, "cannot add a nonzero multiple of row {} to itself", row)
            }
            EliminationError::InvariantViolated(what) => {
                write!(f, "internal invariant violated: {}", what)
            }
            EliminationError::Overflow { row, col } => write!(
                f,
                "entry at ({}, {}) overflows the element type; use a wider integer",
                row, col
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EliminationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EliminationError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

/// Settings shared by the reducer and every solver entry point.
///
/// ```
/// use echelon::elimination::{EliminationSettings, PivotStrategy};
///
/// let s = EliminationSettings::<f64>::default()
///     .with_pivot(PivotStrategy::FirstNonzero)
///     .with_steps(true);
/// assert_eq!(s.epsilon, 1e-12);
/// assert!(s.record_steps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationSettings<T> {
    /// Numeric-zero threshold. Ignored for exact element types.
    pub epsilon: T,
    /// Pivot selection policy.
    pub pivot: PivotStrategy,
    /// Attach a step [`History`] to solver results.
    pub record_steps: bool,
}

impl<T: FieldScalar> Default for EliminationSettings<T> {
    fn default() -> Self {
        Self {
            epsilon: T::default_epsilon(),
            pivot: PivotStrategy::Partial,
            record_steps: false,
        }
    }
}

impl<T: FieldScalar> EliminationSettings<T> {
    /// Replace the numeric-zero threshold.
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Replace the pivot strategy.
    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    /// Turn step recording on or off.
    pub fn with_steps(mut self, record_steps: bool) -> Self {
        self.record_steps = record_steps;
        self
    }
}
