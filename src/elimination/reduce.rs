use alloc::vec::Vec;

use crate::matrix::ShapeError;
use crate::traits::{FieldScalar, MatrixRef};
use crate::Matrix;

use super::history::{History, StepKind};
use super::{row_ops, EliminationError, EliminationSettings};

/// Outcome of driving a matrix to reduced row-echelon form.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<T> {
    /// The matrix in RREF. Pivot `k` sits at row `k`, column `pivot_cols[k]`.
    pub matrix: Matrix<T>,
    /// Columns that received a pivot, in increasing order.
    pub pivot_cols: Vec<usize>,
    /// Number of pivots.
    pub rank: usize,
}

impl<T> Reduction<T> {
    /// Variable columns in `0..n_vars` that received no pivot.
    pub fn free_cols(&self, n_vars: usize) -> Vec<usize> {
        (0..n_vars).filter(|c| !self.pivot_cols.contains(c)).collect()
    }
}

/// Reduce `m` to RREF in place, searching for pivots only in its first
/// `n_vars` columns.
///
/// Trailing columns (the right-hand side of an augmented matrix) are carried
/// along by every row operation but never pivoted on. Each pivot clears its
/// column both below and above in the same pass, so no back-substitution
/// phase follows.
///
/// When `history` is `Some`, every mutation appends one [`Step`](super::Step)
/// with before/after snapshots. When it is `None`, no snapshot is taken.
/// A history that already holds steps is rejected with
/// [`EliminationError::InvariantViolated`], since the new steps would not
/// chain onto the old ones.
///
/// Returns the pivot columns. Fails with [`EliminationError::Overflow`] when
/// an exact element type cannot hold an intermediate entry; `m` may then be
/// partially reduced.
pub fn reduce_in_place<T: FieldScalar>(
    m: &mut Matrix<T>,
    n_vars: usize,
    settings: &EliminationSettings<T>,
    mut history: Option<&mut History<T>>,
) -> Result<Vec<usize>, EliminationError> {
    if n_vars > m.ncols() {
        return Err(ShapeError::ShapeMismatch {
            expected: (m.nrows(), n_vars),
            got: m.shape(),
        }
        .into());
    }
    if history.as_ref().is_some_and(|h| !h.is_empty()) {
        return Err(EliminationError::InvariantViolated(
            "step history must be empty before a reduction",
        ));
    }
    let eps = settings.epsilon;
    let nrows = m.nrows();
    let mut r = 0;
    let mut pivot_cols = Vec::with_capacity(n_vars.min(nrows));

    for c in 0..n_vars {
        if r >= nrows {
            break;
        }

        let Some(p) = settings.pivot.select(&*m, c, r, eps) else {
            log::trace!("column {} has no pivot at or below row {}", c, r);
            continue;
        };
        log::trace!("pivot for column {} at row {}", c, p);

        if p != r {
            let before = history.as_ref().map(|_| m.clone());
            row_ops::swap(m, p, r)?;
            if let (Some(h), Some(before)) = (history.as_deref_mut(), before) {
                h.record_swap(p, r, c, before, m.clone());
            }
        }

        let before = history.as_ref().map(|_| m.clone());
        let factor = row_ops::normalize_pivot(m, r, c, eps)?;
        if let (Some(h), Some(before)) = (history.as_deref_mut(), before) {
            h.record_normalize(r, c, factor, before, m.clone());
        }

        for (rows, kind) in [
            ((r + 1)..nrows, StepKind::EliminateBelow),
            (0..r, StepKind::EliminateAbove),
        ] {
            for i in rows {
                let val = m[(i, c)];
                if val.is_negligible(eps) {
                    continue;
                }
                let factor = val.try_neg().ok_or(EliminationError::Overflow { row: i, col: c })?;
                let before = history.as_ref().map(|_| m.clone());
                row_ops::combine(m, i, r, factor)?;
                if let (Some(h), Some(before)) = (history.as_deref_mut(), before) {
                    h.record_elimination(kind, i, r, c, factor, before, m.clone());
                }
            }
        }

        pivot_cols.push(c);
        r += 1;
    }

    log::debug!(
        "reduced {}x{} matrix: rank {}, pivot columns {:?}",
        m.nrows(),
        m.ncols(),
        pivot_cols.len(),
        pivot_cols
    );
    Ok(pivot_cols)
}

/// Reduce a copy of `m` to RREF. The input is never mutated.
///
/// See [`reduce_in_place`] for the meaning of `n_vars` and `history`.
pub fn reduce<T: FieldScalar>(
    m: &Matrix<T>,
    n_vars: usize,
    settings: &EliminationSettings<T>,
    history: Option<&mut History<T>>,
) -> Result<Reduction<T>, EliminationError> {
    let mut matrix = m.clone();
    let pivot_cols = reduce_in_place(&mut matrix, n_vars, settings, history)?;
    let rank = pivot_cols.len();
    Ok(Reduction {
        matrix,
        pivot_cols,
        rank,
    })
}

impl<T: FieldScalar> Matrix<T> {
    /// Reduced row-echelon form over all columns.
    ///
    /// ```
    /// use echelon::Matrix;
    /// use echelon::elimination::EliminationSettings;
    /// use num_rational::Rational64;
    ///
    /// let r = |n| Rational64::from_integer(n);
    /// let m = Matrix::from_rows(&[[r(2), r(4)], [r(1), r(3)]]).unwrap();
    /// let red = m.rref(&EliminationSettings::default()).unwrap();
    /// assert_eq!(red.matrix, Matrix::<Rational64>::identity(2).unwrap());
    /// ```
    pub fn rref(&self, settings: &EliminationSettings<T>) -> Result<Reduction<T>, EliminationError> {
        reduce(self, self.ncols(), settings, None)
    }

    /// Number of pivots in the RREF over all columns.
    pub fn rank(&self, settings: &EliminationSettings<T>) -> Result<usize, EliminationError> {
        Ok(self.rref(settings)?.rank)
    }

    /// Whether the leading `n_vars` columns are in reduced row-echelon form.
    ///
    /// Checks that every nonzero row leads with a one strictly to the right
    /// of the previous row's, that the leading one is the only nonzero entry
    /// in its column, and that zero rows come last. Entries are compared
    /// with [`FieldScalar::is_negligible`].
    pub fn is_rref(&self, n_vars: usize, eps: T) -> bool {
        let n_vars = n_vars.min(self.ncols());
        let mut last_lead: Option<usize> = None;
        let mut seen_zero_row = false;
        for i in 0..self.nrows() {
            let row = self.row_as_slice(i);
            let lead = row[..n_vars].iter().position(|x| !x.is_negligible(eps));
            let Some(c) = lead else {
                seen_zero_row = true;
                continue;
            };
            if seen_zero_row {
                return false;
            }
            if last_lead.is_some_and(|prev| c <= prev) {
                return false;
            }
            if !row[c].is_unit(eps) {
                return false;
            }
            let column_clear = (0..self.nrows())
                .filter(|&k| k != i)
                .all(|k| self.row_as_slice(k)[c].is_negligible(eps));
            if !column_clear {
                return false;
            }
            last_lead = Some(c);
        }
        true
    }
}
