//! Elementary row operations applied in place.
//!
//! Free functions over [`MatrixMut`], with every row index bounds-checked.
//! These are the only mutations the reducer performs.

use alloc::vec::Vec;

use crate::matrix::ShapeError;
use crate::traits::{FieldScalar, MatrixMut, Scalar};

use super::EliminationError;

#[inline]
fn check_row(row: usize, nrows: usize, ncols: usize) -> Result<(), EliminationError> {
    if row >= nrows {
        return Err(ShapeError::IndexOutOfRange {
            row,
            col: 0,
            nrows,
            ncols,
        }
        .into());
    }
    Ok(())
}

/// Exchange rows `a` and `b`. No-op when `a == b`.
pub fn swap<T>(m: &mut impl MatrixMut<T>, a: usize, b: usize) -> Result<(), EliminationError> {
    check_row(a, m.nrows(), m.ncols())?;
    check_row(b, m.nrows(), m.ncols())?;
    m.swap_rows(a, b);
    Ok(())
}

/// Write `f(j, row[j])` over `row` only if every entry succeeds, so a
/// failed operation leaves the matrix untouched.
fn rewrite_row<T: Scalar>(
    m: &mut impl MatrixMut<T>,
    row: usize,
    mut f: impl FnMut(usize, T) -> Option<T>,
) -> Result<(), EliminationError> {
    let updated = m
        .row_as_slice(row)
        .iter()
        .enumerate()
        .map(|(col, &x)| f(col, x).ok_or(EliminationError::Overflow { row, col }))
        .collect::<Result<Vec<T>, _>>()?;
    m.row_as_mut_slice(row).copy_from_slice(&updated);
    Ok(())
}

/// Multiply every entry of `row` by `factor`.
///
/// A zero factor is accepted and clears the row. The reducer never does
/// this since it destroys the equation.
pub fn scale<T: FieldScalar>(
    m: &mut impl MatrixMut<T>,
    row: usize,
    factor: T,
) -> Result<(), EliminationError> {
    check_row(row, m.nrows(), m.ncols())?;
    rewrite_row(m, row, |_, x| x.try_mul(factor))
}

/// `row[dest] += factor * row[source]`.
///
/// Fails with [`EliminationError::InvalidRowCombination`] when
/// `dest == source` and `factor` is nonzero. With a zero factor the call is
/// a no-op.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::row_ops;
///
/// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// row_ops::combine(&mut m, 1, 0, -3.0).unwrap();
/// assert_eq!(m.row(1).unwrap(), vec![0.0, -2.0]);
/// ```
pub fn combine<T: FieldScalar>(
    m: &mut impl MatrixMut<T>,
    dest: usize,
    source: usize,
    factor: T,
) -> Result<(), EliminationError> {
    check_row(dest, m.nrows(), m.ncols())?;
    check_row(source, m.nrows(), m.ncols())?;
    if dest == source {
        if factor.is_zero() {
            return Ok(());
        }
        return Err(EliminationError::InvalidRowCombination { row: dest });
    }
    let src: Vec<T> = m.row_as_slice(source).to_vec();
    rewrite_row(m, dest, |j, d| factor.try_mul(src[j]).and_then(|p| d.try_add(p)))
}

/// Scale `row` so the entry at `col` becomes exactly one.
///
/// Returns the factor that was applied. Fails with
/// [`EliminationError::NumericallyZeroPivot`] when the entry is negligible
/// under `eps`.
pub fn normalize_pivot<T: FieldScalar>(
    m: &mut impl MatrixMut<T>,
    row: usize,
    col: usize,
    eps: T,
) -> Result<T, EliminationError> {
    check_row(row, m.nrows(), m.ncols())?;
    if col >= m.ncols() {
        return Err(ShapeError::IndexOutOfRange {
            row,
            col,
            nrows: m.nrows(),
            ncols: m.ncols(),
        }
        .into());
    }
    let pivot = *m.get(row, col);
    if pivot.is_negligible(eps) || pivot.is_zero() {
        return Err(EliminationError::NumericallyZeroPivot { row, col });
    }
    let factor = T::one()
        .try_div(pivot)
        .ok_or(EliminationError::Overflow { row, col })?;
    apply_normalization(m, row, col, factor)?;
    Ok(factor)
}

/// Scale by `factor` and pin the pivot to one so rounding cannot leave it
/// at `0.9999...`. Shared with history replay so both produce identical bits.
pub(crate) fn apply_normalization<T: FieldScalar>(
    m: &mut impl MatrixMut<T>,
    row: usize,
    col: usize,
    factor: T,
) -> Result<(), EliminationError> {
    rewrite_row(m, row, |j, x| {
        if j == col {
            Some(T::one())
        } else {
            x.try_mul(factor)
        }
    })
}
