use crate::traits::{FieldScalar, MatrixRef};

/// Policy choosing the pivot row for a column.
///
/// Both variants only look at rows `from_row..nrows` and are pure functions
/// of the matrix contents, so the same input always yields the same pivots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// First row whose entry is exactly nonzero. No tolerance is applied,
    /// which makes it fragile for floating-point input.
    FirstNonzero,
    /// Row with the largest magnitude in the column (partial pivoting).
    /// Ties go to the lowest row index. Returns no pivot when the largest
    /// magnitude is within epsilon of zero.
    #[default]
    Partial,
}

impl PivotStrategy {
    /// Pick the pivot row for `col`, searching from `from_row` down.
    ///
    /// Returns `None` when the column has no usable pivot, which is how a
    /// free variable is detected. Out-of-range `col` or `from_row` also
    /// yield `None`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// use echelon::elimination::PivotStrategy;
    ///
    /// let m = Matrix::from_rows(&[[0.0_f64], [2.0], [-5.0], [5.0]]).unwrap();
    /// assert_eq!(PivotStrategy::FirstNonzero.select(&m, 0, 0, 1e-12), Some(1));
    /// assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, 1e-12), Some(2));
    /// ```
    pub fn select<T: FieldScalar>(
        self,
        m: &impl MatrixRef<T>,
        col: usize,
        from_row: usize,
        eps: T,
    ) -> Option<usize> {
        if col >= m.ncols() || from_row >= m.nrows() {
            return None;
        }
        match self {
            PivotStrategy::FirstNonzero => {
                (from_row..m.nrows()).find(|&row| !m.get(row, col).is_zero())
            }
            PivotStrategy::Partial => {
                let mut best_row = from_row;
                let mut best_val = m.get(from_row, col).magnitude();
                for row in (from_row + 1)..m.nrows() {
                    let val = m.get(row, col).magnitude();
                    if val > best_val {
                        best_val = val;
                        best_row = row;
                    }
                }
                if best_val.is_negligible(eps) {
                    None
                } else {
                    Some(best_row)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;
    use num_rational::Rational64;

    fn column(values: &[f64]) -> Matrix<f64> {
        let rows: alloc::vec::Vec<[f64; 1]> = values.iter().map(|&v| [v]).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn first_nonzero_skips_zeros() {
        let m = column(&[0.0, 0.0, 3.0, 9.0]);
        assert_eq!(PivotStrategy::FirstNonzero.select(&m, 0, 0, 1e-12), Some(2));
    }

    #[test]
    fn first_nonzero_ignores_epsilon() {
        let m = column(&[0.0, 1e-20]);
        assert_eq!(PivotStrategy::FirstNonzero.select(&m, 0, 0, 1e-12), Some(1));
    }

    #[test]
    fn partial_picks_largest_magnitude() {
        let m = column(&[1.0, -7.0, 3.0]);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, 1e-12), Some(1));
    }

    #[test]
    fn partial_ties_go_to_lowest_row() {
        let m = column(&[2.0, -4.0, 4.0, -4.0]);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, 1e-12), Some(1));
    }

    #[test]
    fn partial_respects_from_row() {
        let m = column(&[100.0, 1.0, 2.0]);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 1, 1e-12), Some(2));
    }

    #[test]
    fn partial_rejects_negligible_column() {
        let m = column(&[1e-14, -1e-13]);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, 1e-12), None);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, 1e-15), Some(1));
    }

    #[test]
    fn exact_zero_column_has_no_pivot() {
        let z = Rational64::from_integer(0);
        let m = Matrix::from_rows(&[[z], [z]]).unwrap();
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 0, z), None);
        assert_eq!(PivotStrategy::FirstNonzero.select(&m, 0, 0, z), None);
    }

    #[test]
    fn exact_tiny_value_is_a_pivot() {
        let m = Matrix::from_rows(&[[Rational64::new(1, 1_000_000_000)]]).unwrap();
        // Threshold is ignored for exact arithmetic.
        assert_eq!(
            PivotStrategy::Partial.select(&m, 0, 0, Rational64::from_integer(1)),
            Some(0)
        );
    }

    #[test]
    fn out_of_range_is_none() {
        let m = column(&[1.0, 2.0]);
        assert_eq!(PivotStrategy::Partial.select(&m, 1, 0, 1e-12), None);
        assert_eq!(PivotStrategy::Partial.select(&m, 0, 2, 1e-12), None);
    }

    #[test]
    fn default_is_partial() {
        assert_eq!(PivotStrategy::default(), PivotStrategy::Partial);
    }
}
