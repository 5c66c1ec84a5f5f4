use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// Useful for converting between element types, e.g. exact rationals to
    /// floats for display.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let f = m.map(|x| x as f64 / 2.0);
    /// assert_eq!(f[(1, 1)], 2.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Measure column widths
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self.data[i * n + j]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self.data[i * n + j], width = widths[j])?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use num_rational::Rational64;

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::from_rows(&[[1, -20], [300, 4]]).unwrap();
        assert_eq!(format!("{}", m), "│  1  -20│\n│300    4│");
    }

    #[test]
    fn display_rationals() {
        let half = Rational64::new(1, 2);
        let m = Matrix::from_rows(&[[half, Rational64::from_integer(3)]]).unwrap();
        assert_eq!(format!("{}", m), "│1/2  3│");
    }

    #[test]
    fn map_changes_type() {
        let m = Matrix::from_rows(&[[Rational64::new(3, 4)]]).unwrap();
        let f = m.map(|r| *r.numer() as f64 / *r.denom() as f64);
        assert_eq!(f[(0, 0)], 0.75);
    }
}
