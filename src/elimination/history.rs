use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::FieldScalar;
use crate::Matrix;

use super::row_ops;
use super::EliminationError;

/// Kind of elementary operation recorded in a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two rows exchanged.
    Swap,
    /// A row multiplied by a factor outside of pivot normalization.
    Scale,
    /// The pivot row scaled so its pivot becomes one.
    Normalize,
    /// A multiple of the pivot row added to a row below it.
    EliminateBelow,
    /// A multiple of the pivot row added to a row above it.
    EliminateAbove,
}

impl StepKind {
    /// Whether this step clears an entry in a pivot column.
    pub fn is_elimination(self) -> bool {
        matches!(self, StepKind::EliminateBelow | StepKind::EliminateAbove)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::Swap => "swap",
            StepKind::Scale => "scale",
            StepKind::Normalize => "normalize",
            StepKind::EliminateBelow => "eliminate below",
            StepKind::EliminateAbove => "eliminate above",
        };
        f.write_str(s)
    }
}

/// One recorded row operation with the augmented matrix before and after.
///
/// Row and column indices are 0-based. The `description` uses 1-based row
/// labels (`R1`, `R2`, ...) for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    /// 1-based position in the history.
    pub number: usize,
    pub kind: StepKind,
    /// Row holding the pivot when the operation ran.
    pub pivot_row: Option<usize>,
    /// Column of the pivot when the operation ran.
    pub pivot_col: Option<usize>,
    /// Rows changed by the operation. Two entries for a swap, one otherwise.
    pub affected_rows: Vec<usize>,
    /// Scale factor, or multiplier of the pivot row for eliminations.
    pub factor: Option<T>,
    pub before: Matrix<T>,
    pub after: Matrix<T>,
    pub description: String,
}

impl<T: fmt::Display> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.description)
    }
}

/// Append-only log of the operations applied during one reduction.
///
/// Step numbers are contiguous from 1, and the `before` snapshot of each
/// step equals the `after` snapshot of the previous one.
///
/// ```
/// use echelon::Matrix;
/// use echelon::elimination::{reduce, EliminationSettings, History, StepKind};
///
/// let aug = Matrix::from_rows(&[[0.0_f64, 1.0, 2.0], [1.0, 0.0, 3.0]]).unwrap();
/// let mut history = History::new();
/// let red = reduce(&aug, 2, &EliminationSettings::default(), Some(&mut history)).unwrap();
///
/// assert_eq!(history.steps()[0].kind, StepKind::Swap);
/// assert_eq!(history.steps()[0].description, "R2 <-> R1");
/// assert_eq!(history.replay(&aug).unwrap(), red.matrix);
/// ```
///
/// Steps are only appended by the reducer, which also refuses a history
/// that already holds steps, so a finished log cannot be extended:
///
/// ```compile_fail
/// use echelon::Matrix;
/// use echelon::elimination::History;
///
/// let m = Matrix::from_rows(&[[1.0_f64, 2.0]]).unwrap();
/// let mut history = History::new();
/// history.record_scale(0, 2.0, m.clone(), m);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    steps: Vec<Step<T>>,
}

impl<T: FieldScalar> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FieldScalar> History<T> {
    /// Empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Recorded steps in order.
    #[inline]
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> core::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// Take ownership of the steps.
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    /// Matrix after the last step, if any.
    pub fn final_matrix(&self) -> Option<&Matrix<T>> {
        self.steps.last().map(|s| &s.after)
    }

    pub(crate) fn record_swap(&mut self, a: usize, b: usize, pivot_col: usize, before: Matrix<T>, after: Matrix<T>) {
        let description = format!("R{} <-> R{}", a + 1, b + 1);
        self.push(Step {
            number: 0,
            kind: StepKind::Swap,
            pivot_row: Some(b),
            pivot_col: Some(pivot_col),
            affected_rows: alloc::vec![a, b],
            factor: None,
            before,
            after,
            description,
        });
    }

    pub(crate) fn record_normalize(&mut self, row: usize, col: usize, factor: T, before: Matrix<T>, after: Matrix<T>) {
        let description = format!("R{} <- ({}) * R{}", row + 1, factor, row + 1);
        self.push(Step {
            number: 0,
            kind: StepKind::Normalize,
            pivot_row: Some(row),
            pivot_col: Some(col),
            affected_rows: alloc::vec![row],
            factor: Some(factor),
            before,
            after,
            description,
        });
    }

    /// Record a plain row scaling. Only replay tests need this today.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn record_scale(&mut self, row: usize, factor: T, before: Matrix<T>, after: Matrix<T>) {
        let description = format!("R{} <- ({}) * R{}", row + 1, factor, row + 1);
        self.push(Step {
            number: 0,
            kind: StepKind::Scale,
            pivot_row: None,
            pivot_col: None,
            affected_rows: alloc::vec![row],
            factor: Some(factor),
            before,
            after,
            description,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record_elimination(
        &mut self,
        kind: StepKind,
        row: usize,
        pivot_row: usize,
        pivot_col: usize,
        factor: T,
        before: Matrix<T>,
        after: Matrix<T>,
    ) {
        let description = format!("R{} <- R{} + ({}) * R{}", row + 1, row + 1, factor, pivot_row + 1);
        self.push(Step {
            number: 0,
            kind,
            pivot_row: Some(pivot_row),
            pivot_col: Some(pivot_col),
            affected_rows: alloc::vec![row],
            factor: Some(factor),
            before,
            after,
            description,
        });
    }

    fn push(&mut self, mut step: Step<T>) {
        step.number = self.steps.len() + 1;
        log::trace!("step {}: {}", step.number, step.description);
        self.steps.push(step);
    }

    /// Re-apply every recorded operation to `initial`, in order.
    ///
    /// Uses only each step's kind, rows, pivot and factor (never the
    /// snapshots), so the result equals the final reduced matrix exactly when
    /// `initial` is the matrix the reduction started from.
    pub fn replay(&self, initial: &Matrix<T>) -> Result<Matrix<T>, EliminationError> {
        let mut m = initial.clone();
        for step in &self.steps {
            apply_step(&mut m, step)?;
        }
        Ok(m)
    }
}

fn apply_step<T: FieldScalar>(m: &mut Matrix<T>, step: &Step<T>) -> Result<(), EliminationError> {
    const MALFORMED: &str = "recorded step is missing its rows, pivot or factor";
    let first = *step
        .affected_rows
        .first()
        .ok_or(EliminationError::InvariantViolated(MALFORMED))?;
    match step.kind {
        StepKind::Swap => {
            let second = *step
                .affected_rows
                .get(1)
                .ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            row_ops::swap(m, first, second)
        }
        StepKind::Scale => {
            let factor = step.factor.ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            row_ops::scale(m, first, factor)
        }
        StepKind::Normalize => {
            let factor = step.factor.ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            let col = step.pivot_col.ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            // Bounds-check before pinning the pivot.
            m.get(first, col)?;
            row_ops::apply_normalization(m, first, col, factor)
        }
        StepKind::EliminateBelow | StepKind::EliminateAbove => {
            let factor = step.factor.ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            let source = step.pivot_row.ok_or(EliminationError::InvariantViolated(MALFORMED))?;
            row_ops::combine(m, first, source, factor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn m(rows: &[[f64; 2]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn numbers_are_contiguous() {
        let mut h = History::new();
        h.record_swap(1, 0, 0, m(&[[0.0, 1.0], [1.0, 0.0]]), m(&[[1.0, 0.0], [0.0, 1.0]]));
        h.record_scale(0, 2.0, m(&[[1.0, 0.0], [0.0, 1.0]]), m(&[[2.0, 0.0], [0.0, 1.0]]));
        let numbers: Vec<usize> = h.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.final_matrix(), Some(&m(&[[2.0, 0.0], [0.0, 1.0]])));
    }

    #[test]
    fn descriptions() {
        let mut h = History::new();
        let z = m(&[[0.0, 0.0], [0.0, 0.0]]);
        h.record_swap(2, 0, 0, z.clone(), z.clone());
        h.record_normalize(0, 0, 0.5, z.clone(), z.clone());
        h.record_elimination(StepKind::EliminateBelow, 1, 0, 0, -3.0, z.clone(), z);
        let text: Vec<String> = h.iter().map(|s| format!("{}", s)).collect();
        assert_eq!(
            text,
            vec![
                "1. R3 <-> R1".to_string(),
                "2. R1 <- (0.5) * R1".to_string(),
                "3. R2 <- R2 + (-3) * R1".to_string(),
            ]
        );
    }

    #[test]
    fn replay_scale_step() {
        let start = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let mut h = History::new();
        h.record_scale(1, 2.0, start.clone(), m(&[[1.0, 2.0], [6.0, 8.0]]));
        assert_eq!(h.replay(&start).unwrap(), m(&[[1.0, 2.0], [6.0, 8.0]]));
    }

    #[test]
    fn replay_rejects_malformed_step() {
        let start = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let mut h = History::new();
        h.push(Step {
            number: 0,
            kind: StepKind::Swap,
            pivot_row: None,
            pivot_col: None,
            affected_rows: vec![0],
            factor: None,
            before: start.clone(),
            after: start.clone(),
            description: String::new(),
        });
        assert!(matches!(
            h.replay(&start),
            Err(EliminationError::InvariantViolated(_))
        ));
    }

    #[test]
    fn kind_classification() {
        assert!(StepKind::EliminateAbove.is_elimination());
        assert!(StepKind::EliminateBelow.is_elimination());
        assert!(!StepKind::Normalize.is_elimination());
        assert_eq!(format!("{}", StepKind::EliminateBelow), "eliminate below");
    }
}
