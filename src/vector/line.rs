use crate::traits::FieldScalar;

use super::{Vector, VectorError};

/// Vector equation of a line, `x(t) = point + t * direction`.
///
/// ```
/// use echelon::vector::{ParametricLine, Vector};
///
/// let p = Vector::new(vec![1.0_f64, 0.0, 2.0]).unwrap();
/// let d = Vector::new(vec![0.0, 2.0, -1.0]).unwrap();
/// let line = ParametricLine::new(p, d).unwrap();
/// assert_eq!(line.evaluate(1.5).unwrap().as_slice(), &[1.0, 3.0, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricLine<T> {
    point: Vector<T>,
    direction: Vector<T>,
}

impl<T: FieldScalar> ParametricLine<T> {
    /// Fails with [`VectorError::DimensionMismatch`] when the point and the
    /// direction differ in length.
    pub fn new(point: Vector<T>, direction: Vector<T>) -> Result<Self, VectorError> {
        if point.dim() != direction.dim() {
            return Err(VectorError::DimensionMismatch {
                expected: point.dim(),
                got: direction.dim(),
            });
        }
        Ok(Self { point, direction })
    }

    #[inline]
    pub fn point(&self) -> &Vector<T> {
        &self.point
    }

    #[inline]
    pub fn direction(&self) -> &Vector<T> {
        &self.direction
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.point.dim()
    }

    /// The point on the line at parameter `t`.
    pub fn evaluate(&self, t: T) -> Result<Vector<T>, VectorError> {
        self.point.add(&self.direction.scale(t)?)
    }
}
