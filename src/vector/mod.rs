//! Vectors with runtime length and overflow-checked arithmetic.
//!
//! [`Vector`] backs the vector-algebra helpers: sums, scalar multiples, dot
//! and cross products, evaluated linear combinations, the parametric line
//! `p + t d` ([`ParametricLine`]), and the traced vector-space axiom checks
//! in [`axioms`]. It implements `AsRef<[T]>`, so a slice of vectors can be
//! handed straight to [`linear_dependence`](crate::solve::linear_dependence)
//! and [`linear_combination`](crate::solve::linear_combination).
//!
//! ```
//! use echelon::vector::Vector;
//!
//! let u = Vector::new(vec![1.0_f64, 2.0, 3.0]).unwrap();
//! let v = Vector::new(vec![4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(u.dot(&v).unwrap(), 32.0);
//! assert_eq!(u.add(&v).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
//! assert_eq!(u.cross(&v).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);
//! ```

pub mod axioms;
mod line;

pub use line::ParametricLine;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::traits::{FieldScalar, Scalar};

/// Errors from vector construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A vector needs at least one component.
    Empty,
    /// Operands of different lengths.
    DimensionMismatch { expected: usize, got: usize },
    /// The cross product is only defined in three dimensions.
    NotThreeDimensional { got: usize },
    /// A linear combination got a different number of vectors and scalars.
    CountMismatch { vectors: usize, scalars: usize },
    /// Component `index` overflows the element type.
    Overflow { index: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::Empty => write!(f, "vector must have at least one component"),
            VectorError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
            VectorError::NotThreeDimensional { got } => {
                write!(f, "cross product needs 3-dimensional vectors, got {}", got)
            }
            VectorError::CountMismatch { vectors, scalars } => {
                write!(f, "{} vectors but {} scalars", vectors, scalars)
            }
            VectorError::Overflow { index } => {
                write!(f, "component {} overflows the element type", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VectorError {}

/// Non-empty vector with runtime length.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Take ownership of `data`. Fails with [`VectorError::Empty`] when it has
    /// no components.
    pub fn new(data: Vec<T>) -> Result<Self, VectorError> {
        if data.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(Self { data })
    }

    pub fn from_slice(data: &[T]) -> Result<Self, VectorError> {
        Self::new(data.to_vec())
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Result<Self, VectorError> {
        Self::new(alloc::vec![T::zero(); n])
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn check_dim(&self, rhs: &Self) -> Result<(), VectorError> {
        if self.dim() != rhs.dim() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dim(),
                got: rhs.dim(),
            });
        }
        Ok(())
    }
}

impl<T: FieldScalar> Vector<T> {
    /// Componentwise `f(self[i], rhs[i])`.
    fn zip_with(
        &self,
        rhs: &Self,
        f: impl Fn(T, T) -> Option<T>,
    ) -> Result<Self, VectorError> {
        self.check_dim(rhs)?;
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .enumerate()
            .map(|(index, (&a, &b))| f(a, b).ok_or(VectorError::Overflow { index }))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Self { data })
    }

    fn map_checked(&self, f: impl Fn(T) -> Option<T>) -> Result<Self, VectorError> {
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(index, &a)| f(a).ok_or(VectorError::Overflow { index }))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Self { data })
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, VectorError> {
        self.zip_with(rhs, T::try_add)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, VectorError> {
        self.zip_with(rhs, T::try_sub)
    }

    /// Additive inverse `-self`.
    pub fn neg(&self) -> Result<Self, VectorError> {
        self.map_checked(T::try_neg)
    }

    /// `t * self`.
    pub fn scale(&self, t: T) -> Result<Self, VectorError> {
        self.map_checked(|a| a.try_mul(t))
    }

    /// Inner product. An overflow is reported at the component whose term
    /// could not be added.
    pub fn dot(&self, rhs: &Self) -> Result<T, VectorError> {
        self.check_dim(rhs)?;
        self.data
            .iter()
            .zip(&rhs.data)
            .enumerate()
            .try_fold(T::zero(), |acc, (index, (&a, &b))| {
                a.try_mul(b)
                    .and_then(|p| acc.try_add(p))
                    .ok_or(VectorError::Overflow { index })
            })
    }

    #[inline]
    pub fn norm_squared(&self) -> Result<T, VectorError> {
        self.dot(self)
    }

    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use echelon::vector::Vector;
    /// use num_rational::Rational64;
    ///
    /// let r = Rational64::from_integer;
    /// let x = Vector::new(vec![r(1), r(0), r(0)]).unwrap();
    /// let y = Vector::new(vec![r(0), r(1), r(0)]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[r(0), r(0), r(1)]);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self, VectorError> {
        for v in [self, rhs] {
            if v.dim() != 3 {
                return Err(VectorError::NotThreeDimensional { got: v.dim() });
            }
        }
        let (a, b) = (&self.data, &rhs.data);
        // a[i] * b[j] - a[j] * b[i]
        let term = |index: usize, i: usize, j: usize| {
            a[i].try_mul(b[j])
                .zip(a[j].try_mul(b[i]))
                .and_then(|(l, r)| l.try_sub(r))
                .ok_or(VectorError::Overflow { index })
        };
        Ok(Self {
            data: alloc::vec![term(0, 1, 2)?, term(1, 2, 0)?, term(2, 0, 1)?],
        })
    }

    /// Evaluate `Σ scalars[k] * vectors[k]`.
    ///
    /// ```
    /// use echelon::vector::Vector;
    ///
    /// let e1 = Vector::new(vec![1.0_f64, 0.0]).unwrap();
    /// let e2 = Vector::new(vec![0.0, 1.0]).unwrap();
    /// let w = Vector::combination(&[e1, e2], &[3.0, -2.0]).unwrap();
    /// assert_eq!(w.as_slice(), &[3.0, -2.0]);
    /// ```
    pub fn combination(vectors: &[Self], scalars: &[T]) -> Result<Self, VectorError> {
        if vectors.len() != scalars.len() {
            return Err(VectorError::CountMismatch {
                vectors: vectors.len(),
                scalars: scalars.len(),
            });
        }
        let first = vectors.first().ok_or(VectorError::Empty)?;
        let mut acc = Self::zeros(first.dim())?;
        for (v, &t) in vectors.iter().zip(scalars) {
            acc = acc.add(&v.scale(t)?)?;
        }
        Ok(acc)
    }

    /// Every component negligible under `eps`.
    pub fn is_zero(&self, eps: T) -> bool {
        self.data.iter().all(|x| x.is_negligible(eps))
    }

    /// Same length and componentwise equal within `eps`. Exact types compare
    /// exactly.
    pub fn approx_eq(&self, rhs: &Self, eps: T) -> bool {
        self.dim() == rhs.dim()
            && self
                .data
                .iter()
                .zip(&rhs.data)
                .all(|(&a, &b)| a.try_sub(b).is_some_and(|d| d.is_negligible(eps)))
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
impl<T: FieldScalar + num_traits::Float> Vector<T> {
    /// Euclidean length.
    ///
    /// ```
    /// use echelon::vector::Vector;
    /// let v = Vector::new(vec![3.0_f64, 4.0]).unwrap();
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}
