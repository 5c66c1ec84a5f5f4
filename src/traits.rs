use core::fmt::{Debug, Display};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, Num, One, Signed, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types and `Ratio<I>`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for elements of a field that Gauss-Jordan elimination can run over.
///
/// Adds the signed magnitude used by partial pivoting and the notion of a
/// "numerically zero" entry. Floating-point types compare magnitudes against
/// an epsilon threshold; exact types (`Ratio<I>`) ignore the threshold and
/// compare against exact zero.
///
/// Elimination does its arithmetic through the `try_*` methods. Floats
/// always succeed; fixed-width rationals return `None` when a numerator or
/// denominator would leave the range of `I`.
///
/// ```
/// use echelon::FieldScalar;
/// use num_rational::Rational64;
///
/// assert!(1e-14_f64.is_negligible(1e-12));
/// assert!(!Rational64::new(1, 1_000_000).is_negligible(Rational64::new(1, 2)));
/// ```
pub trait FieldScalar: Scalar + Signed + PartialOrd + Display {
    /// `true` when arithmetic is exact and zero tests need no tolerance.
    const EXACT: bool;

    /// Default numeric-zero threshold for this type.
    fn default_epsilon() -> Self;

    /// Absolute value, used to rank pivot candidates.
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    /// Whether `self` is zero for the purposes of elimination.
    #[inline]
    fn is_negligible(self, eps: Self) -> bool {
        if Self::EXACT {
            self.is_zero()
        } else {
            self.magnitude() <= eps
        }
    }

    /// Whether `self` is one for the purposes of elimination.
    #[inline]
    fn is_unit(self, eps: Self) -> bool {
        if Self::EXACT {
            self.is_one()
        } else {
            (self - Self::one()).is_negligible(eps)
        }
    }

    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_sub(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
    /// `None` on overflow or division by exact zero.
    fn try_div(self, rhs: Self) -> Option<Self>;

    #[inline]
    fn try_neg(self) -> Option<Self> {
        Self::zero().try_sub(self)
    }
}

macro_rules! impl_field_scalar_float {
    ($($t:ty => $eps:expr),*) => {
        $(
            impl FieldScalar for $t {
                const EXACT: bool = false;

                #[inline] fn default_epsilon() -> $t { $eps }
                #[inline] fn try_add(self, rhs: $t) -> Option<$t> { Some(self + rhs) }
                #[inline] fn try_sub(self, rhs: $t) -> Option<$t> { Some(self - rhs) }
                #[inline] fn try_mul(self, rhs: $t) -> Option<$t> { Some(self * rhs) }
                #[inline] fn try_div(self, rhs: $t) -> Option<$t> { Some(self / rhs) }
            }
        )*
    };
}

impl_field_scalar_float!(f32 => 1e-6, f64 => 1e-12);

/// Rejects a numerator of `I::MIN`, whose negation (and so `abs`) would
/// overflow.
#[inline]
fn negatable<I>(r: Ratio<I>) -> Option<Ratio<I>>
where
    I: Integer + Copy + CheckedNeg,
{
    r.numer().checked_neg().map(|_| r)
}

impl<I> FieldScalar for Ratio<I>
where
    I: Integer + Signed + Copy + Debug + Display + CheckedAdd + CheckedSub + CheckedMul + CheckedNeg,
{
    const EXACT: bool = true;

    #[inline]
    fn default_epsilon() -> Self {
        Self::zero()
    }

    #[inline]
    fn try_add(self, rhs: Self) -> Option<Self> {
        CheckedAdd::checked_add(&self, &rhs).and_then(negatable)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Option<Self> {
        CheckedSub::checked_sub(&self, &rhs).and_then(negatable)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> Option<Self> {
        CheckedMul::checked_mul(&self, &rhs).and_then(negatable)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        CheckedDiv::checked_div(&self, &rhs).and_then(negatable)
    }
}

/// Read-only access to a matrix-like type.
///
/// Row operations and pivot selection are written against this trait so
/// they work on any dense row-addressable storage.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous view of one row.
    fn row_as_slice(&self, row: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element and row access, enabling
/// in-place elimination to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable contiguous view of one row.
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T];

    /// Exchange two rows. `a == b` is a no-op.
    fn swap_rows(&mut self, a: usize, b: usize);
}
