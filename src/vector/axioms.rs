//! Traced checks of the vector-space addition axioms on concrete vectors.
//!
//! Each check computes both sides of the axiom, records them as readable
//! steps and compares them componentwise under `eps` (exactly for
//! rationals).
//!
//! ```
//! use echelon::vector::{axioms, Vector};
//! use num_rational::Rational64;
//!
//! let r = Rational64::from_integer;
//! let u = Vector::new(vec![r(1), r(2)]).unwrap();
//! let v = Vector::new(vec![r(-3), r(5)]).unwrap();
//! let check = axioms::commutativity(&u, &v, r(0)).unwrap();
//! assert!(check.holds);
//! assert_eq!(check.steps, vec!["u + v = [-2, 7]", "v + u = [-2, 7]"]);
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::FieldScalar;

use super::{Vector, VectorError};

/// Addition axioms a vector space must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axiom {
    /// `u + v = v + u`
    Commutativity,
    /// `(u + v) + w = u + (v + w)`
    Associativity,
    /// `u + 0 = u`
    AdditiveIdentity,
    /// `u + (-u) = 0`
    AdditiveInverse,
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axiom::Commutativity => "commutativity",
            Axiom::Associativity => "associativity",
            Axiom::AdditiveIdentity => "additive identity",
            Axiom::AdditiveInverse => "additive inverse",
        };
        f.write_str(s)
    }
}

/// Outcome of one axiom check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomCheck {
    pub axiom: Axiom,
    pub holds: bool,
    /// Both sides as computed, one line each.
    pub steps: Vec<String>,
}

impl AxiomCheck {
    fn new(axiom: Axiom, holds: bool, steps: Vec<String>) -> Self {
        log::debug!("{} {}", axiom, if holds { "holds" } else { "fails" });
        Self { axiom, holds, steps }
    }
}

/// `u + v = v + u`.
pub fn commutativity<T: FieldScalar>(
    u: &Vector<T>,
    v: &Vector<T>,
    eps: T,
) -> Result<AxiomCheck, VectorError> {
    let uv = u.add(v)?;
    let vu = v.add(u)?;
    let steps = alloc::vec![format!("u + v = {}", uv), format!("v + u = {}", vu)];
    Ok(AxiomCheck::new(Axiom::Commutativity, uv.approx_eq(&vu, eps), steps))
}

/// `(u + v) + w = u + (v + w)`.
pub fn associativity<T: FieldScalar>(
    u: &Vector<T>,
    v: &Vector<T>,
    w: &Vector<T>,
    eps: T,
) -> Result<AxiomCheck, VectorError> {
    let left = u.add(v)?.add(w)?;
    let right = u.add(&v.add(w)?)?;
    let steps = alloc::vec![
        format!("(u + v) + w = {}", left),
        format!("u + (v + w) = {}", right),
    ];
    Ok(AxiomCheck::new(Axiom::Associativity, left.approx_eq(&right, eps), steps))
}

/// `u + 0 = u`.
pub fn additive_identity<T: FieldScalar>(u: &Vector<T>, eps: T) -> Result<AxiomCheck, VectorError> {
    let zero = Vector::zeros(u.dim())?;
    let sum = u.add(&zero)?;
    let steps = alloc::vec![format!("0 = {}", zero), format!("u + 0 = {}", sum)];
    Ok(AxiomCheck::new(Axiom::AdditiveIdentity, sum.approx_eq(u, eps), steps))
}

/// `u + (-u) = 0`.
pub fn additive_inverse<T: FieldScalar>(u: &Vector<T>, eps: T) -> Result<AxiomCheck, VectorError> {
    let opposite = u.neg()?;
    let sum = u.add(&opposite)?;
    let steps = alloc::vec![format!("-u = {}", opposite), format!("u + (-u) = {}", sum)];
    Ok(AxiomCheck::new(Axiom::AdditiveInverse, sum.is_zero(eps), steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use num_rational::Rational64;

    fn q(n: i64, d: i64) -> Rational64 {
        Rational64::new(n, d)
    }

    fn exact(data: &[(i64, i64)]) -> Vector<Rational64> {
        Vector::new(data.iter().map(|&(n, d)| q(n, d)).collect()).unwrap()
    }

    #[test]
    fn all_axioms_hold_for_rationals() {
        let u = exact(&[(1, 2), (-3, 1), (0, 1)]);
        let v = exact(&[(2, 3), (1, 1), (-5, 4)]);
        let w = exact(&[(7, 1), (1, 7), (1, 3)]);
        let zero = q(0, 1);
        let checks = [
            commutativity(&u, &v, zero).unwrap(),
            associativity(&u, &v, &w, zero).unwrap(),
            additive_identity(&u, zero).unwrap(),
            additive_inverse(&u, zero).unwrap(),
        ];
        assert!(checks.iter().all(|c| c.holds));
        let axioms: Vec<Axiom> = checks.iter().map(|c| c.axiom).collect();
        assert_eq!(
            axioms,
            vec![
                Axiom::Commutativity,
                Axiom::Associativity,
                Axiom::AdditiveIdentity,
                Axiom::AdditiveInverse
            ]
        );
    }

    #[test]
    fn steps_show_both_sides() {
        let u = exact(&[(1, 2), (3, 1)]);
        let inv = additive_inverse(&u, q(0, 1)).unwrap();
        assert_eq!(inv.steps, vec!["-u = [-1/2, -3]", "u + (-u) = [0, 0]"]);
        let id = additive_identity(&u, q(0, 1)).unwrap();
        assert_eq!(id.steps, vec!["0 = [0, 0]", "u + 0 = [1/2, 3]"]);
    }

    #[test]
    fn float_associativity_within_epsilon() {
        let u = Vector::new(vec![0.1_f64, 1e16]).unwrap();
        let v = Vector::new(vec![0.2, -1e16]).unwrap();
        let w = Vector::new(vec![0.3, 1.0]).unwrap();
        // Rounding near 1e16 leaves the second components one apart.
        assert!(associativity(&u, &v, &w, 2.0).unwrap().holds);
        assert!(!associativity(&u, &v, &w, 1e-12).unwrap().holds);
    }

    #[test]
    fn mismatched_operands() {
        let u = Vector::new(vec![1.0_f64]).unwrap();
        let v = Vector::new(vec![1.0, 2.0]).unwrap();
        assert_eq!(
            commutativity(&u, &v, 1e-12),
            Err(VectorError::DimensionMismatch { expected: 1, got: 2 })
        );
    }
}
