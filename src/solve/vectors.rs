//! Span questions about a set of vectors, answered by solving the system
//! whose coefficient columns are the vectors.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::elimination::{EliminationError, EliminationSettings};
use crate::system::LinearSystem;
use crate::traits::FieldScalar;
use crate::Matrix;

use super::{GaussJordanSolver, Solution, SolutionKind};

/// Outcome of [`linear_dependence`].
#[derive(Debug, Clone, PartialEq)]
pub struct DependenceReport<T> {
    /// Only the trivial combination gives the zero vector.
    pub independent: bool,
    /// Solution of `c1 v1 + ... + ck vk = 0`.
    pub solution: Solution<T>,
    /// A nonzero coefficient vector with `Σ ci vi = 0`, when dependent.
    pub relation: Option<Vec<T>>,
    /// Coefficient names `c1 .. ck`.
    pub labels: Vec<String>,
}

/// Outcome of [`linear_combination`].
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationReport<T> {
    /// The target is a combination of the generators.
    pub in_span: bool,
    /// Solution of `c1 v1 + ... + ck vk = w`.
    pub solution: Solution<T>,
    /// Coefficient names `c1 .. ck`.
    pub labels: Vec<String>,
}

impl<T> CombinationReport<T> {
    /// One set of coefficients expressing the target, if any. Unique when
    /// the generators are independent, the particular solution otherwise.
    pub fn coefficients(&self) -> Option<&[T]> {
        self.solution.any_solution()
    }
}

fn coefficient_labels(k: usize) -> Vec<String> {
    (1..=k).map(|i| format!("c{}", i)).collect()
}

/// Decide whether `vectors` are linearly independent.
///
/// Solves the homogeneous system `[v1 ... vk] c = 0`. A unique (zero)
/// solution means independent; free variables mean dependent, and the
/// first direction vector is reported as a relation.
///
/// Fails with [`ShapeError::EmptyMatrix`](crate::matrix::ShapeError) for an
/// empty set or empty vectors, and
/// [`ShapeError::RaggedRows`](crate::matrix::ShapeError) when the vectors
/// differ in length.
///
/// ```
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::linear_dependence;
///
/// let s = EliminationSettings::default();
/// let dep = linear_dependence(&[[1.0_f64, 2.0], [2.0, 4.0]], &s).unwrap();
/// assert!(!dep.independent);
/// assert_eq!(dep.relation, Some(vec![-2.0, 1.0]));
///
/// let ind = linear_dependence(&[[1.0_f64, 0.0], [0.0, 1.0]], &s).unwrap();
/// assert!(ind.independent);
/// ```
pub fn linear_dependence<T, V>(
    vectors: &[V],
    settings: &EliminationSettings<T>,
) -> Result<DependenceReport<T>, EliminationError>
where
    T: FieldScalar,
    V: AsRef<[T]>,
{
    let a = Matrix::from_columns(vectors)?;
    let k = a.ncols();
    let labels = coefficient_labels(k);
    let system = LinearSystem::homogeneous(a).with_variable_names(labels.iter().cloned())?;
    let solution = GaussJordanSolver::new(*settings).solve(&system)?;

    let (independent, relation) = match &solution.kind {
        SolutionKind::Unique(_) => (true, None),
        SolutionKind::Infinite(p) => (false, p.directions.first().cloned()),
        SolutionKind::Inconsistent => {
            return Err(EliminationError::InvariantViolated(
                "homogeneous system reported as inconsistent",
            ))
        }
    };
    log::debug!(
        "{} vectors of length {} are {}",
        k,
        system.num_equations(),
        if independent { "independent" } else { "dependent" }
    );

    Ok(DependenceReport {
        independent,
        solution,
        relation,
        labels,
    })
}

/// Decide whether `target` is a linear combination of `generators`.
///
/// Solves `[v1 ... vk] c = target`. Besides the generator-set errors of
/// [`linear_dependence`], fails with
/// [`ShapeError::RowLengthMismatch`](crate::matrix::ShapeError) when
/// `target` has a different length.
///
/// ```
/// use echelon::elimination::EliminationSettings;
/// use echelon::solve::linear_combination;
/// use num_rational::Rational64;
///
/// let r = |n| Rational64::from_integer(n);
/// let gens = [[r(1), r(0), r(1)], [r(0), r(1), r(1)]];
/// let s = EliminationSettings::default();
///
/// let yes = linear_combination(&gens, &[r(2), r(3), r(5)], &s).unwrap();
/// assert!(yes.in_span);
/// assert_eq!(yes.coefficients(), Some(&[r(2), r(3)][..]));
///
/// let no = linear_combination(&gens, &[r(1), r(1), r(0)], &s).unwrap();
/// assert!(!no.in_span);
/// ```
pub fn linear_combination<T, V>(
    generators: &[V],
    target: &[T],
    settings: &EliminationSettings<T>,
) -> Result<CombinationReport<T>, EliminationError>
where
    T: FieldScalar,
    V: AsRef<[T]>,
{
    let a = Matrix::from_columns(generators)?;
    let labels = coefficient_labels(a.ncols());
    let system = LinearSystem::new(a, target.to_vec())?.with_variable_names(labels.iter().cloned())?;
    let solution = GaussJordanSolver::new(*settings).solve(&system)?;
    let in_span = solution.is_consistent();
    log::debug!("target {} the span", if in_span { "lies in" } else { "is outside" });

    Ok(CombinationReport {
        in_span,
        solution,
        labels,
    })
}
