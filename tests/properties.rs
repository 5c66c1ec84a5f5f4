//! Property tests over random small systems.
//!
//! Integer-valued entries keep rational arithmetic cheap and make the exact
//! checks meaningful; the float properties only assert residuals.

use echelon::elimination::{reduce, EliminationSettings, History, PivotStrategy, StepKind};
use echelon::solve::{solve_single, SolutionKind};
use echelon::Matrix;
use num_rational::Rational64;
use proptest::prelude::*;

type Q = Rational64;

/// `(A, b)` with `A` of shape `m x n`, `1 <= m, n <= 4`.
fn system() -> impl Strategy<Value = (Matrix<Q>, Vec<Q>)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(m, n)| {
        (
            proptest::collection::vec(-5i64..=5, m * n),
            proptest::collection::vec(-5i64..=5, m),
        )
            .prop_map(move |(a, b)| {
                let a = a.into_iter().map(Q::from_integer).collect();
                let b = b.into_iter().map(Q::from_integer).collect();
                (Matrix::from_row_major(m, n, a).unwrap(), b)
            })
    })
}

fn to_f64(q: Q) -> f64 {
    *q.numer() as f64 / *q.denom() as f64
}

fn zero() -> Q {
    Q::from_integer(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn solutions_satisfy_system((a, b) in system()) {
        let s = EliminationSettings::default();
        let sol = solve_single(&a, &b, &s).unwrap();
        match &sol.kind {
            SolutionKind::Unique(x) => {
                prop_assert_eq!(a.mul_vec(x).unwrap(), b.clone());
            }
            SolutionKind::Infinite(p) => {
                prop_assert_eq!(a.mul_vec(&p.particular).unwrap(), b.clone());
                for d in &p.directions {
                    prop_assert!(a.mul_vec(d).unwrap().iter().all(|&v| v == zero()));
                }
                prop_assert!(sol.rank < a.ncols());
            }
            SolutionKind::Inconsistent => {
                // Appending b raises the rank.
                let aug = a.augment(&b).unwrap();
                prop_assert!(aug.rank(&s).unwrap() > a.rank(&s).unwrap());
            }
        }
    }

    #[test]
    fn pivots_and_free_vars_partition_columns((a, b) in system()) {
        let sol = solve_single(&a, &b, &EliminationSettings::default()).unwrap();
        prop_assert_eq!(sol.pivot_cols.len() + sol.free_vars.len(), a.ncols());
        prop_assert_eq!(sol.rank, sol.pivot_cols.len());
        prop_assert!(sol.pivot_cols.windows(2).all(|w| w[0] < w[1]));
        if let SolutionKind::Unique(_) = sol.kind {
            prop_assert_eq!(sol.rank, a.ncols());
        }
    }

    #[test]
    fn reduction_is_rref_and_idempotent((a, b) in system()) {
        let aug = a.augment(&b).unwrap();
        let n = a.ncols();
        let s = EliminationSettings::default();
        let first = reduce(&aug, n, &s, None).unwrap();
        prop_assert!(first.matrix.is_rref(n, zero()));

        let mut h = History::new();
        let second = reduce(&first.matrix, n, &s, Some(&mut h)).unwrap();
        prop_assert_eq!(&second.matrix, &first.matrix);
        prop_assert!(h.iter().all(|st| st.kind == StepKind::Normalize));
    }

    #[test]
    fn replay_reproduces_rref((a, b) in system()) {
        let aug = a.augment(&b).unwrap();
        let mut h = History::new();
        let red = reduce(&aug, a.ncols(), &EliminationSettings::default(), Some(&mut h)).unwrap();
        prop_assert_eq!(h.replay(&aug).unwrap(), red.matrix.clone());
        if let Some(first) = h.steps().first() {
            prop_assert_eq!(&first.before, &aug);
        }
        for w in h.steps().windows(2) {
            prop_assert_eq!(&w[1].before, &w[0].after);
        }
    }

    #[test]
    fn replay_reproduces_float_rref((a, b) in system()) {
        let aug = a.augment(&b).unwrap().map(to_f64);
        let mut h = History::new();
        let red = reduce(&aug, a.ncols(), &EliminationSettings::default(), Some(&mut h)).unwrap();
        prop_assert_eq!(h.replay(&aug).unwrap(), red.matrix);
    }

    #[test]
    fn exact_rref_is_strategy_independent((a, b) in system()) {
        let aug = a.augment(&b).unwrap();
        let n = a.ncols();
        let partial = reduce(&aug, n, &EliminationSettings::default(), None).unwrap();
        let first = reduce(
            &aug,
            n,
            &EliminationSettings::default().with_pivot(PivotStrategy::FirstNonzero),
            None,
        )
        .unwrap();
        prop_assert_eq!(partial, first);
    }

    #[test]
    fn solve_is_deterministic((a, b) in system()) {
        let af = a.map(to_f64);
        let bf: Vec<f64> = b.iter().copied().map(to_f64).collect();
        let s = EliminationSettings::default().with_steps(true);
        let one = solve_single(&af, &bf, &s).unwrap();
        let two = solve_single(&af, &bf, &s).unwrap();
        prop_assert_eq!(one, two);
    }

    #[test]
    fn float_residuals_are_small((a, b) in system()) {
        let af = a.map(to_f64);
        let bf: Vec<f64> = b.iter().copied().map(to_f64).collect();
        let sol = solve_single(&af, &bf, &EliminationSettings::default()).unwrap();
        let tol = 1e-9;
        if let Some(x) = sol.any_solution() {
            let ax = af.mul_vec(x).unwrap();
            for (l, r) in ax.iter().zip(&bf) {
                prop_assert!((l - r).abs() < tol, "residual {} vs {}", l, r);
            }
        }
        if let Some(p) = sol.parametric() {
            for d in &p.directions {
                prop_assert!(af.mul_vec(d).unwrap().iter().all(|v| v.abs() < tol));
            }
        }
    }
}
