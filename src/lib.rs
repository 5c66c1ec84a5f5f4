//! # echelon
//!
//! Gauss-Jordan elimination with a step-by-step trace, generic over exact
//! rationals and floating point. `no_std` compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use echelon::Matrix;
//! use echelon::elimination::EliminationSettings;
//! use echelon::solve::solve_single;
//!
//! // Solve Ax = b
//! let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
//! let sol = solve_single(&a, &[5.0, 11.0], &EliminationSettings::default()).unwrap();
//! let x = sol.unique().unwrap(); // x = [1, 2]
//! assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 2.0).abs() < 1e-12);
//! ```
//!
//! Exact arithmetic and a recorded trace:
//!
//! ```
//! use echelon::{Matrix, solve::GaussJordanSolver, system::LinearSystem};
//! use echelon::elimination::EliminationSettings;
//! use num_rational::Rational64;
//!
//! let r = Rational64::from_integer;
//! let a = Matrix::from_rows(&[[r(2), r(1)], [r(1), r(3)]]).unwrap();
//! let sys = LinearSystem::new(a, vec![r(1), r(2)]).unwrap();
//! let sol = GaussJordanSolver::new(EliminationSettings::default().with_steps(true))
//!     .solve(&sys)
//!     .unwrap();
//! assert_eq!(sol.unique(), Some(&[Rational64::new(1, 5), Rational64::new(3, 5)][..]));
//! for step in sol.history.unwrap().iter() {
//!     println!("{}\n{}", step, step.after);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Heap-allocated `Matrix<T>` with runtime dimensions and
//!   row-major `Vec<T>` storage. Checked constructors reject empty or ragged
//!   input with [`matrix::ShapeError`]. Implements [`MatrixRef`] /
//!   [`MatrixMut`], so the row operations work on it directly.
//!
//! - [`elimination`]: Pivot strategies (first nonzero, partial), elementary
//!   row operations, the step [`History`](elimination::History) with replay,
//!   and the reducer to RREF. Settings live in
//!   [`EliminationSettings`](elimination::EliminationSettings).
//!
//! - [`system`]: `LinearSystem` (`Ax = b`) and `MatrixSystem` (`AX = B`).
//!
//! - [`solve`]: `GaussJordanSolver` classifying systems as unique,
//!   infinite (parametric) or inconsistent; matrix equations with an
//!   aggregate status; null spaces; linear dependence and span membership.
//!
//! - [`vector`]: `Vector<T>` with checked sums, scalar multiples, dot and
//!   cross products, evaluated linear combinations, the line
//!   `p + t d`, and traced checks of the vector-space addition axioms.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FieldScalar`]: elements elimination runs over: `f32`, `f64` and
//!     `Ratio<I>`. Floats use an epsilon for zero tests, rationals compare
//!     exactly.
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Exact arithmetic and overflow
//!
//! `Ratio<I>` elements are exact but fixed-width. Entries grow during
//! elimination, and an entry that no longer fits in `I` is reported as
//! [`EliminationError::Overflow`] instead of wrapping or panicking. Use
//! `Ratio<i128>` when `Rational64` runs out on larger systems.
//!
//! ## Logging
//!
//! Reductions and solves emit `log` records: `debug` for ranks and
//! classifications, `trace` for every pivot choice and row operation. No
//! logger is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` impls, system float math |
//! | `libm`  | no       | Pure-Rust `sqrt` for `Vector::norm` on `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod elimination;
pub mod matrix;
pub mod solve;
pub mod system;
pub mod traits;
pub mod vector;

pub use matrix::Matrix;
pub use traits::{FieldScalar, MatrixMut, MatrixRef, Scalar};

pub use elimination::{EliminationError, EliminationSettings, PivotStrategy};
pub use solve::{GaussJordanSolver, Solution, SolutionKind, SolutionStatus};
pub use system::{LinearSystem, MatrixSystem};
pub use vector::Vector;
