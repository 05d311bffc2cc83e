//! Vinculum is a finite-domain binary constraint satisfaction problem
//! (CSP) solver.
//!
//! A problem is a set of named variables, each with a finite integer
//! domain, related by binary constraints (`=`, `!=`, `<`, `>`). The engine
//! runs a recursive backtracking search, optionally strengthened with
//! forward checking, and finds one satisfying assignment or proves none
//! exists. Search order is driven by the classic heuristics: most
//! constrained variable, most constraining variable as the tie-break, and
//! least constraining value — applied deterministically, so the same model
//! always produces the same assignment and the same trace.
//!
//! # Core Concepts
//!
//! - **[`Model`]**: the arena of variables and their mirrored constraint
//!   pairs, built by hand or by the [`loader`] from the two-file problem
//!   format.
//! - **[`Solver`]**: the search engine. The propagation mode (plain
//!   backtracking or forward checking) is injected once as a
//!   [`Propagator`](solver::propagate::Propagator) strategy.
//! - **[`SearchTrace`](solver::trace::SearchTrace)**: the numbered record
//!   of rejected candidates and the final solution.
//!
//! # Example
//!
//! ```
//! use vinculum::{Model, Relation, Solver};
//!
//! let mut model = Model::new();
//! let a = model.add_variable("A", vec![1, 2]).unwrap();
//! let b = model.add_variable("B", vec![1, 2]).unwrap();
//! model.add_constraint(a, Relation::NotEqual, b).unwrap();
//!
//! let solver = Solver::with_forward_checking(true);
//! let (solution, trace) = solver.solve(&model);
//! let solution = solution.unwrap();
//!
//! assert_ne!(solution.get(a), solution.get(b));
//! assert_eq!(trace.entries.last().unwrap().to_string(), "1. A=1, B=2  solution");
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod solver;

pub use error::{Error, Result};
pub use model::{Assignment, Constraint, Model, Relation, Variable, VariableId};
pub use solver::engine::{solve, Solver};
