//! # mipmodel
//!
//! Modeling layer for linear and mixed integer linear optimization problems. Variables are
//! created in a [Model], combined into linear expressions with ordinary arithmetic operators,
//! and added to the model as objective terms or bounded constraints. The assembled model is
//! handed to an optimization engine implementing [SolverBackend].
//!
//! ```
//! use mipmodel::*;
//!
//! let mut model = Model::new();
//! let x = model.add_var(VarOptions{ upper_bound : 20.0, ..Default::default() });
//! let y = model.add_var(VarOptions{ upper_bound : 12.0, ..Default::default() });
//!
//! model.set_maximization();
//! model.add_obj(2.0 * x + 3.0 * y);
//! model.add_constraint((x + y).less_than(30.0));
//!
//! // A data-only backend; see the `mipmodel_highs` crate for a real solver.
//! let mut solver : DummySolver = model.build().unwrap();
//! assert_eq!(solver.optimize(), ReturnCode::Failure);
//! ```
//!
//! ## Expressions
//!
//! Anything implementing [LinearExpression] is an expression: [Variable], bare scalars (`f64`
//! and `f32`), the combinators produced by the arithmetic operators, [xsum] sums, and the
//! materialized [LinearExpr]. Composite expressions own their operands and produce their terms
//! lazily, in the order they were written.
//!
//! ## Constraints
//!
//! Bounds are attached with [LinearExpression::less_than], [LinearExpression::greater_than],
//! [LinearExpression::equal_to] and [LinearExpression::in_range], or with [constraint] and the
//! bound functions [less_than], [greater_than], [equal_to], [in_range]. Constraint rows are
//! stored as written: a variable that occurs twice in the expression gives two entries in the
//! row, whereas the objective is aggregated per variable.

pub mod variable;
pub mod expr;
pub mod constraint;
pub mod model;
pub mod solver;
pub mod dummy;

pub use variable::{Variable, VarCategory, VarOptions};
pub use expr::*;
pub use constraint::*;
pub use model::{Model, ModelError, Sense, ConstraintView, ObjectiveView};
pub use solver::{ReturnCode, SolverBackend, SolverParameterValue};
pub use dummy::DummySolver;
