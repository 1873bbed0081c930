//! Module for Variable handles and variable options.

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::expr::{LinearExpression, Scalar};

/// A Variable is a lightweight handle identifying a decision variable in a [crate::Model]. It
/// carries the variable id and a scalar type tag, but no attributes of its own; bounds, category
/// and objective coefficient are stored in the model, indexed by id.
///
/// A [Variable] contains no reference to the [crate::Model] object it belongs to, so the model
/// can only check that the id is in range, not that the handle was created by it.
///
/// As an expression, a variable `x` is `{ variables: [x], coefficients: [1], constant: 0 }`:
/// ```
/// use mipmodel::*;
///
/// let mut model = Model::new();
/// let x = model.add_var(VarOptions::default());
/// assert_eq!(x.variables().collect::<Vec<usize>>(), vec![0]);
/// assert_eq!(x.coefficients().collect::<Vec<f64>>(), vec![1.0]);
/// ```
pub struct Variable<S = f64> {
    id      : usize,
    _scalar : PhantomData<S>
}

impl<S> Variable<S> {
    /// Create a handle for the variable with the given id. Normally handles are obtained from
    /// [crate::Model::add_var] or [crate::Model::add_vars].
    pub fn new(id : usize) -> Variable<S> { Variable{ id, _scalar : PhantomData } }
    /// The model-wide id of the variable.
    pub fn id(&self) -> usize { self.id }
}

impl<S> Clone for Variable<S> {
    fn clone(&self) -> Self { *self }
}
impl<S> Copy for Variable<S> {}

impl<S> PartialEq for Variable<S> {
    fn eq(&self, other : &Self) -> bool { self.id == other.id }
}
impl<S> Eq for Variable<S> {}

impl<S> Debug for Variable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Variable{id:")?;
        self.id.fmt(f)?;
        f.write_str("}")
    }
}

impl<S> LinearExpression for Variable<S> where S : Scalar {
    type Scalar = S;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { std::iter::once(self.id) }
    fn coefficients(&self) -> impl Iterator<Item = S> + '_ { std::iter::once(S::one()) }
    fn constant(&self) -> S { S::zero() }
}

/// Variable category.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Default)]
pub enum VarCategory {
    #[default]
    Continuous,
    Integer,
    Binary
}

/// Options for [crate::Model::add_var]. Unspecified options take their defaults:
/// objective coefficient `0`, lower bound `0`, upper bound `+inf`, continuous.
///
/// ```
/// use mipmodel::*;
///
/// let mut model = Model::new();
/// let y = model.add_var(VarOptions { upper_bound : 12.0, ..Default::default() });
/// let z = model.add_var(VarOptions::new().obj_coef(2.0).integer());
/// assert_eq!(model.upper_bound(y), 12.0);
/// assert_eq!(model.var_type(z), VarCategory::Integer);
/// ```
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct VarOptions {
    pub obj_coef    : f64,
    pub lower_bound : f64,
    pub upper_bound : f64,
    pub var_type    : VarCategory
}

impl Default for VarOptions {
    fn default() -> Self {
        VarOptions{
            obj_coef    : 0.0,
            lower_bound : 0.0,
            upper_bound : f64::INFINITY,
            var_type    : VarCategory::Continuous
        }
    }
}

impl VarOptions {
    pub fn new() -> VarOptions { Default::default() }
    pub fn obj_coef(self, obj_coef : f64) -> VarOptions { VarOptions{ obj_coef, ..self } }
    pub fn lower_bound(self, lower_bound : f64) -> VarOptions { VarOptions{ lower_bound, ..self } }
    pub fn upper_bound(self, upper_bound : f64) -> VarOptions { VarOptions{ upper_bound, ..self } }
    pub fn bounds(self, lower_bound : f64, upper_bound : f64) -> VarOptions { VarOptions{ lower_bound, upper_bound, ..self } }
    /// Unbounded in both directions.
    pub fn free(self) -> VarOptions { VarOptions{ lower_bound : f64::NEG_INFINITY, upper_bound : f64::INFINITY, ..self } }
    pub fn continuous(self) -> VarOptions { VarOptions{ var_type : VarCategory::Continuous, ..self } }
    pub fn integer(self) -> VarOptions { VarOptions{ var_type : VarCategory::Integer, ..self } }
    pub fn binary(self) -> VarOptions { VarOptions{ var_type : VarCategory::Binary, ..self } }
}
