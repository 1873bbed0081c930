//! Linear expressions.
//!
//! An expression is anything implementing [LinearExpression]: it exposes a sequence of variable
//! ids, a sequence of coefficients of the same length paired positionally with the ids, and a
//! constant. Composite expressions ([ExprAdd], [ExprSub], [ExprNeg], [ExprScalarAdd],
//! [ExprScalarRsub], [ExprScalarMul], [XSum]) own their operands and produce their term sequences
//! lazily when traversed, so composing never allocates.
//!
//! The term traversal order of a composite is the written order of the defining expression:
//! ```
//! use mipmodel::*;
//!
//! let mut m = Model::new();
//! let x = m.add_var(VarOptions::default());
//! let y = m.add_var(VarOptions::default());
//! let z = m.add_var(VarOptions::default());
//!
//! let e = -z + y + 3.0 * x;
//! assert_eq!(e.variables().collect::<Vec<usize>>(), vec![2,1,0]);
//! assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![-1.0,1.0,3.0]);
//! ```

mod add;
mod mul;
mod xsum;

use std::fmt::Debug;

use itertools::Itertools;
use num_traits::Float;

use crate::constraint::BoundedConstraint;
use crate::variable::Variable;

pub use add::*;
pub use mul::*;
pub use xsum::*;

/// Scalar type of expressions. Two expressions can only be combined if they have the same
/// scalar type.
pub trait Scalar : Float + Debug + 'static {}
impl<T> Scalar for T where T : Float + Debug + 'static {}

/// The `LinearExpression` trait represents a linear expression `sum_i c_i x_i + c_0`.
///
/// `variables()` and `coefficients()` may be traversed any number of times, and always produce
/// sequences of the same length.
pub trait LinearExpression {
    type Scalar : Scalar;

    /// Variable ids of the terms, in traversal order.
    fn variables(&self) -> impl Iterator<Item = usize> + '_;
    /// Coefficients of the terms, positionally paired with [LinearExpression::variables].
    fn coefficients(&self) -> impl Iterator<Item = Self::Scalar> + '_;
    fn constant(&self) -> Self::Scalar;

    /// Iterate `(variable id, coefficient)` pairs.
    ///
    /// Panics if the expression produces sequences of different lengths.
    fn terms(&self) -> impl Iterator<Item = (usize,Self::Scalar)> + '_ {
        self.variables().zip_eq(self.coefficients())
    }

    /// `self + rhs`. The terms of `self` are traversed before the terms of `rhs`.
    fn plus<R>(self, rhs : R) -> ExprAdd<Self,R> where R : LinearExpression<Scalar = Self::Scalar>, Self : Sized { ExprAdd::new(self,rhs) }
    /// `self - rhs`. The terms of `rhs` are negated, its constant is added to the constant of
    /// `self`.
    fn minus<R>(self, rhs : R) -> ExprSub<Self,R> where R : LinearExpression<Scalar = Self::Scalar>, Self : Sized { ExprSub::new(self,rhs) }
    /// `-self`.
    fn negate(self) -> ExprNeg<Self> where Self : Sized { ExprNeg::new(self) }
    /// `self + c`.
    fn scalar_add(self, c : Self::Scalar) -> ExprScalarAdd<Self> where Self : Sized { ExprScalarAdd::new(self,c) }
    /// `c - self`. The terms of `self` are negated, `c` is added to its constant.
    fn scalar_rsub(self, c : Self::Scalar) -> ExprScalarRsub<Self> where Self : Sized { ExprScalarRsub::new(self,c) }
    /// `c * self`.
    fn scalar_mul(self, c : Self::Scalar) -> ExprScalarMul<Self> where Self : Sized { ExprScalarMul::new(self,c) }

    /// Constraint `self <= ub`.
    fn less_than(self, ub : Self::Scalar) -> BoundedConstraint<Self> where Self : Sized {
        BoundedConstraint::unbounded(self).less_than(ub)
    }
    /// Constraint `self >= lb`.
    fn greater_than(self, lb : Self::Scalar) -> BoundedConstraint<Self> where Self : Sized {
        BoundedConstraint::unbounded(self).greater_than(lb)
    }
    /// Constraint `self == value`.
    fn equal_to(self, value : Self::Scalar) -> BoundedConstraint<Self> where Self : Sized {
        BoundedConstraint::unbounded(self).greater_than(value).less_than(value)
    }
    /// Constraint `lb <= self <= ub`.
    fn in_range(self, lb : Self::Scalar, ub : Self::Scalar) -> BoundedConstraint<Self> where Self : Sized {
        BoundedConstraint::unbounded(self).greater_than(lb).less_than(ub)
    }

    /// Materialize the expression into an owned [LinearExpr]. Terms are copied verbatim, in
    /// traversal order.
    fn to_linear_expr(&self) -> LinearExpr<Self::Scalar> {
        let (subj,cof) = self.terms().unzip();
        LinearExpr{ subj, cof, constant : self.constant() }
    }

    /// Evaluate the expression at a point.
    ///
    /// # Arguments
    /// - `values` Values indexed by variable id, for example a solution returned by a solver.
    ///   Panics if a variable id is out of range.
    fn evaluate(&self, values : &[Self::Scalar]) -> Self::Scalar {
        self.terms().fold(self.constant(), |acc,(j,c)| acc + c * values[j])
    }
}

macro_rules! impl_scalar_expression {
    ($t:ty) => {
        /// A bare scalar is the expression `{ variables: [], coefficients: [], constant: c }`.
        impl LinearExpression for $t {
            type Scalar = $t;
            fn variables(&self) -> impl Iterator<Item = usize> + '_ { std::iter::empty() }
            fn coefficients(&self) -> impl Iterator<Item = $t> + '_ { std::iter::empty() }
            fn constant(&self) -> $t { *self }
        }
    }
}

impl_scalar_expression!(f64);
impl_scalar_expression!(f32);

/// A reference to an expression is the same expression. This allows passing `&e` to
/// [crate::Model::add_obj] and friends, and reusing `e` afterwards.
impl<E> LinearExpression for &E where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { (**self).variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ { (**self).coefficients() }
    fn constant(&self) -> E::Scalar { (**self).constant() }
}

/// Implements the arithmetic operators for an expression type.
///
/// - `E + R`, `E - R` for any expression `R` of the same scalar type, including bare scalars,
/// - `-E`, `E * c`, `E / c`,
/// - `c + E`, `c - E`, `c * E` for `c` of type `f64` or `f32`.
macro_rules! impl_expr_ops {
    ( [ $($gen:tt)* ] $t:ty, $s:ty ) => {
        impl<$($gen)* Rhs> std::ops::Add<Rhs> for $t where Rhs : $crate::expr::LinearExpression<Scalar = $s> {
            type Output = $crate::expr::ExprAdd<$t,Rhs>;
            fn add(self, rhs : Rhs) -> Self::Output { $crate::expr::ExprAdd::new(self,rhs) }
        }
        impl<$($gen)* Rhs> std::ops::Sub<Rhs> for $t where Rhs : $crate::expr::LinearExpression<Scalar = $s> {
            type Output = $crate::expr::ExprSub<$t,Rhs>;
            fn sub(self, rhs : Rhs) -> Self::Output { $crate::expr::ExprSub::new(self,rhs) }
        }
        impl<$($gen)*> std::ops::Neg for $t {
            type Output = $crate::expr::ExprNeg<$t>;
            fn neg(self) -> Self::Output { $crate::expr::ExprNeg::new(self) }
        }
        impl<$($gen)*> std::ops::Mul<$s> for $t {
            type Output = $crate::expr::ExprScalarMul<$t>;
            fn mul(self, c : $s) -> Self::Output { $crate::expr::ExprScalarMul::new(self,c) }
        }
        impl<$($gen)*> std::ops::Div<$s> for $t {
            type Output = $crate::expr::ExprScalarMul<$t>;
            fn div(self, c : $s) -> Self::Output { $crate::expr::ExprScalarMul::new(self,num_traits::Float::recip(c)) }
        }
        impl_expr_ops!(@lhs [ $($gen)* ] $t, f64);
        impl_expr_ops!(@lhs [ $($gen)* ] $t, f32);
    };
    ( @lhs [ $($gen:tt)* ] $t:ty, $c:ty ) => {
        impl<$($gen)*> std::ops::Add<$t> for $c where $t : $crate::expr::LinearExpression<Scalar = $c> {
            type Output = $crate::expr::ExprScalarAdd<$t>;
            fn add(self, rhs : $t) -> Self::Output { $crate::expr::ExprScalarAdd::new(rhs,self) }
        }
        impl<$($gen)*> std::ops::Sub<$t> for $c where $t : $crate::expr::LinearExpression<Scalar = $c> {
            type Output = $crate::expr::ExprScalarRsub<$t>;
            fn sub(self, rhs : $t) -> Self::Output { $crate::expr::ExprScalarRsub::new(rhs,self) }
        }
        impl<$($gen)*> std::ops::Mul<$t> for $c where $t : $crate::expr::LinearExpression<Scalar = $c> {
            type Output = $crate::expr::ExprScalarMul<$t>;
            fn mul(self, rhs : $t) -> Self::Output { $crate::expr::ExprScalarMul::new(rhs,self) }
        }
    };
}
pub(crate) use impl_expr_ops;

impl_expr_ops!([S : Scalar,] Variable<S>, S);

////////////////////////////////////////////////////////////
// LinearExpr

/// An owned, materialized linear expression.
///
/// Composite expression types depend on the types of all their sub-expressions, so two
/// expressions built differently cannot be put in the same `Vec`. Materializing them with
/// [LinearExpression::to_linear_expr] gives them a common type at the cost of one allocation.
///
/// ```
/// use mipmodel::*;
///
/// let mut m = Model::new();
/// let x = m.add_var(VarOptions::default());
/// let y = m.add_var(VarOptions::default());
/// let rows = [ (x + y).to_linear_expr(), (2.0 * x - y + 1.0).to_linear_expr() ];
/// assert_eq!(rows[1].constant(), 1.0);
/// ```
#[derive(Clone,Debug,PartialEq)]
pub struct LinearExpr<S = f64> {
    subj     : Vec<usize>,
    cof      : Vec<S>,
    constant : S
}

impl<S> LinearExpr<S> where S : Scalar {
    /// Create an expression from data.
    ///
    /// # Arguments
    /// - `subj` Variable ids of the terms.
    /// - `cof` Coefficients of the terms. Must have the same length as `subj`, otherwise the
    ///   function panics.
    /// - `constant` The constant term.
    pub fn new(subj : Vec<usize>, cof : Vec<S>, constant : S) -> LinearExpr<S> {
        if subj.len() != cof.len() {
            panic!("Mismatching lengths of variables and coefficients");
        }
        LinearExpr{ subj, cof, constant }
    }
    /// The empty expression `0`.
    pub fn zero() -> LinearExpr<S> { LinearExpr{ subj : Vec::new(), cof : Vec::new(), constant : S::zero() } }

    /// Append a term. No merging with existing terms is done.
    pub fn push_term(& mut self, j : usize, c : S) {
        self.subj.push(j);
        self.cof.push(c);
    }

    /// Append all terms of an expression and add its constant.
    pub fn extend_from<E>(& mut self, e : &E) where E : LinearExpression<Scalar = S> {
        for (j,c) in e.terms() { self.push_term(j,c); }
        self.constant = self.constant + e.constant();
    }

    pub fn len(&self) -> usize { self.subj.len() }
    pub fn is_empty(&self) -> bool { self.subj.is_empty() }
}

impl<S> Default for LinearExpr<S> where S : Scalar {
    fn default() -> Self { LinearExpr::zero() }
}

impl<S> LinearExpression for LinearExpr<S> where S : Scalar {
    type Scalar = S;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.subj.iter().copied() }
    fn coefficients(&self) -> impl Iterator<Item = S> + '_ { self.cof.iter().copied() }
    fn constant(&self) -> S { self.constant }
}

impl<S> FromIterator<(usize,S)> for LinearExpr<S> where S : Scalar {
    fn from_iter<T: IntoIterator<Item = (usize,S)>>(iter: T) -> Self {
        let (subj,cof) = iter.into_iter().unzip();
        LinearExpr{ subj, cof, constant : S::zero() }
    }
}

impl_expr_ops!([S : Scalar,] LinearExpr<S>, S);
