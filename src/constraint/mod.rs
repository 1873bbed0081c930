//! Linear constraints.
//!
//! A constraint is a linear expression with a lower and an upper bound, `lb <= e <= ub`, where
//! either bound may be infinite. Constraints are created from expressions with
//! [LinearExpression::less_than], [LinearExpression::greater_than],
//! [LinearExpression::equal_to] and [LinearExpression::in_range], or by chaining the bound
//! methods of [BoundedConstraint]. The bounds absorb the constant of the expression, so the
//! terms that end up in the model are constant-free:
//! ```
//! use mipmodel::*;
//!
//! let mut m = Model::new();
//! let x = m.add_var(VarOptions::default());
//! let y = m.add_var(VarOptions::default());
//!
//! // 1 <= x + y + 2 <= 8  is stored as  -1 <= x + y <= 6
//! let c = (x + y + 2.0).greater_than(1.0).less_than(8.0);
//! assert_eq!(c.lower_bound(), -1.0);
//! assert_eq!(c.upper_bound(), 6.0);
//! ```

use itertools::Itertools;
use num_traits::Float;

use crate::expr::{LinearExpression, Scalar};

/// Something that can be added to a [crate::Model] as a constraint row: a sequence of terms
/// and two bounds.
pub trait LinearConstraint {
    type Scalar : Scalar;

    fn variables(&self) -> impl Iterator<Item = usize> + '_;
    fn coefficients(&self) -> impl Iterator<Item = Self::Scalar> + '_;
    fn lower_bound(&self) -> Self::Scalar;
    fn upper_bound(&self) -> Self::Scalar;

    /// Iterate `(variable id, coefficient)` pairs.
    fn terms(&self) -> impl Iterator<Item = (usize,Self::Scalar)> + '_ {
        self.variables().zip_eq(self.coefficients())
    }
}

/// An expression with bounds. The bounds are stored relative to the constant-free part of the
/// expression, i.e. `lb <= e <= ub` is stored with bounds `lb - e.constant()` and
/// `ub - e.constant()`.
///
/// No check is done that the lower bound does not exceed the upper bound; such a constraint is
/// passed on as is and will be reported as infeasible by the solver.
#[derive(Clone,Copy,Debug)]
pub struct BoundedConstraint<E : LinearExpression> {
    expr  : E,
    lower : E::Scalar,
    upper : E::Scalar
}

impl<E> BoundedConstraint<E> where E : LinearExpression {
    /// The constraint `-inf <= e <= inf`.
    pub fn unbounded(expr : E) -> BoundedConstraint<E> {
        BoundedConstraint{
            expr,
            lower : <E::Scalar as Float>::neg_infinity(),
            upper : <E::Scalar as Float>::infinity()
        }
    }

    /// Set the upper bound, `e <= ub`.
    pub fn less_than(self, ub : E::Scalar) -> BoundedConstraint<E> {
        let upper = ub - self.expr.constant();
        BoundedConstraint{ upper, ..self }
    }
    /// Set the lower bound, `e >= lb`.
    pub fn greater_than(self, lb : E::Scalar) -> BoundedConstraint<E> {
        let lower = lb - self.expr.constant();
        BoundedConstraint{ lower, ..self }
    }
    /// Set both bounds, `e == value`.
    pub fn equal_to(self, value : E::Scalar) -> BoundedConstraint<E> {
        self.greater_than(value).less_than(value)
    }

    /// The underlying expression, including its constant.
    pub fn expression(&self) -> &E { &self.expr }
}

impl<E> LinearConstraint for BoundedConstraint<E> where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.expr.variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ { self.expr.coefficients() }
    fn lower_bound(&self) -> E::Scalar { self.lower }
    fn upper_bound(&self) -> E::Scalar { self.upper }
}

/// A bound without an expression, created by [less_than], [greater_than], [equal_to] or
/// [in_range] and attached to an expression with [constraint].
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Bound<S> {
    LessThan(S),
    GreaterThan(S),
    EqualTo(S),
    InRange(S,S)
}

/// `e <= ub`
pub fn less_than<S : Scalar>(ub : S) -> Bound<S> { Bound::LessThan(ub) }
/// `e >= lb`
pub fn greater_than<S : Scalar>(lb : S) -> Bound<S> { Bound::GreaterThan(lb) }
/// `e == value`
pub fn equal_to<S : Scalar>(value : S) -> Bound<S> { Bound::EqualTo(value) }
/// `lb <= e <= ub`
pub fn in_range<S : Scalar>(lb : S, ub : S) -> Bound<S> { Bound::InRange(lb,ub) }

/// Attach a bound to an expression.
///
/// ```
/// use mipmodel::*;
///
/// let mut m = Model::new();
/// let x = m.add_vars(3, |i : usize| i);
/// let c = constraint(xsum(0..3, &x) + 1.0, in_range(0.0, 2.0));
/// assert_eq!((c.lower_bound(), c.upper_bound()), (-1.0, 1.0));
/// ```
pub fn constraint<E>(expr : E, bound : Bound<E::Scalar>) -> BoundedConstraint<E> where E : LinearExpression {
    let c = BoundedConstraint::unbounded(expr);
    match bound {
        Bound::LessThan(ub)    => c.less_than(ub),
        Bound::GreaterThan(lb) => c.greater_than(lb),
        Bound::EqualTo(v)      => c.equal_to(v),
        Bound::InRange(lb,ub)  => c.greater_than(lb).less_than(ub)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::variable::Variable;

    #[test]
    fn one_sided_bounds() {
        let x : Variable = Variable::new(0);
        let y : Variable = Variable::new(1);

        let c = (x + y + 3.0).less_than(10.0);
        assert_eq!(c.lower_bound(), f64::NEG_INFINITY);
        assert_eq!(c.upper_bound(), 7.0);

        let c = (x - 2.0).greater_than(1.0);
        assert_eq!(c.lower_bound(), -1.0);
        assert_eq!(c.upper_bound(), f64::INFINITY);
    }

    #[test]
    fn two_sided_bounds() {
        let x : Variable = Variable::new(0);
        let c = (2.0 * x + 1.0).equal_to(5.0);
        assert_eq!((c.lower_bound(),c.upper_bound()), (4.0,4.0));

        let c = x.in_range(-1.0,1.0);
        assert_eq!((c.lower_bound(),c.upper_bound()), (-1.0,1.0));
        assert_eq!(c.terms().collect::<Vec<(usize,f64)>>(), vec![(0,1.0)]);
        assert_eq!(c.expression().constant(), 0.0);
    }

    #[test]
    fn crossing_bounds_are_accepted() {
        let x : Variable = Variable::new(0);
        let c = x.greater_than(5.0).less_than(1.0);
        assert!(c.lower_bound() > c.upper_bound());
    }

    #[test]
    fn free_function_bounds() {
        let x : Variable = Variable::new(0);
        let y : Variable = Variable::new(1);
        let c = constraint(x - y + 1.0, less_than(4.0));
        assert_eq!((c.lower_bound(),c.upper_bound()), (f64::NEG_INFINITY,3.0));
        let c = constraint(x - y + 1.0, greater_than(4.0));
        assert_eq!((c.lower_bound(),c.upper_bound()), (3.0,f64::INFINITY));
        let c = constraint(x - y + 1.0, equal_to(0.0));
        assert_eq!((c.lower_bound(),c.upper_bound()), (-1.0,-1.0));
        let c = constraint(x - y + 1.0, in_range(0.0,2.0));
        assert_eq!((c.lower_bound(),c.upper_bound()), (-1.0,1.0));
        assert_eq!(c.coefficients().collect::<Vec<f64>>(), vec![1.0,-1.0]);
    }
}
