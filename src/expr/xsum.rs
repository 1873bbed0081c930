use super::{impl_expr_ops, LinearExpression, Scalar};
use crate::variable::Variable;

/// Lazy sum over an index range, see [xsum] and [xsum_with].
#[derive(Clone,Copy,Debug)]
pub struct XSum<I,F,C> {
    range    : I,
    accessor : F,
    coef     : C
}

fn unit_coefficient<T,S : Scalar>(_ : T) -> S { S::one() }

/// Sum `accessor(i)` for all `i` in `range`, in range order.
///
/// The range must be restartable (its iterator must implement `Clone`), since the terms are
/// produced anew each time the expression is traversed.
///
/// ```
/// use mipmodel::*;
///
/// let mut m = Model::new();
/// let x = m.add_vars(5, |i : usize| 4 - i);
/// let e = xsum(0..4, &x);
/// assert_eq!(e.variables().collect::<Vec<usize>>(), vec![4,3,2,1]);
/// ```
pub fn xsum<R,F,S>(range : R, accessor : F) -> XSum<R::IntoIter,F,fn(R::Item) -> S>
    where
        R : IntoIterator,
        R::IntoIter : Clone,
        F : Fn(R::Item) -> Variable<S>,
        S : Scalar
{
    XSum{ range : range.into_iter(), accessor, coef : unit_coefficient::<R::Item,S> }
}

/// Sum `coef(i) * accessor(i)` for all `i` in `range`, in range order.
///
/// ```
/// use mipmodel::*;
///
/// let mut m = Model::new();
/// let x = m.add_vars(3, |i : usize| i);
/// let e = xsum_with(0..3, &x, |i| 2.0 * i as f64);
/// assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![0.0,2.0,4.0]);
/// ```
pub fn xsum_with<R,F,C,S>(range : R, accessor : F, coef : C) -> XSum<R::IntoIter,F,C>
    where
        R : IntoIterator,
        R::IntoIter : Clone,
        F : Fn(R::Item) -> Variable<S>,
        C : Fn(R::Item) -> S,
        S : Scalar
{
    XSum{ range : range.into_iter(), accessor, coef }
}

impl<I,F,C,S> LinearExpression for XSum<I,F,C>
    where
        I : Iterator + Clone,
        F : Fn(I::Item) -> Variable<S>,
        C : Fn(I::Item) -> S,
        S : Scalar
{
    type Scalar = S;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.range.clone().map(|i| (self.accessor)(i).id())
    }
    fn coefficients(&self) -> impl Iterator<Item = S> + '_ {
        self.range.clone().map(|i| (self.coef)(i))
    }
    fn constant(&self) -> S { S::zero() }
}

impl_expr_ops!([I : Iterator + Clone, F : Fn(I::Item) -> Variable<S>, C : Fn(I::Item) -> S, S : Scalar,] XSum<I,F,C>, S);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pairs_accessor_with_coefficient() {
        let x = |i : usize| Variable::<f64>::new(10 + i);
        let e = xsum_with(0..3, x, |i| (i + 1) as f64);
        assert_eq!(e.terms().collect::<Vec<(usize,f64)>>(), vec![(10,1.0),(11,2.0),(12,3.0)]);
        assert_eq!(e.constant(), 0.0);
    }

    #[test]
    fn composes_with_other_expressions() {
        let x = |i : usize| Variable::<f64>::new(i);
        let y : Variable = Variable::new(9);
        let e = y - 2.0 * xsum(0..2, x) + 1.0;
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![9,0,1]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![1.0,-2.0,-2.0]);
        assert_eq!(e.constant(), 1.0);
    }

    #[test]
    fn works_over_arbitrary_indexes() {
        let grid = |(i,j) : (usize,usize)| Variable::<f64>::new(3 * i + j);
        let diag = [(0,0),(1,1),(2,2)];
        let e = xsum(diag.iter().copied(), grid);
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![0,4,8]);
        assert_eq!(e.variables().count(), 3);
    }

    #[test]
    fn empty_range() {
        let x = |i : usize| Variable::<f64>::new(i);
        let e = xsum(0..0, x);
        assert_eq!(e.variables().count(), 0);
        assert_eq!(e.coefficients().count(), 0);
    }
}
