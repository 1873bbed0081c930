use super::{impl_expr_ops, LinearExpression};

/// `lhs + rhs`. Terms of `lhs` are traversed first, then terms of `rhs`.
#[derive(Clone,Copy,Debug)]
pub struct ExprAdd<L,R> {
    lhs : L,
    rhs : R
}

/// `lhs - rhs`. Terms of `lhs` are traversed first, then the negated terms of `rhs`.
///
/// The constants of both operands are added, as for [ExprAdd]; only the terms of `rhs` are
/// negated. A bare scalar on the right is no exception, so `x - 1.0` has constant `1.0`.
#[derive(Clone,Copy,Debug)]
pub struct ExprSub<L,R> {
    lhs : L,
    rhs : R
}

/// `-item`
#[derive(Clone,Copy,Debug)]
pub struct ExprNeg<E> {
    item : E
}

/// `item + c`
#[derive(Clone,Copy,Debug)]
pub struct ExprScalarAdd<E : LinearExpression> {
    item : E,
    c    : E::Scalar
}

/// `c - item`. The terms of `item` are negated, the constant is `item.constant() + c`.
#[derive(Clone,Copy,Debug)]
pub struct ExprScalarRsub<E : LinearExpression> {
    item : E,
    c    : E::Scalar
}

impl<L,R> ExprAdd<L,R> where L : LinearExpression, R : LinearExpression<Scalar = L::Scalar> {
    pub fn new(lhs : L, rhs : R) -> ExprAdd<L,R> { ExprAdd{ lhs, rhs } }
}
impl<L,R> ExprSub<L,R> where L : LinearExpression, R : LinearExpression<Scalar = L::Scalar> {
    pub fn new(lhs : L, rhs : R) -> ExprSub<L,R> { ExprSub{ lhs, rhs } }
}
impl<E> ExprNeg<E> where E : LinearExpression {
    pub fn new(item : E) -> ExprNeg<E> { ExprNeg{ item } }
}
impl<E> ExprScalarAdd<E> where E : LinearExpression {
    pub fn new(item : E, c : E::Scalar) -> ExprScalarAdd<E> { ExprScalarAdd{ item, c } }
}
impl<E> ExprScalarRsub<E> where E : LinearExpression {
    pub fn new(item : E, c : E::Scalar) -> ExprScalarRsub<E> { ExprScalarRsub{ item, c } }
}

impl<L,R> LinearExpression for ExprAdd<L,R> where L : LinearExpression, R : LinearExpression<Scalar = L::Scalar> {
    type Scalar = L::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.lhs.variables().chain(self.rhs.variables())
    }
    fn coefficients(&self) -> impl Iterator<Item = L::Scalar> + '_ {
        self.lhs.coefficients().chain(self.rhs.coefficients())
    }
    fn constant(&self) -> L::Scalar { self.lhs.constant() + self.rhs.constant() }
}

impl<L,R> LinearExpression for ExprSub<L,R> where L : LinearExpression, R : LinearExpression<Scalar = L::Scalar> {
    type Scalar = L::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.lhs.variables().chain(self.rhs.variables())
    }
    fn coefficients(&self) -> impl Iterator<Item = L::Scalar> + '_ {
        self.lhs.coefficients().chain(self.rhs.coefficients().map(|c| -c))
    }
    fn constant(&self) -> L::Scalar { self.lhs.constant() + self.rhs.constant() }
}

impl<E> LinearExpression for ExprNeg<E> where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.item.variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ { self.item.coefficients().map(|c| -c) }
    fn constant(&self) -> E::Scalar { -self.item.constant() }
}

impl<E> LinearExpression for ExprScalarAdd<E> where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.item.variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ { self.item.coefficients() }
    fn constant(&self) -> E::Scalar { self.item.constant() + self.c }
}

impl<E> LinearExpression for ExprScalarRsub<E> where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.item.variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ { self.item.coefficients().map(|c| -c) }
    fn constant(&self) -> E::Scalar { self.item.constant() + self.c }
}

impl_expr_ops!([L : LinearExpression, R : LinearExpression<Scalar = L::Scalar>,] ExprAdd<L,R>, L::Scalar);
impl_expr_ops!([L : LinearExpression, R : LinearExpression<Scalar = L::Scalar>,] ExprSub<L,R>, L::Scalar);
impl_expr_ops!([E : LinearExpression,] ExprNeg<E>, E::Scalar);
impl_expr_ops!([E : LinearExpression,] ExprScalarAdd<E>, E::Scalar);
impl_expr_ops!([E : LinearExpression,] ExprScalarRsub<E>, E::Scalar);

#[cfg(test)]
mod test {
    use crate::expr::LinearExpression;
    use crate::variable::Variable;

    #[test]
    fn add_concatenates() {
        let x : Variable = Variable::new(3);
        let y : Variable = Variable::new(1);
        let e = (x + 1.0) + (y + 2.0);
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![3,1]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![1.0,1.0]);
        assert_eq!(e.constant(), 3.0);
    }

    #[test]
    fn sub_negates_right_operand() {
        let x : Variable = Variable::new(0);
        let y : Variable = Variable::new(1);
        let e = (x + 1.0) - (2.0 * y + 5.0);
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![0,1]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![1.0,-2.0]);
        assert_eq!(e.constant(), 6.0);
    }

    #[test]
    fn neg_negates_everything() {
        let x : Variable = Variable::new(0);
        let e = -(x + 3.0);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![-1.0]);
        assert_eq!(e.constant(), -3.0);
        let e = -(-x);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![1.0]);
    }

    #[test]
    fn scalar_combinators() {
        let x : Variable = Variable::new(0);
        let e = x.scalar_add(2.0).scalar_rsub(10.0);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![-1.0]);
        assert_eq!(e.constant(), 12.0);
        let e = x.plus(x).minus(x.negate());
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![0,0,0]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![1.0,1.0,1.0]);
    }
}
