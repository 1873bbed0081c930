use super::{impl_expr_ops, LinearExpression};

/// `c * item`. Each coefficient and the constant are scaled by `c`.
#[derive(Clone,Copy,Debug)]
pub struct ExprScalarMul<E : LinearExpression> {
    item : E,
    c    : E::Scalar
}

impl<E> ExprScalarMul<E> where E : LinearExpression {
    pub fn new(item : E, c : E::Scalar) -> ExprScalarMul<E> { ExprScalarMul{ item, c } }
}

impl<E> LinearExpression for ExprScalarMul<E> where E : LinearExpression {
    type Scalar = E::Scalar;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.item.variables() }
    fn coefficients(&self) -> impl Iterator<Item = E::Scalar> + '_ {
        let c = self.c;
        self.item.coefficients().map(move |v| c * v)
    }
    fn constant(&self) -> E::Scalar { self.c * self.item.constant() }
}

impl_expr_ops!([E : LinearExpression,] ExprScalarMul<E>, E::Scalar);

#[cfg(test)]
mod test {
    use crate::expr::LinearExpression;
    use crate::variable::Variable;

    #[test]
    fn scales_coefficients_and_constant() {
        let x : Variable = Variable::new(0);
        let y : Variable = Variable::new(1);
        let e = 2.0 * (x - y + 1.5);
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![0,1]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![2.0,-2.0]);
        assert_eq!(e.constant(), 3.0);

        let e = 3.0 * (2.0 * x) * -1.0;
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![-6.0]);
    }

    #[test]
    fn zero_scale_keeps_terms() {
        let x : Variable = Variable::new(4);
        let e = 0.0 * x;
        assert_eq!(e.variables().collect::<Vec<usize>>(), vec![4]);
        assert_eq!(e.coefficients().collect::<Vec<f64>>(), vec![0.0]);
    }
}
