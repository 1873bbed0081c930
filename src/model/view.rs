//! Read-only views into model storage.

use crate::constraint::LinearConstraint;
use crate::expr::LinearExpression;

/// A stored constraint: the row's slice of the model's entry arrays and its bounds.
///
/// The entries are exactly those produced by the defining expression, in the same order,
/// including repeated variable ids and zero coefficients.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct ConstraintView<'a> {
    pub(super) id   : usize,
    pub(super) subj : &'a [usize],
    pub(super) cof  : &'a [f64],
    pub(super) lb   : f64,
    pub(super) ub   : f64,
}

impl<'a> ConstraintView<'a> {
    /// Constraint id
    pub fn id(&self) -> usize { self.id }
    /// Variable ids of the row entries.
    pub fn subj(&self) -> &'a [usize] { self.subj }
    /// Coefficients of the row entries.
    pub fn cof(&self) -> &'a [f64] { self.cof }
    /// Number of entries in the row.
    pub fn len(&self) -> usize { self.subj.len() }
    pub fn is_empty(&self) -> bool { self.subj.is_empty() }
}

impl LinearConstraint for ConstraintView<'_> {
    type Scalar = f64;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ { self.subj.iter().copied() }
    fn coefficients(&self) -> impl Iterator<Item = f64> + '_ { self.cof.iter().copied() }
    fn lower_bound(&self) -> f64 { self.lb }
    fn upper_bound(&self) -> f64 { self.ub }
}

/// The aggregated objective as an expression. Only variables with a nonzero objective
/// coefficient are listed, in increasing id order.
#[derive(Clone,Copy,Debug)]
pub struct ObjectiveView<'a> {
    pub(super) cof      : &'a [f64],
    pub(super) constant : f64,
}

impl LinearExpression for ObjectiveView<'_> {
    type Scalar = f64;
    fn variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.cof.iter().enumerate().filter(|(_,c)| **c != 0.0).map(|(j,_)| j)
    }
    fn coefficients(&self) -> impl Iterator<Item = f64> + '_ {
        self.cof.iter().copied().filter(|c| *c != 0.0)
    }
    fn constant(&self) -> f64 { self.constant }
}
