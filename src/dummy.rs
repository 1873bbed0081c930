//! This module implements a dummy backend that takes a copy of the model data, but has no
//! support for solving. It shows exactly what a solver receives from [Model::build].
use std::convert::Infallible;

use crate::model::{Model, Sense};
use crate::solver::{ReturnCode, SolverBackend};
use crate::variable::VarCategory;
use crate::constraint::LinearConstraint;

/// A parameter value recorded by [DummySolver].
#[derive(Clone,Debug,PartialEq)]
pub enum ParameterValue {
    Double(f64),
    Int(i32),
    Bool(bool),
    Str(String)
}

/// Data-only backend. The constraint matrix is stored row-major: the entries of row `i` are
/// `a_subj[a_ptr[i][0]..a_ptr[i][1]]` and `a_cof[a_ptr[i][0]..a_ptr[i][1]]`, in the order they
/// were stored in the model.
///
/// [SolverBackend::optimize] always returns [ReturnCode::Failure].
#[derive(Clone,Debug,Default)]
pub struct DummySolver {
    sense        : Sense,
    c            : Vec<f64>,
    c_fix        : f64,
    var_lb       : Vec<f64>,
    var_ub       : Vec<f64>,
    var_type     : Vec<VarCategory>,

    a_ptr        : Vec<[usize;2]>,
    a_subj       : Vec<usize>,
    a_cof        : Vec<f64>,
    con_lb       : Vec<f64>,
    con_ub       : Vec<f64>,

    parameters   : Vec<(String,ParameterValue)>,
}

impl DummySolver {
    pub fn num_cols(&self) -> usize { self.c.len() }
    pub fn num_rows(&self) -> usize { self.a_ptr.len() }
    pub fn sense(&self) -> Sense { self.sense }
    /// Objective coefficients and constant.
    pub fn objective(&self) -> (&[f64],f64) { (self.c.as_slice(),self.c_fix) }
    /// Column bounds.
    pub fn col_bounds(&self) -> (&[f64],&[f64]) { (self.var_lb.as_slice(),self.var_ub.as_slice()) }
    pub fn col_types(&self) -> &[VarCategory] { self.var_type.as_slice() }
    /// Row bounds.
    pub fn row_bounds(&self) -> (&[f64],&[f64]) { (self.con_lb.as_slice(),self.con_ub.as_slice()) }
    /// Entries of row `i`.
    pub fn row(&self, i : usize) -> (&[usize],&[f64]) {
        let [b,e] = self.a_ptr[i];
        (&self.a_subj[b..e],&self.a_cof[b..e])
    }
    /// Row-major matrix `(ptr,subj,cof)` where `ptr` has one element more than the number of
    /// rows.
    pub fn matrix(&self) -> (Vec<usize>,&[usize],&[f64]) {
        let ptr = std::iter::once(0).chain(self.a_ptr.iter().map(|p| p[1])).collect();
        (ptr,self.a_subj.as_slice(),self.a_cof.as_slice())
    }
    /// Parameters set on the backend, in the order they were set.
    pub fn parameters(&self) -> &[(String,ParameterValue)] { self.parameters.as_slice() }

    fn record(& mut self, parname : &str, value : ParameterValue) -> Result<(),Infallible> {
        self.parameters.push((parname.to_string(),value));
        Ok(())
    }
}

impl SolverBackend for DummySolver {
    type Error = Infallible;

    fn build(model : &Model) -> Result<DummySolver,Infallible> {
        let mut a_ptr  = Vec::with_capacity(model.nb_constraints());
        let mut a_subj = Vec::with_capacity(model.nb_entries());
        let mut a_cof  = Vec::with_capacity(model.nb_entries());
        let mut con_lb = Vec::with_capacity(model.nb_constraints());
        let mut con_ub = Vec::with_capacity(model.nb_constraints());

        for con in model.constraints() {
            let b = a_subj.len();
            a_subj.extend_from_slice(con.subj());
            a_cof.extend_from_slice(con.cof());
            a_ptr.push([b,a_subj.len()]);
            con_lb.push(con.lower_bound());
            con_ub.push(con.upper_bound());
        }

        Ok(DummySolver{
            sense    : model.sense(),
            c        : model.objective_coefficients().to_vec(),
            c_fix    : model.objective_constant(),
            var_lb   : model.lower_bounds().to_vec(),
            var_ub   : model.upper_bounds().to_vec(),
            var_type : model.var_types().to_vec(),
            a_ptr,
            a_subj,
            a_cof,
            con_lb,
            con_ub,
            parameters : Vec::new(),
        })
    }

    fn optimize(& mut self) -> ReturnCode {
        tracing::debug!(
            component = "dummy",
            operation = "optimize",
            status = "unsupported",
            "Dummy backend cannot solve"
        );
        ReturnCode::Failure
    }

    fn get_solution(&self) -> Vec<f64> { vec![f64::NAN; self.c.len()] }
    fn get_objective_value(&self) -> f64 { f64::NAN }

    fn try_set_double_parameter(& mut self, parname : &str, parval : f64) -> Result<(),Infallible> { self.record(parname,ParameterValue::Double(parval)) }
    fn try_set_int_parameter(& mut self, parname : &str, parval : i32) -> Result<(),Infallible> { self.record(parname,ParameterValue::Int(parval)) }
    fn try_set_bool_parameter(& mut self, parname : &str, parval : bool) -> Result<(),Infallible> { self.record(parname,ParameterValue::Bool(parval)) }
    fn try_set_str_parameter(& mut self, parname : &str, parval : &str) -> Result<(),Infallible> { self.record(parname,ParameterValue::Str(parval.to_string())) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::LinearExpression;
    use crate::variable::VarOptions;

    #[test]
    fn copies_model_verbatim() {
        let mut m = Model::new();
        let x = m.add_var(VarOptions::new().upper_bound(4.0));
        let y = m.add_var(VarOptions::new().binary());
        m.add_obj(x + 2.0 * y + 1.0);
        m.add_constraint((x + y + x).less_than(3.0));
        m.add_constraint(y.greater_than(0.5));
        m.set_maximization();

        let s : DummySolver = m.build().unwrap();
        assert_eq!(s.num_cols(), 2);
        assert_eq!(s.num_rows(), 2);
        assert_eq!(s.sense(), Sense::Maximize);
        assert_eq!(s.objective(), (&[1.0,2.0][..],1.0));
        assert_eq!(s.col_types(), &[VarCategory::Continuous,VarCategory::Binary]);
        assert_eq!(s.row(0), (&[0,1,0][..],&[1.0,1.0,1.0][..]));
        let (ptr,subj,_) = s.matrix();
        assert_eq!(ptr, vec![0,3,4]);
        assert_eq!(subj, &[0,1,0,1]);
        assert_eq!(s.row_bounds().0[1], 0.5);
        assert_eq!(s.col_bounds().1[0], 4.0);
    }

    #[test]
    fn records_parameters_and_never_solves() {
        let m = Model::new();
        let mut s : DummySolver = m.build().unwrap();
        s.set_parameter("time_limit", 10.0);
        s.set_parameter("threads", 2);
        s.set_parameter("presolve", "off");
        s.set_parameter("mip_detect_symmetry", false);
        assert_eq!(s.parameters()[1], ("threads".to_string(),ParameterValue::Int(2)));
        assert_eq!(s.parameters().len(), 4);
        assert_eq!(s.optimize(), ReturnCode::Failure);
        assert!(s.get_objective_value().is_nan());
        assert!(s.get_solution().is_empty());
    }

    #[test]
    fn unaggregated_objective_view_is_not_affected() {
        let mut m = Model::new();
        let x = m.add_var(VarOptions::default());
        m.add_obj(x - x);
        let s : DummySolver = m.build().unwrap();
        assert_eq!(s.objective().0, &[0.0]);
        assert_eq!(m.objective().variables().count(), 0);
    }
}
