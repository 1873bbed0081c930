//! Boundary between a [Model] and an optimization engine.
//!
//! A solver backend is constructed from the assembled model data by [Model::build]. It reads
//! the model through its public query operations only:
//! - Variable data: [Model::objective_coefficients], [Model::lower_bounds],
//!   [Model::upper_bounds], [Model::var_types].
//! - Objective: [Model::sense], [Model::objective_constant].
//! - Constraint rows: [Model::constraints].

use crate::model::Model;

/// Result of [SolverBackend::optimize].
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum ReturnCode {
    /// An optimal solution was found.
    Success,
    Infeasible,
    Unbounded,
    /// The problem is either infeasible or unbounded; the solver did not decide which.
    InfeasibleOrUnbounded,
    /// The solver stopped before finishing, e.g. on a time or iteration limit.
    Interrupted,
    /// Any other outcome, including solver errors.
    Failure
}

impl ReturnCode {
    pub fn is_success(&self) -> bool { matches!(self, ReturnCode::Success) }
}

/// An optimization engine.
pub trait SolverBackend : Sized {
    type Error : std::error::Error;

    /// Construct the solver from model data.
    fn build(model : &Model) -> Result<Self,Self::Error>;

    /// Solve the problem.
    fn optimize(& mut self) -> ReturnCode;

    /// Primal solution, one value per variable id. The result is only meaningful after
    /// [SolverBackend::optimize] returned [ReturnCode::Success].
    fn get_solution(&self) -> Vec<f64>;

    /// Objective value of the solution, including the objective constant.
    fn get_objective_value(&self) -> f64;

    fn try_set_double_parameter(& mut self, parname : &str, parval : f64) -> Result<(),Self::Error>;
    fn try_set_int_parameter(& mut self, parname : &str, parval : i32) -> Result<(),Self::Error>;
    fn try_set_bool_parameter(& mut self, parname : &str, parval : bool) -> Result<(),Self::Error>;
    fn try_set_str_parameter(& mut self, parname : &str, parval : &str) -> Result<(),Self::Error>;

    /// Set a solver parameter. The parameter type is picked from the value type, see
    /// [SolverParameterValue].
    ///
    /// # Arguments
    /// - `parname` Solver specific parameter name.
    /// - `parval` Parameter value.
    fn try_set_parameter<T>(& mut self, parname : &str, parval : T) -> Result<(),Self::Error> where T : SolverParameterValue<Self> {
        parval.set(parname,self)
    }

    /// Set a solver parameter. See [SolverBackend::try_set_parameter].
    ///
    /// Panics if the parameter is rejected.
    fn set_parameter<T>(& mut self, parname : &str, parval : T) where T : SolverParameterValue<Self> {
        if let Err(e) = self.try_set_parameter(parname,parval) {
            panic!("Failed to set parameter {}: {}",parname,e);
        }
    }
}

/// A value that can be used as a solver parameter value.
pub trait SolverParameterValue<B : SolverBackend> {
    fn set(self, parname : &str, solver : & mut B) -> Result<(),B::Error>;
}

impl<B : SolverBackend> SolverParameterValue<B> for f64 {
    fn set(self, parname : &str, solver : & mut B) -> Result<(),B::Error> { solver.try_set_double_parameter(parname,self) }
}

impl<B : SolverBackend> SolverParameterValue<B> for i32 {
    fn set(self, parname : &str, solver : & mut B) -> Result<(),B::Error> { solver.try_set_int_parameter(parname,self) }
}

impl<B : SolverBackend> SolverParameterValue<B> for bool {
    fn set(self, parname : &str, solver : & mut B) -> Result<(),B::Error> { solver.try_set_bool_parameter(parname,self) }
}

impl<B : SolverBackend> SolverParameterValue<B> for &str {
    fn set(self, parname : &str, solver : & mut B) -> Result<(),B::Error> { solver.try_set_str_parameter(parname,self) }
}
