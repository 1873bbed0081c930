//! HiGHS backend for `mipmodel`.
//!
//! [HighsSolver] implements [SolverBackend] on top of the `highs` crate. Continuous variables
//! become continuous columns, integer and binary variables become integer columns (binary
//! variables additionally bounded by `[0,1]`), and each constraint becomes one row.
//!
//! HiGHS does not accept a row with more than one entry for the same column, so entries for
//! the same variable within a row are summed when the row is passed on. Entries that sum to
//! zero are dropped. The model itself keeps the rows exactly as they were added.
//!
//! ```no_run
//! use mipmodel::*;
//! use mipmodel_highs::HighsSolver;
//!
//! let mut model = Model::new();
//! let x = model.add_var(VarOptions::new().upper_bound(20.0));
//! let y = model.add_var(VarOptions::new().upper_bound(12.0));
//! model.set_maximization();
//! model.add_obj(2.0 * x + 3.0 * y);
//! model.add_constraint((x + y).less_than(30.0));
//!
//! let mut solver : HighsSolver = model.build().unwrap();
//! solver.set_parameter("time_limit", 10.0);
//! assert_eq!(solver.optimize(), ReturnCode::Success);
//! println!("solution = {:?}, objective = {}", solver.get_solution(), solver.get_objective_value());
//! ```

mod error;
mod options;

use highs::{HighsModelStatus, RowProblem, Sense as HighsSense, SolvedModel};
use itertools::Itertools;
use tracing::{debug, trace, warn};

use mipmodel::{LinearConstraint, Model, ReturnCode, Sense, SolverBackend, VarCategory};

pub use error::HighsError;
use options::OptionValue;

/// Solver handle backed by HiGHS.
///
/// Options set with [SolverBackend::set_parameter] are checked against the HiGHS option table
/// when they are set, and buffered until [SolverBackend::optimize] is called. Unknown names
/// and values HiGHS does not accept are rejected by the `try_set_*` methods. An integer value
/// is accepted for an option of type double. By default all HiGHS output is suppressed, see
/// [HighsSolver::set_log_to_console].
///
/// The problem is handed over to HiGHS on the first call to `optimize`; subsequent calls return
/// the status of that solve.
pub struct HighsSolver {
    problem        : RowProblem,
    sense          : Sense,
    obj_constant   : f64,
    num_cols       : usize,
    num_rows       : usize,
    options        : Vec<(String,OptionValue)>,
    log_to_console : bool,

    solved         : Option<SolvedModel>,
    status         : Option<ReturnCode>,
}

impl HighsSolver {
    pub fn num_cols(&self) -> usize { self.num_cols }
    pub fn num_rows(&self) -> usize { self.num_rows }

    /// Enable or disable HiGHS log output to the console.
    pub fn set_log_to_console(& mut self, enabled : bool) {
        self.log_to_console = enabled;
    }

    /// Status of the last solve, if any.
    pub fn status(&self) -> Option<ReturnCode> { self.status }

    /// Primal solution values, one per variable.
    ///
    /// # Errors
    /// [HighsError::SolveRequired] if the model has not been solved.
    pub fn try_solution(&self) -> Result<Vec<f64>,HighsError> {
        let solved = self.solved.as_ref().ok_or(HighsError::SolveRequired{ operation : "solution" })?;
        Ok(solved.get_solution().columns().to_vec())
    }

    /// Objective value including the model's objective constant.
    ///
    /// # Errors
    /// [HighsError::SolveRequired] if the model has not been solved.
    pub fn try_objective_value(&self) -> Result<f64,HighsError> {
        let solved = self.solved.as_ref().ok_or(HighsError::SolveRequired{ operation : "objective_value" })?;
        Ok(solved.objective_value() + self.obj_constant)
    }

    fn push_option(& mut self, parname : &str, value : OptionValue) -> Result<(),HighsError> {
        let value = options::validate(parname, value).inspect_err(|err| {
            warn!(
                component = "solver",
                operation = "set_parameter",
                status = "rejected",
                parname,
                code = err.code(),
                "HiGHS option rejected"
            );
        })?;
        trace!(
            component = "solver",
            operation = "set_parameter",
            status = "success",
            parname,
            ?value,
            "Buffered HiGHS option"
        );
        self.options.push((parname.to_string(),value));
        Ok(())
    }
}

impl std::fmt::Debug for HighsSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighsSolver")
            .field("num_cols", &self.num_cols)
            .field("num_rows", &self.num_rows)
            .field("sense", &self.sense)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

fn check_finite(value : f64, row : Option<usize>, column : usize) -> Result<(),HighsError> {
    if value.is_finite() {
        Ok(())
    }
    else {
        warn!(
            component = "solver",
            operation = "build",
            status = "rejected",
            ?row,
            column,
            value,
            "Non-finite coefficient"
        );
        Err(HighsError::InvalidCoefficient{ row, column, value })
    }
}

impl SolverBackend for HighsSolver {
    type Error = HighsError;

    fn build(model : &Model) -> Result<HighsSolver,HighsError> {
        let mut problem = RowProblem::default();

        let cols = model.objective_coefficients().iter()
            .zip(model.lower_bounds().iter())
            .zip(model.upper_bounds().iter())
            .zip(model.var_types().iter())
            .enumerate()
            .map(|(j,(((&c,&lb),&ub),&vt))| {
                check_finite(c,None,j)?;
                Ok(match vt {
                    VarCategory::Continuous => problem.add_column(c, lb..=ub),
                    VarCategory::Integer    => problem.add_integer_column(c, lb..=ub),
                    VarCategory::Binary     => problem.add_integer_column(c, lb.max(0.0)..=ub.min(1.0)),
                })
            })
            .collect::<Result<Vec<highs::Col>,HighsError>>()?;

        let mut merged = 0usize;
        for con in model.constraints() {
            for (&j,&a) in con.subj().iter().zip(con.cof().iter()) {
                check_finite(a,Some(con.id()),j)?;
            }
            let factors : Vec<(highs::Col,f64)> = con.terms()
                .sorted_by_key(|&(j,_)| j)
                .coalesce(|(j0,a0),(j1,a1)| if j0 == j1 { Ok((j0,a0+a1)) } else { Err(((j0,a0),(j1,a1))) })
                .filter(|&(_,a)| a != 0.0)
                .map(|(j,a)| (cols[j],a))
                .collect();
            merged += con.len() - factors.len();
            problem.add_row(con.lower_bound()..=con.upper_bound(), factors);
        }

        debug!(
            component = "solver",
            operation = "build",
            status = "success",
            num_cols = cols.len(),
            num_rows = model.nb_constraints(),
            num_entries = model.nb_entries(),
            merged_entries = merged,
            "Built HiGHS problem"
        );

        Ok(HighsSolver{
            problem,
            sense          : model.sense(),
            obj_constant   : model.objective_constant(),
            num_cols       : cols.len(),
            num_rows       : model.nb_constraints(),
            options        : Vec::new(),
            log_to_console : false,
            solved         : None,
            status         : None,
        })
    }

    fn optimize(& mut self) -> ReturnCode {
        if let Some(status) = self.status {
            debug!(
                component = "solver",
                operation = "optimize",
                status = "cached",
                ?status,
                "Problem already solved"
            );
            return status;
        }
        debug!(
            component = "solver",
            operation = "optimize",
            status = "start",
            num_cols = self.num_cols,
            num_rows = self.num_rows,
            sense = ?self.sense,
            "Solving model"
        );

        let sense = match self.sense {
            Sense::Minimize => HighsSense::Minimise,
            Sense::Maximize => HighsSense::Maximise,
        };
        let problem = std::mem::take(&mut self.problem);
        let mut model = problem.optimise(sense);
        if self.log_to_console {
            model.set_option("output_flag", true);
            model.set_option("log_to_console", true);
        }
        else {
            model.make_quiet();
        }
        for (name,value) in self.options.iter() {
            match value {
                OptionValue::Bool(v)  => model.set_option(name.as_str(), *v),
                OptionValue::Int(v)   => model.set_option(name.as_str(), *v),
                OptionValue::Float(v) => model.set_option(name.as_str(), *v),
                OptionValue::Str(v)   => model.set_option(name.as_str(), v.as_str()),
            }
        }

        let status = match model.try_solve() {
            Ok(solved) => {
                let status = map_status(solved.status());
                self.solved = Some(solved);
                status
            },
            Err(err) => {
                warn!(
                    component = "solver",
                    operation = "optimize",
                    status = "error",
                    ?err,
                    "HiGHS failed to solve"
                );
                ReturnCode::Failure
            }
        };
        debug!(
            component = "solver",
            operation = "optimize",
            status = "success",
            return_code = ?status,
            "Solution status received"
        );
        self.status = Some(status);
        status
    }

    /// Solution values, or NaN for every variable if the model has not been solved.
    fn get_solution(&self) -> Vec<f64> {
        self.try_solution().unwrap_or_else(|_| vec![f64::NAN; self.num_cols])
    }

    /// Objective value including the objective constant, or NaN if the model has not been
    /// solved.
    fn get_objective_value(&self) -> f64 {
        self.try_objective_value().unwrap_or(f64::NAN)
    }

    fn try_set_double_parameter(& mut self, parname : &str, parval : f64) -> Result<(),HighsError> { self.push_option(parname,OptionValue::Float(parval)) }
    fn try_set_int_parameter(& mut self, parname : &str, parval : i32) -> Result<(),HighsError> { self.push_option(parname,OptionValue::Int(parval)) }
    fn try_set_bool_parameter(& mut self, parname : &str, parval : bool) -> Result<(),HighsError> { self.push_option(parname,OptionValue::Bool(parval)) }
    fn try_set_str_parameter(& mut self, parname : &str, parval : &str) -> Result<(),HighsError> { self.push_option(parname,OptionValue::Str(parval.to_string())) }
}

fn map_status(status : HighsModelStatus) -> ReturnCode {
    match status {
        HighsModelStatus::Optimal               => ReturnCode::Success,
        // no columns: the objective constant is optimal
        HighsModelStatus::ModelEmpty            => ReturnCode::Success,
        HighsModelStatus::Infeasible            => ReturnCode::Infeasible,
        HighsModelStatus::Unbounded             => ReturnCode::Unbounded,
        HighsModelStatus::UnboundedOrInfeasible => ReturnCode::InfeasibleOrUnbounded,
        HighsModelStatus::ReachedTimeLimit |
        HighsModelStatus::ReachedIterationLimit |
        HighsModelStatus::ObjectiveBound |
        HighsModelStatus::ObjectiveTarget       => ReturnCode::Interrupted,
        _ => ReturnCode::Failure,
    }
}
