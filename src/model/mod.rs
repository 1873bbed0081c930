//! The [Model] object.
//!
//! A model owns all problem data:
//! - Variable attributes (objective coefficient, bounds, category), one entry per variable id.
//! - The objective, stored densely by variable id. Each [Model::add_obj] accumulates its terms
//!   into it, so repeated variables are summed.
//! - The constraint matrix, stored row by row. Each row is a slice `[start,end)` of the global
//!   entry arrays plus two bounds. Rows are stored exactly as the defining expression produced
//!   them, so a variable occurring twice in a constraint expression gives two entries.
//!
//! Expressions are flattened into the model storage immediately when added, and the model
//! holds no reference to them afterwards.

use crate::constraint::LinearConstraint;
use crate::expr::LinearExpression;
use crate::solver::SolverBackend;
use crate::variable::{VarCategory, VarOptions, Variable};

mod error;
mod view;

pub use error::ModelError;
pub use view::{ConstraintView, ObjectiveView};

/// Objective sense
#[derive(Clone,Copy,Debug,PartialEq,Eq,Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize
}

/// Linear or mixed integer linear optimization model.
///
/// # Example
/// ```
/// use mipmodel::*;
///
/// let mut model = Model::new();
/// let x = model.add_var(VarOptions{ upper_bound : 20.0, ..Default::default() });
/// let y = model.add_var(VarOptions{ upper_bound : 12.0, ..Default::default() });
///
/// model.set_maximization();
/// model.add_obj(2.0 * x + 3.0 * y);
/// let c = model.add_constraint((x + y).less_than(30.0));
///
/// assert_eq!(model.nb_variables(), 2);
/// assert_eq!(model.constraint(c).upper_bound(), 30.0);
/// ```
#[derive(Clone,Debug,Default)]
pub struct Model {
    var_obj      : Vec<f64>,
    var_lb       : Vec<f64>,
    var_ub       : Vec<f64>,
    var_type     : Vec<VarCategory>,
    obj_constant : f64,
    sense        : Sense,

    con_ptr      : Vec<[usize;2]>,
    con_lb       : Vec<f64>,
    con_ub       : Vec<f64>,
    a_subj       : Vec<usize>,
    a_cof        : Vec<f64>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Model { Default::default() }

    ////////////////////////////////////////////////////////////
    // Variables

    /// Add a single variable.
    ///
    /// # Arguments
    /// - `options` Variable attributes, see [VarOptions].
    ///
    /// # Returns
    /// The new variable. Its id is the number of variables in the model before the call.
    pub fn add_var(& mut self, options : VarOptions) -> Variable {
        let id = self.var_obj.len();
        self.var_obj.push(options.obj_coef);
        self.var_lb.push(options.lower_bound);
        self.var_ub.push(options.upper_bound);
        self.var_type.push(options.var_type);
        tracing::trace!(
            component = "model",
            operation = "add_var",
            status = "success",
            variable_id = id,
            var_type = ?options.var_type,
            "Added variable"
        );
        Variable::new(id)
    }

    /// Add a block of variables with default attributes.
    ///
    /// The variables get consecutive ids. They are addressed through the returned accessor,
    /// which maps a logical index `i` to the variable with id `first + index_to_id(i)`, where
    /// `first` is the id of the first variable in the block. This allows addressing a block in
    /// another order, or by a multi-dimensional index.
    ///
    /// # Arguments
    /// - `count` Number of variables to add.
    /// - `index_to_id` Map from logical index to offset in the block. The accessor panics if the
    ///   offset is not less than `count`.
    ///
    /// # Example
    /// ```
    /// use mipmodel::*;
    ///
    /// let mut model = Model::new();
    /// // a 2x3 grid stored row-major
    /// let x = model.add_vars(6, |(i,j) : (usize,usize)| 3 * i + j);
    /// assert_eq!(x((1,2)).id(), 5);
    /// assert_eq!(model.nb_variables(), 6);
    /// ```
    pub fn add_vars<I,F>(& mut self, count : usize, index_to_id : F) -> impl Fn(I) -> Variable + Clone
        where
            F : Fn(I) -> usize + Clone
    {
        let first = self.var_obj.len();
        let defaults = VarOptions::default();
        self.var_obj.resize(first + count, defaults.obj_coef);
        self.var_lb.resize(first + count, defaults.lower_bound);
        self.var_ub.resize(first + count, defaults.upper_bound);
        self.var_type.resize(first + count, defaults.var_type);
        tracing::trace!(
            component = "model",
            operation = "add_vars",
            status = "success",
            first_id = first,
            count,
            "Added variable block"
        );

        move |i : I| {
            let k = index_to_id(i);
            if k >= count {
                panic!("Variable block index maps to offset {} outside block of size {}",k,count);
            }
            Variable::new(first + k)
        }
    }

    ////////////////////////////////////////////////////////////
    // Objective

    /// Add an expression to the objective. See [Model::try_add_obj].
    ///
    /// Panics if the expression refers to a variable that does not exist in the model.
    pub fn add_obj<E>(& mut self, expr : E) where E : LinearExpression<Scalar = f64> {
        self.try_add_obj(expr).unwrap_or_else(|e| panic!("{}",e))
    }

    /// Add an expression to the objective.
    ///
    /// The coefficient of each term is added to the objective coefficient of its variable, and
    /// the constant is added to the objective constant. Adding the same expression twice
    /// doubles its contribution.
    ///
    /// # Returns
    /// - `Ok(())` on success.
    /// - [ModelError::InvalidVariableId] if any term refers to a variable that does not exist.
    ///   Nothing is added in this case.
    pub fn try_add_obj<E>(& mut self, expr : E) -> Result<(),ModelError> where E : LinearExpression<Scalar = f64> {
        self.check_variables(expr.variables(), "add_obj")?;

        let mut nterms = 0usize;
        for (j,c) in expr.terms() {
            self.var_obj[j] += c;
            nterms += 1;
        }
        self.obj_constant += expr.constant();
        tracing::trace!(
            component = "model",
            operation = "add_obj",
            status = "success",
            terms = nterms,
            "Accumulated objective terms"
        );
        Ok(())
    }

    /// The aggregated objective as an expression over the variables with nonzero objective
    /// coefficient, in increasing id order, plus the objective constant.
    pub fn objective(&self) -> ObjectiveView<'_> {
        ObjectiveView{ cof : self.var_obj.as_slice(), constant : self.obj_constant }
    }

    /// Constant term of the objective.
    pub fn objective_constant(&self) -> f64 { self.obj_constant }

    pub fn sense(&self) -> Sense { self.sense }
    pub fn set_sense(& mut self, sense : Sense) {
        self.sense = sense;
        tracing::debug!(
            component = "model",
            operation = "set_sense",
            status = "success",
            ?sense,
            "Updated objective sense"
        );
    }
    pub fn set_maximization(& mut self) { self.set_sense(Sense::Maximize) }
    pub fn set_minimization(& mut self) { self.set_sense(Sense::Minimize) }

    ////////////////////////////////////////////////////////////
    // Constraints

    /// Add a constraint. See [Model::try_add_constraint].
    ///
    /// Panics if the constraint refers to a variable that does not exist in the model.
    pub fn add_constraint<C>(& mut self, con : C) -> usize where C : LinearConstraint<Scalar = f64> {
        self.try_add_constraint(con).unwrap_or_else(|e| panic!("{}",e))
    }

    /// Add a constraint.
    ///
    /// The terms of the constraint are traversed once and appended verbatim to the constraint
    /// matrix: no merging of repeated variables, no reordering, no removal of zeros.
    ///
    /// # Returns
    /// - The id of the new constraint, which is the number of constraints before the call.
    /// - [ModelError::InvalidVariableId] if any term refers to a variable that does not exist.
    ///   The model is left unchanged in this case.
    pub fn try_add_constraint<C>(& mut self, con : C) -> Result<usize,ModelError> where C : LinearConstraint<Scalar = f64> {
        let nvar  = self.var_obj.len();
        let start = self.a_subj.len();
        for (j,c) in con.terms() {
            if j >= nvar {
                self.a_subj.truncate(start);
                self.a_cof.truncate(start);
                return Err(self.reject_variable(j,"add_constraint"));
            }
            self.a_subj.push(j);
            self.a_cof.push(c);
        }
        let end = self.a_subj.len();

        let id = self.con_ptr.len();
        self.con_ptr.push([start,end]);
        self.con_lb.push(con.lower_bound());
        self.con_ub.push(con.upper_bound());
        tracing::trace!(
            component = "model",
            operation = "add_constraint",
            status = "success",
            constraint_id = id,
            entries = end - start,
            "Added constraint"
        );
        Ok(id)
    }

    /// Get a view of a stored constraint. See [Model::try_constraint].
    ///
    /// Panics if the constraint does not exist.
    pub fn constraint(&self, id : usize) -> ConstraintView<'_> {
        self.try_constraint(id).unwrap_or_else(|e| panic!("{}",e))
    }

    /// Get a view of a stored constraint. The view can be read any number of times.
    ///
    /// # Returns
    /// - The constraint view.
    /// - [ModelError::InvalidConstraintId] if no constraint has the id.
    pub fn try_constraint(&self, id : usize) -> Result<ConstraintView<'_>,ModelError> {
        let [start,end] = *self.con_ptr.get(id).ok_or(ModelError::InvalidConstraintId{ id, nb_constraints : self.con_ptr.len() })?;
        Ok(ConstraintView{
            id,
            subj : &self.a_subj[start..end],
            cof  : &self.a_cof[start..end],
            lb   : self.con_lb[id],
            ub   : self.con_ub[id],
        })
    }

    /// Iterate over all constraints in id order.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintView<'_>> + '_ {
        self.con_ptr.iter().zip(self.con_lb.iter().zip(self.con_ub.iter())).enumerate()
            .map(|(id,(&[start,end],(&lb,&ub)))| ConstraintView{
                id,
                subj : &self.a_subj[start..end],
                cof  : &self.a_cof[start..end],
                lb,
                ub
            })
    }

    ////////////////////////////////////////////////////////////
    // Sizes

    pub fn nb_variables(&self) -> usize { self.var_obj.len() }
    pub fn nb_constraints(&self) -> usize { self.con_ptr.len() }
    /// Total number of entries in the constraint matrix.
    pub fn nb_entries(&self) -> usize { self.a_subj.len() }

    ////////////////////////////////////////////////////////////
    // Variable attributes
    //
    // The `try_` forms return [ModelError::InvalidVariableId] if the variable does not belong to
    // the model, the plain forms panic with that error.

    pub fn try_obj_coef(&self, v : Variable) -> Result<f64,ModelError> { Ok(self.var_obj[self.var_index(v,"obj_coef")?]) }
    pub fn try_lower_bound(&self, v : Variable) -> Result<f64,ModelError> { Ok(self.var_lb[self.var_index(v,"lower_bound")?]) }
    pub fn try_upper_bound(&self, v : Variable) -> Result<f64,ModelError> { Ok(self.var_ub[self.var_index(v,"upper_bound")?]) }
    pub fn try_var_type(&self, v : Variable) -> Result<VarCategory,ModelError> { Ok(self.var_type[self.var_index(v,"var_type")?]) }

    pub fn obj_coef(&self, v : Variable) -> f64 { self.try_obj_coef(v).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn lower_bound(&self, v : Variable) -> f64 { self.try_lower_bound(v).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn upper_bound(&self, v : Variable) -> f64 { self.try_upper_bound(v).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn var_type(&self, v : Variable) -> VarCategory { self.try_var_type(v).unwrap_or_else(|e| panic!("{}",e)) }

    /// Overwrite the objective coefficient of a variable, replacing whatever
    /// [Model::add_obj] has accumulated.
    pub fn try_set_obj_coef(& mut self, v : Variable, c : f64) -> Result<(),ModelError> {
        let j = self.var_index(v,"set_obj_coef")?;
        self.var_obj[j] = c;
        Ok(())
    }
    pub fn try_set_lower_bound(& mut self, v : Variable, bound : f64) -> Result<(),ModelError> {
        let j = self.var_index(v,"set_lower_bound")?;
        self.var_lb[j] = bound;
        Ok(())
    }
    pub fn try_set_upper_bound(& mut self, v : Variable, bound : f64) -> Result<(),ModelError> {
        let j = self.var_index(v,"set_upper_bound")?;
        self.var_ub[j] = bound;
        Ok(())
    }
    pub fn try_set_var_type(& mut self, v : Variable, var_type : VarCategory) -> Result<(),ModelError> {
        let j = self.var_index(v,"set_var_type")?;
        self.var_type[j] = var_type;
        Ok(())
    }

    /// See [Model::try_set_obj_coef].
    pub fn set_obj_coef(& mut self, v : Variable, c : f64) { self.try_set_obj_coef(v,c).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn set_lower_bound(& mut self, v : Variable, bound : f64) { self.try_set_lower_bound(v,bound).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn set_upper_bound(& mut self, v : Variable, bound : f64) { self.try_set_upper_bound(v,bound).unwrap_or_else(|e| panic!("{}",e)) }
    pub fn set_var_type(& mut self, v : Variable, var_type : VarCategory) { self.try_set_var_type(v,var_type).unwrap_or_else(|e| panic!("{}",e)) }

    /// Objective coefficients indexed by variable id.
    pub fn objective_coefficients(&self) -> &[f64] { self.var_obj.as_slice() }
    /// Variable lower bounds indexed by variable id.
    pub fn lower_bounds(&self) -> &[f64] { self.var_lb.as_slice() }
    /// Variable upper bounds indexed by variable id.
    pub fn upper_bounds(&self) -> &[f64] { self.var_ub.as_slice() }
    /// Variable categories indexed by variable id.
    pub fn var_types(&self) -> &[VarCategory] { self.var_type.as_slice() }

    ////////////////////////////////////////////////////////////
    // Solving

    /// Construct a solver from the model data.
    ///
    /// The model is not consumed and can still be queried, for example to evaluate
    /// expressions at the solution with [Model::evaluate].
    ///
    /// # Example
    /// ```
    /// use mipmodel::*;
    ///
    /// let mut model = Model::new();
    /// let x = model.add_var(VarOptions::new().upper_bound(1.0));
    /// model.add_constraint(x.greater_than(0.5));
    ///
    /// let solver : DummySolver = model.build().unwrap();
    /// assert_eq!(solver.num_rows(), 1);
    /// ```
    pub fn build<B>(&self) -> Result<B,B::Error> where B : SolverBackend {
        tracing::debug!(
            component = "model",
            operation = "build",
            status = "start",
            num_vars = self.nb_variables(),
            num_cons = self.nb_constraints(),
            num_entries = self.nb_entries(),
            sense = ?self.sense,
            "Building solver from model"
        );
        B::build(self)
    }

    /// Evaluate an expression at a solution.
    ///
    /// # Arguments
    /// - `expr` The expression.
    /// - `solution` One value per variable, for example as returned by
    ///   [SolverBackend::get_solution].
    pub fn evaluate<E>(&self, expr : E, solution : &[f64]) -> Result<f64,ModelError> where E : LinearExpression<Scalar = f64> {
        if solution.len() != self.nb_variables() {
            return Err(ModelError::SolutionLengthMismatch{ expected : self.nb_variables(), got : solution.len() });
        }
        self.check_variables(expr.variables(), "evaluate")?;
        Ok(expr.evaluate(solution))
    }

    fn check_variables<I>(&self, mut vars : I, operation : &'static str) -> Result<(),ModelError> where I : Iterator<Item = usize> {
        let nvar = self.var_obj.len();
        match vars.find(|&j| j >= nvar) {
            Some(j) => Err(self.reject_variable(j,operation)),
            None => Ok(())
        }
    }

    fn var_index(&self, v : Variable, operation : &'static str) -> Result<usize,ModelError> {
        if v.id() < self.var_obj.len() { Ok(v.id()) } else { Err(self.reject_variable(v.id(),operation)) }
    }

    fn reject_variable(&self, id : usize, operation : &'static str) -> ModelError {
        tracing::warn!(
            component = "model",
            operation,
            status = "rejected",
            variable_id = id,
            num_vars = self.var_obj.len(),
            "Variable does not exist in the model"
        );
        ModelError::InvalidVariableId{ id, nb_variables : self.var_obj.len() }
    }
}
