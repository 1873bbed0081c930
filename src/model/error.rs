//! Model error types.

/// Errors reported by [super::Model] operations.
///
/// A failing `try_*` operation leaves the model unchanged.
#[derive(Debug,Clone,PartialEq)]
pub enum ModelError {
    /// A term refers to a variable id that does not exist in the model.
    InvalidVariableId { id : usize, nb_variables : usize },
    /// Constraint id does not exist in the model.
    InvalidConstraintId { id : usize, nb_constraints : usize },
    /// A solution vector does not have one value per variable.
    SolutionLengthMismatch { expected : usize, got : usize },
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableId { .. }      => "VARIABLE_INVALID_ID",
            ModelError::InvalidConstraintId { .. }    => "CONSTRAINT_INVALID_ID",
            ModelError::SolutionLengthMismatch { .. } => "SOLUTION_LENGTH_MISMATCH",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableId { id, nb_variables } => write!(
                f,
                "[{}] Variable ID {} does not exist (model has {} variables)",
                self.code(),
                id,
                nb_variables
            ),
            ModelError::InvalidConstraintId { id, nb_constraints } => write!(
                f,
                "[{}] Constraint ID {} does not exist (model has {} constraints)",
                self.code(),
                id,
                nb_constraints
            ),
            ModelError::SolutionLengthMismatch { expected, got } => write!(
                f,
                "[{}] Solution has {} values, expected one per variable ({})",
                self.code(),
                got,
                expected
            ),
        }
    }
}

impl std::error::Error for ModelError {}
