//! HiGHS backend error types.

/// Errors reported by [crate::HighsSolver].
#[derive(Debug,Clone,PartialEq)]
pub enum HighsError {
    /// An objective or constraint coefficient is infinite or NaN.
    InvalidCoefficient { row : Option<usize>, column : usize, value : f64 },
    /// HiGHS has no option of this name.
    InvalidOptionName { name : String },
    /// The value has the wrong type for the option, or HiGHS rejected it.
    InvalidOptionValue { name : String, expected : &'static str, value : String },
    /// The operation needs a solution, but the model has not been solved.
    SolveRequired { operation : &'static str },
}

impl HighsError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            HighsError::InvalidCoefficient { .. } => "HIGHS_INVALID_COEFFICIENT",
            HighsError::InvalidOptionName { .. }  => "HIGHS_INVALID_OPTION_NAME",
            HighsError::InvalidOptionValue { .. } => "HIGHS_INVALID_OPTION_VALUE",
            HighsError::SolveRequired { .. }      => "HIGHS_SOLVE_REQUIRED",
        }
    }
}

impl std::fmt::Display for HighsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighsError::InvalidCoefficient { row : Some(row), column, value } => write!(
                f,
                "[{}] Constraint {} has non-finite coefficient {} for variable {}",
                self.code(),
                row,
                value,
                column
            ),
            HighsError::InvalidCoefficient { row : None, column, value } => write!(
                f,
                "[{}] Objective has non-finite coefficient {} for variable {}",
                self.code(),
                value,
                column
            ),
            HighsError::InvalidOptionName { name } => {
                write!(f, "[{}] Invalid option name {:?}", self.code(), name)
            }
            HighsError::InvalidOptionValue { name, expected, value } => write!(
                f,
                "[{}] Option {:?} rejected value {}; expected a valid {} value",
                self.code(),
                name,
                value,
                expected
            ),
            HighsError::SolveRequired { operation } => write!(
                f,
                "[{}] {} requires a solved model; call optimize first",
                self.code(),
                operation
            ),
        }
    }
}

impl std::error::Error for HighsError {}
