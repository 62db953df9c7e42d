/// Result type used by the expression evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a constant
/// expression.
pub enum EvalError {
    /// A token is neither a literal, a bound variable, nor a known
    /// operator or function.
    UnknownToken {
        /// The token encountered.
        token: String,
    },
    /// Too few operands were supplied for an operator or function.
    InsufficientOperands {
        /// The operator or function name.
        operator: String,
    },
    /// Operands were left over (or missing entirely) after applying the
    /// operator or function.
    InvalidExpression,
    /// An operator or function received an operand of the wrong kind.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic overflowed the 64-bit integer range.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => {
                write!(f, "Unknown token '{token}' in expression.")
            },
            Self::InsufficientOperands { operator } => {
                write!(f, "Insufficient operands for '{operator}'.")
            },
            Self::InvalidExpression => write!(f, "Invalid expression."),
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
