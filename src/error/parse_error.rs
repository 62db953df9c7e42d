use crate::error::EvalError;

/// Result type used by the loader stages.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing the failure. A failed parse never yields a partial
/// environment.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while loading trn source text.
pub enum ParseError {
    /// A block comment was opened with `(*` but never closed.
    MalformedComment {
        /// The source line where the comment opens.
        line: usize,
    },
    /// A statement line does not match the `set <name> = <value>;` grammar.
    SyntaxError {
        /// The offending line text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A multi-line table literal never closes with `]`.
    UnterminatedTable {
        /// The source line where the table opens.
        line: usize,
    },
    /// A value does not match any recognized shape.
    InvalidValue {
        /// The offending value text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A table item does not match the `key => value` grammar.
    InvalidTableEntry {
        /// The offending item text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value is a well-formed identifier but no binding exists for it.
    UndefinedVariable {
        /// The unbound variable name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Values are nested deeper than the configured limit.
    DepthExceeded {
        /// The configured nesting limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A constant expression failed to evaluate.
    Expression {
        /// The underlying evaluation error.
        source: EvalError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Wraps an [`EvalError`] raised on the given source line.
    #[must_use]
    pub const fn expression(source: EvalError, line: usize) -> Self {
        Self::Expression { source, line }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedComment { line } => {
                write!(f, "Error on line {line}: Block comment is never closed with '*)'.")
            },
            Self::SyntaxError { text, line } => {
                write!(f, "Error on line {line}: Invalid syntax: {text}")
            },
            Self::UnterminatedTable { line } => {
                write!(f, "Error on line {line}: Table definition not closed with ']'.")
            },
            Self::InvalidValue { text, line } => {
                write!(f, "Error on line {line}: Invalid value: {text}")
            },
            Self::InvalidTableEntry { text, line } => {
                write!(f, "Error on line {line}: Invalid syntax in table: {text}")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::DepthExceeded { limit, line } => {
                write!(f, "Error on line {line}: Values nested deeper than the limit of {limit}.")
            },
            Self::Expression { source, line } => {
                write!(f, "Error on line {line}: {source}")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expression { source, .. } => Some(source),
            _ => None,
        }
    }
}
