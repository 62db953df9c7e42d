/// Expression evaluation errors.
///
/// Contains all error types that can be raised while evaluating a constant
/// `@( ... )` expression: unknown tokens, arity mismatches, type mismatches,
/// division by zero, and integer overflow.
pub mod eval_error;
/// Structural parse errors.
///
/// Defines all error types that can occur while turning trn source text into
/// an environment: malformed comments, statements that do not match the
/// assignment grammar, unterminated tables, unrecognized values, and nesting
/// beyond the configured depth limit.
pub mod parse_error;

pub use eval_error::{EvalError, EvalResult};
pub use parse_error::{ParseError, ParseResult};
