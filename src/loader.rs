/// The expression module evaluates constant `@( ... )` expressions.
///
/// Expressions are written in prefix notation: exactly one operator or
/// function name followed by its operand tokens. They are evaluated
/// immediately while the enclosing statement is parsed and collapse into a
/// single value; no expression survives into the environment.
///
/// # Responsibilities
/// - Resolves operand tokens to values: integer literals, quoted strings, or
///   previously bound variables.
/// - Applies the binary operators `+ - * /` and the unary functions `ord`
///   and `abs` with fixed arity.
/// - Reports evaluation errors such as unknown tokens, arity mismatches,
///   type mismatches, division by zero, and overflow.
pub mod expression;
/// The scanner module strips block comments from raw source text.
///
/// The scanner reads the raw source and removes every `(* ... *)` comment,
/// including comments that span multiple lines. All other text passes
/// through verbatim, and the newlines inside a removed comment are kept so
/// that line numbers in later error reports stay accurate.
///
/// # Responsibilities
/// - Removes well-formed block comments, first close marker wins.
/// - Preserves the line structure of the input.
/// - Reports an unterminated `(*` as a malformed comment.
pub mod scanner;
/// The split module breaks item lists apart at a separator.
///
/// Splitting respects nesting: a separator that occurs inside unmatched
/// `{ ( [` delimiters is literal text, not a split point. Table items are
/// separated by `,` and array items by `.`, both at depth zero.
///
/// # Responsibilities
/// - Tracks delimiter depth with a single signed counter.
/// - Trims each emitted item and drops a trailing empty segment.
/// - Leaves malformed nesting for the downstream value parser to reject.
pub mod split;
/// The statement module walks logical statements and builds the environment.
///
/// The statement walker consumes the comment-stripped text line by line,
/// reassembles multi-line table literals into single logical statements,
/// recognizes `set <name> = <value>;` assignments, and inserts each parsed
/// binding into the environment in declaration order.
///
/// # Responsibilities
/// - Skips blank lines and rejects lines outside the assignment grammar.
/// - Accumulates multi-line table literals until their closing `]`.
/// - Parses table entries and dispatches all other values to the value
///   parser.
/// - Overwrites prior bindings on redefinition, last write wins.
pub mod statement;
/// The value parser classifies and parses a single value.
///
/// A trimmed value text is classified into exactly one of the recognized
/// shapes before a dedicated parser runs for that shape. Arrays recurse
/// through the same entry point, with the nesting depth bounded by the
/// loader configuration.
///
/// # Responsibilities
/// - Classifies integers, strings, expressions, arrays, and variable
///   references.
/// - Parses each shape, recursing for array items.
/// - Rejects unrecognized text and unbound variable references.
pub mod value_parser;

/// Default bound on value nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration options for a parse.
///
/// ## Usage
///
/// A `LoaderConfig` is created once and passed to
/// [`parse_with_config`](crate::parse_with_config). The default
/// configuration is what [`parse`](crate::parse) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum value nesting depth before a parse fails with
    /// [`DepthExceeded`](crate::error::ParseError::DepthExceeded).
    /// Bounding the recursion keeps pathological inputs from exhausting the
    /// call stack.
    pub max_depth: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl LoaderConfig {
    /// Creates a configuration with the default nesting limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum value nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
