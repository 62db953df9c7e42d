use crate::{
    error::{ParseError, ParseResult},
    loader::{LoaderConfig, expression, split::split_array_items},
    value::{Environment, Value},
};

/// The shape of a value text, decided before any parsing happens.
///
/// Classification makes the grammar exhaustively enumerable: every value
/// text maps to exactly one shape, or to no shape at all, before a dedicated
/// parser runs for it. Table literals are absent here because the grammar
/// only allows them as the direct right-hand side of a `set` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// An optional leading `-` followed only by digits.
    Integer,
    /// Text bounded by a double quote at both ends.
    Text,
    /// Text of the form `@( ... )`.
    Expression,
    /// Text bounded by `{` and `}`.
    Array,
    /// A bare identifier naming a previous binding.
    Reference,
}

/// Classifies a trimmed value text into one of the recognized shapes.
///
/// Returns `None` when the text matches no shape, which the caller reports
/// as an invalid value.
#[must_use]
pub fn classify(text: &str) -> Option<ValueShape> {
    if is_integer_literal(text) {
        Some(ValueShape::Integer)
    } else if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(ValueShape::Text)
    } else if text.len() >= 3 && text.starts_with("@(") && text.ends_with(')') {
        Some(ValueShape::Expression)
    } else if text.len() >= 2 && text.starts_with('{') && text.ends_with('}') {
        Some(ValueShape::Array)
    } else if is_identifier(text) {
        Some(ValueShape::Reference)
    } else {
        None
    }
}

/// Parses a single trimmed value text against the current environment.
///
/// Dispatches on the value's [`ValueShape`]:
/// - integers parse as `i64`,
/// - strings keep their interior verbatim, quotes stripped, no escapes,
/// - expressions are tokenized on whitespace and evaluated immediately,
/// - arrays split their interior on `.` and recurse for each item,
/// - references resolve to a copy of a previously bound value.
///
/// # Parameters
/// - `text`: The value text; surrounding whitespace is ignored.
/// - `env`: Bindings visible to references and expressions.
/// - `depth`: Current nesting depth, `0` at the top of an assignment.
/// - `config`: Loader configuration carrying the nesting limit.
/// - `line`: Source line of the enclosing statement, for error reporting.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the nesting limit is exceeded,
/// - the text matches no recognized shape,
/// - the text is a well-formed identifier with no binding,
/// - an expression fails to evaluate,
/// - an array item fails to parse.
///
/// # Example
/// ```
/// use trn::{loader::{LoaderConfig, value_parser::parse_value},
///           value::{Environment, Value}};
///
/// let env = Environment::new();
/// let config = LoaderConfig::default();
///
/// let v = parse_value("{ 1. 2. 3. }", &env, 0, &config, 1).unwrap();
/// assert_eq!(v,
///            Value::Array(vec![Value::Integer(1),
///                              Value::Integer(2),
///                              Value::Integer(3)]));
/// ```
pub fn parse_value(text: &str,
                   env: &Environment,
                   depth: usize,
                   config: &LoaderConfig,
                   line: usize)
                   -> ParseResult<Value> {
    if depth > config.max_depth {
        return Err(ParseError::DepthExceeded { limit: config.max_depth,
                                               line });
    }

    let text = text.trim();

    match classify(text) {
        Some(ValueShape::Integer) => match text.parse::<i64>() {
            Ok(n) => Ok(Value::Integer(n)),
            Err(_) => Err(ParseError::InvalidValue { text: text.to_string(),
                                                     line }),
        },
        Some(ValueShape::Text) => Ok(Value::String(text[1..text.len() - 1].to_string())),
        Some(ValueShape::Expression) => {
            let tokens: Vec<&str> = text[2..text.len() - 1].split_whitespace().collect();
            expression::evaluate(&tokens, env).map_err(|source| {
                                                  ParseError::expression(source, line)
                                              })
        },
        Some(ValueShape::Array) => {
            let interior = text[1..text.len() - 1].trim();
            let items =
                split_array_items(interior).iter()
                                           .map(|item| {
                                               parse_value(item, env, depth + 1, config, line)
                                           })
                                           .collect::<ParseResult<Vec<_>>>()?;
            Ok(Value::Array(items))
        },
        Some(ValueShape::Reference) => {
            env.get(text)
               .cloned()
               .ok_or_else(|| ParseError::UndefinedVariable { name: text.to_string(),
                                                              line })
        },
        None => Err(ParseError::InvalidValue { text: text.to_string(),
                                               line }),
    }
}

/// Reports whether the text is an integer literal: an optional leading `-`
/// followed by at least one digit and nothing else.
#[must_use]
pub fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Reports whether the text is a well-formed identifier: a letter or `_`
/// followed by letters, digits, or `_`.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    identifier_len(text) == text.len() && !text.is_empty()
}

/// Returns the length in bytes of the identifier at the start of the text,
/// or `0` when the text does not begin with one.
#[must_use]
pub fn identifier_len(text: &str) -> usize {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {},
        _ => return 0,
    }
    1 + bytes.take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
             .count()
}
