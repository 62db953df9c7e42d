use crate::value::{Environment, Value};

/// Renders the environment as structured, human-readable text.
///
/// The output is an indented mapping from variable name to value tree, with
/// keys in declaration order and nested containers rendered recursively.
/// Integers stay integers, strings stay strings, and nothing is lost: a
/// source without expressions can be reconstructed from the output.
///
/// # Errors
/// Returns a `serde_json::Error` if the underlying writer fails; the value
/// tree itself always serializes.
///
/// # Example
/// ```
/// use trn::{parse, serializer::to_text};
///
/// let env = parse("set num = 42;").unwrap();
/// assert_eq!(to_text(&env).unwrap(), "{\n  \"num\": 42\n}");
/// ```
pub fn to_text(env: &Environment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(env)
}

/// Renders a single value as structured text, same format as [`to_text`].
///
/// # Errors
/// Returns a `serde_json::Error` if the underlying writer fails.
///
/// # Example
/// ```
/// use trn::{serializer::value_to_text, value::Value};
///
/// let v = Value::Array(vec![Value::Integer(1), Value::from("a")]);
/// assert_eq!(value_to_text(&v).unwrap(), "[\n  1,\n  \"a\"\n]");
/// ```
pub fn value_to_text(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
